//! GFF3 (General Feature Format) reader.
//!
//! GFF3 is a delimiter-based tabular format: `##` directive lines, one
//! tab-separated 9-column line per feature, and an optional trailing
//! `##FASTA` block carrying the sequence. Compared to the GenBank core this
//! reader is a direct structural mapping:
//!
//! 1. **seqid**: sequence/region name
//! 2. **source**: annotation source
//! 3. **type**: feature type (gene, mRNA, exon, CDS, ...)
//! 4. **start**: start position (1-based, inclusive)
//! 5. **end**: end position (1-based, inclusive)
//! 6. **score**: confidence score, kept verbatim (may be empty)
//! 7. **strand**: `+`, `-`, `.` or empty, kept verbatim
//! 8. **phase**: CDS phase, kept verbatim
//! 9. **attributes**: semicolon-separated `key=value` pairs
//!
//! # Example
//!
//! ```
//! use seqannot::formats::gff::parse_gff;
//!
//! let text = "\
//! ###gff-version 3
//! ###sequence-region chr1 1 200
//! chr1\tEnsembl\tgene\t100\t200\t.\t+\t.\tID=gene1;Name=ABC1
//! ####
//! ###FASTA
//! >chr1
//! atgcatgc";
//! let record = parse_gff(text)?;
//! assert_eq!(record.meta.name, "chr1");
//! assert_eq!(record.features.len(), 1);
//! assert_eq!(record.sequence.sequence, "atgcatgc");
//! # Ok::<(), seqannot::SeqannotError>(())
//! ```

use crate::error::{Result, SeqannotError};
use crate::types::{AnnotatedSequence, Feature};
use std::collections::HashMap;
use std::path::Path;

/// Parses GFF3 text into an [`AnnotatedSequence`].
///
/// Directive (`##`) lines set metadata, `##FASTA` switches to sequence
/// collection, a `>` line becomes the description, and every other
/// non-empty line must be a 9-column feature record.
///
/// # Errors
///
/// [`SeqannotError::InvalidGffFormat`] with the offending line number for
/// wrong column counts or unparsable coordinates.
pub fn parse_gff(text: &str) -> Result<AnnotatedSequence> {
    let mut record = AnnotatedSequence::default();
    let mut in_fasta = false;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim_end_matches('\r');

        if line == "##FASTA" {
            in_fasta = true;
        } else if line.is_empty() {
            continue;
        } else if let Some(directive) = line.strip_prefix("##") {
            parse_directive(directive, line_number, &mut record)?;
        } else if in_fasta {
            if line.starts_with('>') {
                record.sequence.description = line.to_string();
            } else {
                record.sequence.sequence.push_str(line);
            }
        } else {
            record.features.push(parse_feature_line(line, line_number)?);
        }
    }

    Ok(record)
}

/// Handles one `##` directive (leading `##` already stripped).
fn parse_directive(
    directive: &str,
    line_number: usize,
    record: &mut AnnotatedSequence,
) -> Result<()> {
    let (head, rest) = match directive.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest),
        None => (directive, ""),
    };

    if head == "gff-version" {
        record.meta.gff_version = rest.trim().to_string();
    } else if head == "sequence-region" {
        let fields: Vec<&str> = rest.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(SeqannotError::InvalidGffFormat {
                line: line_number,
                msg: format!(
                    "sequence-region expects name, start, end; found {} fields",
                    fields.len()
                ),
            });
        }
        record.meta.name = fields[0].to_string();
        record.meta.region_start = parse_coordinate(fields[1], "region start", line_number)?;
        record.meta.region_end = parse_coordinate(fields[2], "region end", line_number)?;
        record.meta.size = record.meta.region_end - record.meta.region_start;
    }
    // Other directives (###, unknown pragmas) carry no model state.
    Ok(())
}

/// Parses one 9-column feature line.
fn parse_feature_line(line: &str, line_number: usize) -> Result<Feature> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 9 {
        return Err(SeqannotError::InvalidGffFormat {
            line: line_number,
            msg: format!("expected 9 tab-separated columns, found {}", fields.len()),
        });
    }

    Ok(Feature {
        name: fields[0].to_string(),
        source: fields[1].to_string(),
        feature_type: fields[2].to_string(),
        start: parse_coordinate(fields[3], "start", line_number)?,
        end: parse_coordinate(fields[4], "end", line_number)?,
        score: fields[5].to_string(),
        strand: fields[6].to_string(),
        phase: fields[7].to_string(),
        attributes: parse_attributes(fields[8]),
        ..Feature::default()
    })
}

fn parse_coordinate(field: &str, name: &str, line_number: usize) -> Result<i64> {
    field.parse().map_err(|_| SeqannotError::InvalidGffFormat {
        line: line_number,
        msg: format!("invalid {name} {field:?}"),
    })
}

/// Splits the attributes column into a key/value map.
///
/// Empty columns (`""` or `"."`) yield an empty map; fragments without an
/// `=` are skipped.
fn parse_attributes(field: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    if field == "." {
        return attributes;
    }
    for pair in field.split(';') {
        if let Some((key, value)) = pair.split_once('=') {
            attributes.insert(key.to_string(), value.to_string());
        }
    }
    attributes
}

/// Reads and parses a GFF3 file (optionally `.gz`-compressed).
pub fn read_gff<P: AsRef<Path>>(path: P) -> Result<AnnotatedSequence> {
    let text = super::read_to_string_maybe_gz(path.as_ref())?;
    parse_gff(&text)
}
