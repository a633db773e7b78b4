//! GFF3 writer.
//!
//! Builds a GFF3 rendition of an [`AnnotatedSequence`]:
//!
//! ```text
//! ##gff-version 3
//! ##sequence-region <name> <start> <end>
//! <seqid>\t<source>\t<type>\t<start>\t<end>\t<score>\t<strand>\t<phase>\t<attributes>
//! ###
//! ##FASTA
//! ><name>
//! <sequence wrapped at 70 columns>
//! ```
//!
//! Attributes are written as `key=value;` pairs with keys sorted, so output
//! is deterministic. Score, strand and phase are written verbatim — an
//! empty string stays an empty column and round-trips back as empty, never
//! as a placeholder.
//!
//! # Example
//!
//! ```
//! use seqannot::formats::gff_writer::build_gff;
//! use seqannot::formats::gff::parse_gff;
//! use seqannot::AnnotatedSequence;
//!
//! let mut record = AnnotatedSequence::default();
//! record.meta.name = "chr1".to_string();
//! record.sequence.sequence = "atgcatgc".to_string();
//!
//! let gff = build_gff(&record);
//! assert!(gff.starts_with("##gff-version 3\n"));
//! let reparsed = parse_gff(&gff)?;
//! assert_eq!(reparsed.sequence.sequence, "atgcatgc");
//! # Ok::<(), seqannot::SeqannotError>(())
//! ```

use crate::error::Result;
use crate::types::AnnotatedSequence;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Sequence letters per line in the trailing FASTA block.
pub const FASTA_LINE_WIDTH: usize = 70;

/// Builds the GFF3 text for a model.
///
/// Fallbacks for models built by the GenBank path: the region name falls
/// back through locus name and accession to `unknown`; region start
/// defaults to 1 and region end to the digits of the locus length; feature
/// source defaults to `feature` and feature type to `unknown`.
pub fn build_gff(record: &AnnotatedSequence) -> String {
    let mut out = String::new();

    if record.meta.gff_version.is_empty() {
        out.push_str("##gff-version 3\n");
    } else {
        out.push_str(&format!("##gff-version {}\n", record.meta.gff_version));
    }

    let name = region_name(record);

    let start = if record.meta.region_start != 0 {
        record.meta.region_start.to_string()
    } else {
        "1".to_string()
    };

    let end = if record.meta.region_end != 0 {
        record.meta.region_end.to_string()
    } else {
        let digits: String = record
            .meta
            .locus
            .sequence_length
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            "1".to_string()
        } else {
            digits
        }
    };

    out.push_str(&format!("##sequence-region {name} {start} {end}\n"));

    for feature in &record.features {
        let feature_name = if feature.name.is_empty() {
            &record.meta.name
        } else {
            &feature.name
        };
        let source = if feature.source.is_empty() {
            "feature"
        } else {
            &feature.source
        };
        let feature_type = if feature.feature_type.is_empty() {
            "unknown"
        } else {
            &feature.feature_type
        };

        let mut keys: Vec<&String> = feature.attributes.keys().collect();
        keys.sort();
        let attributes = keys
            .iter()
            .map(|key| format!("{key}={}", feature.attributes[*key]))
            .collect::<Vec<_>>()
            .join(";");

        out.push_str(&format!(
            "{feature_name}\t{source}\t{feature_type}\t{}\t{}\t{}\t{}\t{}\t{attributes}\n",
            feature.start, feature.end, feature.score, feature.strand, feature.phase
        ));
    }

    out.push_str("###\n");
    out.push_str("##FASTA\n");
    out.push_str(&format!(">{name}\n"));

    for chunk in record.sequence.sequence.as_bytes().chunks(FASTA_LINE_WIDTH) {
        // The sequence is pure ASCII letters by construction.
        out.push_str(&String::from_utf8_lossy(chunk));
        out.push('\n');
    }

    out
}

fn region_name(record: &AnnotatedSequence) -> &str {
    if !record.meta.name.is_empty() {
        &record.meta.name
    } else if !record.meta.locus.name.is_empty() {
        &record.meta.locus.name
    } else if !record.meta.accession.is_empty() {
        &record.meta.accession
    } else {
        "unknown"
    }
}

/// Writes the GFF3 rendition of a model to a path.
///
/// A `.gz` extension switches on gzip compression.
pub fn write_gff<P: AsRef<Path>>(record: &AnnotatedSequence, path: P) -> Result<()> {
    let path = path.as_ref();
    let gff = build_gff(record);
    let file = File::create(path)?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(gff.as_bytes())?;
        encoder.finish()?;
    } else {
        let mut file = file;
        file.write_all(gff.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Feature;

    fn model_with_feature() -> AnnotatedSequence {
        let mut record = AnnotatedSequence::default();
        record.meta.locus.name = "pTest".to_string();
        record.meta.locus.sequence_length = "8 bp".to_string();
        let mut feature = Feature {
            feature_type: "gene".to_string(),
            start: 1,
            end: 8,
            ..Feature::default()
        };
        feature
            .attributes
            .insert("gene".to_string(), "lacZ".to_string());
        feature
            .attributes
            .insert("note".to_string(), "beta-gal".to_string());
        record.features.push(feature);
        record.sequence.sequence = "atgcatgc".to_string();
        record
    }

    #[test]
    fn test_header_lines_with_fallbacks() {
        let gff = build_gff(&model_with_feature());
        let mut lines = gff.lines();
        assert_eq!(lines.next(), Some("##gff-version 3"));
        // Name falls back to locus name, end to the locus length digits.
        assert_eq!(lines.next(), Some("##sequence-region pTest 1 8"));
    }

    #[test]
    fn test_attributes_sorted_and_defaults_applied() {
        let gff = build_gff(&model_with_feature());
        let feature_line = gff.lines().nth(2).unwrap();
        let fields: Vec<&str> = feature_line.split('\t').collect();
        assert_eq!(fields[0], "");
        assert_eq!(fields[1], "feature");
        assert_eq!(fields[2], "gene");
        assert_eq!(fields[5], "");
        assert_eq!(fields[6], "");
        assert_eq!(fields[7], "");
        assert_eq!(fields[8], "gene=lacZ;note=beta-gal");
    }

    #[test]
    fn test_fasta_trailer_and_wrap() {
        let mut record = AnnotatedSequence::default();
        record.meta.name = "chr1".to_string();
        record.sequence.sequence = "a".repeat(150);
        let gff = build_gff(&record);
        let lines: Vec<&str> = gff.lines().collect();
        let fasta_at = lines.iter().position(|l| *l == "##FASTA").unwrap();
        assert_eq!(lines[fasta_at - 1], "###");
        assert_eq!(lines[fasta_at + 1], ">chr1");
        assert_eq!(lines[fasta_at + 2].len(), 70);
        assert_eq!(lines[fasta_at + 3].len(), 70);
        assert_eq!(lines[fasta_at + 4].len(), 10);
    }

    #[test]
    fn test_unknown_region_name_fallback() {
        let record = AnnotatedSequence::default();
        let gff = build_gff(&record);
        assert!(gff.contains("##sequence-region unknown 1 1\n"));
    }
}
