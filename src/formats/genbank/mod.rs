//! GenBank flat-file parser.
//!
//! GenBank records have no field delimiters: structure is encoded by
//! fixed-column indentation and a closed keyword vocabulary, and multi-line
//! fields are rejoined by inspecting the indentation of the following
//! lines. This module is the core of the crate.
//!
//! # Record structure
//!
//! - **LOCUS**: fixed-format header (name, length, molecule type, topology,
//!   division, date)
//! - **DEFINITION / ACCESSION / VERSION / KEYWORDS**: continuation-joined
//!   free text
//! - **SOURCE**: free text with one nested **ORGANISM** sub-record
//! - **REFERENCE**: repeatable citation blocks
//! - **FEATURES**: annotation table of (type, location) entries with
//!   `/key=value` qualifiers
//! - **ORIGIN**: the sequence letters, terminal
//!
//! # Architecture
//!
//! Parsing is a single pass over the line array through an explicit
//! [`LineCursor`]. The dispatcher ([`scan_blocks`]) recognizes top-level
//! keywords and delegates each block to its parser, emitting one [`Block`]
//! event per section; a separate reducer ([`accumulate`]) folds the events
//! into the [`AnnotatedSequence`] model. Unknown top-level keywords and
//! blank lines are skipped for forward compatibility; reaching ORIGIN
//! consumes everything that remains as sequence data, so lines after it are
//! never interpreted as keywords.
//!
//! # Example
//!
//! ```
//! use seqannot::formats::genbank::parse_genbank;
//!
//! let text = "\
//! LOCUS       test 10 bp DNA linear SYN 01-JAN-2020
//! FEATURES             Location/Qualifiers
//!      gene            1..10
//!                      /gene=\"x\"
//! ORIGIN
//!         1 atgcatgcat
//! //";
//! let record = parse_genbank(text)?;
//! assert_eq!(record.meta.locus.name, "test");
//! assert_eq!(record.features.len(), 1);
//! assert_eq!(record.sequence.sequence, "atgcatgcat");
//! # Ok::<(), seqannot::SeqannotError>(())
//! ```

pub mod blocks;
pub mod classify;
pub mod vocab;

use crate::error::{Result, SeqannotError};
use crate::types::{AnnotatedSequence, Feature, Locus, Reference, Sequence};
use blocks::{extract_sequence, parse_features, parse_locus, parse_reference, parse_source_organism};
use classify::{join_continuations, LineCursor};
use std::path::Path;

/// One parsed record section, emitted by [`scan_blocks`] in file order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Parsed LOCUS header line
    Locus(Locus),
    /// DEFINITION text
    Definition(String),
    /// ACCESSION text
    Accession(String),
    /// VERSION text
    Version(String),
    /// KEYWORDS text
    Keywords(String),
    /// SOURCE free text and the nested ORGANISM text
    Source {
        /// SOURCE free text
        source: String,
        /// ORGANISM text including taxonomy continuation
        organism: String,
    },
    /// One REFERENCE block
    Reference(Reference),
    /// The FEATURES table
    Features(Vec<Feature>),
    /// Sequence letters extracted from everything after ORIGIN
    Origin(Sequence),
}

/// Scans the line array and emits one [`Block`] event per recognized
/// top-level section.
///
/// Unrecognized top-level tokens and blank lines advance the cursor by one
/// and are otherwise ignored. ORIGIN is terminal: the extractor consumes
/// every remaining line, so no further top-level tokens are interpreted
/// afterward.
pub fn scan_blocks(lines: &[&str]) -> Result<Vec<Block>> {
    let mut cursor = LineCursor::new(lines);
    let mut events = Vec::new();

    while let Some(line) = cursor.peek() {
        let head = match line.split_whitespace().next() {
            Some(head) => head,
            None => {
                cursor.advance();
                continue;
            }
        };

        match head {
            "LOCUS" => {
                events.push(Block::Locus(parse_locus(line, cursor.line_number())?));
                cursor.advance();
            }
            "DEFINITION" | "ACCESSION" | "VERSION" | "KEYWORDS" => {
                cursor.advance();
                let base = line.trim().strip_prefix(head).unwrap_or("").trim();
                let value = join_continuations(base.to_string(), &mut cursor);
                events.push(match head {
                    "DEFINITION" => Block::Definition(value),
                    "ACCESSION" => Block::Accession(value),
                    "VERSION" => Block::Version(value),
                    _ => Block::Keywords(value),
                });
            }
            "SOURCE" => {
                let (source, organism) = parse_source_organism(&mut cursor)?;
                events.push(Block::Source { source, organism });
            }
            "REFERENCE" => {
                events.push(Block::Reference(parse_reference(&mut cursor)?));
            }
            "FEATURES" => {
                let keyword_line = cursor.line_number();
                cursor.advance();
                if cursor.is_done() {
                    return Err(SeqannotError::TruncatedBlock {
                        block: "FEATURES".to_string(),
                        line: keyword_line,
                    });
                }
                events.push(Block::Features(parse_features(&mut cursor)?));
            }
            "ORIGIN" => {
                cursor.advance();
                events.push(Block::Origin(extract_sequence(&mut cursor)));
                break;
            }
            other => {
                debug_assert!(
                    !vocab::is_top_level_keyword(other),
                    "dispatcher arm missing for {other}"
                );
                log::debug!(
                    "line {}: skipping unrecognized top-level token {:?}",
                    cursor.line_number(),
                    other
                );
                cursor.advance();
            }
        }
    }

    Ok(events)
}

/// Folds block events into the model.
///
/// References and features keep their event order, which equals file
/// order. GenBank features carry no name token of their own, so each
/// feature's name is set to the enclosing locus name.
pub fn accumulate(events: Vec<Block>) -> AnnotatedSequence {
    let mut record = AnnotatedSequence::default();

    for event in events {
        match event {
            Block::Locus(locus) => record.meta.locus = locus,
            Block::Definition(value) => record.meta.definition = value,
            Block::Accession(value) => record.meta.accession = value,
            Block::Version(value) => record.meta.version = value,
            Block::Keywords(value) => record.meta.keywords = value,
            Block::Source { source, organism } => {
                record.meta.source = source;
                record.meta.organism = organism;
            }
            Block::Reference(reference) => record.meta.references.push(reference),
            Block::Features(features) => record.features = features,
            Block::Origin(sequence) => record.sequence = sequence,
        }
    }

    if !record.meta.locus.name.is_empty() {
        for feature in &mut record.features {
            feature.name = record.meta.locus.name.clone();
        }
    }

    record
}

/// Parses GenBank flat-file text into an [`AnnotatedSequence`].
///
/// Empty input yields `Ok` with a default model; structural failures yield
/// `Err`, so the two are distinguishable.
///
/// # Errors
///
/// [`SeqannotError::MalformedLocus`], [`SeqannotError::TruncatedBlock`] or
/// [`SeqannotError::InvalidGenBankFormat`], each carrying the offending
/// line number.
pub fn parse_genbank(text: &str) -> Result<AnnotatedSequence> {
    let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    let events = scan_blocks(&lines)?;
    Ok(accumulate(events))
}

/// Reads and parses a GenBank file (`.gb`, `.gbk`, `.genbank`, optionally
/// `.gz`-compressed).
///
/// # Example
///
/// ```no_run
/// use seqannot::formats::genbank::read_genbank;
///
/// # fn main() -> seqannot::Result<()> {
/// let record = read_genbank("sequence.gb")?;
/// println!("{} features", record.features.len());
/// # Ok(())
/// # }
/// ```
pub fn read_genbank<P: AsRef<Path>>(path: P) -> Result<AnnotatedSequence> {
    let text = super::read_to_string_maybe_gz(path.as_ref())?;
    parse_genbank(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
LOCUS       test 10 bp DNA linear SYN 01-JAN-2020
FEATURES             Location/Qualifiers
     gene            1..10
                     /gene=\"x\"
ORIGIN
        1 atgcatgcat
//";

    #[test]
    fn test_minimal_end_to_end() {
        let record = parse_genbank(MINIMAL).unwrap();
        assert_eq!(record.meta.locus.name, "test");
        assert_eq!(record.meta.locus.sequence_length, "10 bp");
        assert!(!record.meta.locus.circular);
        assert_eq!(record.features.len(), 1);
        assert_eq!(record.features[0].feature_type, "gene");
        assert_eq!(record.features[0].name, "test");
        assert_eq!(
            record.features[0].attributes.get("gene"),
            Some(&"x".to_string())
        );
        assert_eq!(record.sequence.sequence, "atgcatgcat");
    }

    #[test]
    fn test_empty_input_is_ok_and_default() {
        let record = parse_genbank("").unwrap();
        assert_eq!(record, AnnotatedSequence::default());
    }

    #[test]
    fn test_continuation_joined_definition() {
        let text = "\
DEFINITION  cloning vector pUC19,
            complete sequence.
ACCESSION   L09137";
        let record = parse_genbank(text).unwrap();
        assert_eq!(
            record.meta.definition,
            "cloning vector pUC19, complete sequence."
        );
        assert_eq!(record.meta.accession, "L09137");
    }

    #[test]
    fn test_references_preserve_file_order() {
        let text = "\
REFERENCE   1  (bases 1 to 10)
  AUTHORS   First,A.
REFERENCE   2  (bases 1 to 10)
  AUTHORS   Second,B.
ORIGIN
//";
        let record = parse_genbank(text).unwrap();
        assert_eq!(record.meta.references.len(), 2);
        assert_eq!(record.meta.references[0].index, "1");
        assert_eq!(record.meta.references[0].authors, "First,A.");
        assert_eq!(record.meta.references[1].index, "2");
        assert_eq!(record.meta.references[1].authors, "Second,B.");
    }

    #[test]
    fn test_unknown_top_level_tokens_are_skipped() {
        let text = "\
LOCUS       test 10 bp DNA linear SYN 01-JAN-2020
DBLINK      BioProject: PRJNA000
COMMENT     On or before Jan 1, 2020 this sequence version
            replaced nothing.
ACCESSION   X00001";
        let record = parse_genbank(text).unwrap();
        assert_eq!(record.meta.locus.name, "test");
        assert_eq!(record.meta.accession, "X00001");
    }

    #[test]
    fn test_lines_after_origin_are_never_keywords() {
        let text = "\
LOCUS       test 10 bp DNA linear SYN 01-JAN-2020
ORIGIN
        1 atgcatgcat
ACCESSION
//";
        let record = parse_genbank(text).unwrap();
        // The uppercase token after ORIGIN is sequence data, not a keyword.
        assert_eq!(record.meta.accession, "");
        assert_eq!(record.sequence.sequence, "atgcatgcatACCESSION");
    }

    #[test]
    fn test_source_and_organism() {
        let text = "\
SOURCE      Escherichia coli
  ORGANISM  Escherichia coli
            Bacteria; Enterobacteriaceae.
FEATURES             Location/Qualifiers
     source          1..10
ORIGIN
//";
        let record = parse_genbank(text).unwrap();
        assert_eq!(record.meta.source, "Escherichia coli");
        assert_eq!(
            record.meta.organism,
            "Escherichia coli Bacteria; Enterobacteriaceae."
        );
        assert_eq!(record.features.len(), 1);
    }

    #[test]
    fn test_features_keyword_as_last_line_is_truncated() {
        let err = parse_genbank("FEATURES             Location/Qualifiers").unwrap_err();
        match err {
            SeqannotError::TruncatedBlock { block, line } => {
                assert_eq!(block, "FEATURES");
                assert_eq!(line, 1);
            }
            other => panic!("expected TruncatedBlock, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_locus_line_number() {
        let text = "\nLOCUS  broken";
        let err = parse_genbank(text).unwrap_err();
        match err {
            SeqannotError::MalformedLocus { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedLocus, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatcher_covers_top_level_vocabulary() {
        let text = "\
LOCUS       t 10 bp DNA linear SYN 01-JAN-2020
DEFINITION  d.
ACCESSION   A1
VERSION     A1.1
KEYWORDS    .
SOURCE      s
  ORGANISM  o
REFERENCE   1
FEATURES             Location/Qualifiers
     gene            1..10
ORIGIN
        1 atgc
//";
        let lines: Vec<&str> = text.lines().collect();
        let events = scan_blocks(&lines).unwrap();
        // One event per top-level keyword: none may fall into the skip path.
        assert_eq!(events.len(), vocab::TOP_LEVEL_KEYWORDS.len());
    }

    #[test]
    fn test_scan_blocks_event_order() {
        let lines: Vec<&str> = MINIMAL.lines().collect();
        let events = scan_blocks(&lines).unwrap();
        assert!(matches!(events[0], Block::Locus(_)));
        assert!(matches!(events[1], Block::Features(_)));
        assert!(matches!(events[2], Block::Origin(_)));
        assert_eq!(events.len(), 3);
    }
}
