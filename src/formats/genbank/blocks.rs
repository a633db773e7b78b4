//! Block parsers for the GenBank record sections.
//!
//! Each parser consumes exactly the lines of its block from the shared
//! [`LineCursor`] and returns the parsed value. End of input acts as an
//! implicit block terminator everywhere: a file that ends inside a block
//! yields the fields parsed so far instead of indexing past the line
//! array.

use super::classify::{classify, join_continuations, LineClass, LineCursor};
use super::vocab;
use crate::error::{Result, SeqannotError};
use crate::types::{Feature, Locus, Reference, Sequence};
use std::collections::HashMap;

/// Parses the fixed-format LOCUS header line.
///
/// Token layout is positional after whitespace splitting: `[1]` name,
/// `[2..=3]` length and its unit (kept together), `[4]` molecule type, then
/// either `[5]` is literally `circular`/`linear` (shifting division and
/// date to `[6]`/`[7]`) or `[5]`/`[6]` are division and date with
/// circularity defaulting to false.
///
/// # Errors
///
/// [`SeqannotError::MalformedLocus`] when too few tokens remain after
/// filtering empties.
pub fn parse_locus(line: &str, line_number: usize) -> Result<Locus> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() < 7 {
        return Err(SeqannotError::MalformedLocus {
            line: line_number,
            msg: format!("expected at least 7 tokens, found {}", tokens.len()),
        });
    }

    let mut locus = Locus {
        name: tokens[1].to_string(),
        sequence_length: format!("{} {}", tokens[2], tokens[3]),
        molecule_type: tokens[4].to_string(),
        ..Locus::default()
    };

    if tokens[5] == "circular" || tokens[5] == "linear" {
        if tokens.len() < 8 {
            return Err(SeqannotError::MalformedLocus {
                line: line_number,
                msg: "topology token present but division/date missing".to_string(),
            });
        }
        locus.circular = tokens[5] == "circular";
        locus.genbank_division = tokens[6].to_string();
        locus.mod_date = tokens[7].to_string();
    } else {
        locus.circular = false;
        locus.genbank_division = tokens[5].to_string();
        locus.mod_date = tokens[6].to_string();
    }

    if !vocab::is_genbank_division(&locus.genbank_division) {
        log::warn!(
            "line {}: unrecognized GenBank division {:?}",
            line_number,
            locus.genbank_division
        );
    }

    Ok(locus)
}

/// Parses one REFERENCE block, cursor positioned at the REFERENCE line.
///
/// The first whitespace-delimited token after the keyword is the citation
/// index, the remainder the base-pair range. Sub-lines are matched against
/// the REFERENCE sub-key vocabulary and continuation-joined; unrecognized
/// sub-level tokens are silently skipped for forward compatibility.
pub fn parse_reference(cursor: &mut LineCursor<'_>) -> Result<Reference> {
    let keyword_line_number = cursor.line_number();
    let line = cursor.advance().unwrap_or_default();
    let rest = strip_keyword(line, "REFERENCE");

    if rest.is_empty() && cursor.is_done() {
        return Err(SeqannotError::TruncatedBlock {
            block: "REFERENCE".to_string(),
            line: keyword_line_number,
        });
    }

    let mut reference = Reference::default();
    let mut parts = rest.splitn(2, char::is_whitespace);
    reference.index = parts.next().unwrap_or_default().to_string();
    reference.range = parts.next().unwrap_or_default().trim().to_string();

    while let Some(line) = cursor.peek() {
        match classify(line) {
            LineClass::TopLevel => break,
            LineClass::SubLevel => {
                let trimmed = line.trim();
                let (head, tail) = match trimmed.split_once(char::is_whitespace) {
                    Some((head, tail)) => (head, tail),
                    None => (trimmed, ""),
                };
                cursor.advance();
                let slot = match head {
                    "AUTHORS" => Some(&mut reference.authors),
                    "TITLE" => Some(&mut reference.title),
                    "JOURNAL" => Some(&mut reference.journal),
                    "PUBMED" => Some(&mut reference.pubmed),
                    "REMARK" => Some(&mut reference.remark),
                    _ => None,
                };
                match slot {
                    Some(slot) => *slot = join_continuations(tail.to_string(), cursor),
                    None => {
                        debug_assert!(!vocab::is_reference_sub_key(head));
                        log::debug!("skipping unrecognized reference sub-key {:?}", head);
                    }
                }
            }
            _ => {
                cursor.advance();
            }
        }
    }

    Ok(reference)
}

/// Parses the SOURCE block, cursor positioned at the SOURCE line.
///
/// SOURCE is not a plain continuation field: it contains exactly one nested
/// sub-record, ORGANISM. Lines are source continuation until the first line
/// whose head token is `ORGANISM`, which starts organism-text collection
/// (the standard joiner picks up the taxonomy continuation lines).
pub fn parse_source_organism(cursor: &mut LineCursor<'_>) -> Result<(String, String)> {
    let keyword_line_number = cursor.line_number();
    let line = cursor.advance().unwrap_or_default();
    let mut source = strip_keyword(line, "SOURCE").to_string();

    if source.is_empty() && cursor.is_done() {
        return Err(SeqannotError::TruncatedBlock {
            block: "SOURCE".to_string(),
            line: keyword_line_number,
        });
    }

    let mut organism = String::new();

    while let Some(line) = cursor.peek() {
        if classify(line) == LineClass::TopLevel {
            break;
        }
        let trimmed = line.trim();
        let (head, tail) = match trimmed.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail),
            None => (trimmed, ""),
        };
        if head == "ORGANISM" {
            cursor.advance();
            organism = join_continuations(tail.to_string(), cursor);
            break;
        }
        if !trimmed.is_empty() {
            if !source.is_empty() {
                source.push(' ');
            }
            source.push_str(trimmed);
        }
        cursor.advance();
    }

    Ok((source, organism))
}

/// Parses the FEATURES table, cursor positioned at the first entry line
/// (the dispatcher consumes the `FEATURES` header line itself).
///
/// The loop stops at the first line that is top-level or fails the
/// feature-line classification. That guard keeps the parser from running
/// past ORIGIN into raw sequence data; do not weaken it.
pub fn parse_features(cursor: &mut LineCursor<'_>) -> Result<Vec<Feature>> {
    let mut features = Vec::new();

    while let Some(line) = cursor.peek() {
        if classify(line) != LineClass::SubLevel {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(SeqannotError::InvalidGenBankFormat {
                line: cursor.line_number(),
                msg: format!(
                    "feature declaration {:?} has no location",
                    tokens.first().copied().unwrap_or_default()
                ),
            });
        }

        let mut feature = Feature {
            feature_type: tokens[0].to_string(),
            location: tokens[tokens.len() - 1].to_string(),
            attributes: HashMap::new(),
            ..Feature::default()
        };

        if !vocab::is_gene_feature_type(&feature.feature_type) {
            log::warn!(
                "line {}: unrecognized feature type {:?}",
                cursor.line_number(),
                feature.feature_type
            );
        }
        cursor.advance();

        while cursor.peek_class() == Some(LineClass::Qualifier) {
            let mut qualifier = cursor.advance().unwrap_or_default().trim().to_string();

            // Continuation text is pre-spaced or space-insensitive
            // (e.g. /translation runs), so fragments concatenate without
            // an inserted separator.
            while cursor.peek_class() == Some(LineClass::QualifierContinuation) {
                qualifier.push_str(cursor.advance().unwrap_or_default().trim());
            }

            let cleaned: String = qualifier
                .chars()
                .filter(|c| *c != '"' && *c != '/')
                .collect();
            let (key, value) = match cleaned.split_once('=') {
                Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
                None => (cleaned.trim().to_string(), String::new()),
            };
            if !vocab::is_qualifier_key(&key) {
                log::debug!("unrecognized qualifier key {:?}", key);
            }
            feature.attributes.insert(key, value);
        }

        features.push(feature);
    }

    Ok(features)
}

/// Extracts the raw sequence letters from everything after ORIGIN.
///
/// Lines are concatenated verbatim, then every character outside the ASCII
/// letter ranges is removed (line-number prefixes, whitespace). Case is
/// preserved.
pub fn extract_sequence(cursor: &mut LineCursor<'_>) -> Sequence {
    let letters: String = cursor
        .take_rest()
        .iter()
        .flat_map(|line| line.chars())
        .filter(char::is_ascii_alphabetic)
        .collect();

    Sequence {
        description: String::new(),
        sequence: letters,
    }
}

/// The trimmed remainder of a keyword line after its leading keyword.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> &'a str {
    let trimmed = line.trim();
    trimmed.strip_prefix(keyword).unwrap_or(trimmed).trim()
}
