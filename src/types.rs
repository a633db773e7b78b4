//! Shared data model for annotated sequences.
//!
//! Every format in this crate (GenBank, GFF3, JSON) parses into and writes
//! from the same aggregate, [`AnnotatedSequence`]: header-level metadata, an
//! ordered list of positional features, and the raw sequence letters.
//!
//! All structs derive serde traits with `#[serde(default)]`, so the JSON
//! path treats every field as optional on read — absent fields keep their
//! zero/empty values.
//!
//! # Example
//!
//! ```
//! use seqannot::AnnotatedSequence;
//!
//! let seq = AnnotatedSequence::default();
//! assert!(seq.features.is_empty());
//! assert_eq!(seq.sequence.sequence, "");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root aggregate: one [`Meta`], ordered [`Feature`]s, one [`Sequence`].
///
/// Produced fresh per parse. Field order of `features` (and of
/// `meta.references`) always equals input line order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatedSequence {
    /// Header-level metadata
    pub meta: Meta,
    /// Positional annotations, in file order
    pub features: Vec<Feature>,
    /// Raw sequence letters plus optional FASTA description
    pub sequence: Sequence,
}

/// Header-level facts about a record.
///
/// The GFF-specific fields (`gff_version`, `region_start`, `region_end`)
/// are only populated by the GFF3 reader; the GenBank-specific fields only
/// by the GenBank dispatcher. `locus` is present (non-default) iff a LOCUS
/// line was seen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Record name (GFF seqid / sequence-region name)
    pub name: String,
    /// GFF format version tag (`##gff-version` value)
    pub gff_version: String,
    /// Sequence-region start (GFF)
    pub region_start: i64,
    /// Sequence-region end (GFF)
    pub region_end: i64,
    /// Sequence size in letters
    pub size: i64,
    /// Molecule type (DNA, RNA, ...)
    pub molecule_type: String,
    /// GenBank division code
    pub division: String,
    /// Last-modified date
    pub date: String,
    /// DEFINITION text, continuation-joined
    pub definition: String,
    /// Primary accession number
    pub accession: String,
    /// VERSION text
    pub version: String,
    /// KEYWORDS text
    pub keywords: String,
    /// ORGANISM text including taxonomy lines
    pub organism: String,
    /// SOURCE free text
    pub source: String,
    /// Parsed LOCUS header line
    pub locus: Locus,
    /// REFERENCE blocks, in file order
    pub references: Vec<Reference>,
    /// PRIMARY cross-references, in file order
    pub primaries: Vec<Primary>,
}

/// The parsed fixed-format LOCUS header line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Locus {
    /// Locus name
    pub name: String,
    /// Length with its unit token kept together, e.g. `"2686 bp"` or
    /// `"154 aa"` — not split because the unit varies
    pub sequence_length: String,
    /// Molecule type token
    pub molecule_type: String,
    /// True when the topology token is `circular`
    pub circular: bool,
    /// 3-letter GenBank division code
    pub genbank_division: String,
    /// Last-modified date string
    pub mod_date: String,
}

/// One REFERENCE block.
///
/// All free-text fields are the result of continuation-joining.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    /// Citation number as it appeared (not necessarily numeric-only)
    pub index: String,
    /// AUTHORS text
    pub authors: String,
    /// TITLE text
    pub title: String,
    /// JOURNAL text
    pub journal: String,
    /// PUBMED id
    pub pubmed: String,
    /// REMARK text
    pub remark: String,
    /// Base-pair range the reference annotates
    pub range: String,
}

/// One PRIMARY/trace-archive cross-reference row.
///
/// Same shape as [`Reference`] structurally, different field set. Part of
/// the model and the JSON round trip; the GenBank dispatcher does not
/// populate it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Primary {
    /// RefSeq span
    pub refseq: String,
    /// Primary identifier
    pub primary_identifier: String,
    /// Primary span
    pub primary_span: String,
    /// Complement flag column
    pub comp: String,
}

/// A single annotation.
///
/// `score`, `strand` and `phase` are kept as strings so that empty-string
/// defaults round-trip through GFF3 as empty, not as a placeholder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    /// GFF seqid; in the GenBank path, the enclosing locus name
    pub name: String,
    /// Annotation source (GFF column 2)
    pub source: String,
    /// Feature type, validated against the gene-feature-type vocabulary
    pub feature_type: String,
    /// Start position
    pub start: i64,
    /// End position
    pub end: i64,
    /// Confidence score, verbatim (may be empty)
    pub score: String,
    /// Strand, verbatim (may be empty)
    pub strand: String,
    /// CDS phase, verbatim (may be empty)
    pub phase: String,
    /// Qualifier/attribute mapping; keys unique per feature, last write
    /// wins. Values have had surrounding quote and slash characters
    /// stripped.
    pub attributes: HashMap<String, String>,
    /// GenBank-only: the raw, unparsed coordinate expression, e.g.
    /// `complement(1..200)`
    pub location: String,
    /// Reserved (unused in current scope)
    pub sequence: String,
}

/// Raw sequence letters plus the FASTA description line (GFF path only).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequence {
    /// FASTA header line, as read
    pub description: String,
    /// Sequence letters as one contiguous run, no whitespace or digits
    pub sequence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_empty() {
        let seq = AnnotatedSequence::default();
        assert_eq!(seq.meta.locus.name, "");
        assert!(!seq.meta.locus.circular);
        assert!(seq.meta.references.is_empty());
        assert!(seq.features.is_empty());
        assert_eq!(seq.sequence.sequence, "");
    }

    #[test]
    fn test_feature_attributes_last_write_wins() {
        let mut feature = Feature::default();
        feature
            .attributes
            .insert("gene".to_string(), "abc".to_string());
        feature
            .attributes
            .insert("gene".to_string(), "xyz".to_string());
        assert_eq!(feature.attributes.get("gene"), Some(&"xyz".to_string()));
    }
}
