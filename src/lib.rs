//! seqannot: annotated-sequence flat-file I/O
//!
//! # Overview
//!
//! seqannot converts between a common in-memory model of an annotated
//! biological sequence — metadata, an ordered list of positional features,
//! and the raw sequence letters — and the textual formats used in
//! genomics:
//!
//! - **GenBank** (`.gb`/`.gbk`): the core of the crate. GenBank has no
//!   field delimiters; structure is encoded by fixed-column indentation
//!   and a closed keyword vocabulary, and multi-line fields are rejoined
//!   by inspecting the indentation of following lines.
//! - **GFF3**: tab-separated 9-column features plus a trailing FASTA block.
//! - **JSON**: a direct structural serialization of the model.
//!
//! Parsing is single-threaded and single-pass: the whole input is
//! materialized in memory, then scanned once with an explicit line cursor.
//! Output field order (references, features) always equals input line
//! order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use seqannot::{read_genbank, write_gff};
//!
//! # fn main() -> seqannot::Result<()> {
//! let record = read_genbank("puc19.gb")?;
//! println!("locus {} with {} features", record.meta.locus.name, record.features.len());
//! write_gff(&record, "puc19.gff3")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result`]. Structure errors carry the 1-based
//! offending line number; unknown top-level keywords and qualifier keys
//! are skipped rather than rejected, so files using future GenBank
//! vocabulary still parse. An empty input parses to a default model, which
//! keeps "empty file" distinguishable from "parse failed".
//!
//! ## Module Organization
//!
//! - [`types`]: the shared [`AnnotatedSequence`] data model
//! - [`formats`]: GenBank, GFF3 and JSON readers/writers
//! - [`error`]: the crate error type

#![warn(missing_docs)]

pub mod error;
pub mod formats;
pub mod types;

pub use error::{Result, SeqannotError};
pub use formats::{
    build_gff, from_json, parse_genbank, parse_gff, read_genbank, read_gff, read_json, to_json,
    write_gff, write_json,
};
pub use types::{AnnotatedSequence, Feature, Locus, Meta, Primary, Reference, Sequence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
