//! File format readers and writers.
//!
//! Every format converts to and from the shared [`AnnotatedSequence`]
//! model:
//! - [`genbank`]: GenBank flat files — the column-positional, keyword-driven
//!   core of the crate
//! - [`gff`] / [`gff_writer`]: GFF3 (tab-delimited columns plus a trailing
//!   FASTA block)
//! - [`json`]: direct structural serialization
//!
//! All `read_*` helpers materialize the whole input in memory before
//! parsing begins (the parsers are single-pass over a line array, not
//! streaming) and transparently decompress `.gz`/`.bgz` inputs.
//!
//! [`AnnotatedSequence`]: crate::types::AnnotatedSequence

pub mod genbank;
pub mod gff;
pub mod gff_writer;
pub mod json;

pub use genbank::{parse_genbank, read_genbank};
pub use gff::{parse_gff, read_gff};
pub use gff_writer::{build_gff, write_gff};
pub use json::{from_json, read_json, to_json, write_json};

use crate::error::Result;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a whole file into a string, decompressing `.gz`/`.bgz` inputs.
pub(crate) fn read_to_string_maybe_gz(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut text = String::new();
    let compressed = path
        .extension()
        .map_or(false, |ext| ext == "gz" || ext == "bgz");
    if compressed {
        MultiGzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        BufReader::new(file).read_to_string(&mut text)?;
    }
    Ok(text)
}
