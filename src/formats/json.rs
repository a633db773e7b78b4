//! JSON reader/writer.
//!
//! A direct structural serialization of [`AnnotatedSequence`] with
//! indentation. Reading is the structural inverse with every field
//! optional: absent fields keep their zero/empty values. Decode failures
//! surface as errors instead of silently producing an empty model.

use crate::error::Result;
use crate::types::AnnotatedSequence;
use std::fs;
use std::path::Path;

/// Serializes a model to pretty-printed JSON.
pub fn to_json(record: &AnnotatedSequence) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Deserializes a model from JSON; all fields are optional.
pub fn from_json(text: &str) -> Result<AnnotatedSequence> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a JSON file (optionally `.gz`-compressed).
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<AnnotatedSequence> {
    let text = super::read_to_string_maybe_gz(path.as_ref())?;
    from_json(&text)
}

/// Writes a model to a path as pretty-printed JSON.
pub fn write_json<P: AsRef<Path>>(record: &AnnotatedSequence, path: P) -> Result<()> {
    fs::write(path, to_json(record)?)?;
    Ok(())
}
