//! Line classification for the GenBank flat-file format.
//!
//! GenBank has no field delimiters or nesting markers: record structure is
//! encoded entirely by fixed-column indentation and a closed keyword
//! vocabulary. A line's class is decided from three fixed character
//! positions, documented here as part of the format contract:
//!
//! - column [`TOP_LEVEL_COL`] (0): non-blank means a top-level keyword line
//!   (`LOCUS`, `DEFINITION`, ..., `ORIGIN`)
//! - column [`SUB_LEVEL_COL`] (5): non-blank (with column 0 blank) means a
//!   sub-level keyword (`ORGANISM`, `AUTHORS`, ...) or a feature-table
//!   entry — the same physical test serves both, disambiguated by which
//!   block the dispatcher is currently in
//! - column [`QUALIFIER_COL`] (21): a literal `/` (with columns 0 and 5
//!   blank) means a feature qualifier; anything else with column 20 blank
//!   is a qualifier continuation
//!
//! Lines too short for a check are plain continuations — GenBank commonly
//! has short blank-ish lines, and they must never make classification fail.

/// Column tested for top-level keywords.
pub const TOP_LEVEL_COL: usize = 0;

/// Column tested for sub-level keywords and feature-table entries.
pub const SUB_LEVEL_COL: usize = 5;

/// Column holding the `/` of a feature qualifier.
pub const QUALIFIER_COL: usize = 21;

/// Classification of a single GenBank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Column 0 is non-blank: a top-level record keyword
    TopLevel,
    /// Column 0 blank, column 5 non-blank: a sub-level keyword or a
    /// feature-table entry
    SubLevel,
    /// Columns 0 and 5 blank, column 21 is `/`: a feature qualifier
    Qualifier,
    /// Columns 0 and 5 blank, column 21 not `/`, column 20 blank: a
    /// continuation of the preceding qualifier
    QualifierContinuation,
    /// Anything else, including blank and short lines
    PlainContinuation,
}

/// Classifies one line of GenBank text from its fixed column positions.
///
/// Column offsets are byte offsets; the format is ASCII.
///
/// # Examples
///
/// ```
/// use seqannot::formats::genbank::classify::{classify, LineClass};
///
/// assert_eq!(classify("LOCUS       pUC19"), LineClass::TopLevel);
/// assert_eq!(classify("     gene            1..10"), LineClass::SubLevel);
/// assert_eq!(classify(""), LineClass::PlainContinuation);
/// ```
pub fn classify(line: &str) -> LineClass {
    let bytes = line.as_bytes();

    match bytes.first() {
        None => return LineClass::PlainContinuation,
        Some(b) if *b != b' ' => return LineClass::TopLevel,
        _ => {}
    }

    match bytes.get(SUB_LEVEL_COL) {
        None => return LineClass::PlainContinuation,
        Some(b) if *b != b' ' => return LineClass::SubLevel,
        _ => {}
    }

    // The qualifier checks need column 21; shorter lines cannot be
    // qualifiers or qualifier continuations.
    match bytes.get(QUALIFIER_COL) {
        None => LineClass::PlainContinuation,
        Some(b'/') => LineClass::Qualifier,
        Some(_) if bytes[QUALIFIER_COL - 1] == b' ' => LineClass::QualifierContinuation,
        Some(_) => LineClass::PlainContinuation,
    }
}

/// Explicit cursor over the line array.
///
/// One cursor is shared across the dispatcher and every block parser; each
/// parser consumes exactly the lines belonging to its block. `peek` at end
/// of input returns `None`, which every loop treats as an implicit block
/// terminator — the cursor can never index past the array.
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor positioned at the first line.
    pub fn new(lines: &'a [&'a str]) -> Self {
        LineCursor { lines, pos: 0 }
    }

    /// The current line, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Classification of the current line.
    pub fn peek_class(&self) -> Option<LineClass> {
        self.peek().map(classify)
    }

    /// 1-based line number of the current line.
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    /// Consumes and returns the current line.
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// All lines from the current position to the end, consuming them.
    pub fn take_rest(&mut self) -> &'a [&'a str] {
        let rest = &self.lines[self.pos..];
        self.pos = self.lines.len();
        rest
    }

    /// True once every line has been consumed.
    pub fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }
}

/// Joins a field's defining text with its continuation lines.
///
/// Consumes lines from the cursor while they classify strictly as
/// [`LineClass::PlainContinuation`], trimming and single-space-joining each
/// fragment onto `base`. Stops at the first top-level or sub-level line
/// without consuming it. This is the single continuation mechanism shared
/// by DEFINITION, ACCESSION, VERSION, KEYWORDS and every REFERENCE
/// sub-field.
///
/// # Examples
///
/// ```
/// use seqannot::formats::genbank::classify::{join_continuations, LineCursor};
///
/// let lines = ["            construct pUC19,", "            complete sequence."];
/// let mut cursor = LineCursor::new(&lines);
/// let value = join_continuations("cloning".to_string(), &mut cursor);
/// assert_eq!(value, "cloning construct pUC19, complete sequence.");
/// ```
pub fn join_continuations(base: String, cursor: &mut LineCursor<'_>) -> String {
    let mut value = base.trim().to_string();

    while let Some(line) = cursor.peek() {
        match classify(line) {
            LineClass::TopLevel | LineClass::SubLevel => break,
            _ => {
                let fragment = line.trim();
                if !fragment.is_empty() {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(fragment);
                }
                cursor.advance();
            }
        }
    }

    value
}
