//! NEXUS matrix writer.
//!
//! [`entry_to_string`] renders one entry in non-interleaved style: the name,
//! two spaces and as much sequence as fits in `wrap_at` columns, then the rest
//! of the sequence on lines indented by eight spaces.
//!
//! [`MatrixWriter`] runs a whole write session. The first entry fixes
//! `nchar`; the header is only rendered by [`MatrixWriter::finish`], once the
//! final `ntax` is known.

use log::debug;

use super::matrix::is_terminator;
use super::{NexusError, NexusResult};
use crate::model::{Dimensions, Entry};

/// Default line width of written matrix lines.
pub const DEFAULT_WRAP_AT: usize = 80;

/// Default line terminator of written matrix lines.
pub const DEFAULT_ENDLINE: &str = "\n";

/// Separator between a name and the first sequence fragment
const NAME_SEPARATOR: &str = "  ";

/// Indentation of wrapped sequence lines
const INDENT: &str = "        ";

/// Closes the matrix and the DATA block
const FOOTER: &str = ";\nEND;\n";

/// Splits `s` after `n` characters (or at its end if shorter).
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let idx = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(idx)
}

/// Renders an entry as NEXUS matrix lines.
///
/// Every physical line ends with `endline`. Widths never drop below one
/// character: when `wrap_at` leaves no room after the name, the first line
/// still carries one sequence character and is longer than `wrap_at`.
///
/// # Examples
///
/// ```
/// use nexseq::model::Entry;
/// use nexseq::nexus::entry_to_string;
///
/// let entry = Entry::new("monkey", "ACGT");
/// assert_eq!(entry_to_string(&entry, 80, "\n"), "monkey  ACGT\n");
/// ```
pub fn entry_to_string(entry: &Entry, wrap_at: usize, endline: &str) -> String {
    let name_len = entry.name.chars().count();
    let prefix_width = wrap_at
        .saturating_sub(name_len + NAME_SEPARATOR.len())
        .max(1);
    let line_width = wrap_at.saturating_sub(INDENT.len()).max(1);

    let (prefix, mut rest) = split_at_char(&entry.sequence, prefix_width);

    let mut out = String::with_capacity(entry.name.len() + entry.sequence.len() * 2 + 16);
    out.push_str(&entry.name);
    out.push_str(NAME_SEPARATOR);
    out.push_str(prefix);
    out.push_str(endline);

    while !rest.is_empty() {
        let (chunk, tail) = split_at_char(rest, line_width);
        out.push_str(INDENT);
        out.push_str(chunk);
        out.push_str(endline);
        rest = tail;
    }

    out
}

/// Checks that an entry can be written as a matrix row.
fn validate_entry(entry: &Entry) -> NexusResult<()> {
    if entry.name.is_empty() {
        return Err(NexusError::IncompleteEntry("name"));
    }
    if entry.sequence.is_empty() {
        return Err(NexusError::IncompleteEntry("sequence"));
    }
    // A name read back as `;` or `END;` would close the matrix
    if entry.name.chars().any(char::is_whitespace) || is_terminator(&entry.name) {
        return Err(NexusError::InvalidName(entry.name.clone()));
    }
    if entry.sequence.chars().any(char::is_whitespace) {
        return Err(NexusError::InvalidSequence(entry.name.clone()));
    }
    Ok(())
}

/// Accumulates entries of a DATA block and renders the complete document.
///
/// Any failed write poisons the session: later writes and [`finish`] fail
/// with [`NexusError::SessionPoisoned`].
///
/// [`finish`]: MatrixWriter::finish
#[derive(Debug, Default)]
pub struct MatrixWriter {
    ntax: usize,
    nchar: Option<usize>,
    buffer: String,
    poisoned: bool,
}

impl MatrixWriter {
    /// Creates an empty write session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries written so far.
    pub fn ntax(&self) -> usize {
        self.ntax
    }

    /// Sequence length fixed by the first entry, if any.
    pub fn nchar(&self) -> Option<usize> {
        self.nchar
    }

    /// Current dimensions of the session.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            ntax: Some(self.ntax),
            nchar: self.nchar,
        }
    }

    /// Returns true once a write has failed.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Writes an entry with the default wrapping (80 columns, `\n`).
    pub fn write(&mut self, entry: &Entry) -> NexusResult<()> {
        self.write_wrapped(entry, DEFAULT_WRAP_AT, DEFAULT_ENDLINE)
    }

    /// Writes an entry wrapped at `wrap_at` columns with `endline` terminators.
    ///
    /// # Errors
    ///
    /// Fails if the entry lacks a name or sequence, if its name or sequence
    /// contains whitespace, if its name reads as a matrix terminator, if its length differs from the first written entry, or if
    /// an earlier write already failed.
    pub fn write_wrapped(&mut self, entry: &Entry, wrap_at: usize, endline: &str) -> NexusResult<()> {
        if self.poisoned {
            return Err(NexusError::SessionPoisoned);
        }
        let result = self.push(entry, wrap_at, endline);
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    /// Writes several entries with the default wrapping.
    pub fn write_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a Entry>) -> NexusResult<()> {
        for entry in entries {
            self.write(entry)?;
        }
        Ok(())
    }

    fn push(&mut self, entry: &Entry, wrap_at: usize, endline: &str) -> NexusResult<()> {
        validate_entry(entry)?;
        let len = entry.len();
        match self.nchar {
            None => self.nchar = Some(len),
            Some(nchar) if nchar != len => {
                return Err(NexusError::SequenceLengthMismatch {
                    name: entry.name.clone(),
                    expected: nchar,
                    found: len,
                });
            }
            Some(_) => {}
        }
        self.ntax += 1;
        self.buffer.push_str(&entry_to_string(entry, wrap_at, endline));
        Ok(())
    }

    /// Renders the DATA block header for the current dimensions.
    pub fn header(&self) -> String {
        format!(
            "#NEXUS\n\
             BEGIN Data;\n  \
             Dimensions ntax={} nchar={};\n  \
             Format Datatype=DNA missing=? gap=-;\n\
             Matrix\n\n",
            self.ntax,
            self.nchar.unwrap_or(0)
        )
    }

    /// Ends the session and returns the complete document text.
    pub fn finish(self) -> NexusResult<String> {
        if self.poisoned {
            return Err(NexusError::SessionPoisoned);
        }
        debug!(
            "finishing NEXUS document: ntax={} nchar={:?}",
            self.ntax, self.nchar
        );
        let mut document = self.header();
        document.push_str(&self.buffer);
        document.push_str(FOOTER);
        Ok(document)
    }
}
