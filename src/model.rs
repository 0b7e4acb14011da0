//! Data model shared by the read and write paths.
//!
//! - [`Entry`]: one taxon's name and character sequence
//! - [`Dimensions`]: the `ntax`/`nchar` metadata of a DATA block

/// One row of a NEXUS matrix: a taxon name and its sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// The taxon name (a single whitespace-free token)
    pub name: String,
    /// The character data (nucleotides, gaps, missing symbols, ...)
    pub sequence: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    /// Returns the sequence length in characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Matrix dimensions declared by (read) or accumulated for (write) a document.
///
/// A field is `None` when the header did not declare it; no default is ever
/// synthesized on the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Number of taxa (rows)
    pub ntax: Option<usize>,
    /// Number of characters per sequence (columns)
    pub nchar: Option<usize>,
}

impl Dimensions {
    /// Creates dimensions with both fields set.
    pub fn new(ntax: usize, nchar: usize) -> Self {
        Self {
            ntax: Some(ntax),
            nchar: Some(nchar),
        }
    }
}
