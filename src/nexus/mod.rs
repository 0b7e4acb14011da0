//! NEXUS format parser and writer.
//!
//! Only the DATA block of a NEXUS file is understood, and only its
//! non-interleaved matrix layout.
//!
//! ## NEXUS Format
//!
//! ```text
//! #NEXUS
//! BEGIN Data;
//!   Dimensions ntax=2 nchar=10;
//!   Format Datatype=DNA missing=? gap=-;
//! Matrix
//! seq1  ACGTACGTAC
//! seq2  TGCATG??TG
//! ;
//! END;
//! ```
//!
//! An entry may be wrapped over several physical lines: lines are appended to
//! the current entry until its sequence reaches `nchar` characters.
//!
//! ## Pipeline
//!
//! - [`blocks`]: `#NEXUS` signature check and DATA block extraction
//! - [`header`]: `MATRIX` split, `ntax`/`nchar`/`interleave` search
//! - [`matrix`]: entry reconstruction
//! - [`writer`]: entry wrapping and the document write session

pub mod blocks;
pub mod header;
pub mod matrix;
pub mod writer;

use thiserror::Error;

use crate::model::{Dimensions, Entry};

pub use writer::{entry_to_string, MatrixWriter, DEFAULT_ENDLINE, DEFAULT_WRAP_AT};

/// Errors that can occur while reading or writing NEXUS data.
#[derive(Error, Debug)]
pub enum NexusError {
    #[error("Invalid mode '{0}': must start with 'r', 'a' or 'w', or be 'f' or 's'")]
    InvalidMode(String),

    #[error("Does not appear to be in NEXUS format (must start with #NEXUS)")]
    NotNexus,

    #[error("No single DATA block found (found {found})")]
    NoSingleDataBlock { found: usize },

    #[error("No single MATRIX in DATA block (found {found})")]
    NoSingleMatrix { found: usize },

    #[error("Invalid {field} value '{value}' in DATA block header")]
    InvalidDimension { field: &'static str, value: String },

    #[error("NCHAR not declared, cannot delimit MATRIX entries")]
    MissingNchar,

    #[error("Error in MATRIX at line {line}: expected a name and sequence, got '{content}'")]
    MalformedEntry { line: usize, content: String },

    #[error("Too much sequence for '{name}': got {found} characters, expected {expected} (NCHAR)")]
    SequenceOverrun {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("MATRIX ended inside '{name}': got {found} characters, expected {expected} (NCHAR)")]
    TruncatedEntry {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Expected {expected} entries (NTAX), found {found}")]
    EntryCountMismatch { expected: usize, found: usize },

    #[error("Sequence length does not match: '{name}' has {found} characters, expected {expected}")]
    SequenceLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Entry missing {0}")]
    IncompleteEntry(&'static str),

    #[error("Invalid taxon name '{0}': names cannot contain whitespace or start with ';' or 'end;'")]
    InvalidName(String),

    #[error("Invalid sequence for '{0}': sequences cannot contain whitespace")]
    InvalidSequence(String),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document opened in '{0}' mode cannot be read")]
    NotReadable(String),

    #[error("Document opened in '{0}' mode cannot be written")]
    NotWritable(String),

    #[error("Document failed to parse earlier")]
    PreviousParseFailed,

    #[error("Write session aborted by an earlier error")]
    SessionPoisoned,

    #[error("Document is closed")]
    Closed,
}

impl NexusError {
    /// Returns true for structural violations of the NEXUS format.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            NexusError::NotNexus
                | NexusError::NoSingleDataBlock { .. }
                | NexusError::NoSingleMatrix { .. }
                | NexusError::InvalidDimension { .. }
                | NexusError::MissingNchar
                | NexusError::MalformedEntry { .. }
                | NexusError::SequenceOverrun { .. }
                | NexusError::TruncatedEntry { .. }
                | NexusError::EntryCountMismatch { .. }
                | NexusError::SequenceLengthMismatch { .. }
                | NexusError::IncompleteEntry(_)
                | NexusError::InvalidName(_)
                | NexusError::InvalidSequence(_)
        )
    }
}

/// Result type for NEXUS operations.
pub type NexusResult<T> = Result<T, NexusError>;

/// The parsed content of a DATA block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NexusData {
    /// Dimensions declared in the block header
    pub dimensions: Dimensions,
    /// Matrix entries in source order
    pub entries: Vec<Entry>,
}

/// Parses NEXUS content from a string.
///
/// The whole document is validated before any entry is returned.
pub fn parse_nexus_str(content: &str) -> NexusResult<NexusData> {
    let data_block = blocks::find_data_block(content)?;
    header::parse_data_block(data_block)
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}
