//! # nexseq - NEXUS alignment reader and writer
//!
//! Reads and writes the DATA block of NEXUS files: taxon names paired with
//! character sequences.
//!
//! ## Architecture
//!
//! - `model`: entries and matrix dimensions
//! - `nexus`: block splitting, header and matrix parsing, entry wrapping and
//!   the write session
//! - `document`: file-like open/read/write/close over a NEXUS document
//!
//! ## Example
//!
//! ```
//! use nexseq::document::NexusFile;
//!
//! let text = "#NEXUS\nBEGIN DATA;\nDIMENSIONS NTAX=1 NCHAR=4;\nMATRIX\nseq1 ACGT\n;\nEND;\n";
//! let entries = NexusFile::from_text(text).read_entries().unwrap();
//! assert_eq!(entries[0].sequence, "ACGT");
//! ```

pub mod document;
pub mod model;
pub mod nexus;
