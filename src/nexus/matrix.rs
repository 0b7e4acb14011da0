//! MATRIX command parsing.
//!
//! Entries are read line by line. A line either starts a new entry
//! (`name fragment [fragment...]`) or, while the current entry is shorter than
//! `nchar`, continues it. Fragments are concatenated without separators, so
//! `seq1 ACGT ACGT` and `seq1 ACGTACGT` are the same entry.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use super::{NexusError, NexusResult};
use crate::model::{Dimensions, Entry};

fn terminator_regex() -> &'static Regex {
    static TERMINATOR: OnceLock<Regex> = OnceLock::new();
    TERMINATOR.get_or_init(|| Regex::new(r"(?i)\A\s*(;|end;)").expect("Invalid terminator regex"))
}

/// Returns true for a line that closes the matrix (`;` or `END;`).
pub(super) fn is_terminator(line: &str) -> bool {
    terminator_regex().is_match(line)
}

/// An entry whose sequence has not reached `nchar` yet.
#[derive(Debug)]
struct PartialEntry {
    name: String,
    sequence: String,
    len: usize,
}

impl PartialEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sequence: String::new(),
            len: 0,
        }
    }

    fn extend<'a>(&mut self, fragments: impl Iterator<Item = &'a str>) {
        for fragment in fragments {
            self.sequence.push_str(fragment);
            self.len += fragment.chars().count();
        }
    }
}

/// Parses a non-interleaved matrix into entries, in source order.
///
/// `dimensions.nchar` delimits entries and must be declared as soon as the
/// matrix contains data. When `dimensions.ntax` is declared, the number of
/// entries must match it.
pub fn parse_matrix(text: &str, dimensions: &Dimensions) -> NexusResult<Vec<Entry>> {
    let mut entries: Vec<Entry> = Vec::with_capacity(dimensions.ntax.unwrap_or(0));
    let mut current: Option<PartialEntry> = None;

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if is_terminator(line) {
            break;
        }

        let mut tokens = line.split_whitespace();
        let mut entry = match current.take() {
            Some(partial) => partial,
            None => {
                // A new entry needs a name and at least one fragment
                let (Some(name), Some(_)) = (tokens.next(), tokens.clone().next()) else {
                    return Err(NexusError::MalformedEntry {
                        line: line_idx + 1,
                        content: line.trim().to_string(),
                    });
                };
                PartialEntry::new(name)
            }
        };
        entry.extend(tokens);

        let nchar = dimensions.nchar.ok_or(NexusError::MissingNchar)?;
        if entry.len < nchar {
            current = Some(entry);
        } else if entry.len > nchar {
            return Err(NexusError::SequenceOverrun {
                name: entry.name,
                expected: nchar,
                found: entry.len,
            });
        } else {
            entries.push(Entry::new(entry.name, entry.sequence));
        }
    }

    if let Some(entry) = current {
        return Err(NexusError::TruncatedEntry {
            name: entry.name,
            expected: dimensions.nchar.unwrap_or(0),
            found: entry.len,
        });
    }

    if let Some(ntax) = dimensions.ntax {
        if entries.len() != ntax {
            return Err(NexusError::EntryCountMismatch {
                expected: ntax,
                found: entries.len(),
            });
        }
    }

    debug!("parsed {} MATRIX entries", entries.len());
    Ok(entries)
}

/// Interleaved matrices are rejected rather than risk a silent mis-parse.
pub fn parse_interleaved_matrix(_text: &str, _dimensions: &Dimensions) -> NexusResult<Vec<Entry>> {
    Err(NexusError::NotSupported("interleaved MATRIX".to_string()))
}
