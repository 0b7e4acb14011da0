//! Signature check and block splitting.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use super::{NexusError, NexusResult};

fn signature_regex() -> &'static Regex {
    static SIGNATURE: OnceLock<Regex> = OnceLock::new();
    SIGNATURE.get_or_init(|| Regex::new(r"(?i)\A\s*#NEXUS").expect("Invalid signature regex"))
}

fn begin_regex() -> &'static Regex {
    static BEGIN: OnceLock<Regex> = OnceLock::new();
    BEGIN.get_or_init(|| Regex::new(r"(?im)^\s*BEGIN").expect("Invalid BEGIN regex"))
}

fn data_block_regex() -> &'static Regex {
    static DATA: OnceLock<Regex> = OnceLock::new();
    DATA.get_or_init(|| Regex::new(r"(?i)\A\s*data").expect("Invalid DATA regex"))
}

/// Returns true if the content starts with `#NEXUS` (after optional whitespace).
pub fn has_nexus_signature(content: &str) -> bool {
    signature_regex().is_match(content)
}

/// Splits a document into block bodies, one per line-anchored `BEGIN`.
///
/// Everything before the first `BEGIN` (the `#NEXUS` declaration and any
/// top-level comments) is dropped. Each body starts right after the keyword,
/// so `BEGIN DATA;` yields a body starting with ` DATA;`.
pub fn split_blocks(content: &str) -> Vec<&str> {
    begin_regex().split(content).skip(1).collect()
}

/// Finds the body of the single DATA block of a NEXUS document.
pub fn find_data_block(content: &str) -> NexusResult<&str> {
    if !has_nexus_signature(content) {
        return Err(NexusError::NotNexus);
    }

    let blocks = split_blocks(content);
    let data_blocks: Vec<&str> = blocks
        .iter()
        .copied()
        .filter(|body| data_block_regex().is_match(body))
        .collect();
    debug!(
        "found {} block(s), {} of them DATA",
        blocks.len(),
        data_blocks.len()
    );

    match data_blocks.as_slice() {
        [body] => Ok(*body),
        _ => Err(NexusError::NoSingleDataBlock {
            found: data_blocks.len(),
        }),
    }
}
