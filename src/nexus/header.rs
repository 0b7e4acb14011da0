//! DATA block header parsing: `MATRIX` split, dimensions and layout.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use super::matrix::{parse_interleaved_matrix, parse_matrix};
use super::{NexusData, NexusError, NexusResult};
use crate::model::Dimensions;

fn matrix_regex() -> &'static Regex {
    static MATRIX: OnceLock<Regex> = OnceLock::new();
    MATRIX.get_or_init(|| Regex::new(r"(?im)^\s*MATRIX").expect("Invalid MATRIX regex"))
}

fn ntax_regex() -> &'static Regex {
    static NTAX: OnceLock<Regex> = OnceLock::new();
    NTAX.get_or_init(|| Regex::new(r"(?i)ntax=(\d+)").expect("Invalid NTAX regex"))
}

fn nchar_regex() -> &'static Regex {
    static NCHAR: OnceLock<Regex> = OnceLock::new();
    NCHAR.get_or_init(|| Regex::new(r"(?i)nchar=(\d+)").expect("Invalid NCHAR regex"))
}

fn interleave_regex() -> &'static Regex {
    static INTERLEAVE: OnceLock<Regex> = OnceLock::new();
    INTERLEAVE.get_or_init(|| Regex::new(r"(?i)interleave").expect("Invalid INTERLEAVE regex"))
}

/// Splits a DATA block body into its header text and its matrix text.
///
/// Exactly one line-anchored `MATRIX` keyword must be present.
pub fn split_matrix(block: &str) -> NexusResult<(&str, &str)> {
    let parts: Vec<&str> = matrix_regex().split(block).collect();
    match parts.as_slice() {
        [header, matrix] => Ok((*header, *matrix)),
        _ => Err(NexusError::NoSingleMatrix {
            found: parts.len().saturating_sub(1),
        }),
    }
}

/// Extracts `ntax` and `nchar` from header text. Missing fields stay `None`.
pub fn parse_dimensions(header: &str) -> NexusResult<Dimensions> {
    Ok(Dimensions {
        ntax: extract_count(header, ntax_regex(), "NTAX")?,
        nchar: extract_count(header, nchar_regex(), "NCHAR")?,
    })
}

/// Returns true if the header announces an interleaved matrix.
pub fn is_interleaved(header: &str) -> bool {
    interleave_regex().is_match(header)
}

fn extract_count(header: &str, regex: &Regex, field: &'static str) -> NexusResult<Option<usize>> {
    let Some(caps) = regex.captures(header) else {
        return Ok(None);
    };
    let digits = &caps[1];
    digits
        .parse::<usize>()
        .map(Some)
        .map_err(|_| NexusError::InvalidDimension {
            field,
            value: digits.to_string(),
        })
}

/// Parses a DATA block body into dimensions and entries.
pub fn parse_data_block(block: &str) -> NexusResult<NexusData> {
    let (header, matrix) = split_matrix(block)?;
    let dimensions = parse_dimensions(header)?;
    debug!(
        "DATA block dimensions: ntax={:?} nchar={:?}",
        dimensions.ntax, dimensions.nchar
    );

    let entries = if is_interleaved(header) {
        parse_interleaved_matrix(matrix, &dimensions)?
    } else {
        parse_matrix(matrix, &dimensions)?
    };

    Ok(NexusData {
        dimensions,
        entries,
    })
}
