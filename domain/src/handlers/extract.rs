//! Digit-run extraction shared by the numeric handlers
//!
//! Extraction is not sign-aware: "5-2" yields `["5", "2"]` and "-3" yields
//! `["3"]`. Callers keep the raw strings because some checks compare the
//! literal text (the `/` guard tests for the string `"0"`).

use crate::core::error::DomainError;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// All maximal runs of ASCII digits, in order of appearance
pub fn digit_runs(text: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Parse a digit run as an integer
pub fn parse_int(run: &str) -> Result<i64, DomainError> {
    Ok(run.parse::<i64>()?)
}

/// Digit runs as floats; every run parses, however long
pub fn numbers(text: &str) -> Vec<f64> {
    digit_runs(text)
        .into_iter()
        .filter_map(|run| run.parse::<f64>().ok())
        .collect()
}

/// First integer in the text, or `default` when there is none
pub fn first_int_or(text: &str, default: i64) -> Result<i64, DomainError> {
    match digit_runs(text).first() {
        Some(run) => parse_int(run),
        None => Ok(default),
    }
}
