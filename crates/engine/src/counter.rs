// crates/engine/src/counter.rs
//! Single-pass counters over an in-memory buffer.
//!
//! Everything here is pure: no I/O, no shared state.

use crate::error::{EngineError, Result};
use crate::options::{DecodePolicy, MetricSet};
use crate::stats::FileCounts;

/// Computes the requested metrics for `data`. Metrics that were not requested stay zero.
///
/// # Errors
///
/// Returns [`EngineError::Decode`] when characters are requested, `data` is not
/// valid UTF-8, and `policy` is [`DecodePolicy::Strict`].
pub fn compute_stats(data: &[u8], metrics: MetricSet, policy: DecodePolicy) -> Result<FileCounts> {
    let mut counts = FileCounts::default();
    if metrics.bytes {
        counts.bytes = data.len();
    }
    if metrics.lines {
        counts.lines = count_lines(data);
    }
    if metrics.words {
        counts.words = count_words(data);
    }
    if metrics.chars {
        counts.chars = count_chars(data, policy)?;
    }
    Ok(counts)
}

/// `\n`-terminated segments, plus one for a non-empty unterminated tail.
pub fn count_lines(data: &[u8]) -> usize {
    let newlines = bytecount::count(data, b'\n');
    match data.last() {
        Some(&b) if b != b'\n' => newlines + 1,
        _ => newlines,
    }
}

/// Maximal runs of non-whitespace.
pub fn count_words(data: &[u8]) -> usize {
    // 不正なバイト列は U+FFFD（非空白）として扱う
    String::from_utf8_lossy(data).split_whitespace().count()
}

/// Decoded UTF-8 characters.
///
/// # Errors
///
/// Fails on malformed input under [`DecodePolicy::Strict`].
pub fn count_chars(data: &[u8], policy: DecodePolicy) -> Result<usize> {
    match std::str::from_utf8(data) {
        Ok(_) => Ok(bytecount::num_chars(data)),
        Err(err) => match policy {
            DecodePolicy::Strict => Err(EngineError::from(err)),
            DecodePolicy::Lossy => Ok(String::from_utf8_lossy(data).chars().count()),
        },
    }
}
