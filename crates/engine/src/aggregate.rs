// crates/engine/src/aggregate.rs
use crate::stats::{FileCounts, FileResult};

/// Totals over a finished run. Errored inputs contribute nothing to `counts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub counts: FileCounts,
    /// Inputs processed, successful or not.
    pub inputs: usize,
    pub failed: usize,
}

impl RunTotals {
    pub fn from_results(results: &[FileResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, result| {
            acc.inputs += 1;
            match result {
                Ok(stats) => acc.counts += stats.counts,
                Err(_) => acc.failed += 1,
            }
            acc
        })
    }

    /// Width every numeric column is padded to.
    pub fn column_width(&self) -> usize {
        column_width(&self.counts)
    }

    /// A total line is only printed when more than one input was processed.
    pub const fn has_total_line(&self) -> bool {
        self.inputs > 1
    }
}

/// Decimal digits of `n`; zero has one digit.
pub const fn digit_count(n: usize) -> usize {
    match n.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Digits of the largest total counter, regardless of which metrics are shown.
pub fn column_width(totals: &FileCounts) -> usize {
    digit_count(totals.max_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::input::InputSource;
    use crate::stats::{FileError, FileStats};
    use std::path::PathBuf;

    fn ok(index: usize, lines: usize, words: usize, bytes: usize) -> FileResult {
        Ok(FileStats {
            index,
            input: InputSource::Path(PathBuf::from(format!("f{index}"))),
            counts: FileCounts {
                lines,
                words,
                chars: 0,
                bytes,
            },
        })
    }

    fn failed(index: usize) -> FileResult {
        Err(FileError {
            index,
            input: InputSource::Path(PathBuf::from("missing")),
            cause: EngineError::from(std::io::Error::from(std::io::ErrorKind::NotFound)),
        })
    }

    #[test]
    fn digit_count_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(usize::MAX), usize::MAX.to_string().len());
    }

    #[test]
    fn all_zero_totals_have_width_one() {
        let totals = RunTotals::from_results(&[ok(0, 0, 0, 0)]);
        assert_eq!(totals.column_width(), 1);
        assert_eq!(RunTotals::default().column_width(), 1);
    }

    #[test]
    fn errors_contribute_nothing() {
        let results = vec![ok(0, 2, 3, 16), failed(1), ok(2, 1, 1, 4)];
        let totals = RunTotals::from_results(&results);
        assert_eq!(totals.counts.lines, 3);
        assert_eq!(totals.counts.words, 4);
        assert_eq!(totals.counts.bytes, 20);
        assert_eq!(totals.inputs, 3);
        assert_eq!(totals.failed, 1);
        assert!(totals.has_total_line());
        assert_eq!(totals.column_width(), 2);
    }

    #[test]
    fn single_input_has_no_total_line() {
        let totals = RunTotals::from_results(&[failed(0)]);
        assert!(!totals.has_total_line());
        assert_eq!(totals.counts, FileCounts::default());
    }

    #[test]
    fn width_uses_inactive_counters_too() {
        let counts = FileCounts {
            lines: 1,
            words: 1,
            chars: 12_345,
            bytes: 3,
        };
        assert_eq!(column_width(&counts), 5);
    }
}
