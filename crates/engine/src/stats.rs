use crate::error::EngineError;
use crate::input::InputSource;
use crate::options::Metric;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Per-input counters. Fields for metrics that were not requested stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FileCounts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub bytes: usize,
}

impl FileCounts {
    pub const fn get(&self, metric: Metric) -> usize {
        match metric {
            Metric::Lines => self.lines,
            Metric::Words => self.words,
            Metric::Chars => self.chars,
            Metric::Bytes => self.bytes,
        }
    }

    /// Largest of the four counters, whether requested or not.
    pub fn max_value(&self) -> usize {
        self.lines.max(self.words).max(self.chars).max(self.bytes)
    }
}

impl Add for FileCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
            chars: self.chars + rhs.chars,
            bytes: self.bytes + rhs.bytes,
        }
    }
}

impl AddAssign for FileCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for FileCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a FileCounts> for FileCounts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Counts for one successfully processed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    /// Position of the input on the command line.
    pub index: usize,
    pub input: InputSource,
    pub counts: FileCounts,
}

/// An input that could not be loaded or counted.
#[derive(Debug, Error)]
#[error("{}: {}", .input.display_name(), .cause)]
pub struct FileError {
    pub index: usize,
    pub input: InputSource,
    #[source]
    pub cause: EngineError,
}

/// Outcome for a single input: counts or a file-scoped error, never both.
pub type FileResult = std::result::Result<FileStats, FileError>;

/// Every [`FileResult`] of a finished run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub results: Vec<FileResult>,
}

impl RunResult {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn stats(&self) -> impl Iterator<Item = &FileStats> {
        self.results.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &FileError> {
        self.results.iter().filter_map(|r| r.as_ref().err())
    }

    /// Puts results back into command-line order.
    pub fn sort_by_input(&mut self) {
        self.results.sort_by_key(result_index);
    }
}

/// Command-line position of the input a result belongs to.
pub fn result_index(result: &FileResult) -> usize {
    match result {
        Ok(stats) => stats.index,
        Err(err) => err.index,
    }
}
