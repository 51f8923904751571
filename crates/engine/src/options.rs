// crates/engine/src/options.rs
/// A countable property of input content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Lines,
    Words,
    Chars,
    Bytes,
}

impl Metric {
    /// Column order used by every rendered line.
    pub const DISPLAY_ORDER: [Self; 4] = [Self::Lines, Self::Words, Self::Chars, Self::Bytes];
}

/// The set of metrics requested for a run.
///
/// `Default` is the classic `wc` selection: lines, words and bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct MetricSet {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
    pub bytes: bool,
}

impl MetricSet {
    pub const fn none() -> Self {
        Self {
            lines: false,
            words: false,
            chars: false,
            bytes: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            lines: true,
            words: true,
            chars: true,
            bytes: true,
        }
    }

    pub const fn is_empty(self) -> bool {
        !(self.lines || self.words || self.chars || self.bytes)
    }

    pub const fn contains(self, metric: Metric) -> bool {
        match metric {
            Metric::Lines => self.lines,
            Metric::Words => self.words,
            Metric::Chars => self.chars,
            Metric::Bytes => self.bytes,
        }
    }

    #[must_use]
    pub const fn with(mut self, metric: Metric) -> Self {
        match metric {
            Metric::Lines => self.lines = true,
            Metric::Words => self.words = true,
            Metric::Chars => self.chars = true,
            Metric::Bytes => self.bytes = true,
        }
        self
    }

    /// Falls back to the default selection when no metric was requested.
    #[must_use]
    pub fn or_default(self) -> Self {
        if self.is_empty() { Self::default() } else { self }
    }

    /// Active metrics in display order.
    pub fn active(self) -> impl Iterator<Item = Metric> {
        Metric::DISPLAY_ORDER
            .into_iter()
            .filter(move |m| self.contains(*m))
    }
}

impl Default for MetricSet {
    fn default() -> Self {
        Self {
            lines: true,
            words: true,
            chars: false,
            bytes: true,
        }
    }
}

impl FromIterator<Metric> for MetricSet {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// How inputs are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Fixed worker pool; output order is not guaranteed.
    #[default]
    Concurrent,
    /// One input after another on the calling thread; preserves input order.
    Sequential,
}

/// What character counting does with malformed UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Fail the input with a decode error.
    #[default]
    Strict,
    /// Count each malformed sequence as one replacement character.
    Lossy,
}
