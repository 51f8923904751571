// crates/cli/src/args.rs
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use pwc_engine::options::{Metric, MetricSet};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "pwc",
    version = crate::VERSION,
    about = "Print newline, word, character and byte counts for each FILE",
    long_about = "Print newline, word, character and byte counts for each FILE, and a total \
                  line if more than one FILE is specified. With no FILE, or when FILE is -, \
                  read standard input. Files are counted in parallel; output order is not \
                  guaranteed unless --sequential is given."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Print the newline counts
    #[arg(short = 'l', long, help_heading = "Counts")]
    pub lines: bool,

    /// Print the word counts
    #[arg(short = 'w', long, help_heading = "Counts")]
    pub words: bool,

    /// Print the character counts
    #[arg(short = 'm', long, help_heading = "Counts")]
    pub chars: bool,

    /// Print the byte counts
    #[arg(short = 'c', long, help_heading = "Counts")]
    pub bytes: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'j', long, value_name = "N", help_heading = "Execution")]
    pub jobs: Option<NonZeroUsize>,

    /// Process inputs one at a time and print them in the order given
    #[arg(long, help_heading = "Execution")]
    pub sequential: bool,

    /// Count malformed UTF-8 as replacement characters instead of failing the file
    #[arg(long, help_heading = "Execution")]
    pub lossy: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Files to count; `-` or nothing means standard input
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}

impl Args {
    /// Requested metrics, defaulting to lines, words and bytes when no flag is set.
    pub fn metrics(&self) -> MetricSet {
        [
            (self.lines, Metric::Lines),
            (self.words, Metric::Words),
            (self.chars, Metric::Chars),
            (self.bytes, Metric::Bytes),
        ]
        .into_iter()
        .filter_map(|(on, metric)| on.then_some(metric))
        .collect::<MetricSet>()
        .or_default()
    }
}
