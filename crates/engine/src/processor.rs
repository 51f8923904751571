use crate::config::Config;
use crate::counter;
use crate::input::Task;
use crate::loader::Loader;
use crate::stats::{FileError, FileResult, FileStats};
use tracing::{debug, warn};

/// Loads one input and counts it. Always yields exactly one result.
pub fn process_input<L: Loader + ?Sized>(task: Task, config: &Config, loader: &L) -> FileResult {
    let Task { index, input } = task;

    let outcome = loader
        .load(&input)
        .and_then(|data| counter::compute_stats(&data, config.metrics, config.decode));

    match outcome {
        Ok(counts) => {
            debug!(input = %input, ?counts, "counted input");
            Ok(FileStats {
                index,
                input,
                counts,
            })
        }
        Err(cause) => {
            warn!(input = %input, error = %cause, "failed to process input");
            Err(FileError {
                index,
                input,
                cause,
            })
        }
    }
}
