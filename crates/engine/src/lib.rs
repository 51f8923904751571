// crates/engine/src/lib.rs
pub mod aggregate;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod loader;
pub mod options;
pub mod pool;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::loader::{FsLoader, Loader};
use crate::options::ExecutionMode;
use crate::stats::RunResult;
use tracing::info;

/// Run the counting engine over `config.inputs` using the filesystem and stdin.
///
/// Returns a `RunResult` holding one result per input. Per-input failures
/// (missing files, unreadable files, malformed text) are carried inside it.
///
/// # Errors
///
/// Returns an error only if the worker pool cannot be created.
pub fn run(config: &Config) -> Result<RunResult> {
    run_with(config, &FsLoader)
}

/// Same as [`run`], reading inputs through `loader`.
///
/// # Errors
///
/// Returns an error only if the worker pool cannot be created.
pub fn run_with<L: Loader + ?Sized>(config: &Config, loader: &L) -> Result<RunResult> {
    let results = match config.mode {
        ExecutionMode::Sequential => pool::run_sequential(config, loader),
        ExecutionMode::Concurrent => pool::run_concurrent(config, loader)?,
    };
    let result = RunResult { results };

    info!(
        inputs = result.len(),
        failed = result.errors().count(),
        mode = ?config.mode,
        "run complete"
    );
    Ok(result)
}
