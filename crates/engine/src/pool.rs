// crates/engine/src/pool.rs
//! Fixed-size worker pool.
//!
//! A dispatcher thread feeds an unbounded task queue; `worker_count` workers
//! drain it and push one result per input onto the results channel. Results
//! are only collected after every worker has returned.

use crate::config::Config;
use crate::error::Result;
use crate::input::{self, Task};
use crate::loader::Loader;
use crate::processor::process_input;
use crate::stats::FileResult;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, trace};

/// Processes `config.inputs` concurrently. Result order is unspecified.
///
/// # Errors
///
/// Returns an error only if the worker threads cannot be started.
/// Per-input failures are reported inside the returned results.
pub fn run_concurrent<L: Loader + ?Sized>(config: &Config, loader: &L) -> Result<Vec<FileResult>> {
    let workers = config.worker_count();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("pwc-worker-{i}"))
        .build()?;
    debug!(workers, inputs = config.inputs.len(), "starting worker pool");

    let (task_tx, task_rx) = crossbeam_channel::unbounded::<Task>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<FileResult>();

    std::thread::scope(|scope| {
        let inputs = config.inputs.as_slice();
        // task_tx moves into the dispatcher; the queue closes when it returns.
        scope.spawn(move || input::dispatch(inputs, &task_tx));

        pool.scope(|s| {
            for worker in 0..workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                s.spawn(move |_| drain(worker, &task_rx, &result_tx, config, loader));
            }
        });
    });

    // 全ワーカー終了後にのみ結果を回収する
    drop(result_tx);
    Ok(result_rx.into_iter().collect())
}

/// Processes `config.inputs` one after another, preserving input order.
pub fn run_sequential<L: Loader + ?Sized>(config: &Config, loader: &L) -> Vec<FileResult> {
    config
        .inputs
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, input)| process_input(Task { index, input }, config, loader))
        .collect()
}

fn drain<L: Loader + ?Sized>(
    worker: usize,
    tasks: &Receiver<Task>,
    results: &Sender<FileResult>,
    config: &Config,
    loader: &L,
) {
    let mut handled = 0usize;
    for task in tasks {
        if results.send(process_input(task, config, loader)).is_err() {
            break;
        }
        handled += 1;
    }
    trace!(worker, handled, "worker finished");
}
