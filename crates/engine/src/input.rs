// crates/engine/src/input.rs
use crossbeam_channel::Sender;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Positional argument that names standard input.
pub const STDIN_ARG: &str = "-";

/// One thing to count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Standard input; never printed as a path label.
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Path label for rendered count lines, `None` for stdin.
    pub fn label(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::Path(path) => Some(path),
        }
    }

    /// Name used in diagnostics, where stdin still needs a label.
    pub fn display_name(&self) -> Cow<'_, str> {
        match self {
            Self::Stdin => Cow::Borrowed(STDIN_ARG),
            Self::Path(path) => path.to_string_lossy(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == STDIN_ARG {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }
}

impl From<&str> for InputSource {
    fn from(path: &str) -> Self {
        Self::from(PathBuf::from(path))
    }
}

/// A unit of work on the queue: an input plus its position on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub index: usize,
    pub input: InputSource,
}

/// Turns command-line paths into inputs, defaulting to stdin when none are given.
pub fn resolve_inputs<I, P>(paths: I) -> Vec<InputSource>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let inputs: Vec<InputSource> = paths
        .into_iter()
        .map(|p| InputSource::from(p.into()))
        .collect();
    if inputs.is_empty() {
        vec![InputSource::Stdin]
    } else {
        inputs
    }
}

/// Pushes every input onto the work queue exactly once.
///
/// Returns the number of tasks queued. Stops early if every receiver is gone.
pub fn dispatch(inputs: &[InputSource], tx: &Sender<Task>) -> usize {
    let mut queued = 0;
    for (index, input) in inputs.iter().enumerate() {
        let task = Task {
            index,
            input: input.clone(),
        };
        if tx.send(task).is_err() {
            tracing::debug!(queued, "work queue closed before dispatch finished");
            break;
        }
        queued += 1;
    }
    queued
}
