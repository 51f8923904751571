use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing file, permission denied, or an I/O failure mid-read.
    #[error("{source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("invalid UTF-8 sequence at byte {valid_up_to}")]
    Decode {
        valid_up_to: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<std::io::Error> for EngineError {
    fn from(source: std::io::Error) -> Self {
        Self::Read { source }
    }
}

impl From<std::str::Utf8Error> for EngineError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self::Decode {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
