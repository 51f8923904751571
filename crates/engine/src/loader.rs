use crate::error::Result;
use crate::input::InputSource;
use std::io::Read;

/// Reads an input fully into memory.
pub trait Loader: Send + Sync {
    fn load(&self, input: &InputSource) -> Result<Vec<u8>>;
}

/// Loader backed by the real filesystem and the process's stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl Loader for FsLoader {
    fn load(&self, input: &InputSource) -> Result<Vec<u8>> {
        match input {
            InputSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
            InputSource::Path(path) => Ok(std::fs::read(path)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_whole_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello world\nfoo\n").unwrap();
        let input = InputSource::Path(file.path().to_path_buf());

        let data = FsLoader.load(&input).unwrap();
        assert_eq!(data, b"hello world\nfoo\n");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = InputSource::Path(dir.path().join("missing.txt"));

        let err = FsLoader.load(&input).unwrap_err();
        match err {
            EngineError::Read { source } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = InputSource::Path(dir.path().to_path_buf());
        assert!(matches!(
            FsLoader.load(&input),
            Err(EngineError::Read { .. })
        ));
    }
}
