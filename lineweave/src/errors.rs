use thiserror::Error;

/// Result type for reader operations
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors that can occur while reading or writing files.
///
/// Only two conditions are hard errors: eagerly collecting lines without a
/// path set, and I/O failures while touching a path the caller named
/// explicitly. Everything else (missing files during load, reload, lazy
/// iteration, or concatenation folds) degrades silently to empty results so
/// that callers can detect soft failures by checking emptiness or counts.
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("attempt to open unset/invalid path")]
    InvalidPath,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReaderError::InvalidPath;
        assert_eq!(err.to_string(), "attempt to open unset/invalid path");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ReaderError::from(io);
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ReaderError = io.into();
        assert!(matches!(err, ReaderError::Io(_)));
    }
}
