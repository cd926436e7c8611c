//! File system errors

use std::path::Path;

use super::RulepackError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> RulepackError {
    RulepackError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read error from an IO error
pub fn read_failed(path: &Path, err: &std::io::Error) -> RulepackError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return not_found(path);
    }
    RulepackError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error from an IO error
pub fn write_failed(path: &Path, err: &std::io::Error) -> RulepackError {
    RulepackError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a directory listing error
pub fn dir_read_failed(path: &Path, reason: impl Into<String>) -> RulepackError {
    RulepackError::DirectoryReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
