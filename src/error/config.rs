//! Configuration errors

use std::path::Path;

use super::RulepackError;

/// Creates a configuration read error
pub fn read_failed(path: &Path, err: &std::io::Error) -> RulepackError {
    RulepackError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a configuration parse error
pub fn parse_failed(path: &Path, err: &serde_yaml::Error) -> RulepackError {
    RulepackError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> RulepackError {
    RulepackError::ConfigInvalid {
        message: message.into(),
    }
}
