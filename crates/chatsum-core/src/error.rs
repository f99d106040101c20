//! Error types and exit codes for chatsum
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage error (bad flags/args, invalid configuration)
//! - 2: I/O or decode failure on a requested file or folder

use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Usage error - bad flags/args or config (1)
    Usage = 1,
    /// I/O or decode failure (2)
    Io = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading and summarizing transcripts
#[derive(Error, Debug)]
pub enum ChatsumError {
    // Usage errors (exit code 1)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // I/O errors (exit code 2)
    #[error("no such file or directory: {path:?}")]
    NotFound { path: PathBuf },

    #[error("not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not valid UTF-8 (invalid byte sequence at offset {offset})")]
    Decode { path: PathBuf, offset: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatsumError {
    /// Create an error for a failed read, classifying missing paths separately
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ChatsumError::NotFound { path }
        } else {
            ChatsumError::Io { path, source }
        }
    }

    /// Create an error for an invalid configuration file
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ChatsumError::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ChatsumError::UsageError(_) | ChatsumError::InvalidConfig { .. } => ExitCode::Usage,

            ChatsumError::NotFound { .. }
            | ChatsumError::NotADirectory { .. }
            | ChatsumError::Io { .. }
            | ChatsumError::Decode { .. }
            | ChatsumError::Json(_) => ExitCode::Io,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ChatsumError::UsageError(_) => "usage_error",
            ChatsumError::InvalidConfig { .. } => "invalid_config",
            ChatsumError::NotFound { .. } => "not_found",
            ChatsumError::NotADirectory { .. } => "not_a_directory",
            ChatsumError::Io { .. } => "io_error",
            ChatsumError::Decode { .. } => "decode_error",
            ChatsumError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for chatsum operations
pub type Result<T> = std::result::Result<T, ChatsumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = ChatsumError::io(
            "missing.txt",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, ChatsumError::NotFound { .. }));
        assert_eq!(err.exit_code(), ExitCode::Io);
    }

    #[test]
    fn test_permission_denied_stays_io() {
        let err = ChatsumError::io(
            "locked.txt",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ChatsumError::Io { .. }));
        assert_eq!(err.exit_code(), ExitCode::Io);
    }

    #[test]
    fn test_usage_and_config_exit_code_1() {
        assert_eq!(
            ChatsumError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ChatsumError::invalid_config("c.toml", "top_n must be positive").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(i32::from(ExitCode::Usage), 1);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = ChatsumError::Decode {
            path: PathBuf::from("bad.txt"),
            offset: 4,
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "decode_error");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("offset 4"));
    }
}
