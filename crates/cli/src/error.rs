use std::path::PathBuf;

/// Gauge error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// FileModel manifest could not be decoded
    #[error("manifest error: {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// A rule id was registered twice
    #[error("duplicate rule: {0}")]
    DuplicateRule(String),

    /// A rule id was referenced but never registered
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using gauge Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No error-severity findings
    Success = 0,
    /// One or more error-severity findings
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. }
            | Error::Argument(_)
            | Error::Manifest { .. }
            | Error::DuplicateRule(_)
            | Error::UnknownRule(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
