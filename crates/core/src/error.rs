// Central Error Type for the Guard

use thiserror::Error;

/// Library-level error type
///
/// Filesystem and configuration failures are fatal and propagate unchanged;
/// the guard never maps them to "not running".
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path escapes the runtime-state directory: {0}")]
    UnscopedPath(String),
}

/// Result type alias using GuardError
pub type Result<T> = std::result::Result<T, GuardError>;
