// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Worker name must not be empty")]
    EmptyWorkerName,

    #[error("Worker name is not a plain file-name component: {0:?}")]
    UnsafeWorkerName(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
