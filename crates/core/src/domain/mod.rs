// Domain Layer - Worker naming and identity records

pub mod error;
pub mod record;

// Re-exports
pub use error::DomainError;
pub use record::{parse_record_pid, ProcessId, WorkerName, RECORD_FILE_EXT};
