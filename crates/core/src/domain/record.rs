// Worker identity records
//
// A record file holds the process ID of the single process allowed to run
// under a given worker name. The file name is always `<worker-name>.pid`.

use std::fmt;

use super::error::{DomainError, Result};

/// Extension appended to a worker name to form its record file name.
pub const RECORD_FILE_EXT: &str = ".pid";

/// OS-level process identifier as stored in record files.
///
/// Signed to match the platform process-table APIs; record contents that
/// parse to zero or a negative value are rejected as malformed.
pub type ProcessId = i32;

/// Validated worker name
///
/// A worker name doubles as the stem of its record file, so it must be a
/// plain single-component file name. Separators, NUL and the dot-directory
/// names are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkerName(String);

impl WorkerName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::EmptyWorkerName);
        }

        let path_like = name == "."
            || name == ".."
            || name.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
        if path_like {
            return Err(DomainError::UnsafeWorkerName(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this worker's record: `<name>.pid`
    pub fn record_file_name(&self) -> String {
        format!("{}{}", self.0, RECORD_FILE_EXT)
    }
}

impl fmt::Display for WorkerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse the content of a record file into a process ID.
///
/// Surrounding whitespace (including a trailing newline) is tolerated.
/// Anything that is not a positive decimal integer yields `None`; the
/// caller treats that as "no live claimant", never as an error.
pub fn parse_record_pid(content: &str) -> Option<ProcessId> {
    content.trim().parse::<ProcessId>().ok().filter(|pid| *pid > 0)
}
