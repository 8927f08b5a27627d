// Process Identity Port (for testability)

use crate::domain::ProcessId;

/// Own-PID provider interface (allows mocking in tests)
pub trait ProcessIdentity: Send + Sync {
    /// Process ID of the current process
    fn current_pid(&self) -> ProcessId;
}

/// System identity provider (production)
pub struct SystemProcessIdentity;

impl ProcessIdentity for SystemProcessIdentity {
    fn current_pid(&self) -> ProcessId {
        std::process::id() as ProcessId
    }
}
