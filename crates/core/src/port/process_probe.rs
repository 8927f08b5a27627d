// Process Probe Port
// Asks the host OS whether a PID is currently alive

use crate::domain::ProcessId;

/// Process-table liveness query.
///
/// Implementations answer "does a process with this ID exist right now",
/// not "is it healthy". A probe never fails; an unanswerable query means
/// the process cannot be confirmed alive and reads as `false`.
pub trait ProcessProbe: Send + Sync {
    fn is_alive(&self, pid: ProcessId) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Mock probe with a fixed set of "alive" PIDs.
    ///
    /// Records every queried PID so tests can assert the probe was (or was
    /// not) consulted.
    pub struct MockProcessProbe {
        alive: Vec<ProcessId>,
        queried: Mutex<Vec<ProcessId>>,
    }

    impl MockProcessProbe {
        pub fn new(alive: Vec<ProcessId>) -> Self {
            Self {
                alive,
                queried: Mutex::new(Vec::new()),
            }
        }

        pub fn none_alive() -> Self {
            Self::new(Vec::new())
        }

        pub fn queried(&self) -> Vec<ProcessId> {
            self.queried.lock().unwrap().clone()
        }
    }

    impl ProcessProbe for MockProcessProbe {
        fn is_alive(&self, pid: ProcessId) -> bool {
            self.queried.lock().unwrap().push(pid);
            self.alive.contains(&pid)
        }
    }
}
