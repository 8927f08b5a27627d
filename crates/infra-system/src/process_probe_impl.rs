// Process probe implementation
// reason: nix getpgid for POSIX process-table queries; sysinfo elsewhere

use pidguard_core::domain::ProcessId;
use pidguard_core::port::ProcessProbe;
use tracing::trace;

/// Process-table probe using the host OS
///
/// A PID counts as alive when the process table answers for it. Any
/// failure to query (gone, unreachable, different session) reads as
/// not alive.
pub struct SystemProcessProbe;

impl ProcessProbe for SystemProcessProbe {
    fn is_alive(&self, pid: ProcessId) -> bool {
        // getpgid(0) would answer for our own process group
        if pid <= 0 {
            return false;
        }
        let alive = probe_process_table(pid);
        trace!(pid = pid, alive = alive, "Process table queried");
        alive
    }
}

#[cfg(unix)]
fn probe_process_table(pid: ProcessId) -> bool {
    use nix::unistd::{getpgid, Pid};
    getpgid(Some(Pid::from_raw(pid))).is_ok()
}

#[cfg(not(unix))]
fn probe_process_table(pid: ProcessId) -> bool {
    use sysinfo::{Pid, System};
    let mut system = System::new();
    system.refresh_process(Pid::from_u32(pid as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_process_is_alive() {
        let pid = std::process::id() as ProcessId;
        assert!(SystemProcessProbe.is_alive(pid));
    }

    #[test]
    fn nonpositive_pids_are_not_alive() {
        assert!(!SystemProcessProbe.is_alive(0));
        assert!(!SystemProcessProbe.is_alive(-1));
    }

    #[cfg(unix)]
    #[test]
    fn exited_child_is_not_alive() {
        let mut child = std::process::Command::new("true").spawn().unwrap();
        let pid = child.id() as ProcessId;
        child.wait().unwrap();

        assert!(!SystemProcessProbe.is_alive(pid));
    }
}
