//! Process Guard - single-instance enforcement through PID record files
//!
//! A worker name maps to one record file holding the PID of its claimant.
//! - is_running: is the recorded claimant alive in the process table?
//! - record_path: absolute path of a worker's record file
//! - record_self: claim a record file by writing our own PID
//!
//! Checking and claiming are separate calls with no lock between them;
//! concurrent claimants can interleave and the last writer wins. Records
//! are never deleted, only overwritten by the next claimant.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{parse_record_pid, WorkerName};
use crate::port::{ProcessIdentity, ProcessProbe, RuntimeDirs, StateDirectory, WriteFactory};
use crate::Result;

/// Guard deciding whether a named worker already has a live instance
pub struct ProcessGuard {
    state_dir: Arc<dyn StateDirectory>,
    write_factory: Arc<dyn WriteFactory>,
    runtime_dirs: Arc<dyn RuntimeDirs>,
    probe: Arc<dyn ProcessProbe>,
    identity: Arc<dyn ProcessIdentity>,
}

impl ProcessGuard {
    pub fn new(
        state_dir: Arc<dyn StateDirectory>,
        write_factory: Arc<dyn WriteFactory>,
        runtime_dirs: Arc<dyn RuntimeDirs>,
        probe: Arc<dyn ProcessProbe>,
        identity: Arc<dyn ProcessIdentity>,
    ) -> Self {
        Self {
            state_dir,
            write_factory,
            runtime_dirs,
            probe,
            identity,
        }
    }

    /// Check whether a live process currently holds `worker`'s record.
    ///
    /// A missing, vanished or malformed record reads as "not running"
    /// without touching the process table. Filesystem failures propagate;
    /// they are never collapsed into `false`.
    pub fn is_running(&self, worker: &WorkerName) -> Result<bool> {
        let file_name = worker.record_file_name();

        if !self.state_dir.is_exist(&file_name)? {
            debug!(worker = %worker, "No record file; worker not running");
            return Ok(false);
        }

        let Some(content) = self.state_dir.read_file(&file_name)? else {
            // Record vanished between the existence check and the read.
            debug!(worker = %worker, "Record file vanished; worker not running");
            return Ok(false);
        };

        let Some(pid) = parse_record_pid(&content) else {
            warn!(
                worker = %worker,
                content = %content.trim(),
                "Malformed record file; treating worker as not running"
            );
            return Ok(false);
        };

        let alive = self.probe.is_alive(pid);
        debug!(worker = %worker, pid = pid, alive = alive, "Probed recorded process");
        Ok(alive)
    }

    /// Absolute path of `worker`'s record file: `<state-dir>/<name>.pid`
    ///
    /// Purely derived; neither the file nor the directory needs to exist.
    pub fn record_path(&self, worker: &WorkerName) -> Result<PathBuf> {
        Ok(self
            .runtime_dirs
            .state_dir()?
            .join(worker.record_file_name()))
    }

    /// Claim `path` by writing our own PID as decimal text.
    ///
    /// Creates the file if absent, truncates it otherwise. The write
    /// handle is released on every exit path, including write failure.
    pub fn record_self(&self, path: &Path) -> Result<()> {
        let pid = self.identity.current_pid();

        let mut record = self.write_factory.create(path)?;
        record.write(&pid.to_string())?;

        info!(path = %path.display(), pid = pid, "Recorded own process ID");
        Ok(())
    }
}
