// Runtime Dirs Port
// Resolves the absolute runtime-state directory

use std::path::PathBuf;

use crate::Result;

/// Provider of the runtime-state directory absolute path.
pub trait RuntimeDirs: Send + Sync {
    /// Absolute path of the directory holding record files.
    ///
    /// # Errors
    /// Fails when the directory cannot be resolved from configuration.
    fn state_dir(&self) -> Result<PathBuf>;
}
