// State Directory Port
// Read-side view of the runtime-state directory holding record files

use crate::Result;

/// Scoped read access to the runtime-state directory.
///
/// Paths are relative file names within the directory; implementations
/// must refuse anything that resolves outside it.
pub trait StateDirectory: Send + Sync {
    /// Check whether a record file exists.
    ///
    /// # Errors
    /// Fails on permission or other filesystem errors. "Cannot tell" is
    /// never collapsed into `false`.
    fn is_exist(&self, file_name: &str) -> Result<bool>;

    /// Read a record file as text.
    ///
    /// Returns `Ok(None)` when the file does not exist (including when it
    /// vanished after an existence check). All other failures are errors.
    fn read_file(&self, file_name: &str) -> Result<Option<String>>;
}
