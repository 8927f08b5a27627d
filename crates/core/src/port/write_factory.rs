// Write Factory Port
// Create-or-truncate writers for record files

use std::path::Path;

use crate::Result;

/// An open write handle onto a record file.
///
/// The underlying resource is released when the handle is dropped, on
/// success and failure alike. Implementations must not buffer past drop.
pub trait RecordWrite {
    /// Write the full record content.
    ///
    /// # Errors
    /// Fails on any IO error (e.g. disk full). The handle is still
    /// released normally by the caller dropping it.
    fn write(&mut self, content: &str) -> Result<()>;
}

/// Factory for record write handles.
pub trait WriteFactory: Send + Sync {
    /// Open `path` for writing, creating the file if absent and
    /// truncating any previous content.
    ///
    /// # Errors
    /// Fails when the file cannot be created or opened for writing.
    fn create(&self, path: &Path) -> Result<Box<dyn RecordWrite>>;
}
