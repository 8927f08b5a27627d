// WriteFactory implementation over std::fs::File

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pidguard_core::port::{RecordWrite, WriteFactory};
use pidguard_core::Result;
use tracing::trace;

/// Opens record files in create-or-truncate mode
pub struct FsWriteFactory;

impl WriteFactory for FsWriteFactory {
    fn create(&self, path: &Path) -> Result<Box<dyn RecordWrite>> {
        let file = File::create(path)?;
        trace!(path = %path.display(), "Opened record file for writing");
        Ok(Box::new(FsRecordWrite { file }))
    }
}

/// Open file handle; the descriptor is closed when this drops
struct FsRecordWrite {
    file: File,
}

impl RecordWrite for FsRecordWrite {
    fn write(&mut self, content: &str) -> Result<()> {
        self.file.write_all(content.as_bytes())?;
        Ok(())
    }
}
