// StateDirectory implementation over a real directory

use std::fs;
use std::io;
use std::path::PathBuf;

use pidguard_core::port::StateDirectory;
use pidguard_core::{GuardError, Result};
use tracing::trace;

/// Read access scoped to one runtime-state directory
pub struct FsStateDirectory {
    root: PathBuf,
}

impl FsStateDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join a record file name onto the root, refusing anything that is
    /// not a plain single-component file name.
    fn scoped(&self, file_name: &str) -> Result<PathBuf> {
        let plain = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
        if !plain {
            return Err(GuardError::UnscopedPath(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }
}

impl StateDirectory for FsStateDirectory {
    fn is_exist(&self, file_name: &str) -> Result<bool> {
        let path = self.scoped(file_name)?;
        let exists = path.try_exists()?;
        trace!(path = %path.display(), exists = exists, "Record existence check");
        Ok(exists)
    }

    fn read_file(&self, file_name: &str) -> Result<Option<String>> {
        let path = self.scoped(file_name)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_SEQ: AtomicU64 = AtomicU64::new(0);

    fn create_test_dir(label: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "pidguard-fs-{label}-{}-{}",
            std::process::id(),
            TEST_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reports_existing_and_missing_records() {
        let dir = create_test_dir("exist");
        fs::write(dir.join("mailer.pid"), "11111").unwrap();
        let state_dir = FsStateDirectory::new(&dir);

        assert!(state_dir.is_exist("mailer.pid").unwrap());
        assert!(!state_dir.is_exist("other.pid").unwrap());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn reads_content_and_maps_missing_to_none() {
        let dir = create_test_dir("read");
        fs::write(dir.join("mailer.pid"), "11111\n").unwrap();
        let state_dir = FsStateDirectory::new(&dir);

        assert_eq!(
            state_dir.read_file("mailer.pid").unwrap(),
            Some("11111\n".to_string())
        );
        assert_eq!(state_dir.read_file("other.pid").unwrap(), None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_state_directory_reads_as_absent() {
        let dir = env::temp_dir().join(format!(
            "pidguard-fs-nodir-{}-{}",
            std::process::id(),
            TEST_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        let state_dir = FsStateDirectory::new(&dir);

        assert!(!state_dir.is_exist("mailer.pid").unwrap());
        assert_eq!(state_dir.read_file("mailer.pid").unwrap(), None);
    }

    #[test]
    fn rejects_names_escaping_the_directory() {
        let dir = create_test_dir("escape");
        let state_dir = FsStateDirectory::new(&dir);

        for bad in ["../outside.pid", "a/b.pid", "..", "", "a\\b.pid"] {
            let result = state_dir.is_exist(bad);
            assert!(
                matches!(result, Err(GuardError::UnscopedPath(_))),
                "expected {bad:?} to be rejected, got {result:?}"
            );
        }

        fs::remove_dir_all(&dir).unwrap();
    }
}
