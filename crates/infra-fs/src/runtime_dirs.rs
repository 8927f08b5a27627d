// RuntimeDirs implementation backed by configuration

use std::path::PathBuf;

use pidguard_core::port::RuntimeDirs;
use pidguard_core::{GuardError, Result};

/// Runtime-state directory resolved once from a configured path
///
/// A leading `~` is expanded against the current user's home directory.
pub struct FixedRuntimeDirs {
    state_dir: PathBuf,
}

impl FixedRuntimeDirs {
    pub fn new(configured: &str) -> Result<Self> {
        if configured.trim().is_empty() {
            return Err(GuardError::Config(
                "state directory must not be empty".to_string(),
            ));
        }
        let expanded = shellexpand::tilde(configured);
        Ok(Self {
            state_dir: PathBuf::from(expanded.as_ref()),
        })
    }
}

impl RuntimeDirs for FixedRuntimeDirs {
    fn state_dir(&self) -> Result<PathBuf> {
        Ok(self.state_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_absolute_paths_through() {
        let dirs = FixedRuntimeDirs::new("/var/run/workers").unwrap();
        assert_eq!(dirs.state_dir().unwrap(), PathBuf::from("/var/run/workers"));
    }

    #[test]
    fn expands_leading_tilde() {
        let dirs = FixedRuntimeDirs::new("~/run").unwrap();
        let resolved = dirs.state_dir().unwrap();
        assert!(!resolved.to_string_lossy().starts_with('~'));
        assert!(resolved.ends_with("run"));
    }

    #[test]
    fn rejects_empty_configuration() {
        for empty in ["", "   "] {
            assert!(matches!(
                FixedRuntimeDirs::new(empty),
                Err(GuardError::Config(_))
            ));
        }
    }
}
