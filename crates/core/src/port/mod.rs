// Port Layer - Interfaces for external dependencies

pub mod identity;
pub mod process_probe;
pub mod runtime_dirs;
pub mod state_directory;
pub mod write_factory;

// Re-exports
pub use identity::{ProcessIdentity, SystemProcessIdentity};
pub use process_probe::ProcessProbe;
pub use runtime_dirs::RuntimeDirs;
pub use state_directory::StateDirectory;
pub use write_factory::{RecordWrite, WriteFactory};
