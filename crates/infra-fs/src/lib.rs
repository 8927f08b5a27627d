// Pidguard Infrastructure - Filesystem Adapter
// Implements: StateDirectory, WriteFactory, RuntimeDirs

mod runtime_dirs;
mod state_directory;
mod write_factory;

pub use runtime_dirs::FixedRuntimeDirs;
pub use state_directory::FsStateDirectory;
pub use write_factory::FsWriteFactory;
