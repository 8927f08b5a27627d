// Application Layer - Use Cases and Business Logic

pub mod guard;

// Re-exports
pub use guard::ProcessGuard;
