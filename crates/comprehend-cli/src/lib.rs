/*
[INPUT]:  Public API exports for comprehend-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod args;
pub mod commands;
pub mod settings;

// Re-export main types for convenience
pub use args::{Cli, Command};
pub use commands::Decoded;
pub use settings::{Overrides, Settings};
