/// zc library
///
/// Directory jumping by visit weight, plus the installer that wires the
/// shell integration into a user's startup file.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod logging;
pub mod shell;

// Re-exports for convenience
pub use config::{InstallConfig, ZcConfig};
pub use db::Database;
pub use error::{Result, ZcError};
