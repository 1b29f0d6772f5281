/// Shell integration module
///
/// Handles shell detection and installation of the zc integration scripts.

pub mod installer;
pub mod shell_detector;

pub use installer::{InstallReport, Installer};
pub use shell_detector::{Shell, ShellDetector};
