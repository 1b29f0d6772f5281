/// Error types for zc
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Shell tags accepted by the installer, in the order they are reported
pub const SUPPORTED_SHELLS: &[&str] = &["zsh", "bash", "fish"];

/// Main error type for zc operations
#[derive(Error, Debug)]
pub enum ZcError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (directory creation, script staging, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// $SHELL unset or naming a shell outside the supported set
    #[error("Unsupported shell {}: just support {:?}", .0.as_deref().unwrap_or("<unset>"), SUPPORTED_SHELLS)]
    UnsupportedShell(Option<String>),

    /// Jump pattern could not be compiled
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Home directory could not be resolved
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Appending the activation line to the startup file failed
    #[error("Failed to register activation in {}: {source}", .rc_file.display())]
    Registration {
        rc_file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bad command-line usage
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for zc operations
pub type Result<T> = std::result::Result<T, ZcError>;

/// Convert ZcError to a user-friendly error message
impl ZcError {
    pub fn user_message(&self) -> String {
        match self {
            ZcError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            ZcError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            ZcError::UnsupportedShell(Some(shell)) => {
                format!(
                    "Shell '{}' is not supported. Supported shells: {}",
                    shell,
                    SUPPORTED_SHELLS.join(", ")
                )
            }
            ZcError::UnsupportedShell(None) => {
                format!(
                    "Could not detect shell. Please set $SHELL to one of: {}",
                    SUPPORTED_SHELLS.join(", ")
                )
            }
            ZcError::Pattern(e) => {
                format!("Could not build a search pattern. Details: {}", e)
            }
            ZcError::HomeDirNotFound => "Could not determine home directory".to_string(),
            ZcError::Registration { rc_file, source } => {
                format!(
                    "Could not add activation line to {}. Details: {}",
                    rc_file.display(),
                    source
                )
            }
            ZcError::InvalidArgument(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_shell_names_supported_set() {
        let err = ZcError::UnsupportedShell(Some("tcsh".to_string()));
        let msg = err.user_message();
        assert!(msg.contains("tcsh"));
        assert!(msg.contains("zsh, bash, fish"));

        let display = format!("{}", err);
        assert!(display.contains("just support"));
        assert!(display.contains("\"fish\""));
    }

    #[test]
    fn test_unset_shell_message() {
        let err = ZcError::UnsupportedShell(None);
        assert!(err.to_string().contains("<unset>"));
        assert!(err.user_message().contains("$SHELL"));
    }

    #[test]
    fn test_registration_display() {
        let err = ZcError::Registration {
            rc_file: PathBuf::from("/home/user/.bashrc"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/home/user/.bashrc"));
        assert!(err.user_message().contains("denied"));
    }
}
