/// Shell detection logic
///
/// Detects which shell the user is running and provides shell-specific configuration paths.

use crate::error::{Result, ZcError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Supported shells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Zsh,
    Bash,
    Fish,
}

impl Shell {
    /// Every supported shell
    pub const ALL: [Shell; 3] = [Shell::Zsh, Shell::Bash, Shell::Fish];

    /// Get the shell tag as a string
    pub fn name(&self) -> &'static str {
        match self {
            Shell::Zsh => "zsh",
            Shell::Bash => "bash",
            Shell::Fish => "fish",
        }
    }

    /// Get the integration script file name for this shell
    pub fn script_filename(&self) -> String {
        format!("zc.{}", self.name())
    }

    /// Get the startup file for this shell under `home`
    ///
    /// zsh and bash read a dotfile named after the shell; fish reads its
    /// config from its own directory.
    pub fn rc_file_path(&self, home: &Path) -> PathBuf {
        match self {
            Shell::Zsh | Shell::Bash => home.join(format!(".{}rc", self.name())),
            Shell::Fish => home.join(".config").join("fish").join("config.fish"),
        }
    }

    /// Get the line that loads `script` into new sessions
    pub fn activation_line(&self, script: &Path) -> String {
        format!("source {}", script.display())
    }
}

impl FromStr for Shell {
    type Err = ZcError;

    /// Parse a shell tag. `sh` is taken as `bash`; nothing else is aliased.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zsh" => Ok(Shell::Zsh),
            "bash" | "sh" => Ok(Shell::Bash),
            "fish" => Ok(Shell::Fish),
            other => Err(ZcError::UnsupportedShell(Some(other.to_string()))),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shell detector
pub struct ShellDetector;

impl ShellDetector {
    /// Detect the shell from an explicit $SHELL value
    ///
    /// # Arguments
    /// * `shell_var` - Path of the shell executable, `None` when unset
    ///
    /// # Returns
    /// * `Ok(Shell)` - The detected shell
    /// * `Err(ZcError::UnsupportedShell)` - If unset or not zsh/bash/fish
    pub fn detect_from(shell_var: Option<&str>) -> Result<Shell> {
        let shell_path = shell_var.ok_or(ZcError::UnsupportedShell(None))?;

        let shell_name = Path::new(shell_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");

        if shell_name.is_empty() {
            return Err(ZcError::UnsupportedShell(Some(shell_path.to_string())));
        }

        let shell: Shell = shell_name.parse()?;
        debug!(shell_var = shell_path, %shell, "detected shell");
        Ok(shell)
    }
}
