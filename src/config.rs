/// Runtime configuration
///
/// The only place that looks at the process environment. Everything else
/// takes these values as plain parameters.

use crate::error::{Result, ZcError};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Inputs of a single installer run
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Raw value of $SHELL, if set
    pub shell: Option<String>,
    /// User home directory
    pub home: PathBuf,
    /// Directory holding the `zc.<shell>` integration scripts
    pub source_dir: PathBuf,
}

impl InstallConfig {
    /// Resolve the installer inputs from $SHELL, the home directory and the cwd
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ZcError::HomeDirNotFound)?;

        Ok(Self {
            shell: shell_value(env::var_os("SHELL")),
            home,
            source_dir: env::current_dir()?,
        })
    }
}

// A set but non-UTF-8 $SHELL is kept (lossily) so it reports as unsupported, not unset
fn shell_value(raw: Option<OsString>) -> Option<String> {
    raw.map(|value| value.to_string_lossy().into_owned())
}

/// Settings for the jump database
#[derive(Debug, Clone)]
pub struct ZcConfig {
    pub db_path: PathBuf,
}

impl ZcConfig {
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ZcError::HomeDirNotFound)?;
        Ok(Self::with_home(home))
    }

    pub fn with_home(home: PathBuf) -> Self {
        Self {
            db_path: home.join(".config").join("rzc.db"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_value() {
        assert_eq!(shell_value(None), None);
        assert_eq!(
            shell_value(Some(OsString::from("/bin/zsh"))),
            Some("/bin/zsh".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_shell_is_unsupported_not_unset() {
        use crate::shell::ShellDetector;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/bin/\xffbash".to_vec());
        let shell = shell_value(Some(raw));
        assert!(shell.is_some());

        let err = ShellDetector::detect_from(shell.as_deref()).unwrap_err();
        assert!(matches!(err, ZcError::UnsupportedShell(Some(_))));
    }

    #[test]
    fn test_db_path_under_config() {
        let config = ZcConfig::with_home(PathBuf::from("/home/user"));
        assert_eq!(config.db_path, PathBuf::from("/home/user/.config/rzc.db"));
    }
}
