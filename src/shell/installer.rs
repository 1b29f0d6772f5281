/// Integration installer
///
/// Stages the shell integration script into `~/.zc/share` and appends a
/// `source` line for it to the shell's startup file.

use crate::config::InstallConfig;
use crate::error::{Result, ZcError};
use crate::shell::{Shell, ShellDetector};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a successful install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub shell: Shell,
    pub staged_script: PathBuf,
    pub rc_file: PathBuf,
    /// The `source ...` line that was appended
    pub activation: String,
}

impl InstallReport {
    /// Line shown to the user, the activation only applies to new sessions
    pub fn confirmation(&self) -> String {
        format!("run command `{}` to activate environment", self.activation)
    }
}

/// Installer
pub struct Installer {
    config: InstallConfig,
    config_dir: PathBuf,
}

impl Installer {
    /// Create a new installer from explicit inputs
    pub fn new(config: InstallConfig) -> Self {
        let config_dir = config.home.join(".zc").join("share");
        Self { config, config_dir }
    }

    /// Directory the integration scripts are staged into
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Run the whole install: detect, prepare, stage, register
    ///
    /// Shell detection runs first, so an unsupported shell leaves the
    /// filesystem untouched. Reinstalling appends the activation line again.
    ///
    /// # Returns
    /// * `Ok(InstallReport)` - Everything was written
    /// * `Err(ZcError)` - The first step that failed; earlier steps are not rolled back
    pub fn install(&self) -> Result<InstallReport> {
        let shell = ShellDetector::detect_from(self.config.shell.as_deref())?;

        self.ensure_config_dir()?;
        let staged_script = self.stage_script(shell)?;
        let (rc_file, activation) = self.register_activation(shell, &staged_script)?;

        info!(%shell, rc_file = %rc_file.display(), "zc integration installed");

        Ok(InstallReport {
            shell,
            staged_script,
            rc_file,
            activation,
        })
    }

    /// Create the config directory and any missing parents
    pub fn ensure_config_dir(&self) -> Result<()> {
        if self.config_dir.is_dir() {
            debug!(dir = %self.config_dir.display(), "config directory already present");
            return Ok(());
        }

        fs::create_dir_all(&self.config_dir)?;
        debug!(dir = %self.config_dir.display(), "created config directory");
        Ok(())
    }

    /// Copy `zc.<shell>` from the source directory into the config directory
    ///
    /// An existing staged script is overwritten. Copying a file onto itself
    /// is refused, `fs::copy` would truncate it first.
    pub fn stage_script(&self, shell: Shell) -> Result<PathBuf> {
        let filename = shell.script_filename();
        let source = self.config.source_dir.join(&filename);
        let dest = self.config_dir.join(&filename);

        if dest.exists() && fs::canonicalize(&source)? == fs::canonicalize(&dest)? {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} and {} are the same file", source.display(), dest.display()),
            )
            .into());
        }

        fs::copy(&source, &dest)?;
        debug!(from = %source.display(), to = %dest.display(), "staged integration script");

        Ok(dest)
    }

    /// Append the activation line for `script` to the shell's startup file
    ///
    /// The startup file is created if missing, but its parent directory is
    /// not. No check is made for an existing identical line.
    ///
    /// # Returns
    /// * `Ok((rc_file, activation))` - The startup file and the appended line
    /// * `Err(ZcError::Registration)` - If the startup file could not be written
    pub fn register_activation(&self, shell: Shell, script: &Path) -> Result<(PathBuf, String)> {
        let rc_file = shell.rc_file_path(&self.config.home);
        let activation = shell.activation_line(script);

        append_line(&rc_file, &activation).map_err(|source| ZcError::Registration {
            rc_file: rc_file.clone(),
            source,
        })?;
        debug!(rc_file = %rc_file.display(), line = %activation, "appended activation line");

        Ok((rc_file, activation))
    }
}

/// Append `line` to `path`, starting a new line if the file doesn't end with one
fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let needs_newline = match fs::read(path) {
        Ok(content) => !content.is_empty() && !content.ends_with(b"\n"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(e),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_newline {
        writeln!(file)?;
    }
    writeln!(file, "{}", line)
}
