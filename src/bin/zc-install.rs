// zc-install - hook zc into the current shell
//
// Run with no arguments from the directory holding zc.bash, zc.zsh and
// zc.fish. Copies the one matching $SHELL into ~/.zc/share and appends a
// `source` line for it to the shell's startup file.

use anyhow::Context;
use std::process;
use zc_lib::{
    logging,
    shell::{InstallReport, Installer},
    InstallConfig, ZcError,
};

fn main() {
    logging::init();

    let result = InstallConfig::from_env()
        .context("resolving install settings")
        .and_then(run);

    let (code, message) = outcome(&result);
    if code == 0 {
        println!("{}", message);
    } else {
        eprintln!("{}", message);
    }
    process::exit(code);
}

fn run(config: InstallConfig) -> anyhow::Result<InstallReport> {
    Ok(Installer::new(config).install()?)
}

/// Exit status and the line to print for an install result
fn outcome(result: &anyhow::Result<InstallReport>) -> (i32, String) {
    match result {
        Ok(report) => (0, report.confirmation()),
        Err(e) => {
            let message = match e.downcast_ref::<ZcError>() {
                Some(err) => err.user_message(),
                None => format!("{:#}", e),
            };
            (1, format!("✗ Install failed: {}", message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(temp: &TempDir, shell: Option<&str>) -> InstallConfig {
        let home = temp.path().join("home");
        let source_dir = temp.path().join("src");
        fs::create_dir_all(&home).unwrap();
        fs::create_dir_all(&source_dir).unwrap();
        fs::write(source_dir.join("zc.bash"), "z() { :; }\n").unwrap();

        InstallConfig {
            shell: shell.map(str::to_string),
            home,
            source_dir,
        }
    }

    #[test]
    fn test_success_prints_source_command() {
        let temp = TempDir::new().unwrap();
        let result = run(config(&temp, Some("/bin/bash")));

        let (code, message) = outcome(&result);
        let staged = temp.path().join("home/.zc/share/zc.bash");
        assert_eq!(code, 0);
        assert_eq!(
            message,
            format!("run command `source {}` to activate environment", staged.display())
        );
    }

    #[test]
    fn test_unsupported_shell_exits_nonzero() {
        let temp = TempDir::new().unwrap();
        let result = run(config(&temp, Some("/bin/tcsh")));

        let (code, message) = outcome(&result);
        assert_eq!(code, 1);
        assert!(message.contains("tcsh"));
        assert!(message.contains("zsh, bash, fish"));
    }

    #[test]
    fn test_registration_failure_exits_nonzero() {
        let temp = TempDir::new().unwrap();
        // ~/.config/fish doesn't exist, so config.fish can't be opened
        let cfg = config(&temp, Some("/usr/bin/fish"));
        fs::write(cfg.source_dir.join("zc.fish"), "function z; end\n").unwrap();

        let (code, message) = outcome(&run(cfg));
        assert_eq!(code, 1);
        assert!(message.contains("config.fish"));
    }
}
