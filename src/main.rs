// zc - jump to frequently used directories
//
// This is the main entry point. Parses CLI args and dispatches to handlers.
// Whatever lands on stdout is what the shell function cds into.

use std::env;
use std::path::Path;
use std::sync::Arc;
use zc_lib::{core::Jumper, logging, Database, Result, ZcConfig, ZcError};

/// What the user asked for
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Jump(Vec<String>),
    Add(String),
    Increase,
    Decrease,
    Purge,
    Stat,
    Help,
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let action = match parse_args(&args) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", e.user_message());
            print_usage();
            std::process::exit(2);
        }
    };

    match action {
        Action::Jump(needles) => handle_jump(&needles).await,
        Action::Add(path) => handle_update(|db| async move { db.increase(&path).await.map(|_| ()) }).await,
        Action::Increase => {
            let cwd = current_dir_string()?;
            handle_update(|db| async move { db.increase(&cwd).await.map(|_| ()) }).await
        }
        Action::Decrease => {
            let cwd = current_dir_string()?;
            handle_update(|db| async move { db.decrease(&cwd).await.map(|_| ()) }).await
        }
        Action::Purge => {
            handle_update(|db| async move {
                let removed = db.purge().await?;
                println!("Purged {} entries.", removed);
                Ok(())
            })
            .await
        }
        Action::Stat => handle_stat().await,
        Action::Version => {
            eprintln!("zc v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Action::Help => {
            print_usage();
            Ok(())
        }
    }
}

fn parse_args(args: &[String]) -> Result<Action> {
    let mut needles = Vec::new();
    let mut flags = Flags::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-a" | "--add" => {
                i += 1;
                let path = args.get(i).ok_or_else(|| {
                    ZcError::InvalidArgument("--add requires a PATH".to_string())
                })?;
                flags.add = Some(path.clone());
            }
            "-i" | "--increase" => flags.increase = true,
            "-d" | "--decrease" => flags.decrease = true,
            "--purge" => flags.purge = true,
            "-s" | "--stat" => flags.stat = true,
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ZcError::InvalidArgument(format!("Unknown option: {}", flag)));
            }
            needle => needles.push(needle.to_string()),
        }
        i += 1;
    }

    // precedence: help, version, jump, then the updates, then stat
    let action = if flags.help {
        Action::Help
    } else if flags.version {
        Action::Version
    } else if !needles.is_empty() {
        Action::Jump(needles)
    } else if let Some(path) = flags.add {
        Action::Add(path)
    } else if flags.increase {
        Action::Increase
    } else if flags.decrease {
        Action::Decrease
    } else if flags.purge {
        Action::Purge
    } else if flags.stat {
        Action::Stat
    } else {
        Action::Help
    };

    Ok(action)
}

#[derive(Default)]
struct Flags {
    add: Option<String>,
    increase: bool,
    decrease: bool,
    purge: bool,
    stat: bool,
    help: bool,
    version: bool,
}

async fn handle_jump(needles: &[String]) -> Result<()> {
    // nothing usable yet means stay where we are
    let target = match jump_target(needles).await {
        Ok(Some(path)) => path,
        Ok(None) => ".".to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "jump failed");
            ".".to_string()
        }
    };

    print!("{}", target);
    Ok(())
}

async fn jump_target(needles: &[String]) -> Result<Option<String>> {
    let config = ZcConfig::from_env()?;
    if !db_exists(&config.db_path) {
        return Ok(None);
    }

    let db = Arc::new(Database::new(&config.db_path).await?);
    let cwd = env::current_dir()?;
    let target = Jumper::new(db.clone()).jump(needles, &cwd).await;
    db.close().await;
    target
}

async fn handle_update<F, Fut>(update: F) -> Result<()>
where
    F: FnOnce(Database) -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let db = get_database().await?;
    let result = update(db.clone()).await;
    db.close().await;
    result
}

async fn handle_stat() -> Result<()> {
    let config = ZcConfig::from_env()?;
    if !db_exists(&config.db_path) {
        return Ok(());
    }

    let db = Database::new(&config.db_path).await?;
    print!("{}", db.stats_report().await?);
    db.close().await;
    Ok(())
}

async fn get_database() -> Result<Database> {
    let config = ZcConfig::from_env()?;
    Database::new(config.db_path).await
}

fn db_exists(path: &Path) -> bool {
    path.is_file()
}

fn current_dir_string() -> Result<String> {
    Ok(env::current_dir()?.display().to_string())
}

fn print_usage() {
    eprintln!(
        r#"zc v{} - jump around your most used directories

USAGE:
    zc [OPTIONS] [NEEDLE...]

OPTIONS:
    -a, --add PATH      Add PATH to the database with the default weight
    -i, --increase      Increase the weight of the current directory
    -d, --decrease      Decrease the weight of the current directory
    -s, --stat          Show the database, paths with their weights
        --purge         Remove non-existent paths from the database
    -h, --help          Print this help
    -v, --version       Show version information

With NEEDLEs, prints the best matching directory (or `.`).
Run `zc-install` from the directory holding zc.bash, zc.zsh and zc.fish
to hook zc into your shell."#,
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_needles() {
        assert_eq!(
            parse_args(&args(&["foo", "bar"])).unwrap(),
            Action::Jump(args(&["foo", "bar"]))
        );
    }

    #[test]
    fn test_needles_take_priority() {
        assert_eq!(
            parse_args(&args(&["-i", "foo"])).unwrap(),
            Action::Jump(args(&["foo"]))
        );
    }

    #[test]
    fn test_parse_flags() {
        assert_eq!(parse_args(&args(&["-i"])).unwrap(), Action::Increase);
        assert_eq!(parse_args(&args(&["--decrease"])).unwrap(), Action::Decrease);
        assert_eq!(parse_args(&args(&["--purge"])).unwrap(), Action::Purge);
        assert_eq!(parse_args(&args(&["-s"])).unwrap(), Action::Stat);
        assert_eq!(parse_args(&args(&["-v"])).unwrap(), Action::Version);
        assert_eq!(parse_args(&args(&[])).unwrap(), Action::Help);
        assert_eq!(
            parse_args(&args(&["-a", "/tmp"])).unwrap(),
            Action::Add("/tmp".to_string())
        );
    }

    #[test]
    fn test_flag_precedence() {
        assert_eq!(parse_args(&args(&["-s", "-d", "-i"])).unwrap(), Action::Increase);
        assert_eq!(parse_args(&args(&["--purge", "-s"])).unwrap(), Action::Purge);
        assert_eq!(parse_args(&args(&["foo", "-h"])).unwrap(), Action::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["-a"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
