mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use ieee_mac::Notation;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "macaddr")]
#[command(version, about = "Parse, find and convert MAC addresses", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.config/macaddr/config.yaml, then ./config.yaml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detected notation and every rendering of an address
    Show {
        /// MAC address (e.g., 00:11:22:33:44:55)
        mac: String,
    },
    /// Check whether each argument is a MAC address
    Check {
        /// Candidates to validate
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Convert an address to one notation
    Convert {
        /// MAC address in any notation
        mac: String,
        /// Target notation (unix, windows, cisco or bare)
        #[arg(long, short = 't')]
        to: Notation,
    },
    /// Find every MAC address in a file or stdin
    Find {
        /// File to scan, stdin when omitted
        file: Option<PathBuf>,
        /// Print a JSON array instead of one line per address
        #[arg(long)]
        json: bool,
    },
    /// Print the broadcast address in each notation
    Examples,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "macaddr=debug,ieee_mac=debug"
    } else {
        "macaddr=info,ieee_mac=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run one subcommand, false when the command should exit with a failure
fn run(out: &mut impl Write, config: &Config, command: Commands) -> Result<bool> {
    match command {
        Commands::Show { mac } => commands::show::handle(out, config, &mac)?,
        Commands::Check { candidates } => return commands::check::handle(out, &candidates),
        Commands::Convert { mac, to } => commands::convert::handle(out, config, &mac, to)?,
        Commands::Find { file, json } => {
            commands::find::handle(out, config, file.as_deref(), json)?
        }
        Commands::Examples => commands::examples::handle(out, config)?,
    }
    Ok(true)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let success = run(&mut out, &config, cli.command)?;
    out.flush()?;

    if success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(config: &Config, candidates: &[&str]) -> bool {
        let mut out = Vec::new();
        let command = Commands::Check {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        };
        run(&mut out, config, command).unwrap()
    }

    #[test]
    fn test_check_status() {
        let config = Config::default();
        assert!(check(&config, &["00:11:22:33:44:55"]));
        assert!(!check(&config, &["00:11:22:33:44:55", "00:11:22"]));
    }

    #[test]
    fn test_check_survives_broken_user_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "- some\n- other\n- tool\n").unwrap();

        let config = Config::load_implicit(Some(&path));
        assert!(check(&config, &["00:11:22:33:44:55"]));
    }

    #[test]
    fn test_other_commands_succeed() {
        let mut out = Vec::new();
        assert!(run(&mut out, &Config::default(), Commands::Examples).unwrap());

        let command = Commands::Convert {
            mac: "00:11:22:33:44:55".to_string(),
            to: Notation::Bare,
        };
        let mut out = Vec::new();
        assert!(run(&mut out, &Config::default(), command).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "001122334455\n");
    }

    #[test]
    fn test_invalid_address_is_an_error() {
        let command = Commands::Show {
            mac: "nope".to_string(),
        };
        let mut out = Vec::new();
        assert!(run(&mut out, &Config::default(), command).is_err());
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from(["macaddr", "check", "FFFF.FFFF.FFFF"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { .. }));
        assert!(Cli::try_parse_from(["macaddr", "convert", "x", "--to", "linux"]).is_err());
    }
}
