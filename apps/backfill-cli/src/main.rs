// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Command-Line Interface
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Command-line front end for the backfill plant calculator.
//!
//! Every command evaluates the engine once per parameter set; there is no
//! watch mode and no state between invocations other than files the user
//! asks for.

mod commands;
mod format;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Backfill plant sizing calculator
#[derive(Parser)]
#[command(name = "backfill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mine backfill plant sizing calculator", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print all plant results
    Compute(commands::compute::ComputeArgs),
    /// Print the reference plant parameter set as JSON
    Defaults,
    /// Write a timestamped export document
    Export(commands::export::ExportArgs),
    /// Save the parameter set and display theme
    Save(commands::save::SaveArgs),
    /// Sweep one parameter and tabulate selected results
    Scan(commands::scan::ScanArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so JSON output on stdout stays machine-readable.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Compute(args) => commands::compute::execute(args),
        Commands::Defaults => commands::defaults::execute(),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Save(args) => commands::save::execute(args),
        Commands::Scan(args) => commands::scan::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backfill_types::config::Theme;

    #[test]
    fn test_parse_compute_with_overrides() {
        let cli = Cli::try_parse_from([
            "backfill", "compute", "--set", "z=2", "--set", "q=60", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Compute(args) => {
                assert_eq!(args.input.set, vec!["z=2", "q=60"]);
                assert!(args.json);
                assert!(args.input.params.is_none());
            }
            _ => panic!("expected compute"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_parse_global_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["backfill", "defaults", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Commands::Defaults));
    }

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from([
            "backfill", "scan", "--param", "q", "--min", "10", "--max", "100", "--steps", "4",
            "-r", "D", "-r", "Qj",
        ])
        .unwrap();
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.param, "q");
                assert_eq!(args.steps, 4);
                assert_eq!(args.results, vec!["D", "Qj"]);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_parse_save_theme() {
        let cli = Cli::try_parse_from(["backfill", "save", "--out", "cfg.json", "--theme", "dark"])
            .unwrap();
        match cli.command {
            Commands::Save(args) => assert_eq!(args.theme, Theme::Dark),
            _ => panic!("expected save"),
        }
        assert!(Cli::try_parse_from(["backfill", "save", "--out", "x", "--theme", "blue"]).is_err());
    }

    #[test]
    fn test_scan_requires_param() {
        assert!(Cli::try_parse_from(["backfill", "scan", "--min", "0", "--max", "1"]).is_err());
    }
}
