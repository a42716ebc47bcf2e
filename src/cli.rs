// src/cli.rs

//! CLI argument parsing using `clap`.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::ContentKind;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pookie-rotation",
    version,
    about = "Show the deterministic daily and weekly couple content for a date.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Rotation.toml` is used when present, otherwise defaults.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `POOKIE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Today's tasks or messages.
    Daily {
        #[command(flatten)]
        target: Target,

        /// What to select.
        #[arg(long, value_enum, default_value = "tasks")]
        kind: ContentKind,
    },
    /// This week's tasks.
    Weekly {
        #[command(flatten)]
        target: Target,
    },
    /// Load config and pools, print a summary, select nothing.
    Check,
}

#[derive(Debug, Clone, Args)]
pub struct Target {
    /// SAME_HOME, DAILY_IN_PERSON (or DAILY_IRL), LONG_DISTANCE.
    #[arg(long, value_name = "MODE")]
    pub mode: String,

    /// Date to select for (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Override the configured item count (per category for messages).
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_messages_with_date_parses() {
        let args = CliArgs::try_parse_from([
            "pookie-rotation",
            "daily",
            "--mode",
            "LONG_DISTANCE",
            "--kind",
            "messages",
            "--date",
            "2025-03-01",
        ])
        .unwrap();
        match args.command {
            Command::Daily { target, kind } => {
                assert_eq!(kind, ContentKind::Messages);
                assert_eq!(target.date, NaiveDate::from_ymd_opt(2025, 3, 1));
                assert_eq!(target.mode, "LONG_DISTANCE");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "pookie-rotation",
            "check",
            "--config",
            "deploy/Rotation.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("deploy/Rotation.toml"));
        assert!(matches!(args.command, Command::Check));
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(
            CliArgs::try_parse_from(["pookie-rotation", "weekly", "--mode", "SAME_HOME", "--date", "June 5"])
                .is_err()
        );
    }
}
