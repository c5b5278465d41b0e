// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `stepplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepplan",
    version,
    about = "Order dependency-constrained steps and simulate their makespan.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the instruction file (newline-delimited step constraints).
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Stepplan.toml` in the current working directory is used
    /// when present; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Number of simulated worker slots (overrides `[schedule].workers`).
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Fixed cost added to every step (overrides `[schedule].base_cost`).
    #[arg(long, value_name = "N")]
    pub base_cost: Option<u64>,

    /// Parse + validate, print the step graph, but don't simulate.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
