//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::MonitoringMode;
use chrono::{DateTime, FixedOffset};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Cat health alert engine
///
/// Evaluate a litter-box visit history for weight and frequency alerts.
#[derive(Parser, Debug)]
#[command(name = "litterwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LITTERWATCH_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a visit history and print alerts
    Evaluate(EvaluateArgs),

    /// Show threshold profiles
    Thresholds(ThresholdsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the evaluate command
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// JSON file holding the visit records
    #[arg(long, value_name = "FILE")]
    pub visits: Option<String>,

    /// Monitoring mode (strict, standard, kitten); unknown values fall back to standard
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Cat name used in alert messages
    #[arg(short, long)]
    pub name: Option<String>,

    /// Evaluate as of this RFC 3339 timestamp instead of the current time
    #[arg(long, value_parser = parse_timestamp)]
    pub now: Option<DateTime<FixedOffset>>,
}

/// Arguments for the thresholds command
#[derive(Parser, Debug)]
pub struct ThresholdsArgs {
    /// Only show this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Monitoring mode argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    /// Tightest thresholds
    Strict,
    /// Adult cat defaults
    Standard,
    /// Loose thresholds for kittens
    Kitten,
}

impl From<ModeArg> for MonitoringMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Strict => MonitoringMode::Strict,
            ModeArg::Standard => MonitoringMode::Standard,
            ModeArg::Kitten => MonitoringMode::Kitten,
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value).map_err(|e| format!("expected RFC 3339 timestamp: {}", e))
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
