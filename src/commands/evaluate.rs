//! Evaluate command implementation
//!
//! Loads a visit history and prints the resulting alerts.

use crate::alerts::EvaluationClock;
use crate::cli::args::{EvaluateArgs, OutputFormat};
use crate::cli::output::print_output;
use crate::config::ConfigBuilder;
use crate::error::{AppError, Result};
use crate::services::AlertService;
use crate::source::JsonFileSource;

/// Execute the evaluate command
///
/// `config` already holds the file layer; the command's own flags go on top.
pub fn run_evaluate(
    args: &EvaluateArgs,
    format: OutputFormat,
    config: ConfigBuilder,
) -> Result<()> {
    let config = config
        .with_mode(args.mode.clone())
        .with_cat_name(args.name.clone())
        .with_visits_path(args.visits.clone())
        .build();

    let visits_path = config
        .monitor
        .visits_path
        .as_deref()
        .ok_or(AppError::NoVisitsPath)?;

    let clock = match args.now {
        Some(now) => EvaluationClock::from_fixed(now),
        None => EvaluationClock::system(),
    };

    let source = JsonFileSource::new(visits_path);
    let service = AlertService::new(source, config.monitor.to_evaluator());
    let report = service.run(&clock)?;

    print_output(&report, format)?;
    Ok(())
}
