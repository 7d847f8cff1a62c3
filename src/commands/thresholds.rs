//! Thresholds command implementation

use crate::cli::args::{OutputFormat, ThresholdsArgs};
use crate::cli::output::{print_output, ThresholdEntry, ThresholdList};
use crate::domain::MonitoringMode;
use crate::error::Result;

/// Execute the thresholds command
pub fn run_thresholds(args: &ThresholdsArgs, format: OutputFormat) -> Result<()> {
    match args.mode {
        Some(mode) => print_output(&ThresholdEntry::from(MonitoringMode::from(mode)), format)?,
        None => {
            let list = ThresholdList {
                profiles: MonitoringMode::ALL.into_iter().map(ThresholdEntry::from).collect(),
            };
            print_output(&list, format)?;
        }
    }

    Ok(())
}
