//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::alerts::{Alert, ThresholdProfile};
use crate::cli::args::OutputFormat;
use crate::domain::MonitoringMode;
use crate::services::AlertReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Human-friendly age of an alert relative to `now`
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - created_at;
    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{}d ago", days)
    }
}

fn alert_row(alert: &Alert, now: DateTime<Utc>) -> String {
    format!(
        "  [{}] {} ({})\n    {}\n",
        alert.severity,
        alert.alert_type,
        format_relative(alert.created_at, now),
        alert.message
    )
}

impl TableDisplay for AlertReport {
    fn to_table(&self) -> String {
        let mut output = format!(
            "{} ({} mode)\n  Visits: {} from {}\n  Evaluated: {}\n\n",
            self.cat_name,
            self.mode,
            self.visit_count,
            self.source,
            self.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        if self.alerts.is_empty() {
            output.push_str("  No alerts\n");
            return output;
        }

        output.push_str(&format!("  Alerts: {}\n", self.alerts.len()));
        for alert in &self.alerts {
            output.push_str(&alert_row(alert, self.evaluated_at));
        }

        output
    }

    fn to_compact(&self) -> String {
        if self.alerts.is_empty() {
            return format!("{}: no alerts", self.cat_name);
        }

        let alerts = self
            .alerts
            .iter()
            .map(|a| format!("{}:{}", a.severity, a.alert_type))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", self.cat_name, alerts)
    }
}

/// One threshold profile for display
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdEntry {
    pub mode: MonitoringMode,
    pub thresholds: ThresholdProfile,
}

impl From<MonitoringMode> for ThresholdEntry {
    fn from(mode: MonitoringMode) -> Self {
        Self {
            mode,
            thresholds: *ThresholdProfile::for_mode(mode),
        }
    }
}

impl TableDisplay for ThresholdEntry {
    fn to_table(&self) -> String {
        let w = &self.thresholds.weight;
        let f = &self.thresholds.frequency;
        format!(
            "[{}]\n  Weight: urgent -{:.0}% / 48h, trend -{:.0}%, gain +{:.0}%\n  \
             Frequency: critical {} visits / 1h, high +{:.0}% over daily average, low after {}h\n",
            self.mode,
            w.urgent * 100.0,
            w.trend * 100.0,
            w.gain * 100.0,
            f.critical,
            f.high_percent * 100.0,
            f.low_hours
        )
    }

    fn to_compact(&self) -> String {
        let w = &self.thresholds.weight;
        let f = &self.thresholds.frequency;
        format!(
            "{}: urgent={} trend={} gain={} critical={} high={} low={}h",
            self.mode, w.urgent, w.trend, w.gain, f.critical, f.high_percent, f.low_hours
        )
    }
}

/// Threshold profiles for display
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdList {
    pub profiles: Vec<ThresholdEntry>,
}

impl TableDisplay for ThresholdList {
    fn to_table(&self) -> String {
        self.profiles
            .iter()
            .map(|p| p.to_table())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_compact(&self) -> String {
        self.profiles
            .iter()
            .map(|p| p.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
