//! Visit frequency alert rules
//!
//! Independent of weight and baseline; these run on every evaluation.

use super::evaluator::RuleContext;
use super::types::{round_to, Alert, AlertType, TriggerData};
use crate::domain::Visit;
use chrono::{DateTime, Utc};

const BURST_WINDOW_HOURS: u32 = 1;
const AVERAGE_WINDOW_DAYS: u32 = 7;

/// Number of visits at or after `since`
pub fn count_since(visits: &[Visit], since: DateTime<Utc>) -> usize {
    visits.iter().filter(|v| v.entry_time >= since).count()
}

/// Average visits per day over the last `days` days
pub fn average_daily_visits(visits: &[Visit], ctx: &RuleContext<'_>, days: u32) -> f64 {
    count_since(visits, ctx.clock.days_ago(days)) as f64 / f64::from(days)
}

/// Run all frequency rules, in burst, high, low order
pub fn evaluate(visits: &[Visit], ctx: &RuleContext<'_>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    alerts.extend(check_burst(visits, ctx));
    alerts.extend(check_high_activity(visits, ctx));
    alerts.extend(check_low_activity(visits, ctx));

    alerts
}

/// Many visits within the last hour
pub fn check_burst(visits: &[Visit], ctx: &RuleContext<'_>) -> Option<Alert> {
    let threshold = ctx.thresholds.frequency.critical;
    let count = count_since(visits, ctx.clock.hours_ago(BURST_WINDOW_HOURS));
    log::debug!("{} visits in the last hour (threshold {})", count, threshold);

    if count < threshold as usize {
        return None;
    }

    let message = format!(
        "Emergency Alert: {} is visiting the box repeatedly in a very short time \
         ({} visits in 1 hour). This may indicate a life-threatening blockage.",
        ctx.cat_name, count
    );

    Some(Alert::new(
        AlertType::FrequencyCritical,
        message,
        TriggerData::VisitBurst {
            visit_count: count,
            timeframe: "1 hour".to_string(),
            threshold,
        },
        &ctx.clock,
    ))
}

/// More visits today than the 7-day daily average allows
pub fn check_high_activity(visits: &[Visit], ctx: &RuleContext<'_>) -> Option<Alert> {
    let avg_daily = average_daily_visits(visits, ctx, AVERAGE_WINDOW_DAYS);
    if avg_daily == 0.0 {
        return None;
    }

    let today_count = count_since(visits, ctx.clock.start_of_day());
    let limit = avg_daily * (1.0 + ctx.thresholds.frequency.high_percent);
    log::debug!(
        "{} visits today, daily average {:.1} (limit {:.1})",
        today_count,
        avg_daily,
        limit
    );

    if today_count as f64 <= limit {
        return None;
    }

    let increase_percent = (today_count as f64 - avg_daily) / avg_daily * 100.0;
    let message = format!(
        "{} is visiting the box more often than usual today ({} visits vs. {:.1} average). \
         Monitor for signs of discomfort or increased thirst.",
        ctx.cat_name, today_count, avg_daily
    );

    Some(Alert::new(
        AlertType::FrequencyHigh,
        message,
        TriggerData::ActivityIncrease {
            today_count,
            average_count: round_to(avg_daily, 1),
            increase_percent: round_to(increase_percent, 0),
        },
        &ctx.clock,
    ))
}

/// No visit at all within the inactivity window
pub fn check_low_activity(visits: &[Visit], ctx: &RuleContext<'_>) -> Option<Alert> {
    let low_hours = ctx.thresholds.frequency.low_hours;
    if count_since(visits, ctx.clock.hours_ago(low_hours)) > 0 {
        return None;
    }

    let last_visit_time = visits.iter().map(|v| v.entry_time).max();
    let hours_since_last_visit = last_visit_time
        .map(|t| (ctx.clock.now() - t).num_hours())
        .unwrap_or_else(|| i64::from(low_hours));

    let message = format!(
        "No activity detected in the litter box for {} hours. \
         Please check if {} is hydrated or using a different area.",
        low_hours, ctx.cat_name
    );

    Some(Alert::new(
        AlertType::FrequencyLow,
        message,
        TriggerData::Inactivity {
            hours_since_last_visit,
            last_visit_time,
        },
        &ctx.clock,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertSeverity, ThresholdProfile};
    use crate::domain::MonitoringMode;
    use crate::mock::{fixed_clock, visit_at, visit_minutes_ago};

    fn ctx(mode: MonitoringMode) -> RuleContext<'static> {
        RuleContext {
            clock: fixed_clock(),
            thresholds: ThresholdProfile::for_mode(mode),
            cat_name: "Luna",
        }
    }

    #[test]
    fn test_burst_at_threshold_fires() {
        let clock = fixed_clock();
        let visits = vec![
            visit_minutes_ago(&clock, 50, 4.0),
            visit_minutes_ago(&clock, 30, 4.0),
            visit_minutes_ago(&clock, 5, 4.0),
        ];

        let alert = check_burst(&visits, &ctx(MonitoringMode::Standard)).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert!(alert.message.contains("(3 visits in 1 hour)"));
        assert_eq!(
            alert.trigger_data,
            TriggerData::VisitBurst {
                visit_count: 3,
                timeframe: "1 hour".to_string(),
                threshold: 3,
            }
        );
    }

    #[test]
    fn test_burst_below_threshold_is_quiet() {
        let clock = fixed_clock();
        let visits = vec![
            visit_minutes_ago(&clock, 90, 4.0),
            visit_minutes_ago(&clock, 30, 4.0),
            visit_minutes_ago(&clock, 5, 4.0),
        ];

        assert!(check_burst(&visits, &ctx(MonitoringMode::Standard)).is_none());
        assert!(check_burst(&visits, &ctx(MonitoringMode::Strict)).is_some());
    }

    #[test]
    fn test_high_activity_against_weekly_average() {
        let clock = fixed_clock();
        // One visit a day for the previous six days, then four today
        let mut visits: Vec<Visit> = (1..=6).map(|day| visit_at(&clock, day * 24, 4.0)).collect();
        for hours in [2, 4, 6, 8] {
            visits.push(visit_at(&clock, hours, 4.0));
        }

        // avg = 10 / 7 = 1.43, limit at standard = 2.14
        let alert = check_high_activity(&visits, &ctx(MonitoringMode::Standard)).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert!(alert.message.contains("(4 visits vs. 1.4 average)"));
        assert_eq!(
            alert.trigger_data,
            TriggerData::ActivityIncrease {
                today_count: 4,
                average_count: 1.4,
                increase_percent: 180.0,
            }
        );

        // Kitten allows double the average (2.86)
        assert!(check_high_activity(&visits, &ctx(MonitoringMode::Kitten)).is_some());
    }

    #[test]
    fn test_high_activity_skipped_without_recent_visits() {
        let clock = fixed_clock();
        let visits = vec![visit_at(&clock, 10 * 24, 4.0)];
        assert!(check_high_activity(&visits, &ctx(MonitoringMode::Strict)).is_none());
    }

    #[test]
    fn test_today_starts_at_midnight() {
        let clock = fixed_clock();
        // Fixed clock is 12:00 UTC; 13 hours ago is yesterday
        let visits = vec![
            visit_at(&clock, 13, 4.0),
            visit_at(&clock, 14, 4.0),
            visit_at(&clock, 15, 4.0),
        ];

        assert!(check_high_activity(&visits, &ctx(MonitoringMode::Strict)).is_none());
    }

    #[test]
    fn test_low_activity_fires_without_recent_visits() {
        let clock = fixed_clock();
        let visits = vec![visit_at(&clock, 30, 4.0), visit_at(&clock, 50, 4.0)];

        let alert = check_low_activity(&visits, &ctx(MonitoringMode::Standard)).unwrap();
        assert_eq!(alert.alert_type, AlertType::FrequencyLow);
        assert!(alert.message.starts_with("No activity detected in the litter box for 24 hours"));
        assert_eq!(
            alert.trigger_data,
            TriggerData::Inactivity {
                hours_since_last_visit: 30,
                last_visit_time: Some(clock.hours_ago(30)),
            }
        );

        // Kitten waits 36 hours
        assert!(check_low_activity(&visits, &ctx(MonitoringMode::Kitten)).is_none());
    }

    #[test]
    fn test_low_activity_on_empty_history() {
        let alert = check_low_activity(&[], &ctx(MonitoringMode::Kitten)).unwrap();
        assert_eq!(
            alert.trigger_data,
            TriggerData::Inactivity {
                hours_since_last_visit: 36,
                last_visit_time: None,
            }
        );
    }

    #[test]
    fn test_single_recent_visit_silences_low_activity() {
        let clock = fixed_clock();
        let visits = vec![visit_at(&clock, 23, 4.0)];
        assert!(check_low_activity(&visits, &ctx(MonitoringMode::Standard)).is_none());
    }

    #[test]
    fn test_burst_window_includes_visits_exactly_one_hour_old() {
        let clock = fixed_clock();
        let visits: Vec<Visit> = (0..3).map(|_| visit_minutes_ago(&clock, 60, 4.0)).collect();

        let alert = check_burst(&visits, &ctx(MonitoringMode::Standard)).unwrap();
        assert_eq!(alert.alert_type, AlertType::FrequencyCritical);

        let older: Vec<Visit> = (0..3).map(|_| visit_minutes_ago(&clock, 61, 4.0)).collect();
        assert!(check_burst(&older, &ctx(MonitoringMode::Standard)).is_none());
    }

    #[test]
    fn test_visit_exactly_low_hours_old_silences_low_activity() {
        let clock = fixed_clock();

        let visits = vec![visit_at(&clock, 24, 4.0)];
        assert!(check_low_activity(&visits, &ctx(MonitoringMode::Standard)).is_none());

        let visits = vec![visit_at(&clock, 36, 4.0)];
        assert!(check_low_activity(&visits, &ctx(MonitoringMode::Kitten)).is_none());

        let visits = vec![visit_minutes_ago(&clock, 24 * 60 + 1, 4.0)];
        assert!(check_low_activity(&visits, &ctx(MonitoringMode::Standard)).is_some());
    }

    #[test]
    fn test_visit_at_midnight_counts_as_today() {
        let clock = fixed_clock();
        // Fixed clock is 12:00 UTC, so midnight is exactly 12 hours back
        let at_midnight = vec![visit_at(&clock, 12, 4.0), visit_at(&clock, 12, 4.0)];

        let alert = check_high_activity(&at_midnight, &ctx(MonitoringMode::Strict)).unwrap();
        match alert.trigger_data {
            TriggerData::ActivityIncrease { today_count, .. } => assert_eq!(today_count, 2),
            other => panic!("unexpected trigger data: {:?}", other),
        }

        let before_midnight = vec![
            visit_minutes_ago(&clock, 12 * 60 + 1, 4.0),
            visit_minutes_ago(&clock, 12 * 60 + 1, 4.0),
        ];
        assert!(check_high_activity(&before_midnight, &ctx(MonitoringMode::Strict)).is_none());
    }
}
