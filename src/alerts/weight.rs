//! Weight alert rules
//!
//! Three independent checks against the baseline weight:
//! - urgent loss between the first and last visit of the last 48 hours
//! - downward trend of the 7-day average
//! - upward trend of the same 7-day average
//!
//! None of them run without enough history and a baseline.

use super::baseline::{mean_weight_since, Baseline, BaselineCalculator};
use super::evaluator::RuleContext;
use super::types::{round_to, Alert, AlertType, TriggerData};
use crate::domain::Visit;

const URGENT_WINDOW_HOURS: u32 = 48;
const TREND_WINDOW_DAYS: u32 = 7;

const URGENT_TIMEFRAME: &str = "48 hours";
const TREND_TIMEFRAME: &str = "30 days";

/// 7-day average compared against the baseline
///
/// Computed once per evaluation; the trend and gain checks both read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSample {
    pub baseline_kg: f64,
    pub recent_average_kg: f64,
    /// Signed change ratio, negative for loss
    pub change: f64,
}

impl TrendSample {
    /// Returns `None` when no visit falls in the trend window
    pub fn compute(
        visits: &[Visit],
        baseline: &Baseline,
        ctx: &RuleContext<'_>,
    ) -> Option<Self> {
        let since = ctx.clock.days_ago(TREND_WINDOW_DAYS);
        let recent_average_kg = mean_weight_since(visits, since)?;
        let baseline_kg = baseline.weight_kg;

        Some(Self {
            baseline_kg,
            recent_average_kg,
            change: (recent_average_kg - baseline_kg) / baseline_kg,
        })
    }

    fn trigger_data(&self) -> TriggerData {
        TriggerData::WeightChange {
            baseline_weight: round_to(self.baseline_kg, 2),
            current_weight: None,
            current_average: Some(round_to(self.recent_average_kg, 2)),
            change_percent: round_to(self.change * 100.0, 1),
            timeframe: TREND_TIMEFRAME.to_string(),
        }
    }
}

/// Run all weight rules, in urgent, trend, gain order
pub fn evaluate(
    visits: &[Visit],
    calculator: &BaselineCalculator,
    ctx: &RuleContext<'_>,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if !calculator.has_sufficient_history(visits, &ctx.clock) {
        log::debug!("Weight rules skipped: history younger than required");
        return alerts;
    }

    let Some(baseline) = calculator.calculate(visits, &ctx.clock) else {
        log::debug!("Weight rules skipped: no visits in baseline window");
        return alerts;
    };

    // A zero baseline would turn every ratio into inf/NaN
    if baseline.weight_kg <= 0.0 {
        log::debug!("Weight rules skipped: baseline weight is zero");
        return alerts;
    }

    log::debug!(
        "Baseline {:.2} kg from {} visits",
        baseline.weight_kg,
        baseline.sample_count
    );

    alerts.extend(check_urgent_loss(visits, &baseline, ctx));

    if let Some(trend) = TrendSample::compute(visits, &baseline, ctx) {
        log::debug!(
            "7-day average {:.2} kg ({:+.1}%)",
            trend.recent_average_kg,
            trend.change * 100.0
        );
        alerts.extend(check_trend_loss(&trend, ctx));
        alerts.extend(check_gain(&trend, ctx));
    }

    alerts
}

/// Earliest-to-latest change within the last 48 hours
pub fn check_urgent_loss(
    visits: &[Visit],
    baseline: &Baseline,
    ctx: &RuleContext<'_>,
) -> Option<Alert> {
    let since = ctx.clock.hours_ago(URGENT_WINDOW_HOURS);
    let mut recent: Vec<&Visit> = visits.iter().filter(|v| v.entry_time >= since).collect();
    if recent.len() < 2 {
        return None;
    }
    recent.sort_by_key(|v| v.entry_time);

    let earliest = recent.first()?.weight_kg();
    let latest = recent.last()?.weight_kg();
    let change = (latest - earliest) / baseline.weight_kg;

    if change >= -ctx.thresholds.weight.urgent {
        return None;
    }

    let message = format!(
        "Sudden weight drop detected. {} has lost {:.1}% in 48 hours. \
         Significant changes can indicate dehydration. Please monitor closely.",
        ctx.cat_name,
        (change * 100.0).abs()
    );

    Some(Alert::new(
        AlertType::WeightUrgent,
        message,
        TriggerData::WeightChange {
            baseline_weight: round_to(baseline.weight_kg, 2),
            current_weight: Some(round_to(latest, 2)),
            current_average: None,
            change_percent: round_to(change * 100.0, 1),
            timeframe: URGENT_TIMEFRAME.to_string(),
        },
        &ctx.clock,
    ))
}

/// Gradual loss of the 7-day average
pub fn check_trend_loss(trend: &TrendSample, ctx: &RuleContext<'_>) -> Option<Alert> {
    if trend.change >= -ctx.thresholds.weight.trend {
        return None;
    }

    let message = format!(
        "{} has lost {:.1}% of their body weight over the last month. \
         This gradual trend often warrants a vet consultation.",
        ctx.cat_name,
        (trend.change * 100.0).abs()
    );

    Some(Alert::new(
        AlertType::WeightTrend,
        message,
        trend.trigger_data(),
        &ctx.clock,
    ))
}

/// Gradual gain of the 7-day average
pub fn check_gain(trend: &TrendSample, ctx: &RuleContext<'_>) -> Option<Alert> {
    if trend.change <= ctx.thresholds.weight.gain {
        return None;
    }

    let message = format!(
        "{} is trending upward in weight (+{:.1}%). \
         Consider reviewing their daily calorie intake to maintain ideal joint health.",
        ctx.cat_name,
        trend.change * 100.0
    );

    Some(Alert::new(
        AlertType::WeightGain,
        message,
        trend.trigger_data(),
        &ctx.clock,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertSeverity, ThresholdProfile};
    use crate::domain::MonitoringMode;
    use crate::mock::{fixed_clock, visit_at};

    fn ctx(mode: MonitoringMode) -> RuleContext<'static> {
        RuleContext {
            clock: fixed_clock(),
            thresholds: ThresholdProfile::for_mode(mode),
            cat_name: "Milo",
        }
    }

    fn run(visits: &[Visit], mode: MonitoringMode) -> Vec<Alert> {
        evaluate(visits, &BaselineCalculator::default(), &ctx(mode))
    }

    fn baseline_visits(weight: f64) -> Vec<Visit> {
        let clock = fixed_clock();
        (8..=13)
            .map(|day| visit_at(&clock, day * 24, weight))
            .collect()
    }

    #[test]
    fn test_urgent_loss_fires() {
        let clock = fixed_clock();
        let mut visits = baseline_visits(5.0);
        visits.push(visit_at(&clock, 30, 5.0));
        visits.push(visit_at(&clock, 2, 4.8));

        let alerts = run(&visits, MonitoringMode::Standard);
        let urgent: Vec<_> = alerts
            .iter()
            .filter(|a| a.alert_type == AlertType::WeightUrgent)
            .collect();

        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].severity, AlertSeverity::Critical);
        assert!(urgent[0].message.contains("Milo has lost 4.0% in 48 hours"));
        match &urgent[0].trigger_data {
            TriggerData::WeightChange {
                baseline_weight,
                current_weight,
                change_percent,
                timeframe,
                ..
            } => {
                assert_eq!(*baseline_weight, 5.0);
                assert_eq!(*current_weight, Some(4.8));
                assert_eq!(*change_percent, -4.0);
                assert_eq!(timeframe, "48 hours");
            }
            other => panic!("unexpected trigger data: {:?}", other),
        }
    }

    #[test]
    fn test_urgent_loss_uses_time_order_not_input_order() {
        let clock = fixed_clock();
        let mut visits = baseline_visits(5.0);
        // Latest visit listed first; weight actually went up
        visits.push(visit_at(&clock, 1, 5.0));
        visits.push(visit_at(&clock, 40, 4.7));

        let alerts = run(&visits, MonitoringMode::Standard);
        assert!(alerts.iter().all(|a| a.alert_type != AlertType::WeightUrgent));
    }

    #[test]
    fn test_urgent_loss_needs_two_visits() {
        let clock = fixed_clock();
        let mut visits = baseline_visits(5.0);
        visits.push(visit_at(&clock, 2, 4.0));

        let baseline = BaselineCalculator::default()
            .calculate(&visits, &clock)
            .unwrap();
        assert!(check_urgent_loss(&visits, &baseline, &ctx(MonitoringMode::Strict)).is_none());
    }

    #[test]
    fn test_trend_loss_fires_as_warning() {
        let clock = fixed_clock();
        let mut visits = baseline_visits(5.0);
        // 7-day average 4.7 kg: a 6% drop with a flat 48 hours
        for day in 3..=6 {
            visits.push(visit_at(&clock, day * 24, 4.7));
        }

        let alerts = run(&visits, MonitoringMode::Standard);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_type, AlertType::WeightTrend);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert!(alerts[0].message.contains("lost 6.0%"));
    }

    #[test]
    fn test_gain_fires_as_info() {
        let clock = fixed_clock();
        let mut visits = baseline_visits(5.0);
        for day in 3..=6 {
            visits.push(visit_at(&clock, day * 24, 5.4));
        }

        let alerts = run(&visits, MonitoringMode::Standard);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_type, AlertType::WeightGain);
        assert_eq!(alerts[0].severity, AlertSeverity::Info);
        assert!(alerts[0].message.contains("(+8.0%)"));
    }

    #[test]
    fn test_trend_and_gain_share_one_sample() {
        let trend = TrendSample {
            baseline_kg: 5.0,
            recent_average_kg: 4.5,
            change: -0.1,
        };
        let ctx = ctx(MonitoringMode::Standard);

        let loss = check_trend_loss(&trend, &ctx).unwrap();
        assert!(check_gain(&trend, &ctx).is_none());
        assert_eq!(loss.trigger_data, trend.trigger_data());
    }

    #[test]
    fn test_young_history_suppresses_weight_alerts() {
        let clock = fixed_clock();
        let visits = vec![
            visit_at(&clock, 6 * 24, 6.0),
            visit_at(&clock, 30, 6.0),
            visit_at(&clock, 1, 3.0),
        ];

        let alerts = run(&visits, MonitoringMode::Strict);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_missing_baseline_suppresses_weight_alerts() {
        let clock = fixed_clock();
        // Old enough history, but nothing between 7 and 14 days ago
        let visits = vec![
            visit_at(&clock, 20 * 24, 5.0),
            visit_at(&clock, 30, 5.0),
            visit_at(&clock, 1, 4.0),
        ];

        let alerts = run(&visits, MonitoringMode::Strict);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_zero_baseline_skips_weight_rules() {
        let clock = fixed_clock();
        let mut visits = baseline_visits(0.0);
        visits.push(visit_at(&clock, 30, 5.0));
        visits.push(visit_at(&clock, 2, 4.0));

        for mode in MonitoringMode::ALL {
            assert!(run(&visits, mode).is_empty());
        }
    }

    #[test]
    fn test_urgent_window_includes_visit_exactly_48_hours_old() {
        let clock = fixed_clock();
        let mut visits = baseline_visits(5.0);
        visits.push(visit_at(&clock, 48, 5.0));
        visits.push(visit_at(&clock, 1, 4.8));

        let alerts = run(&visits, MonitoringMode::Standard);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_type, AlertType::WeightUrgent);
        match &alerts[0].trigger_data {
            TriggerData::WeightChange {
                current_weight,
                change_percent,
                ..
            } => {
                assert_eq!(*current_weight, Some(4.8));
                assert_eq!(*change_percent, -4.0);
            }
            other => panic!("unexpected trigger data: {:?}", other),
        }
    }
}
