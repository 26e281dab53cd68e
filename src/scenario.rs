use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    cost::CostModel,
    energy::Energy,
    models::{ScenarioResult, SeriesPoint},
};

pub const DEFAULT_REDUCTION_PERCENT: f64 = 15.0;

pub const ACTUAL_LABEL: &str = "Actual";
pub const SCENARIO_LABEL: &str = "Scenario";

/// Named reduction strategies offered to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioPreset {
    #[default]
    SmartShutdown,
    OffPeakSchedule,
    HvacMaintenance,
    OccupancySensors,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 4] = [
        ScenarioPreset::SmartShutdown,
        ScenarioPreset::OffPeakSchedule,
        ScenarioPreset::HvacMaintenance,
        ScenarioPreset::OccupancySensors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioPreset::SmartShutdown => "Smart shutdown",
            ScenarioPreset::OffPeakSchedule => "Off-peak schedule",
            ScenarioPreset::HvacMaintenance => "A/C maintenance",
            ScenarioPreset::OccupancySensors => "Occupancy sensors",
        }
    }
}

/// Project the savings of cutting `baseline` by `reduction_percent`.
///
/// Saved energy is rounded to 0.01 kWh. The percentage is not bounds-checked:
/// above 100 the remaining energy floors at zero, below 0 the savings are
/// negative and the remaining energy exceeds the baseline.
pub fn simulate(
    model: &CostModel,
    scenario: &str,
    baseline: Energy,
    reduction_percent: f64,
) -> ScenarioResult {
    let saved_centi = saved_centi_kwh(baseline, reduction_percent);
    let remaining_centi = (i128::from(baseline.centi_kwh()) - i128::from(saved_centi))
        .clamp(0, i128::from(i64::MAX)) as i64;
    let remaining = Energy::from_centi_kwh(remaining_centi);
    let saved_kwh = saved_centi as f64 / 100.0;

    ScenarioResult {
        scenario: scenario.to_owned(),
        reduction_percent,
        saved_kwh,
        saved_cost: model.cost_kwh(saved_kwh),
        saved_emissions_kg: model.emissions_kwh(saved_kwh),
        remaining_energy: remaining,
        comparison: vec![
            SeriesPoint {
                label: ACTUAL_LABEL.to_owned(),
                energy: baseline,
            },
            SeriesPoint {
                label: SCENARIO_LABEL.to_owned(),
                energy: remaining,
            },
        ],
    }
}

/// Savings in hundredths of a kWh, clamped to the `i64` range. A NaN
/// percentage saves nothing.
fn saved_centi_kwh(baseline: Energy, reduction_percent: f64) -> i64 {
    let raw = (baseline.centi_kwh() as f64 * reduction_percent / 100.0).round();
    if raw.is_nan() {
        return 0;
    }
    let limit = i64::MAX as f64;
    raw.clamp(-limit, limit) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn run(baseline_kwh: f64, pct: f64) -> ScenarioResult {
        simulate(
            &CostModel::default(),
            ScenarioPreset::default().label(),
            Energy::from_kwh(baseline_kwh).unwrap(),
            pct,
        )
    }

    #[test]
    fn fifteen_percent_of_campus_total() {
        let r = run(17.0, 15.0);
        assert_eq!(r.saved_kwh, 2.55);
        assert!((r.saved_cost - 0.561).abs() < EPS);
        assert!((r.saved_emissions_kg - 1.02).abs() < EPS);
        assert_eq!(r.remaining_energy.as_kwh(), 14.45);
    }

    #[test]
    fn zero_percent_saves_nothing() {
        let r = run(17.0, 0.0);
        assert_eq!(r.saved_kwh, 0.0);
        assert_eq!(r.remaining_energy.as_kwh(), 17.0);
        assert_eq!(r.saved_cost, 0.0);
    }

    #[test]
    fn hundred_percent_saves_everything() {
        for baseline in [0.0, 0.01, 17.0, 1234.57] {
            let r = run(baseline, 100.0);
            assert_eq!(r.saved_kwh, baseline);
            assert_eq!(r.remaining_energy, Energy::ZERO);
        }
    }

    #[test]
    fn above_hundred_clamps_remaining() {
        let r = run(10.0, 150.0);
        assert_eq!(r.saved_kwh, 15.0);
        assert_eq!(r.remaining_energy, Energy::ZERO);
    }

    #[test]
    fn negative_percent_is_not_rejected() {
        let r = run(10.0, -10.0);
        assert_eq!(r.saved_kwh, -1.0);
        assert!((r.saved_cost + 0.22).abs() < EPS);
        assert!((r.saved_emissions_kg + 0.4).abs() < EPS);
        assert_eq!(r.remaining_energy.as_kwh(), 11.0);
    }

    #[test]
    fn extreme_percentages_saturate_without_panicking() {
        let huge = run(17.0, 1e30);
        assert_eq!(huge.saved_kwh, i64::MAX as f64 / 100.0);
        assert_eq!(huge.remaining_energy, Energy::ZERO);

        let tiny = run(17.0, -1e30);
        assert_eq!(tiny.saved_kwh, -(i64::MAX as f64) / 100.0);
        assert_eq!(tiny.remaining_energy.centi_kwh(), i64::MAX);
    }

    #[test]
    fn saturated_baseline_with_negative_percent_stays_in_range() {
        let baseline = Energy::from_centi_kwh(i64::MAX);
        let r = simulate(&CostModel::default(), "max", baseline, -50.0);
        assert_eq!(r.remaining_energy.centi_kwh(), i64::MAX);
        assert!(r.saved_kwh < 0.0);
    }

    #[test]
    fn nan_percent_saves_nothing() {
        let r = run(17.0, f64::NAN);
        assert_eq!(r.saved_kwh, 0.0);
        assert_eq!(r.remaining_energy.as_kwh(), 17.0);
    }

    #[test]
    fn savings_are_rounded_to_hundredths() {
        // 3.33 * 33.3% = 1.10889
        let r = run(3.33, 33.3);
        assert_eq!(r.saved_kwh, 1.11);
        assert_eq!(r.remaining_energy.as_kwh(), 2.22);
    }

    #[test]
    fn comparison_series_has_actual_then_scenario() {
        let r = run(17.0, 15.0);
        let labels: Vec<&str> = r.comparison.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, [ACTUAL_LABEL, SCENARIO_LABEL]);
        assert_eq!(r.comparison[0].energy.as_kwh(), 17.0);
        assert_eq!(r.comparison[1].energy, r.remaining_energy);
    }

    #[test]
    fn presets_have_distinct_labels() {
        let mut labels: Vec<&str> = ScenarioPreset::ALL.iter().map(|p| p.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 4);
        assert_eq!(ScenarioPreset::default().label(), "Smart shutdown");
    }
}
