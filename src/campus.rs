use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    aggregation::{self, EntityTotal, HourBucket},
    alert_registry::AlertRegistry,
    clock::SharedClock,
    cost::CostModel,
    energy::Energy,
    error::CampusError,
    models::{
        Alert, AlertStatus, NewAlert, NewReading, NewRecommendation, Reading, Recommendation,
        ScenarioResult,
    },
    reading_store::ReadingStore,
    recommendation_catalog::RecommendationCatalog,
    scenario::{self, ScenarioPreset},
};

/// KPIs and chart series for the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total: Energy,
    pub cost_estimate: f64,
    pub co2_estimate_kg: f64,
    pub currency: String,
    /// 24 entries, hours 00..23 UTC.
    pub hourly: Vec<HourBucket>,
    pub by_building: Vec<EntityTotal>,
    pub active_alerts: usize,
}

/// Owns the three independent collections and the conversion factors.
/// Every mutation goes through one of the methods below.
pub struct Campus {
    readings: ReadingStore,
    alerts: AlertRegistry,
    recommendations: RecommendationCatalog,
    cost: CostModel,
    currency: String,
}

impl Campus {
    pub fn new(clock: SharedClock, cost: CostModel, currency: impl Into<String>) -> Self {
        Self {
            readings: ReadingStore::new(clock.clone()),
            alerts: AlertRegistry::new(clock),
            recommendations: RecommendationCatalog::new(),
            cost,
            currency: currency.into(),
        }
    }

    // -----------------------------------------------------------------------
    // Readings
    // -----------------------------------------------------------------------

    pub fn add_reading(&mut self, new: NewReading) -> Result<Reading, CampusError> {
        let reading = self.readings.add(new)?.clone();
        info!(
            reading_id = %reading.id,
            building = %reading.building,
            energy_kwh = reading.energy.as_kwh(),
            "Reading recorded"
        );
        Ok(reading)
    }

    /// All readings, or only those of `building` (exact match), in
    /// insertion order.
    pub fn list_readings(&self, building: Option<&str>) -> Vec<Reading> {
        match building {
            Some(b) => self.readings.in_building(b).cloned().collect(),
            None => self.readings.all().to_vec(),
        }
    }

    /// Buildings that have at least one reading, in order of first occurrence.
    pub fn buildings(&self) -> Vec<String> {
        self.readings.buildings().into_iter().map(str::to_owned).collect()
    }

    pub fn reading(&self, id: Uuid) -> Result<&Reading, CampusError> {
        self.readings
            .get(id)
            .ok_or_else(|| CampusError::not_found("reading", id))
    }

    pub fn total_energy(&self) -> Energy {
        aggregation::total(self.readings.all())
    }

    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        let readings = self.readings.all();
        let total = aggregation::total(readings);
        debug!(readings = readings.len(), total_kwh = total.as_kwh(), "Computing dashboard metrics");

        DashboardMetrics {
            total,
            cost_estimate: self.cost.cost(total),
            co2_estimate_kg: self.cost.emissions(total),
            currency: self.currency.clone(),
            hourly: aggregation::by_hour(readings),
            by_building: aggregation::by_building(readings),
            active_alerts: self.alerts.active().count(),
        }
    }

    // -----------------------------------------------------------------------
    // Alerts
    // -----------------------------------------------------------------------

    pub fn list_alerts(&self, status: Option<AlertStatus>) -> Vec<Alert> {
        match status {
            Some(s) => self.alerts.with_status(s).cloned().collect(),
            None => self.alerts.all().to_vec(),
        }
    }

    pub fn alert(&self, id: Uuid) -> Result<&Alert, CampusError> {
        self.alerts
            .get(id)
            .ok_or_else(|| CampusError::not_found("alert", id))
    }

    pub fn raise_alert(&mut self, new: NewAlert) -> Result<Alert, CampusError> {
        let alert = self.alerts.raise(new)?.clone();
        info!(
            alert_id = %alert.id,
            criticality = %alert.criticality,
            status = %alert.status,
            "Alert raised"
        );
        Ok(alert)
    }

    pub fn toggle_alert(&mut self, id: Uuid) -> Result<Alert, CampusError> {
        let alert = self.alerts.toggle(id)?.clone();
        info!(alert_id = %alert.id, status = %alert.status, "Alert toggled");
        Ok(alert)
    }

    // -----------------------------------------------------------------------
    // Recommendations
    // -----------------------------------------------------------------------

    pub fn list_recommendations(&self) -> &[Recommendation] {
        self.recommendations.all()
    }

    pub fn recommendation(&self, id: Uuid) -> Result<&Recommendation, CampusError> {
        self.recommendations
            .get(id)
            .ok_or_else(|| CampusError::not_found("recommendation", id))
    }

    pub fn propose_recommendation(
        &mut self,
        new: NewRecommendation,
    ) -> Result<Recommendation, CampusError> {
        let rec = self.recommendations.propose(new)?.clone();
        info!(recommendation_id = %rec.id, kind = %rec.recommendation_type, "Recommendation proposed");
        Ok(rec)
    }

    pub fn apply_recommendation(&mut self, id: Uuid) -> Result<Recommendation, CampusError> {
        let rec = self.recommendations.apply(id)?.clone();
        info!(recommendation_id = %rec.id, "Recommendation applied");
        Ok(rec)
    }

    // -----------------------------------------------------------------------
    // Scenarios
    // -----------------------------------------------------------------------

    /// Simulate against the current reading total. Defaults to the default
    /// preset's label when `scenario` is `None`. NaN and infinite
    /// percentages are rejected.
    pub fn simulate_scenario(
        &self,
        scenario: Option<&str>,
        reduction_percent: f64,
    ) -> Result<ScenarioResult, CampusError> {
        if !reduction_percent.is_finite() {
            return Err(CampusError::validation(
                "reduction_percent",
                "must be a finite number",
            ));
        }
        let label = scenario.unwrap_or_else(|| ScenarioPreset::default().label());
        let result = scenario::simulate(&self.cost, label, self.total_energy(), reduction_percent);
        debug!(
            scenario = %result.scenario,
            reduction_percent,
            saved_kwh = result.saved_kwh,
            "Scenario simulated"
        );
        Ok(result)
    }
}
