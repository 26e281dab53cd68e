use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::energy::Energy;

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// One timestamped consumption observation. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub id: Uuid,
    pub building: String,
    pub room: String,
    pub device: String,
    pub recorded_at: DateTime<Utc>,
    pub energy: Energy,
}

/// A reading as submitted, before it has an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub building: String,
    pub room: String,
    pub device: String,
    /// kWh as entered; validated and quantised by the store.
    pub energy_kwh: f64,
    /// Defaults to the store clock when absent.
    pub recorded_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    High,
    Medium,
    Low,
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Criticality::High => "high",
            Criticality::Medium => "medium",
            Criticality::Low => "low",
        };
        f.write_str(s)
    }
}

/// Alert lifecycle. Both transitions are allowed; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn toggled(self) -> Self {
        match self {
            AlertStatus::Active => AlertStatus::Resolved,
            AlertStatus::Resolved => AlertStatus::Active,
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertStatus::Active => "active",
            AlertStatus::Resolved => "resolved",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: Uuid,
    pub alert_type: String,
    pub description: String,
    pub criticality: Criticality,
    pub raised_at: DateTime<Utc>,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub alert_type: String,
    pub description: String,
    pub criticality: Criticality,
    pub raised_at: Option<DateTime<Utc>>,
    /// Defaults to `Active`.
    pub status: Option<AlertStatus>,
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: Uuid,
    pub recommendation_type: String,
    pub description: String,
    pub estimated_energy_savings: Energy,
    /// kg CO₂
    pub estimated_emissions_savings_kg: f64,
    /// Only ever moves from `false` to `true`.
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRecommendation {
    pub recommendation_type: String,
    pub description: String,
    pub estimated_energy_savings_kwh: f64,
    pub estimated_emissions_savings_kg: f64,
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub energy: Energy,
}

/// Outcome of one savings simulation. Derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub scenario: String,
    pub reduction_percent: f64,
    /// kWh, rounded to 0.01. Negative when `reduction_percent` is below zero.
    pub saved_kwh: f64,
    /// Currency units
    pub saved_cost: f64,
    /// kg CO₂
    pub saved_emissions_kg: f64,
    /// Baseline energy minus savings, floored at zero.
    pub remaining_energy: Energy,
    /// `[("Actual", baseline), ("Scenario", remaining)]`
    pub comparison: Vec<SeriesPoint>,
}
