use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    campus::DashboardMetrics,
    error::CampusError,
    models::{
        Alert, AlertStatus, Criticality, NewAlert, NewReading, NewRecommendation, Reading,
        Recommendation, ScenarioResult, SeriesPoint,
    },
    scenario::{ScenarioPreset, DEFAULT_REDUCTION_PERCENT},
};

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadingDto {
    pub id: Uuid,
    pub building: String,
    pub room: String,
    pub device: String,
    pub recorded_at: DateTime<Utc>,
    /// kWh, two decimals
    pub energy_kwh: f64,
}

impl From<Reading> for ReadingDto {
    fn from(r: Reading) -> Self {
        Self {
            id: r.id,
            building: r.building,
            room: r.room,
            device: r.device,
            recorded_at: r.recorded_at,
            energy_kwh: r.energy.as_kwh(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReadingQuery {
    /// Exact building name. Blank means no filter.
    pub building: Option<String>,
}

impl ReadingQuery {
    pub fn building(&self) -> Option<&str> {
        self.building
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }
}

/// Request body for `POST /readings`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReadingRequest {
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub device: String,
    /// kWh, must be non-negative.
    pub energy_kwh: Option<f64>,
    /// Defaults to the time the request is handled (RFC3339).
    pub recorded_at: Option<DateTime<Utc>>,
}

impl TryFrom<CreateReadingRequest> for NewReading {
    type Error = CampusError;

    fn try_from(req: CreateReadingRequest) -> Result<Self, Self::Error> {
        let energy_kwh = req
            .energy_kwh
            .ok_or_else(|| CampusError::validation("energy_kwh", "is required"))?;
        Ok(Self {
            building: req.building,
            room: req.room,
            device: req.device,
            energy_kwh,
            recorded_at: req.recorded_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HourlyPointDto {
    /// `"00"`..`"23"` (UTC)
    pub hour: String,
    pub kwh: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BuildingTotalDto {
    pub building: String,
    pub kwh: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub total_kwh: f64,
    pub cost_estimate: f64,
    pub co2_estimate_kg: f64,
    pub currency: String,
    /// Always 24 entries.
    pub hourly: Vec<HourlyPointDto>,
    /// Order of first appearance; consumers may re-sort.
    pub by_building: Vec<BuildingTotalDto>,
    pub active_alerts: usize,
}

impl From<DashboardMetrics> for DashboardDto {
    fn from(m: DashboardMetrics) -> Self {
        Self {
            total_kwh: m.total.as_kwh(),
            cost_estimate: m.cost_estimate,
            co2_estimate_kg: m.co2_estimate_kg,
            currency: m.currency,
            hourly: m
                .hourly
                .iter()
                .map(|b| HourlyPointDto {
                    hour: b.label(),
                    kwh: b.energy.as_kwh(),
                })
                .collect(),
            by_building: m
                .by_building
                .into_iter()
                .map(|e| BuildingTotalDto {
                    building: e.entity,
                    kwh: e.energy.as_kwh(),
                })
                .collect(),
            active_alerts: m.active_alerts,
        }
    }
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AlertDto {
    pub id: Uuid,
    pub alert_type: String,
    pub description: String,
    pub criticality: Criticality,
    pub raised_at: DateTime<Utc>,
    pub status: AlertStatus,
}

impl From<Alert> for AlertDto {
    fn from(a: Alert) -> Self {
        Self {
            id: a.id,
            alert_type: a.alert_type,
            description: a.description,
            criticality: a.criticality,
            raised_at: a.raised_at,
            status: a.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub status: Option<AlertStatus>,
}

/// Request body for `POST /alerts`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAlertRequest {
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub description: String,
    pub criticality: Criticality,
    pub raised_at: Option<DateTime<Utc>>,
    /// Defaults to `active`.
    pub status: Option<AlertStatus>,
}

impl From<CreateAlertRequest> for NewAlert {
    fn from(req: CreateAlertRequest) -> Self {
        Self {
            alert_type: req.alert_type,
            description: req.description,
            criticality: req.criticality,
            raised_at: req.raised_at,
            status: req.status,
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationDto {
    pub id: Uuid,
    pub recommendation_type: String,
    pub description: String,
    pub estimated_energy_savings_kwh: f64,
    pub estimated_emissions_savings_kg: f64,
    pub applied: bool,
}

impl From<Recommendation> for RecommendationDto {
    fn from(r: Recommendation) -> Self {
        Self {
            id: r.id,
            recommendation_type: r.recommendation_type,
            description: r.description,
            estimated_energy_savings_kwh: r.estimated_energy_savings.as_kwh(),
            estimated_emissions_savings_kg: r.estimated_emissions_savings_kg,
            applied: r.applied,
        }
    }
}

/// Request body for `POST /recommendations`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRecommendationRequest {
    #[serde(default)]
    pub recommendation_type: String,
    #[serde(default)]
    pub description: String,
    pub estimated_energy_savings_kwh: f64,
    pub estimated_emissions_savings_kg: f64,
}

impl From<CreateRecommendationRequest> for NewRecommendation {
    fn from(req: CreateRecommendationRequest) -> Self {
        Self {
            recommendation_type: req.recommendation_type,
            description: req.description,
            estimated_energy_savings_kwh: req.estimated_energy_savings_kwh,
            estimated_emissions_savings_kg: req.estimated_emissions_savings_kg,
        }
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScenarioPresetDto {
    pub preset: ScenarioPreset,
    pub label: String,
    pub default_reduction_percent: f64,
}

impl From<ScenarioPreset> for ScenarioPresetDto {
    fn from(p: ScenarioPreset) -> Self {
        Self {
            preset: p,
            label: p.label().to_owned(),
            default_reduction_percent: DEFAULT_REDUCTION_PERCENT,
        }
    }
}

/// Request body for `POST /scenarios/simulate`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SimulateRequest {
    /// Free-text label. Defaults to the "Smart shutdown" preset.
    pub scenario: Option<String>,
    /// Defaults to 15. Not bounds-checked.
    pub reduction_percent: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeriesPointDto {
    pub label: String,
    pub kwh: f64,
}

impl From<SeriesPoint> for SeriesPointDto {
    fn from(p: SeriesPoint) -> Self {
        Self {
            label: p.label,
            kwh: p.energy.as_kwh(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScenarioResultDto {
    pub scenario: String,
    pub reduction_percent: f64,
    pub saved_kwh: f64,
    pub saved_cost: f64,
    pub saved_co2_kg: f64,
    pub remaining_kwh: f64,
    /// `Actual` then `Scenario`.
    pub comparison: Vec<SeriesPointDto>,
}

impl From<ScenarioResult> for ScenarioResultDto {
    fn from(r: ScenarioResult) -> Self {
        Self {
            scenario: r.scenario,
            reduction_percent: r.reduction_percent,
            saved_kwh: r.saved_kwh,
            saved_cost: r.saved_cost,
            saved_co2_kg: r.saved_emissions_kg,
            remaining_kwh: r.remaining_energy.as_kwh(),
            comparison: r.comparison.into_iter().map(Into::into).collect(),
        }
    }
}
