use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use utoipa::OpenApi;
use uuid::Uuid;

use super::{
    dto::{
        AlertDto, AlertQuery, BuildingTotalDto, CreateAlertRequest, CreateReadingRequest,
        CreateRecommendationRequest, DashboardDto, HourlyPointDto, ReadingDto, ReadingQuery,
        RecommendationDto, ScenarioPresetDto, ScenarioResultDto, SeriesPointDto, SimulateRequest,
    },
    errors::AppError,
};
use crate::{
    models::{AlertStatus, Criticality, NewReading},
    scenario::{ScenarioPreset, DEFAULT_REDUCTION_PERCENT},
    state::CampusState,
};

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// List readings in insertion order, optionally only those of `?building=`.
#[utoipa::path(
    get,
    path = "/readings",
    params(
        ("building" = Option<String>, Query, description = "Only readings from this building"),
    ),
    responses(
        (status = 200, description = "Readings", body = Vec<ReadingDto>),
    ),
    tag = "readings"
)]
pub async fn list_readings(
    State(state): State<CampusState>,
    Query(query): Query<ReadingQuery>,
) -> Json<Vec<ReadingDto>> {
    let readings = state.read().await.list_readings(query.building());
    Json(readings.into_iter().map(Into::into).collect())
}

/// Distinct building names in order of first appearance.
#[utoipa::path(
    get,
    path = "/buildings",
    responses(
        (status = 200, description = "Building names", body = Vec<String>),
    ),
    tag = "readings"
)]
pub async fn list_buildings(State(state): State<CampusState>) -> Json<Vec<String>> {
    Json(state.read().await.buildings())
}

/// Record a new reading. `recorded_at` defaults to now.
#[utoipa::path(
    post,
    path = "/readings",
    request_body = CreateReadingRequest,
    responses(
        (status = 201, description = "Reading stored", body = ReadingDto),
        (status = 422, description = "Missing field or negative energy"),
    ),
    tag = "readings"
)]
pub async fn create_reading(
    State(state): State<CampusState>,
    Json(req): Json<CreateReadingRequest>,
) -> Result<(StatusCode, Json<ReadingDto>), AppError> {
    let new = NewReading::try_from(req)?;
    let reading = state.write().await.add_reading(new)?;
    Ok((StatusCode::CREATED, Json(reading.into())))
}

#[utoipa::path(
    get,
    path = "/readings/{id}",
    params(
        ("id" = Uuid, Path, description = "Reading ID"),
    ),
    responses(
        (status = 200, description = "Reading", body = ReadingDto),
        (status = 404, description = "No such reading"),
    ),
    tag = "readings"
)]
pub async fn get_reading(
    State(state): State<CampusState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReadingDto>, AppError> {
    let campus = state.read().await;
    let reading = campus.reading(id)?.clone();
    Ok(Json(reading.into()))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Totals, cost and CO₂ estimates, hourly and per-building series.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardDto),
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(state): State<CampusState>) -> Json<DashboardDto> {
    Json(state.read().await.dashboard_metrics().into())
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// List alerts in insertion order, optionally filtered by `?status=`.
#[utoipa::path(
    get,
    path = "/alerts",
    params(
        ("status" = Option<AlertStatus>, Query, description = "Only alerts with this status"),
    ),
    responses(
        (status = 200, description = "Alerts", body = Vec<AlertDto>),
    ),
    tag = "alerts"
)]
pub async fn list_alerts(
    State(state): State<CampusState>,
    Query(query): Query<AlertQuery>,
) -> Json<Vec<AlertDto>> {
    let alerts = state.read().await.list_alerts(query.status);
    Json(alerts.into_iter().map(Into::into).collect())
}

#[utoipa::path(
    post,
    path = "/alerts",
    request_body = CreateAlertRequest,
    responses(
        (status = 201, description = "Alert stored", body = AlertDto),
        (status = 422, description = "Missing type or description"),
    ),
    tag = "alerts"
)]
pub async fn create_alert(
    State(state): State<CampusState>,
    Json(req): Json<CreateAlertRequest>,
) -> Result<(StatusCode, Json<AlertDto>), AppError> {
    let alert = state.write().await.raise_alert(req.into())?;
    Ok((StatusCode::CREATED, Json(alert.into())))
}

#[utoipa::path(
    get,
    path = "/alerts/{id}",
    params(
        ("id" = Uuid, Path, description = "Alert ID"),
    ),
    responses(
        (status = 200, description = "Alert", body = AlertDto),
        (status = 404, description = "No such alert"),
    ),
    tag = "alerts"
)]
pub async fn get_alert(
    State(state): State<CampusState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AlertDto>, AppError> {
    let alert = state.read().await.alert(id)?.clone();
    Ok(Json(alert.into()))
}

/// Flip an alert between `active` and `resolved`.
#[utoipa::path(
    post,
    path = "/alerts/{id}/toggle",
    params(
        ("id" = Uuid, Path, description = "Alert ID"),
    ),
    responses(
        (status = 200, description = "Updated alert", body = AlertDto),
        (status = 404, description = "No such alert"),
    ),
    tag = "alerts"
)]
pub async fn toggle_alert(
    State(state): State<CampusState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AlertDto>, AppError> {
    let alert = state.write().await.toggle_alert(id)?;
    Ok(Json(alert.into()))
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/recommendations",
    responses(
        (status = 200, description = "Recommendations", body = Vec<RecommendationDto>),
    ),
    tag = "recommendations"
)]
pub async fn list_recommendations(State(state): State<CampusState>) -> Json<Vec<RecommendationDto>> {
    let campus = state.read().await;
    Json(campus.list_recommendations().iter().cloned().map(Into::into).collect())
}

#[utoipa::path(
    post,
    path = "/recommendations",
    request_body = CreateRecommendationRequest,
    responses(
        (status = 201, description = "Recommendation stored", body = RecommendationDto),
        (status = 422, description = "Blank text or negative savings"),
    ),
    tag = "recommendations"
)]
pub async fn create_recommendation(
    State(state): State<CampusState>,
    Json(req): Json<CreateRecommendationRequest>,
) -> Result<(StatusCode, Json<RecommendationDto>), AppError> {
    let rec = state.write().await.propose_recommendation(req.into())?;
    Ok((StatusCode::CREATED, Json(rec.into())))
}

#[utoipa::path(
    get,
    path = "/recommendations/{id}",
    params(
        ("id" = Uuid, Path, description = "Recommendation ID"),
    ),
    responses(
        (status = 200, description = "Recommendation", body = RecommendationDto),
        (status = 404, description = "No such recommendation"),
    ),
    tag = "recommendations"
)]
pub async fn get_recommendation(
    State(state): State<CampusState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationDto>, AppError> {
    let rec = state.read().await.recommendation(id)?.clone();
    Ok(Json(rec.into()))
}

/// Mark a recommendation as applied. Re-applying is a no-op.
#[utoipa::path(
    post,
    path = "/recommendations/{id}/apply",
    params(
        ("id" = Uuid, Path, description = "Recommendation ID"),
    ),
    responses(
        (status = 200, description = "Updated recommendation", body = RecommendationDto),
        (status = 404, description = "No such recommendation"),
    ),
    tag = "recommendations"
)]
pub async fn apply_recommendation(
    State(state): State<CampusState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationDto>, AppError> {
    let rec = state.write().await.apply_recommendation(id)?;
    Ok(Json(rec.into()))
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/scenarios",
    responses(
        (status = 200, description = "Scenario presets", body = Vec<ScenarioPresetDto>),
    ),
    tag = "scenarios"
)]
pub async fn list_scenarios() -> Json<Vec<ScenarioPresetDto>> {
    Json(ScenarioPreset::ALL.into_iter().map(Into::into).collect())
}

/// Project savings against the current campus total.
#[utoipa::path(
    post,
    path = "/scenarios/simulate",
    request_body = SimulateRequest,
    responses(
        (status = 200, description = "Projected savings", body = ScenarioResultDto),
    ),
    tag = "scenarios"
)]
pub async fn simulate_scenario(
    State(state): State<CampusState>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<ScenarioResultDto>, AppError> {
    let pct = req.reduction_percent.unwrap_or(DEFAULT_REDUCTION_PERCENT);
    let result = state
        .read()
        .await
        .simulate_scenario(req.scenario.as_deref(), pct)?;
    Ok(Json(result.into()))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(
        list_readings,
        create_reading,
        get_reading,
        list_buildings,
        get_dashboard,
        list_alerts,
        create_alert,
        get_alert,
        toggle_alert,
        list_recommendations,
        create_recommendation,
        get_recommendation,
        apply_recommendation,
        list_scenarios,
        simulate_scenario,
        health,
    ),
    components(schemas(
        ReadingDto,
        CreateReadingRequest,
        DashboardDto,
        HourlyPointDto,
        BuildingTotalDto,
        AlertDto,
        CreateAlertRequest,
        AlertStatus,
        Criticality,
        RecommendationDto,
        CreateRecommendationRequest,
        ScenarioPreset,
        ScenarioPresetDto,
        SimulateRequest,
        ScenarioResultDto,
        SeriesPointDto,
    )),
    tags(
        (name = "readings",        description = "Energy readings"),
        (name = "dashboard",       description = "Aggregated KPIs and chart series"),
        (name = "alerts",          description = "Consumption alerts"),
        (name = "recommendations", description = "Savings recommendations"),
        (name = "scenarios",       description = "Savings simulation"),
        (name = "system",          description = "System endpoints"),
    ),
    info(
        title = "Campus Energy API",
        version = "0.1.0",
        description = "REST API for campus energy readings, alerts, recommendations and savings scenarios"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
