pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::state::CampusState;
use handlers::ApiDoc;

pub fn router(state: CampusState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route(
            "/readings",
            get(handlers::list_readings).post(handlers::create_reading),
        )
        .route("/readings/{id}", get(handlers::get_reading))
        .route("/buildings", get(handlers::list_buildings))
        .route("/dashboard", get(handlers::get_dashboard))
        .route(
            "/alerts",
            get(handlers::list_alerts).post(handlers::create_alert),
        )
        .route("/alerts/{id}", get(handlers::get_alert))
        .route("/alerts/{id}/toggle", post(handlers::toggle_alert))
        .route(
            "/recommendations",
            get(handlers::list_recommendations).post(handlers::create_recommendation),
        )
        .route("/recommendations/{id}", get(handlers::get_recommendation))
        .route(
            "/recommendations/{id}/apply",
            post(handlers::apply_recommendation),
        )
        .route("/scenarios", get(handlers::list_scenarios))
        .route("/scenarios/simulate", post(handlers::simulate_scenario))
        .with_state(state)
        .split_for_parts();

    router
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
}
