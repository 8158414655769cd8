//! REST endpoints for flow status and milestone updates.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::info;

use super::manager::FlowManager;
use super::state::Milestone;

/// Shared state for flow routes.
#[derive(Clone)]
pub struct FlowRouteState {
    pub manager: Arc<FlowManager>,
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "materna-flow"
    }))
}

/// GET /api/flow/status
///
/// Returns the resolved stage, rendering flags, progress, and the
/// diagnostic description of the snapshot.
async fn get_status(State(state): State<FlowRouteState>) -> impl IntoResponse {
    let status = state.manager.status().await;
    Json(status)
}

/// POST /api/flow/milestones/{milestone}
///
/// Marks a milestone complete and returns the updated status. The path
/// segment uses the milestone's snake_case name (e.g. `notification_setup`).
async fn complete_milestone(
    State(state): State<FlowRouteState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match name.parse::<Milestone>() {
        Ok(milestone) => {
            info!(%milestone, "Milestone completed via API");
            state.manager.complete(milestone).await;
            Json(state.manager.status().await).into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// POST /api/flow/reset
///
/// Clears every milestone (the sign-out path) and returns the reset status.
async fn reset(State(state): State<FlowRouteState>) -> impl IntoResponse {
    info!("Flow reset via API");
    state.manager.reset().await;
    Json(state.manager.status().await)
}

/// Build the flow REST routes.
pub fn flow_routes(state: FlowRouteState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/flow/status", get(get_status))
        .route("/api/flow/milestones/{milestone}", post(complete_milestone))
        .route("/api/flow/reset", post(reset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
