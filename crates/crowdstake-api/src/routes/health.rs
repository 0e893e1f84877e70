//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::AppState;

/// GET /health - Page liveness: mounted, transacting, simulated clock
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.health().await)
}
