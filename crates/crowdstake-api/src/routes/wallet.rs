//! Mock wallet endpoints

use axum::{extract::State, routing::post, Json, Router};
use crowdstake_sim::{Event, PageView};

use crate::AppState;

/// Create wallet routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/connect", post(connect))
        .route("/disconnect", post(disconnect))
}

/// POST /wallet/connect - Start a (simulated) connection attempt
pub async fn connect(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::Connect).await)
}

/// POST /wallet/disconnect - Disconnect immediately
pub async fn disconnect(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::Disconnect).await)
}
