//! API route handlers

pub mod form;
pub mod health;
pub mod page;
pub mod receipt;
pub mod tx;
pub mod wallet;

use axum::{http::StatusCode, routing::get, Json, Router};
use crowdstake_core::SimError;

use crate::dto::ApiError;
use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(page::router())
        .nest("/wallet", wallet::router())
        .nest("/form", form::router())
        .nest("/tx", tx::router())
        .nest("/receipt", receipt::router())
        .with_state(state)
}

/// Map a simulation error onto an HTTP error response
pub(crate) fn error_response(err: &SimError) -> (StatusCode, Json<ApiError>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiError::from(err)))
}
