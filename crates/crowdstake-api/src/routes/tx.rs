//! Transaction endpoints

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use crowdstake_sim::PageView;

use crate::dto::{ApiError, SubmitRequest};
use crate::routes::error_response;
use crate::AppState;

/// Create transaction routes
pub fn router() -> Router<AppState> {
    Router::new().route("/submit", post(submit))
}

/// POST /tx/submit - Submit an allocation or withdrawal.
///
/// Rejections still produce a notification; the response carries the reason
/// as an error status.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<PageView>, (StatusCode, Json<ApiError>)> {
    let (view, rejection) = state.submit(request.kind).await;
    match rejection {
        Some(err) => Err(error_response(&err)),
        None => Ok(Json(view)),
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app_with_draw, send};
    use axum::http::StatusCode;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_submit_requires_wallet() {
        let (app, _) = app_with_draw(0.5);
        send(&app, "POST", "/form/pay", Some(json!({"amount": "10"}))).await;
        let (status, body) = send(&app, "POST", "/tx/submit", Some(json!({"kind": "allocate"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "wallet_not_connected");
    }

    #[tokio::test]
    async fn test_allocate_round_trip() {
        let (app, state) = app_with_draw(0.5);
        send(&app, "POST", "/wallet/connect", None).await;
        state.advance(Duration::from_secs(2)).await;

        send(&app, "POST", "/form/pay", Some(json!({"amount": "40"}))).await;
        let (status, body) = send(&app, "POST", "/tx/submit", Some(json!({"kind": "allocate"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transacting"], true);
        assert_eq!(body["form"]["submitLabel"], "Processing...");

        let (status, body) = send(&app, "POST", "/tx/submit", Some(json!({"kind": "allocate"}))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "transaction_in_flight");

        state.advance(Duration::from_secs(3)).await;
        let (_, body) = send(&app, "GET", "/page", None).await;
        assert_eq!(body["transacting"], false);
        assert_eq!(body["wallet"]["balances"]["xdai"], "1207.50");
        assert_eq!(body["wallet"]["balances"]["token"], "934.30");
        assert_eq!(body["distribution"]["accumulated"], "286.8420");
    }

    #[tokio::test]
    async fn test_insufficient_balance_status() {
        let (app, state) = app_with_draw(0.5);
        send(&app, "POST", "/wallet/connect", None).await;
        state.advance(Duration::from_secs(2)).await;

        send(&app, "POST", "/form/pay", Some(json!({"amount": "9999"}))).await;
        let (status, body) = send(&app, "POST", "/tx/submit", Some(json!({"kind": "allocate"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Insufficient xDAI balance");
    }
}
