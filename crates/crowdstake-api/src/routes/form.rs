//! Allocation form endpoints

use axum::{extract::State, routing::post, Json, Router};
use crowdstake_sim::{Event, PageView};

use crate::dto::{PayAmountRequest, TabRequest};
use crate::AppState;

/// Create form routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pay", post(set_pay))
        .route("/swap", post(swap))
        .route("/tab", post(select_tab))
        .route("/max", post(use_max))
}

/// POST /form/pay - Replace the pay amount text
pub async fn set_pay(
    State(state): State<AppState>,
    Json(request): Json<PayAmountRequest>,
) -> Json<PageView> {
    Json(state.dispatch(Event::SetPayAmount(request.amount)).await)
}

/// POST /form/swap - Flip the pay/receive direction
pub async fn swap(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::Swap).await)
}

/// POST /form/tab - Select the allocate or withdraw tab
pub async fn select_tab(
    State(state): State<AppState>,
    Json(request): Json<TabRequest>,
) -> Json<PageView> {
    Json(state.dispatch(Event::SelectTab(request.tab)).await)
}

/// POST /form/max - Fill in the full balance of the pay token
pub async fn use_max(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::UseMax).await)
}
