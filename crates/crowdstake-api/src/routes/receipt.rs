//! Receipt dialog endpoints

use axum::{extract::State, routing::post, Json, Router};
use crowdstake_sim::{Event, PageView};

use crate::dto::CopyResponse;
use crate::AppState;

/// Create receipt routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/open", post(open))
        .route("/close", post(close))
        .route("/copy", post(copy))
        .route("/explorer", post(explorer))
}

/// POST /receipt/open
pub async fn open(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::OpenReceipt).await)
}

/// POST /receipt/close
pub async fn close(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::CloseReceipt).await)
}

/// POST /receipt/copy - Copy the last transaction hash
pub async fn copy(State(state): State<AppState>) -> Json<CopyResponse> {
    let (page, copied) = state.copy_tx_hash().await;
    Json(CopyResponse { copied, page })
}

/// POST /receipt/explorer
pub async fn explorer(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::ViewOnExplorer).await)
}
