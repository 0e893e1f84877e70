//! Page view, FAQ, notifications and theme endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use crowdstake_sim::{Event, FaqItem, Notification, PageView, FAQ};

use crate::AppState;

/// Create page routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/page", get(get_page))
        .route("/faq", get(get_faq))
        .route("/notifications", get(get_notifications))
        .route("/theme/toggle", post(toggle_theme))
}

/// GET /page - Current rendered view
pub async fn get_page(State(state): State<AppState>) -> Json<PageView> {
    Json(state.view().await)
}

/// GET /faq - Static FAQ entries
pub async fn get_faq() -> Json<Vec<FaqItem>> {
    Json(FAQ.to_vec())
}

/// GET /notifications - Recent notifications, oldest first
pub async fn get_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications().await)
}

/// POST /theme/toggle - Flip dark mode
pub async fn toggle_theme(State(state): State<AppState>) -> Json<PageView> {
    Json(state.dispatch(Event::ToggleDarkMode).await)
}
