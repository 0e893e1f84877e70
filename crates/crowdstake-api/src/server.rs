//! HTTP server for the page API
//!
//! Serving and the simulated clock share a lifetime: the page is mounted when
//! the server starts and unmounted once the shutdown signal resolves.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::driver::{ClockDriver, DEFAULT_RESOLUTION};
use crate::routes::create_router;
use crate::AppState;

/// Router plus the trace and CORS layers; any origin may drive the page
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind `127.0.0.1:port` and serve the page until `shutdown` resolves
pub async fn start_server<F>(state: AppState, port: u16, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    serve_page(state, listener, shutdown).await
}

/// Serve on an already-bound listener with the clock driver running.
///
/// The driver is stopped, and the page unmounted, whether serving ends by
/// signal or by error.
pub async fn serve_page<F>(state: AppState, listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "serving crowdstake page");

    let driver = ClockDriver::start(state.clone(), DEFAULT_RESOLUTION);
    let result = axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown)
        .await;
    driver.stop().await;

    match &result {
        Ok(()) => tracing::info!(%addr, "page server stopped"),
        Err(e) => tracing::error!(%addr, error = %e, "page server failed"),
    }
    result
}
