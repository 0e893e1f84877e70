//! crowdstake application library

use anyhow::Context;
use crowdstake_api::{start_server, AppState};
use crowdstake_core::AppConfig;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "CROWDSTAKE_CONFIG";

/// Run the application until the server exits or Ctrl-C is received
pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crowdstake=debug".parse()?)
                .add_directive("allocation=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    tracing::info!("Starting crowdstake");

    let config = load_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(serve(config))
}

/// Read the config named by `CROWDSTAKE_CONFIG`, or fall back to defaults
pub fn load_config() -> anyhow::Result<AppConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!("Loading config from {}", path);
            AppConfig::load(&path).with_context(|| format!("loading {}", path))
        }
        Err(_) => Ok(AppConfig::default()),
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let port = config.api_port;
    let state = AppState::with_config(config)?;

    start_server(state, port, shutdown_signal())
        .await
        .context("API server failed")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => tracing::warn!("Failed to listen for ctrl-c: {}", e),
    }
}
