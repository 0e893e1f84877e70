//! Application state shared across API handlers

use std::sync::Arc;
use std::time::Duration;

use crowdstake_core::{AppConfig, ConfigError, SimError, TxKind};
use crowdstake_sim::{Event, Notification, Page, PageView, RandomSource, SeededRandom};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::dto::HealthResponse;

/// Errors that can occur while setting up the API state
#[derive(Debug, Error)]
pub enum ApiStateError {
    /// Simulation settings failed validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    page: Mutex<Page>,
}

impl AppState {
    /// Create a new application state with default config
    pub fn new() -> Self {
        let config = AppConfig::default();
        let rng = Box::new(SeededRandom::from_entropy());
        Self::with_page(config.clone(), Page::with_defaults(config.sim, rng))
    }

    /// Create with a specific config; a configured seed makes the run reproducible
    pub fn with_config(config: AppConfig) -> Result<Self, ApiStateError> {
        config.sim.validate()?;
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => {
                tracing::info!(seed, "using seeded random source");
                Box::new(SeededRandom::from_seed(seed))
            }
            None => Box::new(SeededRandom::from_entropy()),
        };
        let page = Page::with_defaults(config.sim.clone(), rng);
        Ok(Self::with_page(config, page))
    }

    /// Wrap an already-built page
    pub fn with_page(config: AppConfig, page: Page) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                page: Mutex::new(page),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Apply an event and return the resulting view
    pub async fn dispatch(&self, event: Event) -> PageView {
        let mut page = self.inner.page.lock().await;
        page.dispatch(event);
        page.view()
    }

    /// Submit a transaction under a single lock, so the rejection reason matches
    /// the state the event was applied to
    pub async fn submit(&self, kind: TxKind) -> (PageView, Option<SimError>) {
        let mut page = self.inner.page.lock().await;
        let rejection = page.try_submit(kind).err();
        (page.view(), rejection)
    }

    /// Copy the last hash; returns what was copied
    pub async fn copy_tx_hash(&self) -> (PageView, Option<String>) {
        let mut page = self.inner.page.lock().await;
        page.dispatch(Event::CopyTxHash);
        let copied = page
            .state()
            .last_tx_hash
            .as_ref()
            .map(|hash| hash.to_string());
        (page.view(), copied)
    }

    /// Liveness snapshot for the health route
    pub async fn health(&self) -> HealthResponse {
        let page = self.inner.page.lock().await;
        let mounted = page.state().mounted;
        HealthResponse {
            status: if mounted { "ok" } else { "idle" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            mounted,
            transacting: page.state().transacting(),
            pending_timers: page.pending_timers(),
            clock_ms: u64::try_from(page.now().as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub async fn view(&self) -> PageView {
        self.inner.page.lock().await.view()
    }

    /// Advance the simulated clock
    pub async fn advance(&self, by: Duration) -> usize {
        self.inner.page.lock().await.advance(by)
    }

    /// Recent notifications, oldest first
    pub async fn notifications(&self) -> Vec<Notification> {
        let page = self.inner.page.lock().await;
        page.notifications().entries().cloned().collect()
    }

    pub async fn clipboard(&self) -> Option<String> {
        let page = self.inner.page.lock().await;
        page.clipboard().contents().map(str::to_string)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
