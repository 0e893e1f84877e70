//! Wall-clock driver for the simulated clock
//!
//! Mounts the page, then advances simulated time by however much real time
//! passed between polls. Stopping it unmounts the page, which cancels the
//! distribution ticker.

use std::time::Duration;

use crowdstake_sim::Event;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::AppState;

/// How often the driver catches the simulated clock up with wall time
pub const DEFAULT_RESOLUTION: Duration = Duration::from_millis(100);

pub struct ClockDriver {
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl ClockDriver {
    /// Spawn the driver on the current runtime
    pub fn start(state: AppState, resolution: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            state.dispatch(Event::Mount).await;
            tracing::info!(?resolution, "clock driver started");

            let mut interval = tokio::time::interval(resolution);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut last = Instant::now();

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let now = Instant::now();
                        let fired = state.advance(now - last).await;
                        last = now;
                        if fired > 0 {
                            tracing::trace!(fired, "timers fired");
                        }
                    }
                    _ = &mut shutdown_rx => break,
                }
            }

            state.dispatch(Event::Unmount).await;
            tracing::info!("clock driver stopped");
        });

        Self {
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    /// Stop the driver and wait for it to unmount the page
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.handle.await {
            tracing::warn!("clock driver task failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdstake_core::{AppConfig, SimConfig};
    use crowdstake_sim::{Page, ScriptedRandom};

    #[tokio::test(start_paused = true)]
    async fn test_driver_ticks_and_unmounts() {
        let page =
            Page::with_defaults(SimConfig::default(), Box::new(ScriptedRandom::constant(0.5)));
        let state = AppState::with_page(AppConfig::default(), page);
        let start = state.view().await.distribution.progress_percent;

        let driver = ClockDriver::start(state.clone(), DEFAULT_RESOLUTION);
        tokio::time::sleep(Duration::from_millis(3_050)).await;
        driver.stop().await;

        let progress = state.view().await.distribution.progress_percent;
        assert!(progress > start, "progress {} should exceed {}", progress, start);

        // Unmounted: further simulated time changes nothing
        let frozen = state.view().await;
        state.advance(Duration::from_secs(5)).await;
        assert_eq!(state.view().await, frozen);
    }
}
