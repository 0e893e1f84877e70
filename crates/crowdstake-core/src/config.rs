//! Configuration types for crowdstake

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunables of the simulation.
///
/// The probabilities and the distribution share are placeholders for a demo,
/// so they live here rather than as hard-coded rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// TOKEN received per xDAI paid
    pub exchange_rate: f64,

    /// Fraction of an allocation credited to the distribution accumulator
    pub distribution_share: f64,

    /// Probability that a submitted transaction succeeds
    pub tx_success_probability: f64,

    /// Probability that a connect attempt succeeds
    pub connect_success_probability: f64,

    /// Distribution ticker period (ms)
    pub tick_period_ms: u64,

    /// Delay before the connect attempt resolves (ms)
    pub connect_delay_ms: u64,

    /// "Preparing" stage length (ms)
    pub prepare_delay_ms: u64,

    /// "Confirming" stage length (ms)
    pub confirm_delay_ms: u64,

    /// Starting wallet balances
    pub initial_xdai: f64,
    pub initial_token: f64,

    /// Starting distribution card values
    pub initial_accumulated: f64,
    pub initial_progress: f64,
    pub initial_days_remaining: f64,
    pub initial_cycle: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            exchange_rate: 1.05,
            distribution_share: 0.10,
            tx_success_probability: 0.9,
            connect_success_probability: 0.8,
            tick_period_ms: 1_000,
            connect_delay_ms: 2_000,
            prepare_delay_ms: 1_000,
            confirm_delay_ms: 2_000,
            initial_xdai: 1247.50,
            initial_token: 892.30,
            initial_accumulated: 282.8420,
            initial_progress: 20.0,
            initial_days_remaining: 25.0,
            initial_cycle: 15,
        }
    }
}

impl SimConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    pub fn prepare_delay(&self) -> Duration {
        Duration::from_millis(self.prepare_delay_ms)
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.exchange_rate.is_finite() && self.exchange_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "exchangeRate must be positive, got {}",
                self.exchange_rate
            )));
        }
        for (name, p) in [
            ("distributionShare", self.distribution_share),
            ("txSuccessProbability", self.tx_success_probability),
            ("connectSuccessProbability", self.connect_success_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tickPeriodMs must be non-zero".into()));
        }
        for (name, value) in [
            ("initialXdai", self.initial_xdai),
            ("initialToken", self.initial_token),
            ("initialAccumulated", self.initial_accumulated),
            ("initialDaysRemaining", self.initial_days_remaining),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..100.0).contains(&self.initial_progress) {
            return Err(ConfigError::Invalid(format!(
                "initialProgress must be within [0, 100), got {}",
                self.initial_progress
            )));
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Simulation settings
    #[serde(default)]
    pub sim: SimConfig,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Fixed seed for the random source (random if absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_api_port() -> u16 {
    19053
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            api_port: default_api_port(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.sim.validate()?;
        Ok(config)
    }
}
