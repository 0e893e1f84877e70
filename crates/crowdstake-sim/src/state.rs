//! Page state owned by the reducer

use allocation::{DistributionState, FormState, PendingTransaction, WalletBalance};
use crowdstake_core::{SimConfig, TxHash};
use serde::Serialize;

/// Mock wallet connection flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnection {
    pub connected: bool,
    pub connecting: bool,
}

/// Stage of the in-flight transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStage {
    Preparing,
    Confirming,
}

/// The single transaction allowed in flight
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InFlight {
    pub tx: PendingTransaction,
    pub stage: TxStage,
}

/// Everything the page knows, for the life of the session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub mounted: bool,
    pub wallet: WalletConnection,
    pub balances: WalletBalance,
    pub form: FormState,
    pub distribution: DistributionState,
    pub in_flight: Option<InFlight>,
    /// Most recently submitted hash, whatever its outcome
    pub last_tx_hash: Option<TxHash>,
    /// Most recent hash that resolved successfully; the receipt shows this one
    pub confirmed_tx_hash: Option<TxHash>,
    pub receipt_visible: bool,
    pub dark_mode: bool,
}

impl PageState {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            mounted: false,
            wallet: WalletConnection::default(),
            balances: WalletBalance::new(config.initial_xdai, config.initial_token),
            form: FormState::new(),
            distribution: DistributionState::new(
                config.initial_accumulated,
                config.initial_progress,
                config.initial_days_remaining,
                config.initial_cycle,
            ),
            in_flight: None,
            last_tx_hash: None,
            confirmed_tx_hash: None,
            receipt_visible: false,
            dark_mode: false,
        }
    }

    /// A transaction is between submission and resolution
    pub fn transacting(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
