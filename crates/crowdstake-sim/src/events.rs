//! Events consumed by the reducer and the effects it asks the runtime to perform

use std::time::Duration;

use crowdstake_core::{TxHash, TxKind};

use crate::notify::Notification;

/// Everything that can happen to the page
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Lifecycle
    Mount,
    Unmount,
    Tick,

    // Wallet
    Connect,
    ConnectResolved,
    Disconnect,

    // Form inputs
    SetPayAmount(String),
    Swap,
    SelectTab(TxKind),
    UseMax,
    ToggleDarkMode,

    // Transactions
    Submit(TxKind),
    TxConfirming { hash: TxHash },
    TxResolved { hash: TxHash },

    // Receipt dialog
    OpenReceipt,
    CloseReceipt,
    CopyTxHash,
    ViewOnExplorer,
}

/// Owner of a scheduled event, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    Ticker,
    Wallet,
    Transaction,
}

/// Side effects requested by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    Schedule {
        timer: Timer,
        after: Duration,
        event: Event,
    },
    Cancel(Timer),
    CopyToClipboard(String),
}
