//! Mock wallet connector
//!
//! Connecting takes a fixed delay and then succeeds with the configured
//! probability. No address, key or network is involved.

use allocation::constants::display::WALLET_ADDRESS;
use crowdstake_core::SimError;

use crate::events::{Event, Timer};
use crate::notify::Notification;
use crate::random::roll;
use crate::reducer::Context;
use crate::state::PageState;

/// Toast id shared by the connect loading/success/failure toasts
pub const CONNECT_TOAST_ID: &str = "wallet-connect";

pub(crate) fn connect(state: &mut PageState, ctx: &mut Context<'_>) {
    if state.wallet.connecting || state.wallet.connected {
        return;
    }
    state.wallet.connecting = true;
    ctx.notify(Notification::loading("Connecting to wallet...").with_id(CONNECT_TOAST_ID));
    ctx.schedule(
        Timer::Wallet,
        ctx.config.connect_delay(),
        Event::ConnectResolved,
    );
}

pub(crate) fn resolve(state: &mut PageState, ctx: &mut Context<'_>) {
    if !state.wallet.connecting {
        return;
    }
    state.wallet.connecting = false;

    let draw = ctx.rng.next_unit();
    if roll(draw, ctx.config.connect_success_probability) {
        state.wallet.connected = true;
        tracing::info!("mock wallet connected");
        ctx.notify(
            Notification::success("Wallet connected successfully!")
                .with_id(CONNECT_TOAST_ID)
                .with_description(format!("Address: {}", WALLET_ADDRESS)),
        );
    } else {
        let err = SimError::SimulatedConnectionFailure;
        tracing::warn!(draw, code = err.error_code(), "mock wallet connection failed");
        ctx.notify(
            Notification::error(err.to_string())
                .with_id(CONNECT_TOAST_ID)
                .with_description("Please check your wallet and try again."),
        );
    }
}

pub(crate) fn disconnect(state: &mut PageState, ctx: &mut Context<'_>) {
    // The disconnect control is disabled mid-transaction
    if state.transacting() || !state.wallet.connected {
        return;
    }
    state.wallet.connected = false;
    ctx.notify(Notification::info("Wallet disconnected").with_description("You can reconnect anytime."));
}
