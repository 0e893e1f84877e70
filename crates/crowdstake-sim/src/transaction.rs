//! Mock transaction engine
//!
//! Idle -> (validate) -> Preparing -> Confirming -> Success | Failure -> Idle.
//! Only one transaction may be in flight; once accepted it always resolves.

use allocation::{parse_amount, quote, validate, PendingTransaction};
use crowdstake_core::{Direction, SimError, TxHash, TxKind};

use crate::events::{Event, Timer};
use crate::notify::{Notification, NotifyAction};
use crate::random::roll;
use crate::reducer::Context;
use crate::state::{InFlight, PageState, TxStage};

/// Decide whether a submit of `kind` would be accepted right now.
///
/// Returns the parsed pay amount when it would.
pub fn precheck(state: &PageState, kind: TxKind) -> Result<f64, SimError> {
    if state.transacting() {
        return Err(SimError::TransactionInFlight);
    }
    if !state.wallet.connected {
        return Err(SimError::WalletNotConnected);
    }
    let pay_token = Direction::for_form(kind, state.form.swapped()).pay_token();
    validate(state.form.pay_amount(), pay_token, &state.balances)
}

pub(crate) fn submit(state: &mut PageState, kind: TxKind, ctx: &mut Context<'_>) {
    let pay_amount = match precheck(state, kind) {
        Ok(amount) => amount,
        Err(SimError::TransactionInFlight) => {
            tracing::debug!(%kind, "submit ignored: a transaction is already in flight");
            return;
        }
        Err(err) => {
            tracing::debug!(%kind, code = err.error_code(), "submission rejected");
            ctx.notify(Notification::error(err.to_string()));
            return;
        }
    };
    let direction = Direction::for_form(kind, state.form.swapped());
    let pay_token = direction.pay_token();
    let conversion = state.form.conversion();
    let rate = ctx.config.exchange_rate;
    let receive_amount = if kind == state.form.tab() {
        parse_amount(state.form.receive_amount())
            .unwrap_or_else(|| quote(pay_amount, conversion, rate))
    } else {
        quote(pay_amount, conversion, rate)
    };

    let mut bytes = [0u8; 32];
    ctx.rng.fill_bytes(&mut bytes);
    let hash = TxHash::from_bytes(&bytes);

    tracing::info!(%kind, %hash, pay_amount, receive_amount, "mock transaction submitted");
    state.in_flight = Some(InFlight {
        tx: PendingTransaction {
            kind,
            pay_token,
            receive_token: direction.receive_token(),
            pay_amount,
            receive_amount,
            hash: hash.clone(),
        },
        stage: TxStage::Preparing,
    });
    state.last_tx_hash = Some(hash.clone());

    ctx.notify(Notification::loading("Preparing transaction...").with_id(hash.as_str()));
    ctx.schedule(
        Timer::Transaction,
        ctx.config.prepare_delay(),
        Event::TxConfirming { hash },
    );
}

pub(crate) fn confirm(state: &mut PageState, hash: &TxHash, ctx: &mut Context<'_>) {
    let Some(in_flight) = state.in_flight.as_mut() else {
        return;
    };
    if &in_flight.tx.hash != hash || in_flight.stage != TxStage::Preparing {
        tracing::warn!(%hash, "stale confirmation event ignored");
        return;
    }
    in_flight.stage = TxStage::Confirming;

    ctx.notify(Notification::loading("Confirming transaction...").with_id(hash.as_str()));
    ctx.schedule(
        Timer::Transaction,
        ctx.config.confirm_delay(),
        Event::TxResolved { hash: hash.clone() },
    );
}

pub(crate) fn resolve(state: &mut PageState, hash: &TxHash, ctx: &mut Context<'_>) {
    let matches = state
        .in_flight
        .as_ref()
        .is_some_and(|f| &f.tx.hash == hash && f.stage == TxStage::Confirming);
    if !matches {
        tracing::warn!(%hash, "stale resolution event ignored");
        return;
    }
    // Taking the slot clears the transacting flag on every path below
    let Some(InFlight { tx, .. }) = state.in_flight.take() else {
        return;
    };

    let draw = ctx.rng.next_unit();
    let outcome = if roll(draw, ctx.config.tx_success_probability) {
        settle(state, &tx, ctx.config.distribution_share)
    } else {
        Err(SimError::SimulatedNetworkFailure)
    };

    match outcome {
        Ok(()) => {
            tracing::info!(kind = %tx.kind, %hash, "mock transaction succeeded");
            state.confirmed_tx_hash = Some(hash.clone());
            ctx.notify(
                Notification::success(format!("{} successful!", tx.kind.outcome_label()))
                    .with_id(hash.as_str())
                    .with_description(format!("Transaction hash: {}", hash.short()))
                    .with_action(NotifyAction::ViewReceipt),
            );
        }
        Err(SimError::SimulatedNetworkFailure) => {
            tracing::warn!(kind = %tx.kind, %hash, draw, "mock transaction failed");
            ctx.notify(
                Notification::error("Transaction failed")
                    .with_id(hash.as_str())
                    .with_description("Network congestion. Please try again."),
            );
        }
        Err(err) => {
            tracing::error!(kind = %tx.kind, %hash, error = %err, "mock transaction aborted");
            ctx.notify(
                Notification::error("Transaction failed")
                    .with_id(hash.as_str())
                    .with_description("An unexpected error occurred."),
            );
        }
    }
}

fn settle(state: &mut PageState, tx: &PendingTransaction, share: f64) -> Result<(), SimError> {
    state.balances.settle(
        tx.pay_token,
        tx.pay_amount,
        tx.receive_token,
        tx.receive_amount,
    )?;
    if tx.kind == TxKind::Allocate {
        state.distribution.credit(tx.pay_amount * share);
    }
    state.form.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Effect;
    use crate::notify::NotifyKind;
    use crate::random::ScriptedRandom;
    use crate::reducer::update;
    use allocation::WalletBalance;
    use crowdstake_core::SimConfig;

    fn connected(xdai: f64, token: f64) -> PageState {
        let mut state = PageState::default();
        state.wallet.connected = true;
        state.balances = WalletBalance::new(xdai, token);
        state
    }

    fn step(state: PageState, event: Event, rng: &mut ScriptedRandom) -> (PageState, Vec<Effect>) {
        update(state, event, &SimConfig::default(), rng)
    }

    fn scheduled(effects: &[Effect]) -> Event {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Schedule { event, .. } => Some(event.clone()),
                _ => None,
            })
            .expect("an event was scheduled")
    }

    fn notifications(effects: &[Effect]) -> Vec<&Notification> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Submit and walk through both stages, resolving with `draw`
    fn run(state: PageState, kind: TxKind, draw: f64) -> (PageState, Vec<Effect>) {
        let mut rng = ScriptedRandom::new([draw]);
        let (state, effects) = step(state, Event::Submit(kind), &mut rng);
        assert!(state.transacting());
        let (state, effects) = step(state, scheduled(&effects), &mut rng);
        assert_eq!(state.in_flight.as_ref().map(|f| f.stage), Some(TxStage::Confirming));
        step(state, scheduled(&effects), &mut rng)
    }

    #[test]
    fn test_allocate_success_scenario() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("40".into()), &mut rng);
        assert_eq!(state.form.receive_amount(), "42.0000");
        let accumulated = state.distribution.accumulated;

        let (state, effects) = run(state, TxKind::Allocate, 0.95);
        assert!(!state.transacting());
        assert_eq!(format!("{:.2}", state.balances.xdai), "60.00");
        assert_eq!(format!("{:.2}", state.balances.token), "92.00");
        assert!((state.distribution.accumulated - accumulated - 4.0).abs() < 1e-9);
        assert_eq!(state.form.pay_amount(), "");
        assert_eq!(state.form.receive_amount(), "");

        let n = notifications(&effects);
        assert_eq!(n.len(), 1);
        assert_eq!(n[0].kind, NotifyKind::Success);
        assert_eq!(n[0].message, "Allocation successful!");
        assert_eq!(n[0].action, Some(NotifyAction::ViewReceipt));
    }

    #[test]
    fn test_failure_leaves_balances() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("40".into()), &mut rng);
        let (state, effects) = run(state, TxKind::Allocate, 0.05);
        assert!(!state.transacting());
        assert_eq!(state.balances, WalletBalance::new(100.0, 50.0));
        assert_eq!(state.form.pay_amount(), "40");

        let n = notifications(&effects);
        assert_eq!(n[0].kind, NotifyKind::Error);
        assert_eq!(
            n[0].description.as_deref(),
            Some("Network congestion. Please try again.")
        );
    }

    #[test]
    fn test_withdraw_pays_token_and_skips_distribution() {
        let mut rng = ScriptedRandom::constant(0.5);
        let state = connected(100.0, 50.0);
        let (state, _) = step(state, Event::SelectTab(TxKind::Withdraw), &mut rng);
        let (state, _) = step(state, Event::SetPayAmount("40".into()), &mut rng);
        assert_eq!(state.form.receive_amount(), "42.0000");
        let accumulated = state.distribution.accumulated;

        let (state, effects) = run(state, TxKind::Withdraw, 0.5);
        assert_eq!(format!("{:.2}", state.balances.token), "10.00");
        assert_eq!(format!("{:.2}", state.balances.xdai), "142.00");
        assert_eq!(state.distribution.accumulated, accumulated);
        assert_eq!(notifications(&effects)[0].message, "Withdrawal successful!");
    }

    #[test]
    fn test_receipt_only_after_success() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("10".into()), &mut rng);
        let (state, _) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        let (state, _) = step(state, Event::OpenReceipt, &mut rng);
        assert!(state.transacting());
        assert!(!state.receipt_visible);

        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("10".into()), &mut rng);
        let (state, _) = run(state, TxKind::Allocate, 0.01);
        assert_eq!(state.balances, WalletBalance::new(100.0, 50.0));
        assert!(state.last_tx_hash.is_some());
        assert!(state.confirmed_tx_hash.is_none());
        let (state, _) = step(state, Event::OpenReceipt, &mut rng);
        assert!(!state.receipt_visible);

        let (state, _) = run(state, TxKind::Allocate, 0.5);
        assert_eq!(state.confirmed_tx_hash, state.last_tx_hash);
        let (state, _) = step(state, Event::OpenReceipt, &mut rng);
        assert!(state.receipt_visible);
    }

    #[test]
    fn test_insufficient_balance_rejected() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("9999".into()), &mut rng);
        let (state, effects) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        assert!(!state.transacting());
        assert!(state.last_tx_hash.is_none());
        let n = notifications(&effects);
        assert_eq!(n.len(), 1);
        assert_eq!(n[0].message, "Insufficient xDAI balance");
    }

    #[test]
    fn test_invalid_amount_rejected() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, effects) = step(connected(100.0, 50.0), Event::Submit(TxKind::Allocate), &mut rng);
        assert!(!state.transacting());
        assert_eq!(notifications(&effects)[0].message, "Please enter a valid amount");
    }

    #[test]
    fn test_requires_connected_wallet() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(PageState::default(), Event::SetPayAmount("1".into()), &mut rng);
        let (state, effects) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        assert!(!state.transacting());
        assert_eq!(notifications(&effects)[0].kind, NotifyKind::Error);
    }

    #[test]
    fn test_second_submit_is_noop() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("10".into()), &mut rng);
        let (state, _) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        let first = state.clone();

        let (state, effects) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        assert!(effects.is_empty());
        assert_eq!(state, first);

        // Inputs are frozen too
        let (state, _) = step(state, Event::SetPayAmount("5".into()), &mut rng);
        let (state, _) = step(state, Event::Swap, &mut rng);
        let (state, _) = step(state, Event::Disconnect, &mut rng);
        assert_eq!(state, first);
    }

    #[test]
    fn test_precheck_reports_why() {
        let mut state = PageState::default();
        assert_eq!(
            precheck(&state, TxKind::Allocate),
            Err(SimError::WalletNotConnected)
        );
        state.wallet.connected = true;
        state.form.set_pay("12", 1.05);
        assert_eq!(precheck(&state, TxKind::Allocate), Ok(12.0));

        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        assert_eq!(
            precheck(&state, TxKind::Allocate),
            Err(SimError::TransactionInFlight)
        );
    }

    #[test]
    fn test_hash_shape_and_toast_ids() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("10".into()), &mut rng);
        let (state, effects) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        let hash = state.last_tx_hash.clone().unwrap();
        assert_eq!(hash.as_str().len(), 66);
        assert!(hash.as_str().starts_with("0x"));
        let n = notifications(&effects);
        assert_eq!(n[0].kind, NotifyKind::Loading);
        assert_eq!(n[0].message, "Preparing transaction...");
        assert_eq!(n[0].id.as_deref(), Some(hash.as_str()));
    }

    #[test]
    fn test_stale_resolution_ignored() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("10".into()), &mut rng);
        let (state, _) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        let before = state.clone();
        let (state, effects) = step(
            state,
            Event::TxResolved {
                hash: TxHash::new("0xother"),
            },
            &mut rng,
        );
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_unexpected_settlement_error_clears_flag() {
        let mut rng = ScriptedRandom::constant(0.5);
        let (state, _) = step(connected(100.0, 50.0), Event::SetPayAmount("40".into()), &mut rng);
        let (state, effects) = step(state, Event::Submit(TxKind::Allocate), &mut rng);
        let (mut state, effects) = step(state, scheduled(&effects), &mut rng);

        // Balance drained behind the engine's back
        state.balances.xdai = 1.0;
        let (state, effects) = step(state, scheduled(&effects), &mut rng);
        assert!(!state.transacting());
        assert_eq!(state.balances, WalletBalance::new(1.0, 50.0));
        let n = notifications(&effects);
        assert_eq!(n[0].message, "Transaction failed");
        assert_eq!(n[0].description.as_deref(), Some("An unexpected error occurred."));
        assert!(state.last_tx_hash.is_some());
        assert!(state.confirmed_tx_hash.is_none());
    }
}
