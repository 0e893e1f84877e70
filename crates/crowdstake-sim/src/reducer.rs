//! State transitions: `(state, event) -> (state, effects)`

use std::time::Duration;

use crowdstake_core::SimConfig;

use crate::events::{Effect, Event, Timer};
use crate::notify::Notification;
use crate::random::RandomSource;
use crate::state::PageState;
use crate::{ticker, transaction, wallet};

/// Collects the effects of one transition
pub(crate) struct Context<'a> {
    pub config: &'a SimConfig,
    pub rng: &'a mut dyn RandomSource,
    effects: Vec<Effect>,
}

impl<'a> Context<'a> {
    fn new(config: &'a SimConfig, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            config,
            rng,
            effects: Vec::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.effects.push(Effect::Notify(notification));
    }

    pub fn schedule(&mut self, timer: Timer, after: Duration, event: Event) {
        self.effects.push(Effect::Schedule {
            timer,
            after,
            event,
        });
    }

    pub fn cancel(&mut self, timer: Timer) {
        self.effects.push(Effect::Cancel(timer));
    }

    pub fn copy(&mut self, text: String) {
        self.effects.push(Effect::CopyToClipboard(text));
    }
}

/// Apply one event.
///
/// Randomness is drawn only from `rng`, so a seeded or scripted source makes
/// every transition reproducible. Events that the page would not accept in
/// the current state (a second submit while transacting, typing into a
/// disabled field) leave the state untouched and produce no effects.
pub fn update(
    mut state: PageState,
    event: Event,
    config: &SimConfig,
    rng: &mut dyn RandomSource,
) -> (PageState, Vec<Effect>) {
    let mut ctx = Context::new(config, rng);
    let rate = config.exchange_rate;

    match event {
        Event::Mount => ticker::mount(&mut state, &mut ctx),
        Event::Unmount => ticker::unmount(&mut state, &mut ctx),
        Event::Tick => ticker::tick(&mut state, &mut ctx),

        Event::Connect => wallet::connect(&mut state, &mut ctx),
        Event::ConnectResolved => wallet::resolve(&mut state, &mut ctx),
        Event::Disconnect => wallet::disconnect(&mut state, &mut ctx),

        Event::SetPayAmount(text) => {
            if !state.transacting() {
                state.form.set_pay(text, rate);
            }
        }
        Event::Swap => {
            if !state.transacting() && state.form.swap(rate) {
                let paying = state.form.conversion().pay_token();
                ctx.notify(
                    Notification::info("Tokens swapped")
                        .with_description(format!("Now paying with {}", paying)),
                );
            }
        }
        Event::SelectTab(tab) => state.form.select_tab(tab, rate),
        Event::UseMax => {
            if state.wallet.connected && !state.transacting() {
                let token = state.form.direction().pay_token();
                let max = state.balances.balance_of(token);
                state.form.set_pay(max.to_string(), rate);
            }
        }
        Event::ToggleDarkMode => state.dark_mode = !state.dark_mode,

        Event::Submit(kind) => transaction::submit(&mut state, kind, &mut ctx),
        Event::TxConfirming { hash } => transaction::confirm(&mut state, &hash, &mut ctx),
        Event::TxResolved { hash } => transaction::resolve(&mut state, &hash, &mut ctx),

        Event::OpenReceipt => {
            if state.confirmed_tx_hash.is_some() {
                state.receipt_visible = true;
            }
        }
        Event::CloseReceipt => state.receipt_visible = false,
        Event::CopyTxHash => {
            if let Some(hash) = &state.last_tx_hash {
                ctx.copy(hash.to_string());
                ctx.notify(Notification::success("Transaction hash copied!"));
            }
        }
        Event::ViewOnExplorer => ctx.notify(Notification::info("Explorer feature coming soon!")),
    }

    (state, ctx.effects)
}
