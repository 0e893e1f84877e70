//! Distribution ticker: grows the accumulator and walks the cycle countdown

use allocation::tick_increment;

use crate::events::{Event, Timer};
use crate::reducer::Context;
use crate::state::PageState;

pub(crate) fn mount(state: &mut PageState, ctx: &mut Context<'_>) {
    if state.mounted {
        return;
    }
    state.mounted = true;
    ctx.schedule(Timer::Ticker, ctx.config.tick_period(), Event::Tick);
    tracing::debug!("distribution ticker started");
}

pub(crate) fn unmount(state: &mut PageState, ctx: &mut Context<'_>) {
    if !state.mounted {
        return;
    }
    state.mounted = false;
    ctx.cancel(Timer::Ticker);
    tracing::debug!("distribution ticker stopped");
}

pub(crate) fn tick(state: &mut PageState, ctx: &mut Context<'_>) {
    // A tick already queued when the page unmounted
    if !state.mounted {
        return;
    }
    let increment = tick_increment(ctx.rng.next_unit());
    state.distribution.tick(increment);
    ctx.schedule(Timer::Ticker, ctx.config.tick_period(), Event::Tick);
}

#[cfg(test)]
mod tests {
    use crate::events::{Effect, Event, Timer};
    use crate::random::ScriptedRandom;
    use crate::reducer::update;
    use crate::state::PageState;
    use crowdstake_core::SimConfig;
    use std::time::Duration;

    #[test]
    fn test_mount_schedules_first_tick_once() {
        let config = SimConfig::default();
        let mut rng = ScriptedRandom::constant(0.0);
        let (state, effects) = update(PageState::default(), Event::Mount, &config, &mut rng);
        assert!(state.mounted);
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::Ticker,
                after: Duration::from_secs(1),
                event: Event::Tick,
            }]
        );

        let (_, effects) = update(state, Event::Mount, &config, &mut rng);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_tick_runs_without_wallet() {
        let config = SimConfig::default();
        let mut rng = ScriptedRandom::constant(0.0);
        let (state, _) = update(PageState::default(), Event::Mount, &config, &mut rng);
        assert!(!state.wallet.connected);
        let before = state.distribution.accumulated;
        let (state, effects) = update(state, Event::Tick, &config, &mut rng);
        assert!((state.distribution.accumulated - before - 0.005).abs() < 1e-9);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_stale_tick_after_unmount_is_ignored() {
        let config = SimConfig::default();
        let mut rng = ScriptedRandom::constant(0.0);
        let (state, _) = update(PageState::default(), Event::Mount, &config, &mut rng);
        let (state, effects) = update(state, Event::Unmount, &config, &mut rng);
        assert_eq!(effects, vec![Effect::Cancel(Timer::Ticker)]);

        let before = state.distribution;
        let (state, effects) = update(state, Event::Tick, &config, &mut rng);
        assert_eq!(state.distribution, before);
        assert!(effects.is_empty());
    }
}
