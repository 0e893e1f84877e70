//! The page runtime: reducer + scheduler + collaborators

use std::time::Duration;

use crowdstake_core::{SimConfig, SimError, TxKind};

use crate::events::{Effect, Event};
use crate::notify::{Clipboard, MemoryClipboard, NotificationLog, NotificationSink, NotifyKind};
use crate::random::RandomSource;
use crate::reducer::update;
use crate::scheduler::Scheduler;
use crate::state::PageState;
use crate::transaction::precheck;
use crate::view::PageView;

/// A running instance of the allocation page.
///
/// Time is simulated: nothing happens between calls unless [`Page::advance`]
/// moves the clock, which fires every timer that comes due on the way.
pub struct Page<N = NotificationLog, C = MemoryClipboard> {
    config: SimConfig,
    state: PageState,
    scheduler: Scheduler,
    rng: Box<dyn RandomSource>,
    sink: N,
    clipboard: C,
}

impl Page {
    /// Page with an in-memory notification log and clipboard
    pub fn with_defaults(config: SimConfig, rng: Box<dyn RandomSource>) -> Self {
        Self::new(config, rng, NotificationLog::default(), MemoryClipboard::default())
    }
}

impl<N: NotificationSink, C: Clipboard> Page<N, C> {
    pub fn new(config: SimConfig, rng: Box<dyn RandomSource>, sink: N, clipboard: C) -> Self {
        Self {
            state: PageState::from_config(&config),
            config,
            scheduler: Scheduler::new(),
            rng,
            sink,
            clipboard,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn view(&self) -> PageView {
        PageView::project(&self.state)
    }

    pub fn notifications(&self) -> &N {
        &self.sink
    }

    pub fn notifications_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Simulated time since the page was created
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Apply an event immediately and carry out its effects
    pub fn dispatch(&mut self, event: Event) {
        tracing::trace!(?event, "dispatch");
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, event, &self.config, self.rng.as_mut());
        self.state = state;
        for effect in effects {
            self.perform(effect);
        }
    }

    /// Submit a transaction, reporting why it was turned away if it was.
    ///
    /// The event is dispatched either way, so rejections still notify.
    pub fn try_submit(&mut self, kind: TxKind) -> Result<(), SimError> {
        let check = precheck(&self.state, kind).map(|_| ());
        self.dispatch(Event::Submit(kind));
        check
    }

    /// Move the clock forward by `by`, firing due timers in order.
    ///
    /// Returns the number of events fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.scheduler.now() + by;
        let mut fired = 0;
        while let Some(event) = self.scheduler.pop_due(target) {
            self.dispatch(event);
            fired += 1;
        }
        self.scheduler.set_now(target);
        fired
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(notification) => {
                match notification.kind {
                    NotifyKind::Error => {
                        tracing::warn!(message = %notification.message, "notification")
                    }
                    _ => tracing::debug!(message = %notification.message, "notification"),
                }
                self.sink.notify(notification);
            }
            Effect::Schedule {
                timer,
                after,
                event,
            } => self.scheduler.schedule(timer, after, event),
            Effect::Cancel(timer) => {
                let dropped = self.scheduler.cancel(timer);
                tracing::debug!(?timer, dropped, "timer cancelled");
            }
            Effect::CopyToClipboard(text) => self.clipboard.write_text(&text),
        }
    }
}
