//! crowdstake-sim: the simulated allocation page as an event-driven state machine
//!
//! Every user input and every timer expiry is an [`Event`]. The reducer turns
//! `(state, event)` into a new state plus a list of [`Effect`]s; the [`Page`]
//! runtime carries those effects out against a manually advanced clock, a
//! seedable random source, a notification sink and a clipboard.

pub mod events;
pub mod notify;
pub mod page;
pub mod random;
pub mod reducer;
pub mod scheduler;
pub mod state;
pub mod ticker;
pub mod transaction;
pub mod view;
pub mod wallet;

pub use events::{Effect, Event, Timer};
pub use notify::{
    Clipboard, MemoryClipboard, Notification, NotificationLog, NotificationSink, NotifyAction,
    NotifyKind,
};
pub use page::Page;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use reducer::update;
pub use scheduler::Scheduler;
pub use state::{InFlight, PageState, TxStage, WalletConnection};
pub use transaction::precheck;
pub use view::{FaqItem, PageView, FAQ};
