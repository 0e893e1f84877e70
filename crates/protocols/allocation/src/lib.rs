//! Crowdstaking Allocation Rules
//!
//! Users allocate xDAI into a shared pool (receiving TOKEN at a fixed rate) or
//! withdraw TOKEN back to xDAI. The pool's accrued interest is displayed as a
//! distribution accumulator that grows every tick and pays out per cycle.
//!
//! Everything in this crate is pure: no clock, no randomness source, no I/O.

pub mod calculator;
pub mod constants;
pub mod state;

// Re-exports
pub use calculator::{
    convert, derive_receive, estimated_after_cycle, format_amount, parse_amount,
    quote, tick_increment, validate,
};
pub use state::{DistributionState, FormState, PendingTransaction, WalletBalance};
