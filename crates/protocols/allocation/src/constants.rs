//! Allocation Constants
//!
//! Cycle layout, display precision, and the static figures shown on the page.

/// Length of a distribution cycle in days
pub const CYCLE_DAYS: f64 = 30.0;

/// Seconds in a day; the countdown loses one of these per tick
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Cycle progress gained per tick (percent)
pub const PROGRESS_STEP: f64 = 0.1;

/// Progress at which a cycle completes (percent)
pub const PROGRESS_FULL: f64 = 100.0;

/// Progress a new cycle starts from (percent)
pub const PROGRESS_RESET: f64 = 5.0;

/// Per-tick accrual range: [MIN, MIN + SPAN)
pub const TICK_INCREMENT_MIN: f64 = 0.005;
pub const TICK_INCREMENT_SPAN: f64 = 0.01;

/// Multiplier applied to the accumulator for the 30-day estimate
pub const CYCLE_ESTIMATE_MULTIPLIER: f64 = 7.3;

/// Decimals of a derived receive amount and of the accumulator display
pub const QUOTE_DECIMALS: usize = 4;

/// Decimals of balance badges and the 30-day estimate
pub const BALANCE_DECIMALS: usize = 2;

/// Static savings rate shown on the distribution card
pub const SAVINGS_RATE_APY: &str = "5.70%";

/// Display-only figures for the mock wallet and receipt
pub mod display {
    pub const WALLET_ADDRESS: &str = "0x1234...5678";
    pub const NETWORK_NAME: &str = "Gnosis Chain";
    pub const GAS_FEE: &str = "0.00021 xDAI";
}
