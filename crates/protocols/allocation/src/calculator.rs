//! Allocation Calculator
//!
//! Pure functions for amount parsing, validation, quoting and accrual.
//!
//! Quotes use a fixed exchange rate:
//!   xDAI -> TOKEN: receive = pay * rate
//!   TOKEN -> xDAI: receive = pay / rate

use crowdstake_core::{Direction, SimError, TokenKind};

use crate::constants::{
    CYCLE_ESTIMATE_MULTIPLIER, QUOTE_DECIMALS, TICK_INCREMENT_MIN, TICK_INCREMENT_SPAN,
};
use crate::state::WalletBalance;

/// Parse a user-entered amount. Surrounding whitespace is ignored.
///
/// Returns `None` for empty, unparseable, or non-finite input.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check an amount against the balance of the token being paid.
///
/// Rules are applied in order: the amount must parse to a positive number,
/// then it must not exceed the balance. Returns the parsed amount on success.
pub fn validate(amount: &str, token: TokenKind, balances: &WalletBalance) -> Result<f64, SimError> {
    let value = match parse_amount(amount) {
        Some(v) if v > 0.0 => v,
        _ => return Err(SimError::InvalidAmount),
    };

    let available = balances.balance_of(token);
    if value > available {
        return Err(SimError::InsufficientBalance {
            token,
            required: value,
            available,
        });
    }

    Ok(value)
}

/// Convert a pay amount into the receive amount for a direction
pub fn convert(amount: f64, direction: Direction, rate: f64) -> f64 {
    match direction {
        Direction::XdaiToToken => amount * rate,
        Direction::TokenToXdai => amount / rate,
    }
}

/// Receive amount exactly as the form displays it (rounded to 4 decimals)
pub fn quote(amount: f64, direction: Direction, rate: f64) -> f64 {
    let raw = convert(amount, direction, rate);
    format_amount(raw, QUOTE_DECIMALS).parse().unwrap_or(raw)
}

/// Fixed-point rendering (`toFixed` style)
pub fn format_amount(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Compute the receive field for the given pay text.
///
/// - empty pay text clears the receive field (`Some("")`)
/// - a numeric pay text yields the quote with 4 decimals
/// - anything else leaves the receive field untouched (`None`)
pub fn derive_receive(pay: &str, direction: Direction, rate: f64) -> Option<String> {
    if pay.is_empty() {
        return Some(String::new());
    }
    parse_amount(pay).map(|amount| format_amount(convert(amount, direction, rate), QUOTE_DECIMALS))
}

/// Accumulator growth for one tick, given a uniform draw in [0, 1)
pub fn tick_increment(draw: f64) -> f64 {
    let draw = if draw.is_finite() { draw.clamp(0.0, 1.0) } else { 0.0 };
    let increment = TICK_INCREMENT_MIN + draw * TICK_INCREMENT_SPAN;
    // Keep the upper bound exclusive even for a draw of exactly 1.0
    increment.min(TICK_INCREMENT_MIN + TICK_INCREMENT_SPAN - f64::EPSILON)
}

/// Projected accumulator after a full cycle
pub fn estimated_after_cycle(accumulated: f64) -> f64 {
    accumulated * CYCLE_ESTIMATE_MULTIPLIER
}
