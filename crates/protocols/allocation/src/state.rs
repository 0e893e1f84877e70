//! Allocation State Types
//!
//! Wallet balances, the allocation form, in-flight transactions and the
//! distribution card.

use crowdstake_core::{Direction, SimError, TokenKind, TxHash, TxKind};
use serde::{Deserialize, Serialize};

use crate::calculator::derive_receive;
use crate::constants::{CYCLE_DAYS, PROGRESS_FULL, PROGRESS_RESET, PROGRESS_STEP, SECONDS_PER_DAY};

/// Mock wallet balances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub xdai: f64,
    pub token: f64,
}

impl WalletBalance {
    pub fn new(xdai: f64, token: f64) -> Self {
        Self { xdai, token }
    }

    pub fn balance_of(&self, token: TokenKind) -> f64 {
        match token {
            TokenKind::Xdai => self.xdai,
            TokenKind::Token => self.token,
        }
    }

    fn balance_mut(&mut self, token: TokenKind) -> &mut f64 {
        match token {
            TokenKind::Xdai => &mut self.xdai,
            TokenKind::Token => &mut self.token,
        }
    }

    /// Debit `pay_amount` of `pay_token` and credit `receive_amount` of
    /// `receive_token`. Either both legs apply or neither does.
    pub fn settle(
        &mut self,
        pay_token: TokenKind,
        pay_amount: f64,
        receive_token: TokenKind,
        receive_amount: f64,
    ) -> Result<(), SimError> {
        if pay_token == receive_token {
            return Err(SimError::Unexpected(format!(
                "cannot settle {} against itself",
                pay_token
            )));
        }
        for amount in [pay_amount, receive_amount] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(SimError::Unexpected(format!(
                    "invalid settlement amount {}",
                    amount
                )));
            }
        }
        let available = self.balance_of(pay_token);
        if pay_amount > available {
            return Err(SimError::Unexpected(format!(
                "debit of {} {} exceeds balance {}",
                pay_amount, pay_token, available
            )));
        }

        *self.balance_mut(pay_token) -= pay_amount;
        *self.balance_mut(receive_token) += receive_amount;
        Ok(())
    }
}

/// A submitted transaction awaiting its simulated outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransaction {
    pub kind: TxKind,
    pub pay_token: TokenKind,
    pub receive_token: TokenKind,
    pub pay_amount: f64,
    pub receive_amount: f64,
    pub hash: TxHash,
}

/// The allocate/withdraw form.
///
/// The receive field is a projection of the pay field and never set directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    tab: TxKind,
    pay_amount: String,
    receive_amount: String,
    swapped: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> TxKind {
        self.tab
    }

    pub fn pay_amount(&self) -> &str {
        &self.pay_amount
    }

    pub fn receive_amount(&self) -> &str {
        &self.receive_amount
    }

    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// Tokens this form pays and receives
    pub fn direction(&self) -> Direction {
        Direction::for_form(self.tab, self.swapped)
    }

    /// Rate direction used to quote the receive field
    pub fn conversion(&self) -> Direction {
        Direction::for_rate(self.swapped)
    }

    pub fn set_pay(&mut self, text: impl Into<String>, rate: f64) {
        self.pay_amount = text.into();
        self.reproject(rate);
    }

    /// Flip the direction; the previous receive text becomes the pay text.
    ///
    /// Only the allocate tab has a swap control. Returns false, leaving the
    /// form untouched, on the withdraw tab.
    pub fn swap(&mut self, rate: f64) -> bool {
        if self.tab == TxKind::Withdraw {
            return false;
        }
        self.swapped = !self.swapped;
        self.pay_amount = std::mem::take(&mut self.receive_amount);
        self.reproject(rate);
        true
    }

    pub fn select_tab(&mut self, tab: TxKind, rate: f64) {
        self.tab = tab;
        self.reproject(rate);
    }

    pub fn clear(&mut self) {
        self.pay_amount.clear();
        self.receive_amount.clear();
    }

    fn reproject(&mut self, rate: f64) {
        if let Some(receive) = derive_receive(&self.pay_amount, self.conversion(), rate) {
            self.receive_amount = receive;
        }
    }
}

/// Distribution card: accrued interest and the cycle countdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionState {
    pub accumulated: f64,
    pub progress_percent: f64,
    pub days_remaining: f64,
    pub cycle: u32,
}

impl DistributionState {
    pub fn new(accumulated: f64, progress_percent: f64, days_remaining: f64, cycle: u32) -> Self {
        Self {
            accumulated,
            progress_percent,
            days_remaining,
            cycle,
        }
    }

    /// Apply one ticker step. Returns true when a new cycle started.
    pub fn tick(&mut self, increment: f64) -> bool {
        self.credit(increment);

        let mut rolled = false;
        let progress = self.progress_percent + PROGRESS_STEP;
        if progress >= PROGRESS_FULL {
            self.progress_percent = PROGRESS_RESET;
            self.days_remaining = CYCLE_DAYS;
            self.cycle = self.cycle.saturating_add(1);
            rolled = true;
            tracing::debug!(cycle = self.cycle, "distribution cycle rolled over");
        } else {
            self.progress_percent = progress;
        }

        self.days_remaining = (self.days_remaining - 1.0 / SECONDS_PER_DAY).max(0.0);
        rolled
    }

    /// Add to the accumulator. Negative or non-finite amounts are ignored.
    pub fn credit(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.accumulated += amount;
        }
    }

    /// Whole days shown on the card
    pub fn days_label(&self) -> u32 {
        self.days_remaining.ceil().max(0.0) as u32
    }
}
