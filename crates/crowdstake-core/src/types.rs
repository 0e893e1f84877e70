//! Core type definitions for crowdstake

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction hash (`0x` + 32 bytes, hex-encoded)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl TxHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Build a hash from 32 raw bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 10 characters followed by an ellipsis, as shown in toasts
    pub fn short(&self) -> String {
        format!("{}...", prefix(&self.0, 10))
    }

    /// `0x12345678...9abcdef0` form used by the receipt dialog
    pub fn receipt_label(&self) -> String {
        let tail_start = self.0.len().saturating_sub(8);
        format!(
            "{}...{}",
            prefix(&self.0, 10),
            self.0.get(tail_start..).unwrap_or_default()
        )
    }
}

fn prefix(s: &str, n: usize) -> &str {
    s.get(..n.min(s.len())).unwrap_or(s)
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two assets of the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "xDAI")]
    Xdai,
    #[serde(rename = "TOKEN")]
    Token,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xdai => "xDAI",
            Self::Token => "TOKEN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pool operation; doubles as the selected tab of the allocation card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    #[default]
    Allocate,
    Withdraw,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allocate => "allocate",
            Self::Withdraw => "withdraw",
        }
    }

    /// Noun used in the success toast
    pub fn outcome_label(&self) -> &'static str {
        match self {
            Self::Allocate => "Allocation",
            Self::Withdraw => "Withdrawal",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction between xDAI and TOKEN.
///
/// Used both for which token a form pays and receives (`for_form`) and for
/// which way the exchange rate is applied (`for_rate`). The two differ on
/// the withdraw tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    XdaiToToken,
    TokenToXdai,
}

impl Direction {
    /// Tokens paid and received: withdrawals always pay TOKEN, allocations
    /// follow the swap toggle.
    pub fn for_form(tab: TxKind, swapped: bool) -> Self {
        match tab {
            TxKind::Withdraw => Self::TokenToXdai,
            TxKind::Allocate => Self::for_rate(swapped),
        }
    }

    /// How the rate converts the pay amount: `* rate` unless swapped, then
    /// `/ rate`. Independent of the tab.
    pub fn for_rate(swapped: bool) -> Self {
        if swapped {
            Self::TokenToXdai
        } else {
            Self::XdaiToToken
        }
    }

    pub fn pay_token(&self) -> TokenKind {
        match self {
            Self::XdaiToToken => TokenKind::Xdai,
            Self::TokenToXdai => TokenKind::Token,
        }
    }

    pub fn receive_token(&self) -> TokenKind {
        match self {
            Self::XdaiToToken => TokenKind::Token,
            Self::TokenToXdai => TokenKind::Xdai,
        }
    }
}
