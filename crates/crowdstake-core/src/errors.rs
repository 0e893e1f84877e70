//! Error types for crowdstake

use thiserror::Error;

use crate::TokenKind;

/// Errors surfaced by the simulated allocation flow.
///
/// None of these are fatal: each one ends up as a user-visible notification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Insufficient {token} balance")]
    InsufficientBalance {
        token: TokenKind,
        required: f64,
        available: f64,
    },

    #[error("Transaction failed")]
    SimulatedNetworkFailure,

    #[error("Failed to connect wallet")]
    SimulatedConnectionFailure,

    #[error("Connect a wallet first")]
    WalletNotConnected,

    #[error("A transaction is already in progress")]
    TransactionInFlight,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for crowdstake operations
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "invalid_amount",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::SimulatedNetworkFailure => "network_failure",
            Self::SimulatedConnectionFailure => "connection_failure",
            Self::WalletNotConnected => "wallet_not_connected",
            Self::TransactionInFlight => "transaction_in_flight",
            Self::Unexpected(_) => "internal_error",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount => 400,
            Self::InsufficientBalance { .. } | Self::WalletNotConnected => 422,
            Self::TransactionInFlight => 409,
            Self::SimulatedNetworkFailure | Self::SimulatedConnectionFailure => 503,
            Self::Unexpected(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_error_codes() {
        let err = SimError::InvalidAmount;
        assert_eq!(err.error_code(), "invalid_amount");
        assert_eq!(err.status_code(), 400);

        let err = SimError::InsufficientBalance {
            token: TokenKind::Token,
            required: 100.0,
            available: 50.0,
        };
        assert_eq!(err.error_code(), "insufficient_balance");
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_sim_error_messages() {
        assert_eq!(
            SimError::InvalidAmount.to_string(),
            "Please enter a valid amount"
        );
        let err = SimError::InsufficientBalance {
            token: TokenKind::Xdai,
            required: 9999.0,
            available: 100.0,
        };
        assert_eq!(err.to_string(), "Insufficient xDAI balance");
    }
}
