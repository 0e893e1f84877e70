//! Data Transfer Objects for API requests and responses

use crowdstake_core::{SimError, TxKind};
use crowdstake_sim::PageView;
use serde::{Deserialize, Serialize};

/// GET /health
///
/// `status` is "ok" while the clock driver has the page mounted, "idle" otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub mounted: bool,
    pub transacting: bool,
    pub pending_timers: usize,
    /// Simulated time since start, in milliseconds
    pub clock_ms: u64,
}

/// POST /form/pay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayAmountRequest {
    pub amount: String,
}

/// POST /form/tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabRequest {
    pub tab: TxKind,
}

/// POST /tx/submit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub kind: TxKind,
}

/// POST /receipt/copy
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResponse {
    /// Text now on the clipboard, if a hash was available
    pub copied: Option<String>,
    pub page: PageView,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}

impl From<&SimError> for ApiError {
    fn from(err: &SimError) -> Self {
        Self::new(err.error_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_sim_error() {
        let err = ApiError::from(&SimError::InvalidAmount);
        assert_eq!(err.code, "invalid_amount");
        assert_eq!(err.message, "Please enter a valid amount");
    }

    #[test]
    fn test_submit_request_parses_kind() {
        let req: SubmitRequest = serde_json::from_str(r#"{"kind":"withdraw"}"#).unwrap();
        assert_eq!(req.kind, TxKind::Withdraw);
    }
}
