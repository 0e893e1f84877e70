//! Presentation projection of [`PageState`]
//!
//! Everything a renderer needs, already formatted. Computed on demand, never stored.

use allocation::constants::display::{GAS_FEE, NETWORK_NAME, WALLET_ADDRESS};
use allocation::constants::{BALANCE_DECIMALS, QUOTE_DECIMALS, SAVINGS_RATE_APY};
use allocation::{estimated_after_cycle, format_amount, validate};
use crowdstake_core::{TokenKind, TxKind};
use serde::Serialize;

use crate::state::PageState;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub dark_mode: bool,
    pub wallet: WalletView,
    pub form: FormView,
    pub distribution: DistributionView,
    pub transacting: bool,
    pub last_tx_hash: Option<String>,
    pub receipt: Option<ReceiptView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub connected: bool,
    pub connecting: bool,
    pub connect_label: &'static str,
    /// Shown only while connected
    pub address: Option<&'static str>,
    pub balances: Option<BalanceView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceView {
    pub xdai: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub tab: TxKind,
    pub pay_amount: String,
    pub receive_amount: String,
    pub pay_token: TokenKind,
    pub receive_token: TokenKind,
    pub swapped: bool,
    pub max_amount: Option<String>,
    pub validation_error: Option<String>,
    pub inputs_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionView {
    pub accumulated: String,
    pub estimated_after_cycle: String,
    pub savings_rate_apy: &'static str,
    pub cycle: u32,
    pub days_remaining: u32,
    pub headline: String,
    pub progress_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    pub hash: String,
    pub hash_label: String,
    pub status: &'static str,
    pub network: &'static str,
    pub gas_fee: &'static str,
}

/// One FAQ accordion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqItem; 4] = [
    FaqItem {
        question: "How does the interest generation work?",
        answer: "The allocation system pools your group's funds together and uses them to generate interest through overcollateralized lending. The accumulated interest is then distributed proportionally to all participants based on their principal amount. Then you distribute your funds to your shared goal.",
    },
    FaqItem {
        question: "What are the benefits of participating?",
        answer: "By participating, you fundraise for free by generating interest on principal amount. You then can use the interest generated to fund a cause or goal meaningful to you.",
    },
    FaqItem {
        question: "How is the interest rate determined?",
        answer: "Interest rates are determined by market forces and the underlying value of the pooled assets. The exchange rate fluctuates based on supply, demand, and the performance of the underlying interest-generating strategies.",
    },
    FaqItem {
        question: "Can I withdraw my principal amount at anytime?",
        answer: "Yes, you can withdraw your principal amount at any time. Note that when you withdraw your funds, you stop earning interest.",
    },
];

impl PageView {
    pub fn project(state: &PageState) -> Self {
        let connected = state.wallet.connected;
        let transacting = state.transacting();
        let direction = state.form.direction();
        let pay_token = direction.pay_token();

        let validation = validate(state.form.pay_amount(), pay_token, &state.balances);
        let validation_error = match &validation {
            Err(err) if connected && !state.form.pay_amount().is_empty() => Some(err.to_string()),
            _ => None,
        };

        let submit_label = match (transacting, state.form.tab()) {
            (true, _) => "Processing...",
            (false, TxKind::Allocate) => "Allocate Tokens",
            (false, TxKind::Withdraw) => "Withdraw Tokens",
        };

        let distribution = &state.distribution;
        let days_remaining = distribution.days_label();

        Self {
            dark_mode: state.dark_mode,
            wallet: WalletView {
                connected,
                connecting: state.wallet.connecting,
                connect_label: match (connected, state.wallet.connecting) {
                    (true, _) => "Connected",
                    (false, true) => "Connecting...",
                    (false, false) => "Connect",
                },
                address: connected.then_some(WALLET_ADDRESS),
                balances: connected.then(|| BalanceView {
                    xdai: format_amount(state.balances.xdai, BALANCE_DECIMALS),
                    token: format_amount(state.balances.token, BALANCE_DECIMALS),
                }),
            },
            form: FormView {
                tab: state.form.tab(),
                pay_amount: state.form.pay_amount().to_string(),
                receive_amount: state.form.receive_amount().to_string(),
                pay_token,
                receive_token: direction.receive_token(),
                swapped: state.form.swapped(),
                max_amount: connected
                    .then(|| format_amount(state.balances.balance_of(pay_token), BALANCE_DECIMALS)),
                validation_error,
                inputs_enabled: !transacting,
                submit_enabled: connected && !transacting && validation.is_ok(),
                submit_label,
            },
            distribution: DistributionView {
                accumulated: format_amount(distribution.accumulated, QUOTE_DECIMALS),
                estimated_after_cycle: format_amount(
                    estimated_after_cycle(distribution.accumulated),
                    BALANCE_DECIMALS,
                ),
                savings_rate_apy: SAVINGS_RATE_APY,
                cycle: distribution.cycle,
                days_remaining,
                headline: format!("Distributing in {} days", days_remaining),
                progress_percent: distribution.progress_percent,
            },
            transacting,
            last_tx_hash: state.last_tx_hash.as_ref().map(|h| h.to_string()),
            receipt: match (&state.confirmed_tx_hash, state.receipt_visible) {
                (Some(hash), true) => Some(ReceiptView {
                    hash: hash.to_string(),
                    hash_label: hash.receipt_label(),
                    status: "Confirmed",
                    network: NETWORK_NAME,
                    gas_fee: GAS_FEE,
                }),
                _ => None,
            },
        }
    }
}
