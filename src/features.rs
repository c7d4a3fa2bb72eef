//! Risk signal extraction for rule evaluation.
//!
//! This module derives the signals the rule table consumes from a raw
//! transaction, in one place so the engine and the report renderer agree
//! on their definitions.

use crate::types::{TransactionInput, TransactionType};

/// Signals derived from a single transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSignals {
    /// Amount divided by (origin balance + 1); a proxy for how much of the
    /// account the transaction drains. The +1 offset keeps the ratio defined
    /// for empty accounts.
    pub amount_ratio: f64,
    /// Transaction amount, carried through for the large-amount rule
    pub amount: f64,
    /// Transaction type
    pub transaction_type: TransactionType,
    /// Whether the destination account is a known merchant
    pub merchant_destination: bool,
}

impl RiskSignals {
    /// Extract signals from a transaction.
    pub fn extract(tx: &TransactionInput) -> Self {
        Self {
            amount_ratio: amount_ratio(tx.amount, tx.old_balance_origin),
            amount: tx.amount,
            transaction_type: tx.transaction_type,
            merchant_destination: tx.is_merchant_destination,
        }
    }

    /// Names of the extracted signals, in extraction order.
    pub fn signal_names() -> [&'static str; 4] {
        ["amount_ratio", "amount", "transaction_type", "merchant_destination"]
    }
}

/// Amount-to-balance ratio with the division-by-zero guard.
pub fn amount_ratio(amount: f64, old_balance_origin: f64) -> f64 {
    amount / (old_balance_origin + 1.0)
}
