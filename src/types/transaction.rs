//! Transaction data structures for rule-based fraud detection

use serde::{Deserialize, Serialize};

use crate::error::DetectorError;

/// Transaction type, following the PaySim category names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Transfer,
    CashOut,
    Payment,
    CashIn,
    Debit,
}

impl TransactionType {
    /// All supported transaction types, in the order the original dataset lists them.
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Transfer,
        TransactionType::CashOut,
        TransactionType::Payment,
        TransactionType::CashIn,
        TransactionType::Debit,
    ];

    /// Name as it appears in the PaySim data (`TRANSFER`, `CASH_OUT`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "TRANSFER",
            TransactionType::CashOut => "CASH_OUT",
            TransactionType::Payment => "PAYMENT",
            TransactionType::CashIn => "CASH_IN",
            TransactionType::Debit => "DEBIT",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transaction to be analyzed for fraud.
///
/// Field aliases match the PaySim column names so records exported from the
/// original dataset deserialize directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Transaction amount in currency units
    pub amount: f64,

    /// Balance of the origin account before the transaction
    #[serde(alias = "oldbalanceOrg")]
    pub old_balance_origin: f64,

    /// Balance of the origin account after the transaction.
    /// Collected but not consumed by any current rule.
    #[serde(alias = "newbalanceOrig")]
    pub new_balance_origin: f64,

    /// Transaction type
    #[serde(alias = "type")]
    pub transaction_type: TransactionType,

    /// Whether the destination account is a known merchant.
    /// Defaults to false when absent from the record.
    #[serde(default, alias = "MerchantDest")]
    pub is_merchant_destination: bool,
}

impl TransactionInput {
    /// Create a transaction with the given core fields and no merchant flag.
    pub fn new(
        amount: f64,
        old_balance_origin: f64,
        new_balance_origin: f64,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            amount,
            old_balance_origin,
            new_balance_origin,
            transaction_type,
            is_merchant_destination: false,
        }
    }

    /// Set the merchant-destination flag.
    pub fn with_merchant_destination(mut self, is_merchant: bool) -> Self {
        self.is_merchant_destination = is_merchant;
        self
    }

    /// Check that every numeric field is finite and non-negative.
    ///
    /// The rule engine calls this before evaluating; a malformed record
    /// produces no partial result.
    pub fn validate(&self) -> Result<(), DetectorError> {
        for (field, value) in [
            ("amount", self.amount),
            ("old_balance_origin", self.old_balance_origin),
            ("new_balance_origin", self.new_balance_origin),
        ] {
            if !value.is_finite() {
                return Err(DetectorError::invalid_input(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(DetectorError::invalid_input(field, "must be non-negative"));
            }
        }
        Ok(())
    }
}
