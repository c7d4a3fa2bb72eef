//! The rule table driving fraud classification.
//!
//! The original system shipped this as a pickled "AI model"; it is in fact a
//! plain threshold table, so here it is a configuration struct constructed
//! in-process and injected into the engine.

use serde::{Deserialize, Serialize};

use crate::types::{DetectionMethod, TransactionType};

/// Thresholds consumed by the rule engine.
///
/// All values are fixed configuration, never derived from data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Transaction types treated as high-risk
    #[serde(default = "default_high_risk_types")]
    pub high_risk_types: Vec<TransactionType>,

    /// Amount-to-balance ratio above which a high-risk transfer is suspicious
    #[serde(default = "default_suspicious_ratio")]
    pub suspicious_ratio: f64,

    /// Amount above which a transaction to a non-merchant is suspicious
    #[serde(default = "default_large_amount")]
    pub large_amount: f64,
}

fn default_high_risk_types() -> Vec<TransactionType> {
    vec![TransactionType::Transfer, TransactionType::CashOut]
}

fn default_suspicious_ratio() -> f64 {
    0.7
}

fn default_large_amount() -> f64 {
    5000.0
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            high_risk_types: default_high_risk_types(),
            suspicious_ratio: default_suspicious_ratio(),
            large_amount: default_large_amount(),
        }
    }
}

impl RuleSet {
    /// Whether the given type counts as high-risk under this rule set.
    pub fn is_high_risk(&self, transaction_type: TransactionType) -> bool {
        self.high_risk_types.contains(&transaction_type)
    }
}

/// Fixed outcome constants attached to each rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleOutcome {
    pub fraud_detected: bool,
    pub confidence: f64,
    pub detection_method: DetectionMethod,
    pub ml_confidence: f64,
    pub ai_confidence: f64,
}

/// High-risk type draining the origin account to a non-merchant.
pub const HIGH_RISK_PATTERN: RuleOutcome = RuleOutcome {
    fraud_detected: true,
    confidence: 0.92,
    detection_method: DetectionMethod::HighRiskPattern,
    ml_confidence: 0.89,
    ai_confidence: 0.92,
};

/// Large amount sent to a non-merchant.
pub const LARGE_AMOUNT_NON_MERCHANT: RuleOutcome = RuleOutcome {
    fraud_detected: true,
    confidence: 0.78,
    detection_method: DetectionMethod::LargeAmountNonMerchant,
    ml_confidence: 0.75,
    ai_confidence: 0.78,
};

/// High-risk type, but the destination is a known merchant.
pub const MERCHANT_LOWER_RISK: RuleOutcome = RuleOutcome {
    fraud_detected: false,
    confidence: 0.85,
    detection_method: DetectionMethod::MerchantLowerRisk,
    ml_confidence: 0.82,
    ai_confidence: 0.85,
};

/// No rule matched.
pub const LEGITIMATE: RuleOutcome = RuleOutcome {
    fraud_detected: false,
    confidence: 0.96,
    detection_method: DetectionMethod::Legitimate,
    ml_confidence: 0.94,
    ai_confidence: 0.96,
};
