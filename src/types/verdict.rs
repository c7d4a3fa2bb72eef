//! Classification verdict data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display-only risk level derived from the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    /// HIGH when fraud was detected, LOW otherwise.
    pub fn from_fraud(fraud_detected: bool) -> Self {
        if fraud_detected {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Which rule produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// High-risk type draining most of the origin balance to a non-merchant
    HighRiskPattern,
    /// Amount above the large-amount threshold sent to a non-merchant
    LargeAmountNonMerchant,
    /// High-risk type, but the destination is a known merchant
    MerchantLowerRisk,
    /// No rule matched
    Legitimate,
}

impl DetectionMethod {
    /// Human-readable label shown next to the verdict.
    pub fn label(&self) -> &'static str {
        match self {
            DetectionMethod::HighRiskPattern => "High-Risk Pattern Detected",
            DetectionMethod::LargeAmountNonMerchant => "Large Amount to Non-Merchant",
            DetectionMethod::MerchantLowerRisk => "Merchant Transaction - Lower Risk",
            DetectionMethod::Legitimate => "Legitimate Transaction",
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating a single transaction against the rule table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Unique verdict identifier
    pub verdict_id: String,

    /// Whether the transaction was classified as fraud
    pub fraud_detected: bool,

    /// Confidence in the verdict (0.0 - 1.0)
    pub confidence: f64,

    /// Rule that produced the verdict
    pub detection_method: DetectionMethod,

    /// Secondary confidence reported by the "ML" layer (0.0 - 1.0)
    pub ml_confidence: f64,

    /// Secondary confidence reported by the "AI" layer (0.0 - 1.0)
    pub ai_confidence: f64,

    /// Display-only risk level (HIGH when fraud, LOW otherwise)
    pub risk_level: RiskLevel,

    /// Amount-to-balance ratio computed during evaluation, kept for display
    pub amount_ratio: f64,

    /// Verdict generation timestamp
    pub timestamp: DateTime<Utc>,
}

impl Verdict {
    /// Create a verdict for the given rule outcome.
    pub fn new(
        fraud_detected: bool,
        confidence: f64,
        detection_method: DetectionMethod,
        ml_confidence: f64,
        ai_confidence: f64,
        amount_ratio: f64,
    ) -> Self {
        Self {
            verdict_id: uuid::Uuid::new_v4().to_string(),
            fraud_detected,
            confidence,
            detection_method,
            ml_confidence,
            ai_confidence,
            risk_level: RiskLevel::from_fraud(fraud_detected),
            amount_ratio,
            timestamp: Utc::now(),
        }
    }
}
