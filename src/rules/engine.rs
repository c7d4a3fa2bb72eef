//! Rule evaluation engine for fraud detection

use tracing::{debug, info};

use crate::error::DetectorError;
use crate::features::RiskSignals;
use crate::rules::ruleset::{
    RuleSet, HIGH_RISK_PATTERN, LARGE_AMOUNT_NON_MERCHANT, LEGITIMATE, MERCHANT_LOWER_RISK,
};
use crate::types::{TransactionInput, Verdict};

/// Evaluates transactions against an injected rule table.
///
/// Pure and deterministic: the same input and rule set always produce the
/// same classification. Rules are checked in priority order and the first
/// match wins.
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Create an engine with the given rule table.
    pub fn new(rules: RuleSet) -> Self {
        info!(
            high_risk_types = ?rules.high_risk_types,
            suspicious_ratio = rules.suspicious_ratio,
            large_amount = rules.large_amount,
            "Rule engine initialized"
        );
        Self { rules }
    }

    /// Get the rule table in use.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify a single transaction.
    ///
    /// Validates the input first; a malformed record yields
    /// [`DetectorError::InvalidInput`] and no partial verdict.
    pub fn evaluate(&self, tx: &TransactionInput) -> Result<Verdict, DetectorError> {
        tx.validate()?;

        let signals = RiskSignals::extract(tx);
        let high_risk_type = self.rules.is_high_risk(signals.transaction_type);

        let outcome = if high_risk_type
            && signals.amount_ratio > self.rules.suspicious_ratio
            && !signals.merchant_destination
        {
            HIGH_RISK_PATTERN
        } else if signals.amount > self.rules.large_amount && !signals.merchant_destination {
            LARGE_AMOUNT_NON_MERCHANT
        } else if high_risk_type && signals.merchant_destination {
            MERCHANT_LOWER_RISK
        } else {
            LEGITIMATE
        };

        debug!(
            transaction_type = %signals.transaction_type,
            amount_ratio = signals.amount_ratio,
            merchant_destination = signals.merchant_destination,
            fraud_detected = outcome.fraud_detected,
            method = %outcome.detection_method,
            "Transaction evaluated"
        );

        Ok(Verdict::new(
            outcome.fraud_detected,
            outcome.confidence,
            outcome.detection_method,
            outcome.ml_confidence,
            outcome.ai_confidence,
            signals.amount_ratio,
        ))
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DetectionMethod, RiskLevel, TransactionType};

    fn engine() -> RuleEngine {
        RuleEngine::default()
    }

    fn tx(amount: f64, old_balance: f64, tx_type: TransactionType, merchant: bool) -> TransactionInput {
        TransactionInput::new(amount, old_balance, 0.0, tx_type).with_merchant_destination(merchant)
    }

    #[test]
    fn test_high_risk_pattern() {
        // ratio = 6000/1001 ≈ 5.99 > 0.7, TRANSFER, non-merchant
        let verdict = engine()
            .evaluate(&tx(6000.0, 1000.0, TransactionType::Transfer, false))
            .unwrap();

        assert!(verdict.fraud_detected);
        assert_eq!(verdict.confidence, 0.92);
        assert_eq!(verdict.detection_method, DetectionMethod::HighRiskPattern);
        assert_eq!(verdict.ml_confidence, 0.89);
        assert_eq!(verdict.ai_confidence, 0.92);
        assert_eq!(verdict.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_large_amount_to_non_merchant() {
        // ratio ≈ 0.06 keeps rule 1 out; amount > 5000 triggers rule 2
        let verdict = engine()
            .evaluate(&tx(6000.0, 100_000.0, TransactionType::Payment, false))
            .unwrap();

        assert!(verdict.fraud_detected);
        assert_eq!(verdict.confidence, 0.78);
        assert_eq!(verdict.detection_method, DetectionMethod::LargeAmountNonMerchant);
        assert_eq!(verdict.ml_confidence, 0.75);
    }

    #[test]
    fn test_merchant_lowers_risk() {
        // ratio 3.0 would trigger rule 1, but merchant destination blocks it;
        // amount below 5000 skips rule 2; rule 3 matches
        let verdict = engine()
            .evaluate(&tx(3000.0, 1000.0, TransactionType::CashOut, true))
            .unwrap();

        assert!(!verdict.fraud_detected);
        assert_eq!(verdict.confidence, 0.85);
        assert_eq!(verdict.detection_method, DetectionMethod::MerchantLowerRisk);
        assert_eq!(verdict.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_legitimate_transaction() {
        let verdict = engine()
            .evaluate(&tx(100.0, 5000.0, TransactionType::Payment, false))
            .unwrap();

        assert!(!verdict.fraud_detected);
        assert_eq!(verdict.confidence, 0.96);
        assert_eq!(verdict.detection_method, DetectionMethod::Legitimate);
        assert_eq!(verdict.ml_confidence, 0.94);
        assert_eq!(verdict.ai_confidence, 0.96);
    }

    #[test]
    fn test_priority_high_risk_beats_large_amount() {
        // Both rule 1 and rule 2 apply; rule 1 must win
        let verdict = engine()
            .evaluate(&tx(6000.0, 1000.0, TransactionType::CashOut, false))
            .unwrap();

        assert_eq!(verdict.detection_method, DetectionMethod::HighRiskPattern);
        assert_eq!(verdict.confidence, 0.92);
    }

    #[test]
    fn test_large_amount_to_merchant_is_not_rule_two() {
        // Merchant destination disables the large-amount rule; high-risk type
        // plus merchant falls through to rule 3
        let verdict = engine()
            .evaluate(&tx(10_000.0, 100_000.0, TransactionType::Transfer, true))
            .unwrap();

        assert!(!verdict.fraud_detected);
        assert_eq!(verdict.detection_method, DetectionMethod::MerchantLowerRisk);
    }

    #[test]
    fn test_large_amount_low_risk_type_to_merchant_is_legitimate() {
        // PAYMENT to a merchant never reaches rule 3; falls through to rule 4
        let verdict = engine()
            .evaluate(&tx(10_000.0, 100_000.0, TransactionType::Payment, true))
            .unwrap();

        assert_eq!(verdict.detection_method, DetectionMethod::Legitimate);
        assert_eq!(verdict.confidence, 0.96);
    }

    #[test]
    fn test_zero_balance_uses_plus_one_offset() {
        // old_balance = 0 → ratio = amount / 1
        let verdict = engine()
            .evaluate(&tx(1.0, 0.0, TransactionType::Transfer, false))
            .unwrap();

        assert_eq!(verdict.amount_ratio, 1.0);
        // ratio 1.0 > 0.7 → rule 1
        assert_eq!(verdict.detection_method, DetectionMethod::HighRiskPattern);
    }

    #[test]
    fn test_ratio_at_threshold_does_not_trigger() {
        // ratio must be strictly greater than 0.7
        let verdict = engine()
            .evaluate(&tx(0.7, 0.0, TransactionType::Transfer, false))
            .unwrap();

        assert_eq!(verdict.detection_method, DetectionMethod::Legitimate);
    }

    #[test]
    fn test_amount_at_threshold_does_not_trigger() {
        // amount must be strictly greater than 5000
        let verdict = engine()
            .evaluate(&tx(5000.0, 100_000.0, TransactionType::Payment, false))
            .unwrap();

        assert_eq!(verdict.detection_method, DetectionMethod::Legitimate);
    }

    #[test]
    fn test_cash_in_and_debit_are_low_risk() {
        for tx_type in [TransactionType::CashIn, TransactionType::Debit] {
            let verdict = engine().evaluate(&tx(4000.0, 100.0, tx_type, false)).unwrap();
            assert_eq!(verdict.detection_method, DetectionMethod::Legitimate);
        }
    }

    #[test]
    fn test_invalid_input_rejected() {
        let result = engine().evaluate(&tx(-5.0, 1000.0, TransactionType::Payment, false));
        assert!(matches!(result, Err(DetectorError::InvalidInput { .. })));
    }

    #[test]
    fn test_deterministic() {
        let input = tx(6000.0, 1000.0, TransactionType::Transfer, false);
        let e = engine();
        let a = e.evaluate(&input).unwrap();
        let b = e.evaluate(&input).unwrap();

        assert_eq!(a.fraud_detected, b.fraud_detected);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.detection_method, b.detection_method);
    }

    #[test]
    fn test_custom_thresholds() {
        let rules = RuleSet {
            high_risk_types: vec![TransactionType::Debit],
            suspicious_ratio: 0.1,
            large_amount: 50.0,
        };
        let engine = RuleEngine::new(rules);

        let verdict = engine
            .evaluate(&tx(100.0, 100.0, TransactionType::Debit, false))
            .unwrap();
        assert_eq!(verdict.detection_method, DetectionMethod::HighRiskPattern);

        let verdict = engine
            .evaluate(&tx(100.0, 10_000.0, TransactionType::Payment, false))
            .unwrap();
        assert_eq!(verdict.detection_method, DetectionMethod::LargeAmountNonMerchant);
    }
}
