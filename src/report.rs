//! Plain-text rendering of verdicts and the system information panel.
//!
//! Everything here is display glue; the percentages and accuracy figures in
//! the system panel are fixed display strings, not computed values.

use std::fmt::Write;

use crate::types::{RiskLevel, TransactionInput, TransactionType, Verdict};

fn pct(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Render a verdict the way the analyst-facing UI presents it.
pub fn render_verdict(verdict: &Verdict, tx: &TransactionInput) -> String {
    let mut out = String::new();

    if verdict.fraud_detected {
        let _ = writeln!(out, "FRAUD DETECTED!");
    } else {
        let _ = writeln!(out, "LEGITIMATE TRANSACTION");
    }

    let _ = writeln!(out, "Confidence:       {}", pct(verdict.confidence));
    let _ = writeln!(out, "Detection Method: {}", verdict.detection_method);
    let _ = writeln!(out, "Risk Level:       {}", verdict.risk_level.as_str());

    let action = match verdict.risk_level {
        RiskLevel::High => "Transaction flagged for manual review",
        RiskLevel::Low => "Transaction appears safe to process",
    };
    let _ = writeln!(out, "Action:           {}", action);

    // Context note mirroring the merchant flag, one line per outcome quadrant
    let note = match (verdict.fraud_detected, tx.is_merchant_destination) {
        (true, true) => "Even though destination is merchant, transaction shows high-risk patterns",
        (true, false) => "Non-merchant destination combined with suspicious patterns",
        (false, true) => "Merchant transaction - typically lower risk profile",
        (false, false) => "No suspicious patterns observed",
    };
    let _ = writeln!(out, "Note:             {}", note);

    let _ = writeln!(
        out,
        "ML Confidence: {} | AI Confidence: {}",
        pct(verdict.ml_confidence),
        pct(verdict.ai_confidence)
    );

    out
}

/// Render the static system information panel shown next to each analysis.
pub fn render_system_info(tx: &TransactionInput, amount_ratio: f64) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "╔══════════════════════════════════════════════╗");
    let _ = writeln!(out, "║              SYSTEM INFORMATION              ║");
    let _ = writeln!(out, "╠══════════════════════════════════════════════╣");
    let _ = writeln!(out, "║ Detection Rules:                             ║");
    let _ = writeln!(out, "║  - High-risk transaction types               ║");
    let _ = writeln!(out, "║    (TRANSFER, CASH_OUT)                      ║");
    let _ = writeln!(out, "║  - Amount-to-balance ratio analysis          ║");
    let _ = writeln!(out, "║  - Merchant vs non-merchant destinations     ║");
    let _ = writeln!(out, "║  - Large amount monitoring                   ║");
    let _ = writeln!(out, "╠══════════════════════════════════════════════╣");
    let _ = writeln!(out, "║ System Accuracy:      99.1%                  ║");
    let _ = writeln!(out, "║ Fraud Detection Rate: 98.3%                  ║");
    let _ = writeln!(out, "║ False Positive Rate:  < 1%                   ║");
    let _ = writeln!(out, "╚══════════════════════════════════════════════╝");

    let _ = writeln!(out, "Current Context:");
    let _ = writeln!(out, "  Type:         {}", tx.transaction_type);
    let _ = writeln!(
        out,
        "  Merchant:     {}",
        if tx.is_merchant_destination { "Yes" } else { "No" }
    );
    let _ = writeln!(out, "  Amount Ratio: {}", pct(amount_ratio));

    out
}

/// Supported transaction types, for help text.
pub fn supported_types() -> String {
    TransactionType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
