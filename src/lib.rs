//! BUSTED AI - Rule-Based Fraud Detector
//!
//! Classifies a single transaction as fraudulent or legitimate using a fixed
//! rule table injected into a pure evaluation engine.

pub mod config;
pub mod error;
pub mod features;
pub mod report;
pub mod rules;
pub mod types;

pub use config::AppConfig;
pub use error::DetectorError;
pub use features::RiskSignals;
pub use rules::{RuleEngine, RuleSet};
pub use types::{DetectionMethod, RiskLevel, TransactionInput, TransactionType, Verdict};
