//! Type definitions for the fraud detector

pub mod transaction;
pub mod verdict;

pub use transaction::{TransactionInput, TransactionType};
pub use verdict::{DetectionMethod, RiskLevel, Verdict};
