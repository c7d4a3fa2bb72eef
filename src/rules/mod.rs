//! Rule table and rule evaluation engine

pub mod engine;
pub mod ruleset;

pub use engine::RuleEngine;
pub use ruleset::{RuleOutcome, RuleSet};
