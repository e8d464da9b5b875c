//! Greedy covering with single-attribute rules.
//!
//! In each round, [`RuleCover`] picks the attribute whose value
//! `"positive"` best recalls the positive class,
//! emits a rule on it, and retires every row where that attribute is
//! `"positive"`. It stops when no rows remain or no attribute clears
//! the confidence threshold.

pub mod rule;
pub mod confidence;
pub mod rule_cover;

pub use rule::Rule;
pub use confidence::{
    calculate_positive_confidence,
    find_best_antecedent,
};
pub use rule_cover::{RuleCover, discover_rules};
