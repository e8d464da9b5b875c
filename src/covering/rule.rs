use std::fmt;

use serde::Serialize;

/// A single-attribute classification rule:
/// "if `antecedent` is positive, predict `class_label`".
///
/// Only the attribute is stored, not the value that triggered it;
/// the rule is satisfied exactly when the attribute equals the
/// learner's positive value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub antecedent: String,
    pub class_label: String,
}

impl Rule {
    pub fn new<A, C>(antecedent: A, class_label: C) -> Self
        where A: ToString,
              C: ToString,
    {
        Self {
            antecedent: antecedent.to_string(),
            class_label: class_label.to_string(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "If {} then {}", self.antecedent, self.class_label)
    }
}
