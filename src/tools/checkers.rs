//! This file defines some functions that checks some pre-conditions
//! E.g., range of the confidence threshold

/// Check the confidence threshold.
#[inline(always)]
pub fn min_confidence(threshold: f64) {
    assert!(
        (0f64..=1f64).contains(&threshold),
        "min_confidence must be in [0, 1]. got {threshold}."
    );
}

/// Check the marker value.
#[inline(always)]
pub fn positive_value(value: &str) {
    assert!(!value.is_empty(), "positive value must not be empty");
}
