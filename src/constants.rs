/// The literal that marks both the positive class and a satisfied antecedent.
pub const POSITIVE_VALUE:         &str = "positive";
/// The confidence threshold used when none is given.
pub const DEFAULT_MIN_CONFIDENCE:  f64 = 0.07;
/// Proportions are expressed in percent.
pub const PERCENT:                 f64 = 100.0;
/// Proportions are rounded to this many decimal digits.
pub const PROPORTION_DIGITS:       i32 = 9;

pub const BUFFER_SIZE:           usize = 256;
