use crate::Sample;
use crate::constants::{PERCENT, PROPORTION_DIGITS};
use crate::error::{MiniRulesError, Result};
use super::attribute_table::{CountTable, ProportionTable};


/// Convert every count into `count / n_rows * 100`,
/// rounded to 9 decimal digits.
/// An empty `sample` yields [`MiniRulesError::NoData`].
pub fn calculate_proportions(count: &CountTable, sample: &Sample)
    -> Result<ProportionTable>
{
    if sample.is_empty() {
        return Err(MiniRulesError::NoData);
    }
    let n_sample = sample.shape().0 as f64;

    let entries = count.iter()
        .map(|(attribute, values)| {
            let values = values.iter()
                .map(|(value, classes)| {
                    let classes = classes.iter()
                        .map(|(c, &n)| {
                            let p = n as f64 / n_sample * PERCENT;
                            (c.clone(), round_to(p, PROPORTION_DIGITS))
                        })
                        .collect();
                    (value.clone(), classes)
                })
                .collect();
            (attribute.to_string(), values)
        })
        .collect();

    Ok(ProportionTable::new(entries))
}


/// Round `x` to `digits` decimal digits, halves away from zero.
#[inline(always)]
pub(crate) fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}
