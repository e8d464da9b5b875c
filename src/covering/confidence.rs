use log::debug;

use crate::Sample;
use crate::error::Result;


/// Among the rows whose class is `positive`,
/// the fraction whose `antecedent` is also `positive`.
///
/// The denominator is the number of positive-class rows,
/// not the number of rows where the antecedent holds.
/// Returns `0.0` if no positive-class rows remain.
pub fn calculate_positive_confidence(
    sample: &Sample,
    antecedent: &str,
    class_label: &str,
    positive: &str,
) -> Result<f64>
{
    let class = sample.feature(class_label)?;
    let antecedent = sample.feature(antecedent)?;

    let (n_positive, n_matched) = class.values()
        .iter()
        .zip(antecedent.values())
        .filter(|(c, _)| c.as_str() == positive)
        .fold((0_usize, 0_usize), |(n, m), (_, a)| {
            (n + 1, m + usize::from(a.as_str() == positive))
        });

    if n_positive == 0 {
        return Ok(0.0);
    }
    Ok(n_matched as f64 / n_positive as f64)
}


/// Scan `attributes` in order and return the one with
/// the greatest confidence that is at least `min_confidence`.
///
/// Ties keep the earlier attribute.
/// A confidence of `0.0` never qualifies.
/// Returns `(None, 0.0)` if no attribute qualifies.
pub fn find_best_antecedent<S>(
    sample: &Sample,
    attributes: &[S],
    class_label: &str,
    min_confidence: f64,
    positive: &str,
) -> Result<(Option<String>, f64)>
    where S: AsRef<str>,
{
    let mut best = None;
    let mut best_confidence = 0.0_f64;

    for attribute in attributes {
        let attribute = attribute.as_ref();
        let confidence = calculate_positive_confidence(
            sample, attribute, class_label, positive
        )?;
        debug!("candidate `{attribute}`: confidence {confidence:.6}");

        if confidence > best_confidence && confidence >= min_confidence {
            best = Some(attribute.to_string());
            best_confidence = confidence;
        }
    }

    Ok((best, best_confidence))
}
