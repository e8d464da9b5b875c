use rayon::prelude::*;

use crate::{Sample, Feature};
use crate::error::Result;
use super::attribute_table::{CountTable, ValueTable};


/// Count, for every attribute in `attributes` and every observed value,
/// the number of rows per class value.
///
/// Every observed value is seeded with a zero for every class value
/// present in `sample`, so combinations that never co-occur
/// still show up as an explicit `0`.
/// Fails if `attributes` or `class_label` name a missing column.
pub fn count_attributes<S>(
    sample: &Sample,
    attributes: &[S],
    class_label: &str,
) -> Result<CountTable>
    where S: AsRef<str> + Sync,
{
    let class = sample.feature(class_label)?;
    let class_values = class.distinct_values();

    let entries = attributes.par_iter()
        .map(|attribute| {
            let attribute = attribute.as_ref();
            let feature = sample.feature(attribute)?;
            let table = count_a_feature(feature, class, &class_values[..]);
            Ok((attribute.to_string(), table))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CountTable::new(entries))
}


/// Tally the class values per value of `feature`.
fn count_a_feature(feature: &Feature, class: &Feature, class_values: &[&str])
    -> ValueTable<usize>
{
    let mut table = feature.distinct_values()
        .into_iter()
        .map(|value| {
            let seed = class_values.iter()
                .map(|c| (c.to_string(), 0_usize))
                .collect();
            (value.to_string(), seed)
        })
        .collect::<ValueTable<usize>>();

    feature.values()
        .iter()
        .zip(class.values())
        .for_each(|(value, c)| {
            if let Some(n) = table.get_mut(value).and_then(|t| t.get_mut(c)) {
                *n += 1;
            }
        });
    table
}
