use std::mem;
use std::ops::Index;

use serde::Serialize;

use crate::constants::BUFFER_SIZE;

/// A named column of opaque string values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    name: String,
    vals: Vec<String>,
}

impl Feature {
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.vals[..]
    }

    pub fn append<T: ToString>(&mut self, val: T) {
        self.vals.push(val.to_string());
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Distinct values in first-occurrence order.
    pub fn distinct_values(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for val in self.vals.iter().map(String::as_str) {
            if !seen.contains(&val) { seen.push(val); }
        }
        seen
    }

    /// Number of entries equal to `value`.
    pub fn count(&self, value: &str) -> usize {
        self.vals.iter()
            .filter(|v| *v == value)
            .count()
    }

    /// Keeps the entries whose flag in `keep` is `true`.
    pub(crate) fn retain_by(&mut self, keep: &[bool]) {
        let vals = mem::take(&mut self.vals);
        self.vals = vals.into_iter()
            .zip(keep)
            .filter_map(|(v, &k)| k.then_some(v))
            .collect();
    }
}

impl Index<usize> for Feature {
    type Output = str;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook() -> Feature {
        let mut feat = Feature::new("outlook");
        ["sunny", "rain", "sunny", "overcast", "rain"].into_iter()
            .for_each(|v| feat.append(v));
        feat
    }

    #[test]
    fn test_distinct_values_keep_first_occurrence_order() {
        let feat = outlook();
        assert_eq!(feat.distinct_values(), vec!["sunny", "rain", "overcast"]);
    }

    #[test]
    fn test_count() {
        let feat = outlook();
        assert_eq!(feat.count("rain"), 2);
        assert_eq!(feat.count("snow"), 0);
    }

    #[test]
    fn test_retain_by() {
        let mut feat = outlook();
        feat.retain_by(&[true, false, false, true, true]);
        assert_eq!(feat.values(), &["sunny", "overcast", "rain"]);
        assert_eq!(&feat[1], "overcast");
    }
}
