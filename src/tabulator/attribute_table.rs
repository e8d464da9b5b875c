use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer, SerializeMap};

/// Per-value class tallies of one attribute:
/// `attribute value -> class value -> T`.
pub type ValueTable<T> = BTreeMap<String, BTreeMap<String, T>>;

/// Nested mapping `attribute -> attribute value -> class value -> T`.
/// Attributes keep the order they were tabulated in;
/// values and class values are sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeTable<T> {
    pub(crate) entries: Vec<(String, ValueTable<T>)>,
}

/// Row counts per `(attribute, value, class)`.
pub type CountTable = AttributeTable<usize>;

/// Percent of all rows per `(attribute, value, class)`.
pub type ProportionTable = AttributeTable<f64>;

impl<T> AttributeTable<T> {
    pub(crate) fn new(entries: Vec<(String, ValueTable<T>)>) -> Self {
        Self { entries }
    }

    /// Returns the tallies of `attribute`.
    pub fn get<S: AsRef<str>>(&self, attribute: S) -> Option<&ValueTable<T>> {
        let attribute = attribute.as_ref();
        self.entries.iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, table)| table)
    }

    /// Returns the entry at `(attribute, value, class)`.
    pub fn at(&self, attribute: &str, value: &str, class: &str) -> Option<&T> {
        self.get(attribute)?
            .get(value)?
            .get(class)
    }

    /// Iterate over the attributes and their tallies.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueTable<T>)> {
        self.entries.iter()
            .map(|(name, table)| (name.as_str(), table))
    }

    /// Returns the attribute names.
    pub fn attributes(&self) -> Vec<&str> {
        self.entries.iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for AttributeTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S)
        -> Result<S::Ok, S::Error>
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, table) in self.entries.iter() {
            map.serialize_entry(name, table)?;
        }
        map.end()
    }
}
