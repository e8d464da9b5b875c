//! Tabulates how each attribute value co-occurs with the class label.
//!
//! - [`count_attributes`] counts the rows per
//!   `(attribute, attribute value, class value)`.
//! - [`calculate_proportions`] turns those counts into percentages
//!   of the table size.
//!
//! Both functions only read the given [`Sample`](crate::Sample).

pub mod attribute_table;
pub(crate) mod counts;
pub(crate) mod proportions;

pub use attribute_table::{
    AttributeTable,
    CountTable,
    ProportionTable,
};
pub use counts::count_attributes;
pub use proportions::calculate_proportions;
