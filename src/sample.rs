//! Struct `Sample` represents a labeled table.

pub mod feature;
pub mod sample_struct;
pub mod reader;


pub use reader::SampleReader;
pub use sample_struct::{Sample, Row};
pub use feature::Feature;
