//!
//! A crate that tabulates a labeled table and learns
//! single-attribute classification rules by greedy covering.
//!
//! The first column of a table identifies the row and is ignored,
//! the last column is the class label,
//! and every column in between is an attribute.
//!
//! - Tabulation
//!     [`count_attributes`] counts the rows per
//!     `(attribute, value, class)` and
//!     [`calculate_proportions`] turns the counts into percentages.
//!
//!
//! - Rule discovery
//!     [`RuleCover`] repeatedly picks the attribute whose value
//!     `"positive"` best recalls the positive class,
//!     emits a rule on it, and retires the rows it covers.
//!
//! # Example
//! ```no_run
//! use minirules::prelude::*;
//!
//! let analyzer = DataAnalyzer::from_csv("file.csv").unwrap();
//! let analysis = analyzer.analyze_data().unwrap();
//! println!("{}", render_table(&analysis.counts));
//!
//! let rules = analyzer.discover_rules(0.07).unwrap();
//! println!("{}", render_rules(&rules));
//! ```

pub mod constants;
pub mod error;
pub mod tools;
pub mod sample;
pub mod tabulator;
pub mod learner;
pub mod covering;
pub mod analyzer;
pub mod report;
pub mod logging;
pub mod prelude;


pub use error::{MiniRulesError, Result};

pub use sample::{
    SampleReader,
    Sample,
    Feature,
    Row,
};

pub use tabulator::{
    count_attributes,
    calculate_proportions,
    AttributeTable,
    CountTable,
    ProportionTable,
};

pub use learner::{
    Learner,
    Termination,
    CurrentRound,
    Round,
};

pub use covering::{
    Rule,
    RuleCover,
    calculate_positive_confidence,
    find_best_antecedent,
    discover_rules,
};

pub use analyzer::{DataAnalyzer, Analysis};
pub use report::Report;
