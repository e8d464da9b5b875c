//! Exports the standard tabulation and rule-discovery items.
//! 
pub use crate::sample::{
    Sample,
    SampleReader,
    Feature,
};


pub use crate::tabulator::{
    count_attributes,
    calculate_proportions,
    CountTable,
    ProportionTable,
};


pub use crate::learner::{
    // Learner trait
    Learner,
    CurrentRound,
};


pub use crate::covering::{
    Rule,
    RuleCover,
    discover_rules,
};


pub use crate::analyzer::{
    DataAnalyzer,
    Analysis,
};


pub use crate::report::{
    Report,
    render_table,
    render_rules,
};


pub use crate::error::MiniRulesError;
