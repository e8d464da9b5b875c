//! A facade that loads a table once and answers both questions about it:
//! how attribute values co-occur with the class, and which rules cover it.

use std::path::Path;

use serde::Serialize;

use crate::{
    Sample,
    Learner,
    RuleCover,
    Rule,
};
use crate::error::Result;
use crate::report::Report;
use crate::tabulator::{
    count_attributes,
    calculate_proportions,
    CountTable,
    ProportionTable,
};


/// Counts and proportions of a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub counts: CountTable,
    pub proportions: ProportionTable,
}


/// Holds the loaded sample.
/// [`DataAnalyzer::analyze_data`] only reads it and
/// [`DataAnalyzer::discover_rules`] learns on a copy of it,
/// so the two can be called in any order.
#[derive(Debug, Clone)]
pub struct DataAnalyzer {
    sample: Sample,
}


impl DataAnalyzer {
    /// Wrap an already loaded sample.
    pub fn new(sample: Sample) -> Self {
        Self { sample }
    }


    /// Load the CSV file at `file`. The file must have a header row.
    pub fn from_csv<P: AsRef<Path>>(file: P) -> Result<Self> {
        let sample = Sample::from_csv(file, true)?;
        Ok(Self::new(sample))
    }


    /// Returns the loaded sample.
    pub fn sample(&self) -> &Sample {
        &self.sample
    }


    /// Tabulate the loaded sample.
    /// Fails with `NoData` if the sample has no rows.
    pub fn analyze_data(&self) -> Result<Analysis> {
        let sample = &self.sample;
        let counts = count_attributes(
            sample, sample.attributes(), sample.class_label()
        )?;
        let proportions = calculate_proportions(&counts, sample)?;
        Ok(Analysis { counts, proportions })
    }


    /// Learn rules on a copy of the loaded sample.
    pub fn discover_rules(&self, min_confidence: f64) -> Result<Vec<Rule>> {
        RuleCover::init(&self.sample)
            .min_confidence(min_confidence)
            .run()
    }


    /// Bundle the table, its analysis, and the rules for presentation.
    pub fn report(&self, min_confidence: f64) -> Result<Report<'_>> {
        let Analysis { counts, proportions } = self.analyze_data()?;
        let rules = self.discover_rules(min_confidence)?;
        Ok(Report::new(&self.sample, counts, proportions, rules))
    }
}
