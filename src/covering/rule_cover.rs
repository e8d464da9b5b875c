use std::ops::ControlFlow;

use log::{info, warn};

use crate::{
    Sample,
    Learner,
    Termination,
    CurrentRound,
    Round,
};
use crate::constants::{DEFAULT_MIN_CONFIDENCE, POSITIVE_VALUE};
use crate::error::Result;
use crate::tools::checkers;
use super::confidence::find_best_antecedent;
use super::rule::Rule;


/// The greedy covering learner.
///
/// `RuleCover` never touches the sample it was built from;
/// every run starts from a fresh working copy of it,
/// which shrinks rule by rule.
///
/// # Example
/// ```no_run
/// use minirules::prelude::*;
/// let sample = SampleReader::default()
///     .file("/path/to/file.csv")
///     .read()
///     .unwrap();
///
/// let mut learner = RuleCover::init(&sample)
///     .min_confidence(0.07);
/// let rules = learner.run().unwrap();
/// for (i, rule) in rules.iter().enumerate() {
///     println!("Rule {}: {rule}", i + 1);
/// }
/// ```
pub struct RuleCover<'a> {
    origin: &'a Sample,
    sample: Sample,

    min_confidence: f64,
    positive: String,

    rules: Vec<Rule>,
    rounds: Vec<Round>,
}


impl<'a> RuleCover<'a> {
    /// Initialize the `RuleCover`.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            origin: sample,
            sample: sample.clone(),

            min_confidence: DEFAULT_MIN_CONFIDENCE,
            positive: POSITIVE_VALUE.to_string(),

            rules: Vec::new(),
            rounds: Vec::new(),
        }
    }


    /// Set the confidence threshold in `[0, 1]`.
    /// Default is `0.07`.
    pub fn min_confidence(mut self, threshold: f64) -> Self {
        checkers::min_confidence(threshold);
        self.min_confidence = threshold;
        self
    }


    /// Set the value that marks both the positive class
    /// and a satisfied antecedent.
    /// Default is `"positive"`.
    pub fn positive_value<S: ToString>(mut self, value: S) -> Self {
        let value = value.to_string();
        checkers::positive_value(&value);
        self.positive = value;
        self
    }


    /// Returns the rules accepted so far.
    pub fn rules(&self) -> &[Rule] {
        &self.rules[..]
    }


    /// Returns the summary of every accepted round.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds[..]
    }


    /// Returns the current working table.
    pub fn working_sample(&self) -> &Sample {
        &self.sample
    }
}


impl Learner for RuleCover<'_> {
    type Output = Vec<Rule>;


    fn name(&self) -> &str {
        "RuleCover"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, _) = self.origin.shape();
        let info = Vec::from([
            ("# of rows", format!("{n_sample}")),
            ("# of attributes", format!("{}", self.origin.attributes().len())),
            ("Class label", self.origin.class_label().to_string()),
            ("Positive value", self.positive.clone()),
            ("Min. confidence", format!("{}", self.min_confidence)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        self.sample.clone_from(self.origin);
        self.rules.clear();
        self.rounds.clear();
    }


    fn step(&mut self, iteration: usize) -> ControlFlow<Termination> {
        if self.sample.is_empty() {
            info!("round {iteration}: no rows remain");
            return ControlFlow::Break(Termination::Exhausted);
        }

        let origin = self.origin;
        let class_label = origin.class_label();
        let found = find_best_antecedent(
            &self.sample,
            origin.attributes(),
            class_label,
            self.min_confidence,
            &self.positive,
        );
        let (antecedent, confidence) = match found {
            Ok((Some(antecedent), confidence)) => (antecedent, confidence),
            Ok((None, _)) => {
                info!(
                    "round {iteration}: no attribute reaches confidence {}",
                    self.min_confidence
                );
                return ControlFlow::Break(Termination::Unqualified);
            },
            Err(err) => return ControlFlow::Break(Termination::Failed(err)),
        };

        let covered = self.sample
            .remove_rows_where(&antecedent, &self.positive);
        let covered = match covered {
            Ok(covered) => covered,
            Err(err) => return ControlFlow::Break(Termination::Failed(err)),
        };
        if covered == 0 {
            warn!("round {iteration}: the rule on `{antecedent}` covered no rows");
            return ControlFlow::Break(Termination::Stalled(antecedent));
        }

        let remaining = self.sample.shape().0;
        info!(
            "round {iteration}: accepted `{antecedent}` \
            (confidence {confidence:.6}, covered {covered}, remaining {remaining})"
        );

        self.rules.push(Rule::new(&antecedent, class_label));
        self.rounds.push(Round { antecedent, confidence, covered, remaining });

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self, termination: Termination) -> Result<Vec<Rule>> {
        termination.into_result()?;
        Ok(self.rules.clone())
    }
}


impl CurrentRound for RuleCover<'_> {
    fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    fn remaining(&self) -> usize {
        self.sample.shape().0
    }
}


/// Run [`RuleCover`] on a working copy of `sample`
/// and return the rules in the order they were accepted.
pub fn discover_rules(sample: &Sample, min_confidence: f64)
    -> Result<Vec<Rule>>
{
    RuleCover::init(sample)
        .min_confidence(min_confidence)
        .run()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::covering::calculate_positive_confidence;

    fn sample() -> Sample {
        Sample::from_rows(
            ["id", "A", "B", "class"],
            [
                ["1", "positive", "negative", "positive"],
                ["2", "negative", "positive", "positive"],
                ["3", "negative", "positive", "positive"],
                ["4", "positive", "positive", "negative"],
                ["5", "negative", "negative", "negative"],
            ],
        ).unwrap()
    }

    #[test]
    fn test_single_perfect_attribute() {
        let sample = Sample::from_rows(
            ["id", "A", "class"],
            [
                ["1", "positive", "positive"],
                ["2", "positive", "positive"],
                ["3", "negative", "negative"],
                ["4", "negative", "negative"],
            ],
        ).unwrap();

        let mut learner = RuleCover::init(&sample).min_confidence(0.5);
        let rules = learner.run().unwrap();
        assert_eq!(rules, vec![Rule::new("A", "class")]);
        assert_eq!(learner.working_sample().shape().0, 2);
        assert!(
            learner.working_sample()["A"].values()
                .iter()
                .all(|v| v == "negative")
        );
    }

    #[test]
    fn test_covering_order() {
        let sample = sample();
        let mut learner = RuleCover::init(&sample).min_confidence(0.3);
        let rules = learner.run().unwrap();

        assert_eq!(rules, vec![Rule::new("B", "class"), Rule::new("A", "class")]);

        let rounds = learner.rounds();
        assert_eq!(rounds[0].confidence, 2.0 / 3.0);
        // `B = positive` also retires the negative row 4.
        assert_eq!(rounds[0].covered, 3);
        assert_eq!(rounds[0].remaining, 2);
        assert_eq!(rounds[1].confidence, 1.0);
        assert_eq!(rounds[1].remaining, 1);
        assert_eq!(learner.current_round(), rounds.last());
    }

    #[test]
    fn test_origin_is_untouched_and_runs_repeat() {
        let sample = sample();
        let mut learner = RuleCover::init(&sample).min_confidence(0.3);
        let first = learner.run().unwrap();
        let second = learner.run().unwrap();

        assert_eq!(first, second);
        assert_eq!(sample.shape(), (5, 4));
    }

    #[test]
    fn test_high_threshold_yields_no_rules() {
        let sample = sample();
        let rules = discover_rules(&sample, 0.7).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_no_attributes_yield_no_rules() {
        let sample = Sample::from_rows(
            ["id", "class"],
            [["1", "positive"], ["2", "negative"]],
        ).unwrap();
        let rules = discover_rules(&sample, 0.0).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_empty_sample_yields_no_rules() {
        let rows: Vec<Vec<&str>> = Vec::new();
        let sample = Sample::from_rows(["id", "A", "class"], rows).unwrap();
        let mut learner = RuleCover::init(&sample);
        assert!(learner.run().unwrap().is_empty());
        assert!(learner.current_round().is_none());
    }

    #[test]
    fn test_accepted_rules_meet_the_threshold() {
        let sample = sample();
        for &threshold in &[0.0, 0.1, 0.3, 0.5, 0.6, 2.0 / 3.0, 0.9, 1.0] {
            let mut learner = RuleCover::init(&sample)
                .min_confidence(threshold);
            learner.run().unwrap();
            assert!(learner.rounds().iter().all(|r| r.confidence >= threshold));
        }
    }

    #[test]
    fn test_custom_positive_value() {
        let sample = Sample::from_rows(
            ["id", "A", "B", "label"],
            [
                ["1", "no", "yes", "yes"],
                ["2", "yes", "yes", "yes"],
                ["3", "no", "no", "no"],
            ],
        ).unwrap();
        let rules = RuleCover::init(&sample)
            .min_confidence(0.5)
            .positive_value("yes")
            .run()
            .unwrap();
        assert_eq!(rules, vec![Rule::new("B", "label")]);

        let conf = calculate_positive_confidence(&sample, "B", "label", "yes")
            .unwrap();
        assert_eq!(conf, 1.0);
    }

    #[test]
    #[should_panic]
    fn test_invalid_threshold() {
        let sample = sample();
        let _ = RuleCover::init(&sample).min_confidence(1.5);
    }
}
