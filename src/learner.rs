//! Provides `Learner` trait.

use std::ops::ControlFlow;

use crate::error::{MiniRulesError, Result};

/// The reason a [`Learner`] stopped stepping.
#[derive(Debug)]
pub enum Termination {
    /// No rows remain in the working table.
    Exhausted,
    /// No attribute clears the confidence threshold.
    Unqualified,
    /// The accepted rule on this attribute covered no rows.
    Stalled(String),
    /// A lookup failed while stepping.
    Failed(MiniRulesError),
}

impl Termination {
    /// Convert an abnormal termination into an error.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Exhausted | Self::Unqualified => Ok(()),
            Self::Stalled(attribute) => Err(MiniRulesError::NoProgress(attribute)),
            Self::Failed(err) => Err(err),
        }
    }

    /// A short name of the reason.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::Unqualified => "unqualified",
            Self::Stalled(_) => "stalled",
            Self::Failed(_) => "failed",
        }
    }
}

/// The trait [`Learner`] defines the framework of a covering learner.
/// In each round `t = 1, 2, ...`,
/// 1. Learner searches the best rule over the remaining rows.
/// 2. Learner retires the rows the rule explains.
///
/// The rounds continue until [`Learner::step`] breaks.
///
/// # Required Methods
/// - [`Learner::name`]
/// - [`Learner::preprocess`]
/// - [`Learner::step`]
/// - [`Learner::postprocess`]
/// - [`Learner::info`] ... optional.
///
/// # Provided Methods
/// - [`Learner::run`]
pub trait Learner {
    /// The final output of a learner.
    type Output;

    /// Returns the name of the learner.
    fn name(&self) -> &str;

    /// Returns the information of the learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// A main function that runs the learner.
    fn run(&mut self) -> Result<Self::Output> {
        self.preprocess();

        let flow = (1..).try_for_each(|iter| self.step(iter));
        let termination = match flow {
            ControlFlow::Break(termination) => termination,
            ControlFlow::Continue(()) => Termination::Exhausted,
        };

        self.postprocess(termination)
    }

    /// Pre-processing for `self`.
    /// As you can see in [`Learner::run`],
    /// this method is called before the first round.
    fn preprocess(&mut self);

    /// Learning step per iteration.
    fn step(&mut self, iteration: usize) -> ControlFlow<Termination>;

    /// Post-processing.
    fn postprocess(&mut self, termination: Termination)
        -> Result<Self::Output>;
}

/// Summary of one accepted rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    /// The accepted antecedent.
    pub antecedent: String,
    /// Its confidence on the table it was selected from.
    pub confidence: f64,
    /// Rows retired by the rule.
    pub covered: usize,
    /// Rows left afterwards.
    pub remaining: usize,
}

/// Implementing this trait allows [`Logger`](crate::logging::Logger)
/// to observe the learner's progress.
pub trait CurrentRound {
    /// Returns the last accepted round, if any.
    fn current_round(&self) -> Option<&Round>;

    /// Returns the number of rows not yet covered.
    fn remaining(&self) -> usize;
}
