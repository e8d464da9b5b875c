//! Runs a learner round by round with logging.
//! Measure the followings per round
//! - Accepted antecedent and its confidence
//! - Covered / remaining rows
//! - Running time
pub mod logger;

pub use logger::Logger;
