use colored::Colorize;

use crate::{
    Learner,
    Termination,
    CurrentRound,
    Round,
};
use crate::error::Result;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

const DEFAULT_ROUND: usize = 1;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,Antecedent,Confidence,Covered,Remaining,Time\n";

/// Struct `Logger` runs a [`Learner`] and logs
/// the accepted rule, its confidence, the covered/remaining rows,
/// and the running time for each round.
///
/// # Example
/// ```no_run
/// use minirules::prelude::*;
/// use minirules::logging::Logger;
///
/// let sample = SampleReader::default()
///     .file("/path/to/file.csv")
///     .read()
///     .unwrap();
/// let learner = RuleCover::init(&sample).min_confidence(0.07);
/// let rules = Logger::new(learner)
///     .print_every(1)
///     .run("trace.csv")
///     .unwrap();
/// ```
pub struct Logger<L> {
    learner: L,
    round: usize,
}

impl<L> Logger<L> {
    /// Create a new instance of `Logger`.
    pub fn new(learner: L) -> Self {
        Self { learner, round: DEFAULT_ROUND }
    }

    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every round.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "print interval must be positive");
        self.round = round;
        self
    }

    /// Returns the wrapped learner.
    pub fn learner(&self) -> &L {
        &self.learner
    }
}

impl<L> Logger<L>
    where L: Learner + CurrentRound,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "".bold().blue(),
            "".bold().green(),
            "ROWS".bold().yellow(),
            "ROWS".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "RULE".bold().blue(),
            "CONF.".bold().green(),
            "COVERED".bold().yellow(),
            "LEFT".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }

    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Learner".bold(),
            self.learner.name().bold().green(),
        );

        if let Some(info) = self.learner.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }

    #[inline(always)]
    fn print_round(&self, tag: colored::ColoredString, iter: usize, line: &Summary, time_acc: u128) {
        println!(
            "{} {}\t{}\t{}\t{}\t{}\t{}",
            tag,
            format!("{:>WIDTH$}", iter).red(),
            format!("{:>WIDTH$}", line.rule).blue(),
            format!("{:>WIDTH$}", line.confidence).green(),
            format!("{:>WIDTH$}", line.covered).yellow(),
            format!("{:>WIDTH$}", line.remaining).yellow(),
            time_format(time_acc).bold().cyan(),
        );
    }

    /// Run the learner with logging.
    /// Note that this method is almost the same as `Learner::run`.
    /// Each accepted round is appended to `filename` as a CSV line.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> Result<L::Output> {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.learner.preprocess();
        if self.round != usize::MAX { self.print_stats(); }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Learning step
        if self.round != usize::MAX { self.print_log_header(); }
        let flow = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = self.learner.step(iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            let time = now.elapsed().as_millis();

            // Update the cumulative time
            time_acc += time;

            match &flow {
                ControlFlow::Continue(()) => {
                    if let Some(r) = self.learner.current_round() {
                        // Write the results to `file`.
                        let line = format!(
                            "{iter},{},{},{},{},{time_acc}\n",
                            csv_field(&r.antecedent),
                            r.confidence,
                            r.covered,
                            r.remaining,
                        );
                        if let Err(err) = file.write_all(line.as_bytes()) {
                            return ControlFlow::Break(
                                Termination::Failed(err.into())
                            );
                        }

                        if self.round != usize::MAX && iter % self.round == 0 {
                            let line = Summary::accepted(r);
                            self.print_round("[LOG]".bold().magenta(), iter, &line, time_acc);
                        }
                    }
                },
                ControlFlow::Break(termination) => {
                    if self.round != usize::MAX {
                        // The final step accepts nothing.
                        let line = Summary::finished(
                            termination, self.learner.remaining()
                        );
                        self.print_round("[FIN]".bold().bright_green(), iter, &line, time_acc);
                        println!();
                    }
                },
            }
            flow
        });

        let termination = match flow {
            ControlFlow::Break(termination) => termination,
            ControlFlow::Continue(()) => Termination::Exhausted,
        };
        self.learner.postprocess(termination)
    }
}

/// One printed line of the round log.
#[derive(Debug, Clone, PartialEq)]
struct Summary {
    rule: String,
    confidence: String,
    covered: String,
    remaining: String,
}

impl Summary {
    fn accepted(round: &Round) -> Self {
        Self {
            rule: round.antecedent.clone(),
            confidence: format!("{:.PREC_WIDTH$}", round.confidence),
            covered: round.covered.to_string(),
            remaining: round.remaining.to_string(),
        }
    }

    fn finished(termination: &Termination, remaining: usize) -> Self {
        Self {
            rule: format!("({})", termination.label()),
            confidence: "-".to_string(),
            covered: "-".to_string(),
            remaining: remaining.to_string(),
        }
    }
}

/// Quote a CSV field if it holds a separator, a quote, or a line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sample, RuleCover, Rule};
    use std::fs;

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(61_500), " 01m 01s");
    }

    #[test]
    fn test_trace_file() {
        let sample = Sample::from_rows(
            ["id", "A", "B", "class"],
            [
                ["1", "positive", "negative", "positive"],
                ["2", "negative", "positive", "positive"],
                ["3", "negative", "positive", "positive"],
                ["4", "positive", "positive", "negative"],
                ["5", "negative", "negative", "negative"],
            ],
        ).unwrap();
        let mut path = std::env::temp_dir();
        path.push(format!("minirules-trace-{}.csv", std::process::id()));

        let learner = RuleCover::init(&sample).min_confidence(0.3);
        let rules = Logger::new(learner)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();
        assert_eq!(rules, vec![Rule::new("B", "class"), Rule::new("A", "class")]);

        let trace = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let lines = trace.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.trim_end());
        assert!(lines[1].starts_with("1,B,0.6666666666666666,3,2,"));
        assert!(lines[2].starts_with("2,A,1,1,1,"));
    }

    #[test]
    fn test_final_line_is_not_attributed_to_the_last_rule() {
        let sample = Sample::from_rows(
            ["id", "A", "class"],
            [["1", "positive", "positive"], ["2", "negative", "negative"]],
        ).unwrap();
        let mut path = std::env::temp_dir();
        path.push(format!("minirules-fin-{}.csv", std::process::id()));

        let learner = RuleCover::init(&sample).min_confidence(0.5);
        let mut logger = Logger::new(learner).print_every(usize::MAX);
        let rules = logger.run(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(rules, vec![Rule::new("A", "class")]);

        // Round 1 accepts `A`; round 2 finds nothing and stops.
        let learner = logger.learner();
        let last = learner.current_round().unwrap();
        let accepted = Summary::accepted(last);
        assert_eq!(accepted.rule, "A");
        assert_eq!(accepted.remaining, "1");

        let fin = Summary::finished(&Termination::Unqualified, learner.remaining());
        assert_ne!(fin.rule, accepted.rule);
        assert_eq!(fin.rule, "(unqualified)");
        assert_eq!(fin.confidence, "-");
        assert_eq!(fin.covered, "-");
        assert_eq!(fin.remaining, "1");
    }

    #[test]
    fn test_csv_field() {
        assert_eq!(csv_field("fever"), "fever");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_trace_quotes_antecedent() {
        let sample = Sample::from_rows(
            ["id", "a,b", "class"],
            [["1", "positive", "positive"], ["2", "negative", "negative"]],
        ).unwrap();
        let mut path = std::env::temp_dir();
        path.push(format!("minirules-quoted-{}.csv", std::process::id()));

        let learner = RuleCover::init(&sample).min_confidence(0.5);
        Logger::new(learner)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();

        let trace = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let lines = trace.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("1,\"a,b\",1,1,1,"));
    }
}
