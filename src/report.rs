//! Plain-data bundle of everything the analysis produces,
//! plus text renderings of it.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::{Sample, Rule};
use crate::error::Result;
use crate::tabulator::AttributeTable;


/// The loaded table, its counts and proportions, and the learned rules.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub table: &'a Sample,
    pub counts: AttributeTable<usize>,
    pub proportions: AttributeTable<f64>,
    pub rules: Vec<Rule>,
}


impl<'a> Report<'a> {
    pub fn new(
        table: &'a Sample,
        counts: AttributeTable<usize>,
        proportions: AttributeTable<f64>,
        rules: Vec<Rule>,
    ) -> Self
    {
        Self { table, counts, proportions, rules }
    }


    /// Encode the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}


/// Render an attribute table as
/// ```txt
/// Attribute: <name>
///   <value>: {<class>: <entry>, ...}
/// ```
/// with a blank line after each attribute.
pub fn render_table<T: fmt::Display>(table: &AttributeTable<T>) -> String {
    let mut out = String::new();
    for (attribute, values) in table.iter() {
        let _ = writeln!(out, "Attribute: {attribute}");
        for (value, classes) in values {
            let classes = classes.iter()
                .map(|(c, n)| format!("{c}: {n}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  {value}: {{{classes}}}");
        }
        out.push('\n');
    }
    out
}


/// Render the rules as `Rule <i>: If <antecedent> then <class>` lines.
pub fn render_rules(rules: &[Rule]) -> String {
    rules.iter()
        .enumerate()
        .map(|(i, rule)| format!("Rule {}: {rule}\n", i + 1))
        .collect()
}


impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Counts of each attribute value per class:")?;
        write!(f, "{}", render_table(&self.counts))?;
        writeln!(f, "Proportions:")?;
        write!(f, "{}", render_table(&self.proportions))?;
        writeln!(f, "Discovered Rules:")?;
        write!(f, "{}", render_rules(&self.rules))
    }
}
