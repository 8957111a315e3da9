use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// A single smell found in a context. Built once by a detector, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub smell_type: String,
    pub context: String,
    pub source: PathBuf,
    pub lines: Vec<usize>,
    pub message: String,
    /// Structured detail for programmatic consumers, e.g. `{parameter: "flag"}`
    pub parameters: BTreeMap<String, String>,
}

impl Warning {
    /// Smallest line this warning points at
    pub fn first_line(&self) -> Option<usize> {
        self.lines.iter().min().copied()
    }
}

impl Ord for Warning {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.first_line().cmp(&other.first_line()))
            .then_with(|| self.smell_type.cmp(&other.smell_type))
            .then_with(|| self.context.cmp(&other.context))
            .then_with(|| self.message.cmp(&other.message))
            .then_with(|| self.lines.cmp(&other.lines))
            .then_with(|| self.parameters.cmp(&other.parameters))
    }
}

impl PartialOrd for Warning {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
