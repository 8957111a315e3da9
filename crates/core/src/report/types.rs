use std::collections::BTreeMap;

use serde::Serialize;

use crate::warning::Warning;

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub contexts_examined: usize,
    pub total_warnings: usize,
    pub warnings_by_smell_type: BTreeMap<String, usize>,
    pub warnings: Vec<Warning>,
}

impl AnalysisReport {
    /// Build a report; warnings are sorted by source location.
    pub fn from_warnings(contexts_examined: usize, mut warnings: Vec<Warning>) -> Self {
        warnings.sort();
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for warning in &warnings {
            *counts.entry(warning.smell_type.clone()).or_default() += 1;
        }
        Self {
            contexts_examined,
            total_warnings: warnings.len(),
            warnings_by_smell_type: counts,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn warning(smell_type: &str, line: usize) -> Warning {
        Warning {
            smell_type: smell_type.to_string(),
            context: "Foo#bar".to_string(),
            source: PathBuf::from("foo.rb"),
            lines: vec![line],
            message: format!("smell at {line}"),
            parameters: BTreeMap::new(),
        }
    }

    #[test]
    fn test_counts_and_sorting() {
        let report = AnalysisReport::from_warnings(
            3,
            vec![
                warning("BooleanParameter", 9),
                warning("UtilityFunction", 1),
                warning("BooleanParameter", 4),
            ],
        );
        assert_eq!(report.contexts_examined, 3);
        assert_eq!(report.total_warnings, 3);
        assert_eq!(report.warnings_by_smell_type["BooleanParameter"], 2);
        assert_eq!(report.warnings_by_smell_type["UtilityFunction"], 1);
        let lines: Vec<usize> = report.warnings.iter().map(|w| w.lines[0]).collect();
        assert_eq!(lines, vec![1, 4, 9]);
    }
}
