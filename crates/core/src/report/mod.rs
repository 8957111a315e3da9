mod types;

pub use types::AnalysisReport;
