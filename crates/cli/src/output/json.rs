use std::io::{self, Write};

use anyhow::Result;
use smellguard::report::AnalysisReport;

/// Write the report as pretty JSON followed by a newline.
pub fn write(report: &AnalysisReport, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn print(report: &AnalysisReport) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write(report, &mut lock)?;
    lock.flush()?;
    Ok(())
}
