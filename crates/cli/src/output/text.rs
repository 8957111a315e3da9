use anyhow::Result;
use colored::Colorize;
use smellguard::report::AnalysisReport;

pub fn print(report: &AnalysisReport, quiet: bool, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    if !quiet {
        println!();
        println!("{}", "  smellguard - Code Smell Detection".bold());
        println!("  Contexts examined: {}", report.contexts_examined);
        println!();
    }

    if report.warnings.is_empty() {
        if !quiet {
            println!("  {} No smells found.", "✓".green().bold());
            println!();
        }
        return Ok(());
    }

    let mut current_source = None;
    for warning in &report.warnings {
        if current_source != Some(&warning.source) {
            println!("  {}", warning.source.display().to_string().underline());
            current_source = Some(&warning.source);
        }
        let lines: Vec<String> = warning.lines.iter().map(|l| l.to_string()).collect();
        println!(
            "    [{}]:{} {} ({})",
            lines.join(", ").dimmed(),
            warning.context.bold(),
            warning.message,
            warning.smell_type.yellow()
        );
    }
    println!();

    if !quiet {
        println!("{}", "  Summary".bold().underline());
        for (smell_type, count) in &report.warnings_by_smell_type {
            println!("    {:<24} {}", smell_type, count);
        }
        println!("    {:<24} {}", "Total", report.total_warnings);
        println!();
    }

    Ok(())
}
