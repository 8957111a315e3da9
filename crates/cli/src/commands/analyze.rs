use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use smellguard::config::Config;
use smellguard::context::load_contexts;
use smellguard::detector::DetectorRegistry;
use smellguard::report::AnalysisReport;

use crate::output;
use crate::OutputFormat;

pub fn run(
    path: &Path,
    format: Option<OutputFormat>,
    smell_types: Option<Vec<String>>,
    config_path: Option<PathBuf>,
    quiet: bool,
    no_color: bool,
) -> Result<()> {
    // 1. Load config (missing file means defaults)
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(".smellguard.toml"));
    let config = Config::load(&config_path)?;

    let known: Vec<&str> = smellguard_detectors::smell_types()
        .iter()
        .map(|t| t.name)
        .collect();
    for name in config.unknown_detectors(&known) {
        tracing::warn!("Config entry for unknown detector '{name}' is ignored");
    }

    // 2. Load context dumps produced by the parser
    let files = discover_context_files(path)?;
    let mut contexts = Vec::new();
    for file in &files {
        contexts.extend(load_contexts(file)?);
    }
    let total = contexts.len();
    contexts.retain(|ctx| !config.is_file_excluded(&ctx.source));
    tracing::debug!(
        files = files.len(),
        contexts = contexts.len(),
        suppressed = total - contexts.len(),
        "loaded contexts"
    );

    if !quiet {
        eprintln!(
            "Examining {} contexts from {} files...",
            contexts.len(),
            files.len()
        );
    }

    // 3. Build detector registry from the selected smell types
    let filter = smell_types.unwrap_or_default();
    let eligible = smellguard_detectors::eligible_smell_types(&filter);
    let registry = DetectorRegistry::new(&eligible, &config);

    // 4. Examine
    let warnings = registry.examine_all(&contexts)?;
    let report = AnalysisReport::from_warnings(contexts.len(), warnings);

    // 5. Output
    match resolve_format(format, &config) {
        OutputFormat::Json => output::json::print(&report)?,
        OutputFormat::Text => output::text::print(&report, quiet, no_color)?,
    }

    // 6. Exit code
    if report.total_warnings > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// A single file is taken as is; a directory is searched for `*.json` dumps.
fn discover_context_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "json")
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }
    match config.global.output_format.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        "text" => OutputFormat::Text,
        other => {
            tracing::warn!("Unknown output_format '{other}' in config, using text");
            OutputFormat::Text
        }
    }
}
