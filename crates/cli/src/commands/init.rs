use std::path::Path;

use anyhow::{Context, Result};
use smellguard::config::Config;

/// Write the default config to `path`. An existing file is kept unless `force` is set.
/// Returns whether the file was written.
pub fn run(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        tracing::warn!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
        return Ok(false);
    }
    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("smellguard-init-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(".smellguard.toml")
    }

    #[test]
    fn test_writes_loadable_default_config() {
        let path = scratch_path("fresh");
        let _ = std::fs::remove_file(&path);
        assert!(run(&path, false).unwrap());
        let config = Config::load(&path).unwrap();
        assert_eq!(config.global.output_format, "text");
    }

    #[test]
    fn test_keeps_existing_file_unless_forced() {
        let path = scratch_path("existing");
        std::fs::write(&path, "[global]\noutput_format = \"json\"\n").unwrap();

        assert!(!run(&path, false).unwrap());
        assert_eq!(Config::load(&path).unwrap().global.output_format, "json");

        assert!(run(&path, true).unwrap());
        assert_eq!(Config::load(&path).unwrap().global.output_format, "text");
    }
}
