use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-scan/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// File discovery options.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Terminal report options.
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanConfig {
    /// Extra file names probed in the scan root, on top of the built-in
    /// `LICENSE` / `COPYING` conventions.
    #[serde(default)]
    pub extra_filenames: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// How many candidate licenses the terminal report shows per file.
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
}

fn default_max_matches() -> usize {
    3
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_matches: default_max_matches(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<scan_path>/.license-scan/config.toml`
/// 3. `~/.config/license-scan/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(scan_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = scan_path.join(".license-scan").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-scan")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.scan.extra_filenames.is_empty());
        assert_eq!(config.report.max_matches, 3);
    }

    #[test]
    fn test_parse_full() {
        let config: Config = toml::from_str(
            r#"
            [scan]
            extra_filenames = ["LEGAL", "NOTICE.txt"]

            [report]
            max_matches = 5
        "#,
        )
        .unwrap();

        assert_eq!(config.scan.extra_filenames, vec!["LEGAL", "NOTICE.txt"]);
        assert_eq!(config.report.max_matches, 5);
    }

    #[test]
    fn test_parse_partial_falls_back() {
        let config: Config = toml::from_str(
            r#"
            [scan]
            extra_filenames = ["LEGAL"]
        "#,
        )
        .unwrap();

        assert_eq!(config.report.max_matches, 3);
    }

    #[test]
    fn test_load_from_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[report]\nmax_matches = 1\n").unwrap();

        let config = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(config.report.max_matches, 1);
    }

    #[test]
    fn test_load_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".license-scan");
        std::fs::create_dir(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[scan]\nextra_filenames = [\"LEGAL\"]\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.scan.extra_filenames, vec!["LEGAL"]);
    }
}
