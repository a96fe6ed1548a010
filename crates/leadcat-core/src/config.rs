use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::{DEFAULT_JOURNEY_COLUMN, DEFAULT_OUTPUT_COLUMN};
use crate::mapping::DuplicatePolicy;
use crate::priority::{PriorityList, DEFAULT_PRIORITY, FALLBACK_CATEGORY};

/// Global configuration loaded from `~/.config/leadcat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadcatConfig {
    /// Header of the lead data column holding the page-visit journey.
    #[serde(default = "default_journey_column")]
    pub journey_column: String,
    /// Header of the category column added to the output.
    #[serde(default = "default_output_column")]
    pub output_column: String,
    /// Mapping table (CSV with URL and TYPE columns). Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_mapping_path")]
    pub mapping_path: PathBuf,
    /// Where `classify` writes when no --output is given.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Category for leads that match nothing in `priority`.
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// Category labels, highest priority first.
    #[serde(default = "default_priority")]
    pub priority: Vec<String>,
    /// "overwrite" (later mapping rows win) or "reject".
    #[serde(default)]
    pub duplicate_patterns: DuplicatePolicy,
}

fn default_journey_column() -> String {
    DEFAULT_JOURNEY_COLUMN.to_string()
}

fn default_output_column() -> String {
    DEFAULT_OUTPUT_COLUMN.to_string()
}

fn default_mapping_path() -> PathBuf {
    PathBuf::from("mapping.csv")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("categorized_leads.csv")
}

fn default_fallback() -> String {
    FALLBACK_CATEGORY.to_string()
}

fn default_priority() -> Vec<String> {
    DEFAULT_PRIORITY.iter().map(|s| s.to_string()).collect()
}

impl Default for LeadcatConfig {
    fn default() -> Self {
        Self {
            journey_column: default_journey_column(),
            output_column: default_output_column(),
            mapping_path: default_mapping_path(),
            output_path: default_output_path(),
            fallback: default_fallback(),
            priority: default_priority(),
            duplicate_patterns: DuplicatePolicy::default(),
        }
    }
}

impl LeadcatConfig {
    /// Priority list built from `priority` and `fallback`.
    pub fn priority_list(&self) -> PriorityList {
        PriorityList::new(self.priority.iter().cloned(), self.fallback.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("leadcat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LeadcatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LeadcatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<LeadcatConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LeadcatConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = LeadcatConfig::default();
        assert_eq!(cfg.journey_column, "journey");
        assert_eq!(cfg.output_column, "TYPE");
        assert_eq!(cfg.mapping_path, PathBuf::from("mapping.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("categorized_leads.csv"));
        assert_eq!(cfg.fallback, "GENERAL");
        assert_eq!(cfg.priority.len(), DEFAULT_PRIORITY.len());
        assert_eq!(cfg.duplicate_patterns, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LeadcatConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LeadcatConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.journey_column, cfg.journey_column);
        assert_eq!(parsed.priority, cfg.priority);
        assert_eq!(parsed.duplicate_patterns, cfg.duplicate_patterns);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            journey_column = "pages"
            duplicate_patterns = "reject"
        "#;
        let cfg: LeadcatConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.journey_column, "pages");
        assert_eq!(cfg.duplicate_patterns, DuplicatePolicy::Reject);
        assert_eq!(cfg.output_column, "TYPE");
        assert_eq!(cfg.priority_list(), PriorityList::default());
    }

    #[test]
    fn config_toml_custom_priority() {
        let toml = r#"
            fallback = "UNKNOWN"
            priority = ["Condo: X", "BUY"]
        "#;
        let cfg: LeadcatConfig = toml::from_str(toml).unwrap();
        let p = cfg.priority_list();
        assert_eq!(p.labels(), &["Condo: X", "BUY", "UNKNOWN"]);
        assert_eq!(p.fallback(), "UNKNOWN");
    }

    #[test]
    fn config_bad_policy_is_rejected() {
        let toml = r#"duplicate_patterns = "merge""#;
        assert!(toml::from_str::<LeadcatConfig>(toml).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output_column = \"CATEGORY\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.output_column, "CATEGORY");
    }
}
