#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use gematria_core::Method;

const CONFIG_DIR: &str = "gematria";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub calculation: CalculationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CalculationConfig {
    #[serde(default)]
    pub default_method: Method,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Show method names in Hebrew instead of English.
    #[serde(default)]
    pub hebrew_labels: bool,
    #[serde(default = "DisplayConfig::default_show_letters")]
    pub show_letters: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            hebrew_labels: false,
            show_letters: Self::default_show_letters(),
        }
    }
}

impl DisplayConfig {
    const fn default_show_letters() -> bool {
        true
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load `~/gematria/config.json`, or defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - calculation.default_method: standard, ordinal, reduced or integral");
        println!("   - display.format: text or json");
        println!("   - display.hebrew_labels: show method names in Hebrew");
        println!("   - display.show_letters: print the per-letter breakdown");
        println!();
        Ok(())
    }

    /// Write the default template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.calculation.default_method, Method::Standard);
        assert!(config.display.show_letters);
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_json(
            r#"{
  "calculation": { "default_method": "integral" },
  "display": { "format": "json" }
}"#,
        )
        .unwrap();
        assert_eq!(config.calculation.default_method, Method::Integral);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(!config.display.hebrew_labels);
        assert!(config.display.show_letters);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let err = Config::from_json(r#"{ "calculation": { "default_method": "katan" } }"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_template_roundtrip_and_no_overwrite() {
        let dir = std::env::temp_dir().join(format!("gematria-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        let _ = std::fs::remove_file(&path);

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        Config::write_template(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
        assert!(Config::write_template(&path).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
