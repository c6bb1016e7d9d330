//! Configuration for the schema tooling
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (remcall.toml)
//! - Environment variables (REMCALL__*)
//!
//! ## Example config file (remcall.toml):
//! ```toml
//! [schema]
//! label = "orders"
//!
//! [output]
//! format = "json"
//!
//! [naming]
//! convention = "snake"
//!
//! [log]
//! filter = "remcall_schema=debug"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::naming::NamingConvention;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub schema: SchemaSection,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Defaults for newly built schemas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSection {
    /// Label given to schemas built by the CLI
    #[serde(default = "default_label")]
    pub label: String,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How schemas are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The textual rendering
    #[default]
    Text,
    /// serde_json, pretty-printed
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default)]
    pub convention: NamingConvention,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` is used when unset
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_label() -> String {
    "remcall".to_string()
}

impl Default for SchemaSection {
    fn default() -> Self {
        Self { label: default_label() }
    }
}

impl SchemaConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering an explicit file over the defaults
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        for location in ["remcall.toml", ".remcall.toml", "config/remcall.toml"] {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(dirs) = directories::ProjectDirs::from("dev", "remcall", "remcall") {
            let xdg_config = dirs.config_dir().join("remcall.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("REMCALL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        tracing::debug!("configuration loaded");
        Ok(config.try_deserialize()?)
    }

    /// Save configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SchemaConfig::default();
        assert_eq!(config.schema.label, "remcall");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.naming.convention, NamingConvention::Identity);
        assert!(config.log.filter.is_none());
    }

    #[test]
    fn test_serialize_config() {
        let config = SchemaConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[schema]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("format = \"text\""));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[schema]\nlabel = \"orders\"\n\n[naming]\nconvention = \"snake\"").unwrap();

        let config = SchemaConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.schema.label, "orders");
        assert_eq!(config.naming.convention, NamingConvention::Snake);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remcall.toml");

        let mut config = SchemaConfig::default();
        config.output.format = OutputFormat::Json;
        config.save(&path).unwrap();

        let reloaded = SchemaConfig::load_from(Some(&path)).unwrap();
        assert_eq!(reloaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[log]\nfilter = \"warn\"").unwrap();

        std::env::set_var("REMCALL__LOG__FILTER", "remcall_schema=trace");
        let loaded = SchemaConfig::load_from(Some(file.path()));
        std::env::remove_var("REMCALL__LOG__FILTER");

        let config = loaded.unwrap();
        assert_eq!(config.log.filter.as_deref(), Some("remcall_schema=trace"));
    }
}
