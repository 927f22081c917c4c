//! Configuration: `conform.toml` loading, presets, and the published JSON schema.
//!
//! Layout:
//!
//! ```toml
//! [scan]
//! extra_ignore = ["generated/**"]
//!
//! [rules.require-index-file]
//! level = "warn"
//! min_files = 3
//! exclude_patterns = ["**/fixtures/**"]
//! ```

pub mod rule_config;
pub mod scan_config;

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::rule_id::RuleId;

pub use rule_config::{IndexRuleConfig, Preset, RuleConfig, RuleLevel, RulesConfig};
pub use scan_config::ScanConfig;

/// File name looked up by [`ConformConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "conform.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ConformConfig {
    pub scan: ScanConfig,
    pub rules: RulesConfig,
}

impl ConformConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ConformConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Walk up from `start` looking for `conform.toml`.
    ///
    /// Returns the defaults when none is found.
    pub fn discover(start: &Path) -> Result<(Self, Option<PathBuf>), ConfigError> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }
        tracing::debug!(start = %start.display(), "no config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Configuration for a named preset, with default scan settings.
    pub fn for_preset(preset: Preset) -> Self {
        Self {
            scan: ScanConfig::default(),
            rules: preset.rules(),
        }
    }

    /// Replace rule settings with a preset's, keeping scan settings.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.rules = preset.rules();
    }

    /// Checks option ranges that serde cannot express.
    ///
    /// Pattern syntax is validated where patterns are compiled into rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min_files) = self.rules.require_index_file.min_files {
            if min_files < 1 {
                return Err(ConfigError::InvalidMinFiles {
                    rule: RuleId::RequireIndexFile.name().to_string(),
                    value: min_files,
                });
            }
        }
        Ok(())
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(ConformConfig);
        serde_json::to_value(schema).unwrap_or(serde_json::Value::Null)
    }
}
