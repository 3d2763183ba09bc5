//! Configuration loading, validation, and management for rulefit.
//!
//! Loads configuration from `~/.rulefit/config.toml` with environment
//! variable overrides. Validates all settings at load time. A missing
//! config file is not an error — defaults apply.

use rulefit_core::{ProfileRegistry, Tuning};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.rulefit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Destination used when `generate` is invoked without `--dest`.
    #[serde(default = "default_destination")]
    pub default_destination: String,

    /// Locale tag carried on requests (informational).
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Per-destination overrides of the built-in profile table.
    #[serde(default)]
    pub destinations: HashMap<String, DestinationOverride>,

    /// Assembly/truncation ratio overrides.
    #[serde(default)]
    pub tuning: TuningConfig,
}

fn default_destination() -> String {
    "default".into()
}
fn default_locale() -> String {
    "en".into()
}

/// Overridable fields of one destination profile. Anything left out keeps
/// the built-in value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_limit: Option<usize>,
}

/// The four ratio constants driving budget checks and truncation. The
/// defaults are load-bearing; see `rulefit_core::Tuning`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningConfig {
    #[serde(default = "default_extended_ratio")]
    pub extended_budget_ratio: f64,

    #[serde(default = "default_examples_ratio")]
    pub examples_budget_ratio: f64,

    #[serde(default = "default_footer_ratio")]
    pub footer_fallback_ratio: f64,

    #[serde(default = "default_snap_ratio")]
    pub paragraph_snap_ratio: f64,
}

fn default_extended_ratio() -> f64 {
    0.7
}
fn default_examples_ratio() -> f64 {
    0.9
}
fn default_footer_ratio() -> f64 {
    0.3
}
fn default_snap_ratio() -> f64 {
    0.8
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            extended_budget_ratio: default_extended_ratio(),
            examples_budget_ratio: default_examples_ratio(),
            footer_fallback_ratio: default_footer_ratio(),
            paragraph_snap_ratio: default_snap_ratio(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.rulefit/config.toml).
    ///
    /// Environment overrides:
    /// - `RULEFIT_CONFIG_DIR` — alternate config directory
    /// - `RULEFIT_DESTINATION` — overrides `default_destination`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(destination) = std::env::var("RULEFIT_DESTINATION") {
            config.default_destination = destination;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("RULEFIT_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        dirs_home().join(".rulefit")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, dest) in &self.destinations {
            if dest.ceiling == Some(0) {
                return Err(ConfigError::ValidationError(format!(
                    "destinations.{name}.ceiling must be greater than 0"
                )));
            }
            if dest.line_limit == Some(0) {
                return Err(ConfigError::ValidationError(format!(
                    "destinations.{name}.line_limit must be greater than 0"
                )));
            }
        }

        let t = &self.tuning;
        for (field, value) in [
            ("extended_budget_ratio", t.extended_budget_ratio),
            ("examples_budget_ratio", t.examples_budget_ratio),
            ("footer_fallback_ratio", t.footer_fallback_ratio),
            ("paragraph_snap_ratio", t.paragraph_snap_ratio),
        ] {
            if !(0.0..1.0).contains(&value) || value == 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "tuning.{field} must be between 0.0 and 1.0 exclusive"
                )));
            }
        }

        if t.extended_budget_ratio >= t.examples_budget_ratio {
            return Err(ConfigError::ValidationError(
                "tuning.extended_budget_ratio must be below examples_budget_ratio".into(),
            ));
        }

        Ok(())
    }

    /// Apply the per-destination overrides onto a profile registry.
    /// Unknown destination names are ignored (there is nothing to adjust).
    pub fn apply_overrides(&self, registry: &mut ProfileRegistry) {
        for (name, dest) in &self.destinations {
            let Some(profile) = registry.get_mut(name) else {
                tracing::warn!(destination = %name, "override for unknown destination ignored");
                continue;
            };
            if let Some(ceiling) = dest.ceiling {
                profile.ceiling = ceiling;
            }
            if let Some(line_limit) = dest.line_limit {
                profile.line_limit = Some(line_limit);
            }
        }
    }

    /// The tuning ratios as the engine consumes them.
    pub fn tuning(&self) -> Tuning {
        Tuning {
            extended_budget_ratio: self.tuning.extended_budget_ratio,
            examples_budget_ratio: self.tuning.examples_budget_ratio,
            footer_fallback_ratio: self.tuning.footer_fallback_ratio,
            paragraph_snap_ratio: self.tuning.paragraph_snap_ratio,
        }
    }

    /// Generate a default config TOML string (for `onboard`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_destination: default_destination(),
            default_locale: default_locale(),
            destinations: HashMap::new(),
            tuning: TuningConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
