//! Configuration management for the indicator tools.
//!
//! Configuration lives at `~/.indicadores/config.json`. Every section is optional;
//! a missing file yields the defaults.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (INDICATOR_* prefix)
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `INDICATOR_LOG_LEVEL` → observability.log_level
//! - `INDICATOR_LOG_FORMAT` → observability.log_format
//! - `INDICATOR_ZERO_IS_MISSING` → normalizer.zero_is_missing
//! - `INDICATOR_LOCALE_CLEANUP` → normalizer.locale_cleanup
//! - `INDICATOR_MISSING_POLICY` → classifier.missing_policy

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".indicadores"),
        |dirs| dirs.home_dir().join(".indicadores"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub normalizer: NormalizerConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable overrides applied.
    ///
    /// Overrides that could not be applied are returned so the caller can
    /// report them once logging is up.
    pub fn load_with_env(path: Option<&Path>) -> Result<(Self, Vec<RejectedOverride>)> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        let rejected = config.apply_env_overrides();
        Ok((config, rejected))
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) -> Vec<RejectedOverride> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values leave the setting untouched and are returned.
    pub fn apply_overrides_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Vec<RejectedOverride> {
        let mut rejected = Vec::new();
        let mut reject = |key: &'static str, value: String| {
            rejected.push(RejectedOverride { key, value });
        };

        if let Some(level) = lookup("INDICATOR_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("INDICATOR_LOG_FORMAT") {
            self.observability.log_format = format;
        }
        if let Some(value) = lookup("INDICATOR_ZERO_IS_MISSING") {
            match parse_bool(&value) {
                Some(flag) => self.normalizer.zero_is_missing = flag,
                None => reject("INDICATOR_ZERO_IS_MISSING", value),
            }
        }
        if let Some(value) = lookup("INDICATOR_LOCALE_CLEANUP") {
            match parse_bool(&value) {
                Some(flag) => self.normalizer.locale_cleanup = flag,
                None => reject("INDICATOR_LOCALE_CLEANUP", value),
            }
        }
        if let Some(value) = lookup("INDICATOR_MISSING_POLICY") {
            match value.parse() {
                Ok(policy) => self.classifier.missing_policy = policy,
                Err(()) => reject("INDICATOR_MISSING_POLICY", value),
            }
        }

        rejected
    }
}

/// An environment override whose value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub key: &'static str,
    pub value: String,
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Observability
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Normalizer
// ============================================================================

/// Value normalizer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Drop "." thousands separators and turn the decimal comma into a point.
    /// The "R$" marker is stripped regardless.
    #[serde(default = "default_true")]
    pub locale_cleanup: bool,

    /// Treat the literal string "0" as a missing value.
    ///
    /// Scraped pages print "0" for fields they have no data for, so this
    /// defaults to on. Turning it off makes "0" parse as a real zero.
    #[serde(default = "default_true")]
    pub zero_is_missing: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            locale_cleanup: true,
            zero_is_missing: true,
        }
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Classifier
// ============================================================================

/// What the classifier does with a missing input value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Report the value as unavailable ("Sem dados").
    #[default]
    Unavailable,
    /// Classify a missing value as 0.0.
    AsZero,
}

impl std::str::FromStr for MissingPolicy {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unavailable" => Ok(Self::Unavailable),
            "as_zero" | "zero" => Ok(Self::AsZero),
            _ => Err(()),
        }
    }
}

/// One threshold band as written in the config file.
///
/// `from: null` means unbounded below, `to: null` unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSpec {
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    pub label: String,
}

/// Ratio classifier options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub missing_policy: MissingPolicy,

    /// Threshold table overrides keyed by metric name.
    #[serde(default)]
    pub thresholds: BTreeMap<String, Vec<BandSpec>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, "pretty");
        assert!(config.normalizer.locale_cleanup);
        assert!(config.normalizer.zero_is_missing);
        assert_eq!(config.classifier.missing_policy, MissingPolicy::Unavailable);
        assert!(config.classifier.thresholds.is_empty());
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "observability": {{ "level": "debug" }},
                "classifier": {{
                    "missing_policy": "as_zero",
                    "thresholds": {{
                        "P/L": [
                            {{ "to": 0, "label": "Negativo" }},
                            {{ "from": 0, "to": 8, "label": "Ótimo" }},
                            {{ "from": 8, "label": "Bom" }}
                        ]
                    }}
                }}
            }}"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, "pretty");
        assert_eq!(config.classifier.missing_policy, MissingPolicy::AsZero);

        let bands = &config.classifier.thresholds["P/L"];
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].from, None);
        assert_eq!(bands[1].to, Some(8.0));
        assert_eq!(bands[2].label, "Bom");
    }

    #[test]
    fn test_load_from_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("INDICATOR_LOG_LEVEL", "warn"),
            ("INDICATOR_ZERO_IS_MISSING", "false"),
            ("INDICATOR_MISSING_POLICY", "as_zero"),
            ("INDICATOR_LOCALE_CLEANUP", "maybe"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let rejected = config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.observability.log_level, "warn");
        assert!(!config.normalizer.zero_is_missing);
        assert_eq!(config.classifier.missing_policy, MissingPolicy::AsZero);
        // Unparseable value leaves the default alone and is reported
        assert!(config.normalizer.locale_cleanup);
        assert_eq!(
            rejected,
            vec![RejectedOverride {
                key: "INDICATOR_LOCALE_CLEANUP",
                value: "maybe".into(),
            }]
        );
    }

    #[test]
    fn test_every_bad_override_is_reported() {
        let mut config = Config::default();
        let rejected = config.apply_overrides_from(|key| match key {
            "INDICATOR_ZERO_IS_MISSING" => Some("maybe".into()),
            "INDICATOR_MISSING_POLICY" => Some("ignore".into()),
            _ => None,
        });

        let keys: Vec<&str> = rejected.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["INDICATOR_ZERO_IS_MISSING", "INDICATOR_MISSING_POLICY"]);
        assert!(config.normalizer.zero_is_missing);
        assert_eq!(config.classifier.missing_policy, MissingPolicy::Unavailable);
    }

    #[test]
    fn test_no_overrides_nothing_rejected() {
        let mut config = Config::default();
        assert!(config.apply_overrides_from(|_| None).is_empty());
    }
}
