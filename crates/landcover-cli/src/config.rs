//! Layered configuration for the CLI.
//!
//! Values resolve with precedence Default < File < Environment < Cli, and
//! each value remembers the layer it came from for `landcover config`.

use landcover_analysis::AnalysisOptions;
use landcover_core::config::{ProviderConfig, ProviderKind};
use landcover_core::error::{LandcoverError, Result};
use landcover_core::models::ValidityMode;
use landcover_providers::LatencyProfile;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "landcover.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the land cover CLI
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub provider: ConfigValue<ProviderKind>,
    pub api_key: ConfigValue<Option<String>>,
    pub cache_enabled: ConfigValue<bool>,
    pub simulate_latency: ConfigValue<bool>,
    pub geometry_validity: ConfigValue<ValidityMode>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            provider: ConfigValue::new(ProviderKind::Mock, ConfigSource::Default),
            api_key: ConfigValue::new(None, ConfigSource::Default),
            cache_enabled: ConfigValue::new(true, ConfigSource::Default),
            simulate_latency: ConfigValue::new(true, ConfigSource::Default),
            geometry_validity: ConfigValue::new(ValidityMode::Lenient, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| LandcoverError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| LandcoverError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(provider) = file_config.provider {
            self.provider.update(provider, ConfigSource::File);
        }

        if let Some(api_key) = file_config.api_key {
            self.api_key.update(Some(api_key), ConfigSource::File);
        }

        if let Some(cache) = file_config.cache {
            self.cache_enabled.update(cache, ConfigSource::File);
        }

        if let Some(simulate_latency) = file_config.simulate_latency {
            self.simulate_latency.update(simulate_latency, ConfigSource::File);
        }

        if let Some(geometry_validity) = file_config.geometry_validity {
            self.geometry_validity.update(geometry_validity, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // LANDCOVER_PROVIDER
        if let Ok(provider_str) = env::var("LANDCOVER_PROVIDER") {
            match provider_str.parse::<ProviderKind>() {
                Ok(provider) => self.provider.update(provider, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LANDCOVER_PROVIDER value '{}': expected mock, sentinel-hub, earth-engine, or usgs",
                    provider_str
                ),
            }
        }

        // LANDCOVER_API_KEY
        if let Ok(api_key) = env::var("LANDCOVER_API_KEY") {
            if !api_key.is_empty() {
                self.api_key.update(Some(api_key), ConfigSource::Environment);
            }
        }

        // LANDCOVER_CACHE
        if let Ok(cache_str) = env::var("LANDCOVER_CACHE") {
            match parse_bool("cache", &cache_str) {
                Ok(cache) => self.cache_enabled.update(cache, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LANDCOVER_CACHE value '{}': expected true or false",
                    cache_str
                ),
            }
        }

        // LANDCOVER_SIMULATE_LATENCY
        if let Ok(latency_str) = env::var("LANDCOVER_SIMULATE_LATENCY") {
            match parse_bool("simulate_latency", &latency_str) {
                Ok(latency) => self.simulate_latency.update(latency, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LANDCOVER_SIMULATE_LATENCY value '{}': expected true or false",
                    latency_str
                ),
            }
        }

        // LANDCOVER_GEOMETRY_VALIDITY
        if let Ok(validity_str) = env::var("LANDCOVER_GEOMETRY_VALIDITY") {
            match parse_validity_mode(&validity_str) {
                Ok(validity) => self.geometry_validity.update(validity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LANDCOVER_GEOMETRY_VALIDITY value '{}': expected strict or lenient",
                    validity_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(provider) = overrides.provider {
            self.provider.update(provider, ConfigSource::Cli);
        }

        if let Some(api_key) = overrides.api_key {
            self.api_key.update(Some(api_key), ConfigSource::Cli);
        }

        if let Some(cache_enabled) = overrides.cache_enabled {
            self.cache_enabled.update(cache_enabled, ConfigSource::Cli);
        }

        if let Some(simulate_latency) = overrides.simulate_latency {
            self.simulate_latency.update(simulate_latency, ConfigSource::Cli);
        }

        if let Some(geometry_validity) = overrides.geometry_validity {
            self.geometry_validity.update(geometry_validity, ConfigSource::Cli);
        }
    }

    /// Provider configuration handed to the orchestrator
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            kind: self.provider.value,
            credential: self.api_key.value.clone(),
            cache_enabled: self.cache_enabled.value,
        }
    }

    pub fn latency_profile(&self) -> LatencyProfile {
        if self.simulate_latency.value {
            LatencyProfile::simulated()
        } else {
            LatencyProfile::none()
        }
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions::default().with_validity_mode(self.geometry_validity.value)
    }

    /// All configuration values in display order, credential masked
    pub fn to_inspection_list(&self) -> Vec<(String, String, ConfigSource)> {
        let api_key = match &self.api_key.value {
            Some(_) => "********".to_string(),
            None => "(not set)".to_string(),
        };

        vec![
            ("provider".to_string(), self.provider.value.key().to_string(), self.provider.source),
            ("api_key".to_string(), api_key, self.api_key.source),
            ("cache".to_string(), self.cache_enabled.value.to_string(), self.cache_enabled.source),
            (
                "simulate_latency".to_string(),
                self.simulate_latency.value.to_string(),
                self.simulate_latency.source,
            ),
            (
                "geometry_validity".to_string(),
                format!("{:?}", self.geometry_validity.value),
                self.geometry_validity.source,
            ),
        ]
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    cache: Option<bool>,
    simulate_latency: Option<bool>,
    geometry_validity: Option<ValidityMode>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub provider: Option<ProviderKind>,
    pub api_key: Option<String>,
    pub cache_enabled: Option<bool>,
    pub simulate_latency: Option<bool>,
    pub geometry_validity: Option<ValidityMode>,
}

/// Resolve the full configuration stack.
///
/// An explicit config path must exist. Without one, `landcover.toml` in the
/// working directory is used if present.
pub fn load(path: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    match path {
        Some(path) => config = config.load_from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                config = config.load_from_file(default_path)?;
            }
        }
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}

/// Parse a boolean flag from string
pub fn parse_bool(key: &str, s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(LandcoverError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}

/// Parse validity mode from string
pub fn parse_validity_mode(s: &str) -> Result<ValidityMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidityMode::Strict),
        "lenient" => Ok(ValidityMode::Lenient),
        _ => Err(LandcoverError::ConfigInvalid {
            key: "geometry_validity".to_string(),
            reason: format!("Invalid validity mode: {}. Use strict or lenient", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ENV_VARS: [&str; 5] = [
        "LANDCOVER_PROVIDER",
        "LANDCOVER_API_KEY",
        "LANDCOVER_CACHE",
        "LANDCOVER_SIMULATE_LATENCY",
        "LANDCOVER_GEOMETRY_VALIDITY",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.provider.value, ProviderKind::Mock);
        assert_eq!(config.provider.source, ConfigSource::Default);
        assert_eq!(config.api_key.value, None);
        assert!(config.cache_enabled.value);
        assert!(config.simulate_latency.value);
        assert_eq!(config.geometry_validity.value, ValidityMode::Lenient);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let file = config_file(
            r#"
provider = "earth-engine"
api_key = "file-key"
cache = false
simulate_latency = false
geometry_validity = "Strict"
"#,
        );

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.provider.value, ProviderKind::EarthEngine);
        assert_eq!(config.provider.source, ConfigSource::File);
        assert_eq!(config.api_key.value.as_deref(), Some("file-key"));
        assert!(!config.cache_enabled.value);
        assert!(!config.simulate_latency.value);
        assert_eq!(config.geometry_validity.value, ValidityMode::Strict);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = config_file(r#"provider = "usgs""#);
        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.provider.value, ProviderKind::Usgs);
        assert_eq!(config.cache_enabled.source, ConfigSource::Default);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let file = config_file(r#"provider = "landsat""#);
        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(LandcoverError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/landcover.toml");
        assert!(matches!(result, Err(LandcoverError::ConfigInvalid { .. })));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let file = config_file(
            r#"
provider = "earth-engine"
cache = true
"#,
        );
        env::set_var("LANDCOVER_PROVIDER", "sentinel-hub");
        env::set_var("LANDCOVER_CACHE", "off");

        let config =
            LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

        assert_eq!(config.provider.value, ProviderKind::SentinelHub);
        assert_eq!(config.provider.source, ConfigSource::Environment);
        assert!(!config.cache_enabled.value);
        assert_eq!(config.cache_enabled.source, ConfigSource::Environment);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_values_are_ignored() {
        clear_env();
        env::set_var("LANDCOVER_PROVIDER", "landsat");
        env::set_var("LANDCOVER_SIMULATE_LATENCY", "sometimes");
        env::set_var("LANDCOVER_GEOMETRY_VALIDITY", "picky");

        let config = LayeredConfig::with_defaults().load_from_env();

        assert_eq!(config.provider.value, ProviderKind::Mock);
        assert_eq!(config.provider.source, ConfigSource::Default);
        assert!(config.simulate_latency.value);
        assert_eq!(config.geometry_validity.value, ValidityMode::Lenient);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_api_key_env_is_unset() {
        clear_env();
        env::set_var("LANDCOVER_API_KEY", "");

        let config = LayeredConfig::with_defaults().load_from_env();
        assert_eq!(config.api_key.value, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        clear_env();
        env::set_var("LANDCOVER_PROVIDER", "usgs");
        env::set_var("LANDCOVER_API_KEY", "env-key");

        let overrides = CliConfigOverrides {
            provider: Some(ProviderKind::EarthEngine),
            cache_enabled: Some(false),
            ..Default::default()
        };
        let config = load(None, overrides).unwrap();

        assert_eq!(config.provider.value, ProviderKind::EarthEngine);
        assert_eq!(config.provider.source, ConfigSource::Cli);
        assert_eq!(config.api_key.value.as_deref(), Some("env-key"));
        assert_eq!(config.api_key.source, ConfigSource::Environment);
        assert!(!config.cache_enabled.value);
        clear_env();
    }

    #[test]
    fn test_provider_config_and_latency() {
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            provider: Some(ProviderKind::SentinelHub),
            api_key: Some("secret".to_string()),
            simulate_latency: Some(false),
            ..Default::default()
        });

        let provider_config = config.provider_config();
        assert_eq!(provider_config.kind, ProviderKind::SentinelHub);
        assert_eq!(provider_config.credential.as_deref(), Some("secret"));
        assert!(provider_config.cache_enabled);
        assert_eq!(config.latency_profile(), LatencyProfile::none());
    }

    #[test]
    fn test_inspection_masks_api_key() {
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            api_key: Some("secret".to_string()),
            ..Default::default()
        });

        let list = config.to_inspection_list();
        let (_, value, source) = list.iter().find(|(key, _, _)| key == "api_key").unwrap();
        assert!(!value.contains("secret"));
        assert_eq!(*source, ConfigSource::Cli);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("cache", "TRUE").unwrap());
        assert!(parse_bool("cache", "1").unwrap());
        assert!(!parse_bool("cache", "off").unwrap());
        assert!(parse_bool("cache", "maybe").is_err());
    }

    #[test]
    fn test_parse_validity_mode() {
        assert_eq!(parse_validity_mode("strict").unwrap(), ValidityMode::Strict);
        assert_eq!(parse_validity_mode("LENIENT").unwrap(), ValidityMode::Lenient);
        assert!(parse_validity_mode("invalid").is_err());
    }
}
