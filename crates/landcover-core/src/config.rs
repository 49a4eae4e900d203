//! Provider selection and analysis configuration.
//!
//! The orchestrator is constructed from a [`ProviderConfig`]. Environment and
//! file based defaults are resolved by the bootstrapping layer before that.

use crate::error::{LandcoverError, Result};
use crate::models::GeometryEncoding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of analysis providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Simulated analysis, no network access
    #[default]
    Mock,
    /// Sentinel Hub process API (GeoJSON geometry)
    SentinelHub,
    /// Google Earth Engine (GeoJSON-style geometry)
    EarthEngine,
    /// USGS imagery services (lat/lng object list)
    Usgs,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Mock,
        ProviderKind::SentinelHub,
        ProviderKind::EarthEngine,
        ProviderKind::Usgs,
    ];

    /// Identifier used in configuration and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ProviderKind::Mock => "mock",
            ProviderKind::SentinelHub => "sentinel-hub",
            ProviderKind::EarthEngine => "earth-engine",
            ProviderKind::Usgs => "usgs",
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Mock => "Mock",
            ProviderKind::SentinelHub => "Sentinel Hub",
            ProviderKind::EarthEngine => "Google Earth Engine",
            ProviderKind::Usgs => "USGS",
        }
    }

    /// Geometry encoding the provider expects
    pub fn encoding(&self) -> GeometryEncoding {
        match self {
            ProviderKind::Mock => GeometryEncoding::RawCoordList,
            ProviderKind::SentinelHub | ProviderKind::EarthEngine => GeometryEncoding::GeoJson,
            ProviderKind::Usgs => GeometryEncoding::LatLngObjects,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProviderKind {
    type Err = LandcoverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "mock" => Ok(ProviderKind::Mock),
            "sentinel-hub" | "sentinelhub" | "sentinel" => Ok(ProviderKind::SentinelHub),
            "earth-engine" | "earthengine" | "gee" => Ok(ProviderKind::EarthEngine),
            "usgs" => Ok(ProviderKind::Usgs),
            _ => Err(LandcoverError::UnknownProvider { name: s.to_string() }),
        }
    }
}

/// Active provider, its credential, and the caching toggle
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    pub cache_enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { kind: ProviderKind::Mock, credential: None, cache_enabled: true }
    }
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind) -> Self {
        Self { kind, ..Default::default() }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }
}

// Credentials stay out of logs
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("cache_enabled", &self.cache_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.kind, ProviderKind::Mock);
        assert!(config.credential.is_none());
        assert!(config.cache_enabled);
    }

    #[test]
    fn test_parse_provider_kind() {
        assert_eq!("mock".parse::<ProviderKind>().unwrap(), ProviderKind::Mock);
        assert_eq!("Sentinel-Hub".parse::<ProviderKind>().unwrap(), ProviderKind::SentinelHub);
        assert_eq!("earth_engine".parse::<ProviderKind>().unwrap(), ProviderKind::EarthEngine);
        assert_eq!("USGS".parse::<ProviderKind>().unwrap(), ProviderKind::Usgs);
        assert!(matches!(
            "landsat".parse::<ProviderKind>(),
            Err(LandcoverError::UnknownProvider { .. })
        ));
    }

    #[test]
    fn test_display_matches_key() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_encodings() {
        assert_eq!(ProviderKind::Mock.encoding(), GeometryEncoding::RawCoordList);
        assert_eq!(ProviderKind::SentinelHub.encoding(), GeometryEncoding::GeoJson);
        assert_eq!(ProviderKind::EarthEngine.encoding(), GeometryEncoding::GeoJson);
        assert_eq!(ProviderKind::Usgs.encoding(), GeometryEncoding::LatLngObjects);
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = ProviderConfig::new(ProviderKind::SentinelHub).with_credential("secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&ProviderKind::EarthEngine).unwrap();
        assert_eq!(json, r#""earth-engine""#);
    }
}
