//! Provider construction from configuration

use landcover_core::config::{ProviderConfig, ProviderKind};
use landcover_core::models::GeometryEncoding;
use landcover_core::ports::AnalysisProvider;
use serde::Serialize;

use crate::earth_engine::EarthEngineProvider;
use crate::latency::{duration_ms, LatencyProfile};
use crate::mock::MockProvider;
use crate::sentinel_hub::SentinelHubProvider;
use crate::usgs::UsgsProvider;

/// Summary of a provider variant for listings
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub kind: ProviderKind,
    pub name: String,
    pub encoding: GeometryEncoding,
    pub latency_ms: u64,
}

/// Builds provider adapters for a [`ProviderConfig`]
#[derive(Debug, Clone, Default)]
pub struct ProviderFactory {
    latency: LatencyProfile,
    seed: Option<u64>,
}

impl ProviderFactory {
    pub fn new(latency: LatencyProfile) -> Self {
        Self { latency, seed: None }
    }

    /// Seed every mock generator the factory hands out
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    fn mock(&self) -> MockProvider {
        match self.seed {
            Some(seed) => MockProvider::seeded(seed),
            None => MockProvider::new(),
        }
    }

    /// Create the adapter for the configured provider
    pub fn create(&self, config: &ProviderConfig) -> Box<dyn AnalysisProvider> {
        let credential = config.credential.clone();
        let latency = self.latency.for_kind(config.kind);

        match config.kind {
            ProviderKind::Mock => Box::new(self.mock()),
            ProviderKind::SentinelHub => {
                Box::new(SentinelHubProvider::with_mock(credential, latency, self.mock()))
            }
            ProviderKind::EarthEngine => {
                Box::new(EarthEngineProvider::with_mock(credential, latency, self.mock()))
            }
            ProviderKind::Usgs => Box::new(UsgsProvider::with_mock(credential, latency, self.mock())),
        }
    }

    /// Describe every provider variant
    pub fn describe(&self) -> Vec<ProviderInfo> {
        ProviderKind::ALL
            .iter()
            .map(|kind| ProviderInfo {
                kind: *kind,
                name: kind.display_name().to_string(),
                encoding: kind.encoding(),
                latency_ms: duration_ms(self.latency.for_kind(*kind)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_matches_kind() {
        let factory = ProviderFactory::new(LatencyProfile::none());
        for kind in ProviderKind::ALL {
            let provider = factory.create(&ProviderConfig::new(kind));
            assert_eq!(provider.kind(), kind);
            assert_eq!(provider.name(), kind.display_name());
        }
    }

    #[test]
    fn test_describe_lists_all_providers() {
        let factory = ProviderFactory::new(LatencyProfile::simulated());
        let info = factory.describe();
        assert_eq!(info.len(), 4);
        assert_eq!(info[0].kind, ProviderKind::Mock);
        assert_eq!(info[0].latency_ms, 0);
        assert_eq!(info[1].latency_ms, 2000);
        assert_eq!(info[1].encoding, GeometryEncoding::GeoJson);
        assert_eq!(info[3].encoding, GeometryEncoding::LatLngObjects);
    }

    #[tokio::test]
    async fn test_seeded_factory_is_reproducible() {
        let factory = ProviderFactory::new(LatencyProfile::none()).with_seed(99);
        let geometry = landcover_core::models::ProviderGeometry::RawCoordList(vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
        ]);

        let a = factory.create(&ProviderConfig::default()).analyze(&geometry).await.unwrap();
        let b = factory.create(&ProviderConfig::default()).analyze(&geometry).await.unwrap();
        assert_eq!(a, b);
    }
}
