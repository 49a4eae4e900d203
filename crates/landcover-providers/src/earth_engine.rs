//! Google Earth Engine adapter.
//!
//! Earth Engine takes `ee.Geometry.Polygon` rings in `[lng, lat]` order,
//! which is the same single-ring GeoJSON encoding Sentinel Hub uses.

use async_trait::async_trait;
use landcover_core::config::ProviderKind;
use landcover_core::error::Result;
use landcover_core::models::{LandCoverBreakdown, ProviderGeometry};
use landcover_core::ports::AnalysisProvider;
use std::time::Duration;

use crate::mock::MockProvider;
use crate::simulated::{warn_if_missing_credential, SimulatedBackend};

/// Earth Engine analysis provider
pub struct EarthEngineProvider {
    credential: Option<String>,
    backend: SimulatedBackend,
}

impl EarthEngineProvider {
    pub fn new(credential: Option<String>, latency: Duration) -> Self {
        Self::with_mock(credential, latency, MockProvider::new())
    }

    pub fn with_mock(credential: Option<String>, latency: Duration, mock: MockProvider) -> Self {
        warn_if_missing_credential(ProviderKind::EarthEngine, credential.as_deref());
        Self {
            credential,
            backend: SimulatedBackend::new(ProviderKind::EarthEngine, latency, mock),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn latency(&self) -> Duration {
        self.backend.latency()
    }
}

#[async_trait]
impl AnalysisProvider for EarthEngineProvider {
    async fn analyze(&self, geometry: &ProviderGeometry) -> Result<LandCoverBreakdown> {
        self.backend.analyze(geometry).await
    }

    fn name(&self) -> &str {
        ProviderKind::EarthEngine.display_name()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::EarthEngine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landcover_core::models::GeoJsonPolygon;

    #[test]
    fn test_provider_name() {
        let provider = EarthEngineProvider::new(Some("token".into()), Duration::from_millis(1800));
        assert_eq!(provider.name(), "Google Earth Engine");
        assert!(provider.has_credential());
        assert_eq!(provider.latency(), Duration::from_millis(1800));
    }

    #[tokio::test]
    async fn test_analyze_geojson() {
        let provider = EarthEngineProvider::with_mock(None, Duration::ZERO, MockProvider::seeded(9));
        let geometry = ProviderGeometry::GeoJsonPolygon(GeoJsonPolygon::single_ring(vec![
            [-122.4194, 37.7749],
            [-122.41, 37.78],
            [-122.40, 37.77],
        ]));
        let breakdown = provider.analyze(&geometry).await.unwrap();
        // City-scale polygons use the building-heavy bounds
        assert!(breakdown.trees <= 20.0);
        assert!(breakdown.water <= 5.0);
    }
}
