//! USGS adapter.
//!
//! USGS land cover requests take the boundary as `{lat, lng}` objects in
//! drawing order. Coverage is limited to the United States once the real
//! service is connected.

use async_trait::async_trait;
use landcover_core::config::ProviderKind;
use landcover_core::error::Result;
use landcover_core::models::{LandCoverBreakdown, ProviderGeometry};
use landcover_core::ports::AnalysisProvider;
use std::time::Duration;

use crate::mock::MockProvider;
use crate::simulated::{warn_if_missing_credential, SimulatedBackend};

/// USGS analysis provider
pub struct UsgsProvider {
    credential: Option<String>,
    backend: SimulatedBackend,
}

impl UsgsProvider {
    pub fn new(credential: Option<String>, latency: Duration) -> Self {
        Self::with_mock(credential, latency, MockProvider::new())
    }

    pub fn with_mock(credential: Option<String>, latency: Duration, mock: MockProvider) -> Self {
        warn_if_missing_credential(ProviderKind::Usgs, credential.as_deref());
        Self { credential, backend: SimulatedBackend::new(ProviderKind::Usgs, latency, mock) }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn latency(&self) -> Duration {
        self.backend.latency()
    }
}

#[async_trait]
impl AnalysisProvider for UsgsProvider {
    async fn analyze(&self, geometry: &ProviderGeometry) -> Result<LandCoverBreakdown> {
        self.backend.analyze(geometry).await
    }

    fn name(&self) -> &str {
        ProviderKind::Usgs.display_name()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Usgs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landcover_core::error::LandcoverError;
    use landcover_core::models::LatLng;

    #[tokio::test]
    async fn test_analyze_object_list() {
        let provider = UsgsProvider::with_mock(None, Duration::ZERO, MockProvider::seeded(2));
        let geometry = ProviderGeometry::LatLngObjectList(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 0.0),
            LatLng::new(1.0, 1.0),
        ]);
        let breakdown = provider.analyze(&geometry).await.unwrap();
        assert_eq!(breakdown.iter().count(), 5);
    }

    #[tokio::test]
    async fn test_rejects_geojson() {
        let provider = UsgsProvider::new(None, Duration::ZERO);
        let geometry = ProviderGeometry::GeoJsonPolygon(
            landcover_core::models::GeoJsonPolygon::single_ring(vec![[0.0, 0.0]]),
        );
        match provider.analyze(&geometry).await {
            Err(LandcoverError::InvalidGeometry { reason }) => assert!(reason.contains("USGS")),
            other => panic!("Expected InvalidGeometry, got {:?}", other),
        }
    }
}
