//! Sentinel Hub adapter.
//!
//! Requests carry the boundary as a GeoJSON polygon with `[lng, lat]`
//! positions. Classification against Sentinel-2 scenes is not wired up yet;
//! the adapter answers with simulated results after the configured delay.

use async_trait::async_trait;
use landcover_core::config::ProviderKind;
use landcover_core::error::Result;
use landcover_core::models::{LandCoverBreakdown, ProviderGeometry};
use landcover_core::ports::AnalysisProvider;
use std::time::Duration;

use crate::mock::MockProvider;
use crate::simulated::{warn_if_missing_credential, SimulatedBackend};

/// Sentinel Hub analysis provider
pub struct SentinelHubProvider {
    credential: Option<String>,
    backend: SimulatedBackend,
}

impl SentinelHubProvider {
    /// Creates a new Sentinel Hub provider
    ///
    /// # Arguments
    ///
    /// * `credential` - OAuth client secret, if configured
    /// * `latency` - Simulated round trip before answering
    pub fn new(credential: Option<String>, latency: Duration) -> Self {
        Self::with_mock(credential, latency, MockProvider::new())
    }

    pub fn with_mock(credential: Option<String>, latency: Duration, mock: MockProvider) -> Self {
        warn_if_missing_credential(ProviderKind::SentinelHub, credential.as_deref());
        Self {
            credential,
            backend: SimulatedBackend::new(ProviderKind::SentinelHub, latency, mock),
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
impl AnalysisProvider for SentinelHubProvider {
    async fn analyze(&self, geometry: &ProviderGeometry) -> Result<LandCoverBreakdown> {
        self.backend.analyze(geometry).await
    }

    fn name(&self) -> &str {
        ProviderKind::SentinelHub.display_name()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::SentinelHub
    }
}
