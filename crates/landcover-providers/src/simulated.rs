use landcover_core::config::ProviderKind;
use landcover_core::error::{LandcoverError, Result};
use landcover_core::models::{LandCoverBreakdown, ProviderGeometry};
use std::time::Duration;

use crate::latency::duration_ms;
use crate::mock::MockProvider;

/// Stand-in for a remote imagery service: checks the request encoding, waits
/// out the simulated round trip, and answers with mock data.
pub(crate) struct SimulatedBackend {
    kind: ProviderKind,
    latency: Duration,
    mock: MockProvider,
}

impl SimulatedBackend {
    pub(crate) fn new(kind: ProviderKind, latency: Duration, mock: MockProvider) -> Self {
        Self { kind, latency, mock }
    }

    pub(crate) fn latency(&self) -> Duration {
        self.latency
    }

    pub(crate) async fn analyze(&self, geometry: &ProviderGeometry) -> Result<LandCoverBreakdown> {
        let expected = self.kind.encoding();
        if geometry.encoding() != expected {
            return Err(LandcoverError::InvalidGeometry {
                reason: format!(
                    "{} expects {} geometry, got {}",
                    self.kind.display_name(),
                    expected.description(),
                    geometry.encoding().description()
                ),
            });
        }

        if !self.latency.is_zero() {
            tracing::debug!(
                provider = self.kind.key(),
                latency_ms = duration_ms(self.latency),
                "Simulating provider round trip"
            );
            tokio::time::sleep(self.latency).await;
        }

        Ok(self.mock.generate(geometry))
    }
}

/// Log once per adapter when no credential is configured
pub(crate) fn warn_if_missing_credential(kind: ProviderKind, credential: Option<&str>) {
    if credential.is_none() {
        tracing::warn!(
            provider = kind.key(),
            "No credential configured for {}; results are simulated",
            kind.display_name()
        );
    }
}
