//! Simulated network latency for the remote provider stubs

use landcover_core::config::ProviderKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artificial delay applied by each remote provider before answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyProfile {
    pub sentinel_hub: Duration,
    pub earth_engine: Duration,
    pub usgs: Duration,
}

impl LatencyProfile {
    /// Delays matching typical round trips of the real services
    pub fn simulated() -> Self {
        Self {
            sentinel_hub: Duration::from_millis(2000),
            earth_engine: Duration::from_millis(1800),
            usgs: Duration::from_millis(1500),
        }
    }

    /// No artificial delay
    pub fn none() -> Self {
        Self { sentinel_hub: Duration::ZERO, earth_engine: Duration::ZERO, usgs: Duration::ZERO }
    }

    pub fn for_kind(&self, kind: ProviderKind) -> Duration {
        match kind {
            ProviderKind::Mock => Duration::ZERO,
            ProviderKind::SentinelHub => self.sentinel_hub,
            ProviderKind::EarthEngine => self.earth_engine,
            ProviderKind::Usgs => self.usgs,
        }
    }
}

/// Whole milliseconds of a delay, saturating at `u64::MAX`
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}
