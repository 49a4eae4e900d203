//! Land Cover Providers - Analysis provider adapters
//!
//! This crate implements the [`AnalysisProvider`] port: the simulated mock
//! generator and the Sentinel Hub, Earth Engine, and USGS adapters, which
//! currently delegate to the mock after a simulated network delay.
//!
//! [`AnalysisProvider`]: landcover_core::ports::AnalysisProvider

pub mod earth_engine;
pub mod factory;
pub mod latency;
pub mod mock;
pub mod sentinel_hub;
mod simulated;
pub mod usgs;

// Re-export main types
pub use earth_engine::EarthEngineProvider;
pub use factory::{ProviderFactory, ProviderInfo};
pub use latency::LatencyProfile;
pub use mock::MockProvider;
pub use sentinel_hub::SentinelHubProvider;
pub use usgs::UsgsProvider;
