use chrono::{DateTime, Utc};
use landcover_core::config::ProviderKind;
use landcover_core::models::{LandCoverBreakdown, LatLng, ValidityMode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Orchestrator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisState {
    Idle,
    Analyzing,
}

/// How the most recent analysis ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalysisOutcome {
    Completed { from_cache: bool },
    Failed { message: String },
}

impl AnalysisOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisOutcome::Failed { .. })
    }
}

/// Construction options for the orchestrator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub validity_mode: ValidityMode,
}

impl AnalysisOptions {
    pub fn with_validity_mode(mut self, mode: ValidityMode) -> Self {
        self.validity_mode = mode;
        self
    }
}

/// Breakdown plus metadata about how it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Identifier carried by the analysis tracing span
    pub request_id: Uuid,

    /// Provider that produced the breakdown
    pub provider: ProviderKind,
    pub provider_name: String,

    pub breakdown: LandCoverBreakdown,

    /// Served from the result cache without calling the provider
    pub from_cache: bool,

    pub vertex_count: usize,

    /// Planar shoelace area in degree², a relative magnitude only
    pub planar_area: f64,

    pub centroid: Option<LatLng>,

    pub analyzed_at: DateTime<Utc>,
}
