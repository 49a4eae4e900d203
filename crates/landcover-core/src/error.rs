//! Error types for the land cover pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandcoverError {
    // Polygon errors
    #[error("Invalid polygon with {vertex_count} vertices: {reason}")]
    InvalidPolygon { vertex_count: usize, reason: String },

    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    // Analysis errors
    #[error("Analysis failed on provider {provider}: {message}")]
    AnalysisFailed { provider: String, message: String },

    #[error("An analysis is already in progress. Wait for it to finish before starting another")]
    AnalysisInProgress,

    // Provider errors
    #[error("Unknown provider: {name}. Use mock, sentinel-hub, earth-engine, or usgs")]
    UnknownProvider { name: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LandcoverError {
    /// Polygon rejected for having too few vertices to close a ring
    pub fn too_few_vertices(vertex_count: usize) -> Self {
        LandcoverError::InvalidPolygon {
            vertex_count,
            reason: "at least 3 vertices are required".to_string(),
        }
    }
}

impl From<serde_json::Error> for LandcoverError {
    fn from(err: serde_json::Error) -> Self {
        LandcoverError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LandcoverError>;
