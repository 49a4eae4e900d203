//! Land Cover Analysis - Polygon-to-breakdown orchestration
//!
//! This crate implements the analysis use case: validating a drawn polygon,
//! encoding it for the active provider, consulting the result cache, and
//! calling the provider on a miss.

pub mod models;
pub mod orchestrator;

pub use models::{AnalysisOptions, AnalysisOutcome, AnalysisReport, AnalysisState};
pub use orchestrator::AnalysisOrchestrator;
