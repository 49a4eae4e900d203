//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

pub mod cache;
pub mod provider;

pub use cache::ResultCache;
pub use provider::AnalysisProvider;
