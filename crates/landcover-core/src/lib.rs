//! Land Cover Core - Domain models, provider configuration, and ports
//!
//! This crate contains the core domain types and port definitions shared by
//! the analysis pipeline crates.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{LandcoverError, Result};
