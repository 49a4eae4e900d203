//! Land Cover Store - Result cache adapters
//!
//! This crate derives canonical cache keys from encoded geometries and
//! provides the in-memory [`ResultCache`] implementation.
//!
//! [`ResultCache`]: landcover_core::ports::ResultCache

pub mod key;
pub mod memory;

pub use key::{cache_key, COORDINATE_SEPARATOR, PAIR_SEPARATOR};
pub use memory::MemoryResultCache;
