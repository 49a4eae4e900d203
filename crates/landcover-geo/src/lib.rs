//! Land Cover Geo - Polygon validation, area estimation, and provider encodings
//!
//! This crate handles the geometry side of the analysis pipeline: the
//! analyzability gate, the planar area estimate that biases simulated output,
//! and the per-provider coordinate transforms.

pub mod area;
pub mod models;
pub mod transform;
pub mod validation;

pub use area::{geometry_area, is_large_area, polygon_area, shoelace_area, LARGE_AREA_THRESHOLD};
pub use transform::{to_polygon, transform};
pub use validation::{ensure_analyzable, is_analyzable, validate_polygon};
