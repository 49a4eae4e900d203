pub mod breakdown;
pub mod geometry;
pub mod polygon;

pub use breakdown::{LandCoverBreakdown, LandCoverCategory, NORMALIZATION_TOTAL};
pub use geometry::{GeoJsonPolygon, GeometryEncoding, PolygonType, ProviderGeometry};
pub use polygon::{LatLng, Polygon, ValidityMode, MIN_ANALYZABLE_VERTICES};
