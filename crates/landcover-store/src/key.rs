//! Canonical cache keys.
//!
//! Keys flatten every coordinate of the encoded geometry in traversal order:
//! the two numbers of a pair are joined with `,` and pairs with `;`. Two
//! polygons that encode to the same numeric sequence share a cache entry.

use landcover_core::models::ProviderGeometry;

/// Joins the two numbers of one coordinate pair
pub const COORDINATE_SEPARATOR: &str = ",";

/// Joins consecutive coordinate pairs
pub const PAIR_SEPARATOR: &str = ";";

/// Derive the cache key for an encoded geometry
pub fn cache_key(geometry: &ProviderGeometry) -> String {
    geometry
        .numeric_pairs()
        .iter()
        .map(|[a, b]| format!("{}{}{}", canonical(*a), COORDINATE_SEPARATOR, canonical(*b)))
        .collect::<Vec<_>>()
        .join(PAIR_SEPARATOR)
}

// -0.0 formats as "-0" but compares equal to 0.0
fn canonical(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
