//! Planar area estimate used to bias simulated analysis.
//!
//! The shoelace formula runs directly on degree-valued pairs in whatever axis
//! order the geometry carries, with no projection. The result is a relative
//! magnitude in degree² and not a surface area.

use landcover_core::error::{LandcoverError, Result};
use landcover_core::models::{Polygon, ProviderGeometry};

use crate::validation::is_analyzable;

/// Areas above this many degree² count as large
pub const LARGE_AREA_THRESHOLD: f64 = 0.001;

/// Shoelace area of an implicitly closed ring
pub fn shoelace_area(points: &[[f64; 2]]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i][0] * points[j][1] - points[j][0] * points[i][1];
    }
    sum.abs() / 2.0
}

/// Area of a drawn polygon, treating latitude as x and longitude as y
pub fn polygon_area(polygon: &Polygon) -> Result<f64> {
    if !is_analyzable(polygon) {
        return Err(LandcoverError::too_few_vertices(polygon.len()));
    }
    Ok(shoelace_area(&polygon.to_pairs()))
}

/// Area of an encoded geometry. A geometry without a ring counts as zero.
pub fn geometry_area(geometry: &ProviderGeometry) -> f64 {
    match geometry.exterior_ring() {
        Some(ring) => shoelace_area(&ring),
        None => {
            tracing::debug!("Geometry has no exterior ring, treating area as 0");
            0.0
        }
    }
}

pub fn is_large_area(area: f64) -> bool {
    area > LARGE_AREA_THRESHOLD
}
