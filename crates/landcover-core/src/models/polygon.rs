//! Drawn boundary polygons.
//!
//! A polygon is the ordered vertex list produced by the drawing tool, in
//! `(latitude, longitude)` order. Ring closure is implicit: the last vertex
//! connects back to the first without being repeated.

use serde::{Deserialize, Serialize};

/// Minimum number of vertices for a polygon to be analyzable
pub const MIN_ANALYZABLE_VERTICES: usize = 3;

/// A single geographic vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(vertex: LatLng) -> Self {
        [vertex.lat, vertex.lng]
    }
}

/// Ordered vertex list describing a property boundary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon(Vec<LatLng>);

impl Polygon {
    pub fn new(vertices: Vec<LatLng>) -> Self {
        Self(vertices)
    }

    /// Build a polygon from `[lat, lng]` pairs
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        Self(pairs.into_iter().map(LatLng::from).collect())
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Vertices as `[lat, lng]` pairs in drawing order
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.0.iter().map(|v| [v.lat, v.lng]).collect()
    }

    /// Add a vertex while the boundary is still being drawn
    pub fn push(&mut self, vertex: LatLng) {
        self.0.push(vertex);
    }
}

impl From<Vec<LatLng>> for Polygon {
    fn from(vertices: Vec<LatLng>) -> Self {
        Self(vertices)
    }
}

impl FromIterator<LatLng> for Polygon {
    fn from_iter<T: IntoIterator<Item = LatLng>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Polygon validation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidityMode {
    /// Reject non-finite coordinates and rings with fewer than 3 distinct vertices
    Strict,
    /// Only require the minimum vertex count
    #[default]
    Lenient,
}
