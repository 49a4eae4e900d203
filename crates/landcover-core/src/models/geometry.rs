//! Provider-specific geometry encodings.
//!
//! Each imagery provider expects the drawn polygon in its own shape. These
//! types serialize to exactly those JSON shapes:
//!
//! - raw coordinate list: `[[lat, lng], ...]`
//! - GeoJSON polygon: `{"type": "Polygon", "coordinates": [[[lng, lat], ...]]}`
//! - object list: `[{"lat": .., "lng": ..}, ...]`

use serde::{Deserialize, Serialize};

use super::polygon::LatLng;

/// Geometry encoding expected by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeometryEncoding {
    /// `[lat, lng]` pairs in drawing order
    RawCoordList,
    /// Single-ring GeoJSON polygon with `[lng, lat]` axis order
    GeoJson,
    /// `{lat, lng}` objects in drawing order
    LatLngObjects,
}

impl GeometryEncoding {
    pub fn description(&self) -> &'static str {
        match self {
            GeometryEncoding::RawCoordList => "[lat, lng] list",
            GeometryEncoding::GeoJson => "GeoJSON Polygon [lng, lat]",
            GeometryEncoding::LatLngObjects => "{lat, lng} objects",
        }
    }
}

/// GeoJSON geometry type tag. Only polygons are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolygonType {
    Polygon,
}

/// GeoJSON-style polygon, rings of `[lng, lat]` positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPolygon {
    #[serde(rename = "type")]
    pub kind: PolygonType,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl GeoJsonPolygon {
    /// Wrap a single ring
    pub fn single_ring(ring: Vec<[f64; 2]>) -> Self {
        Self { kind: PolygonType::Polygon, coordinates: vec![ring] }
    }

    pub fn exterior(&self) -> Option<&[[f64; 2]]> {
        self.coordinates.first().map(Vec::as_slice)
    }
}

/// A polygon encoded for a specific provider.
///
/// Variant order matters for detection: derived structs also accept the
/// sequence form, so raw pairs are tried before `{lat, lng}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderGeometry {
    GeoJsonPolygon(GeoJsonPolygon),
    RawCoordList(Vec<[f64; 2]>),
    LatLngObjectList(Vec<LatLng>),
}

impl ProviderGeometry {
    pub fn encoding(&self) -> GeometryEncoding {
        match self {
            ProviderGeometry::RawCoordList(_) => GeometryEncoding::RawCoordList,
            ProviderGeometry::GeoJsonPolygon(_) => GeometryEncoding::GeoJson,
            ProviderGeometry::LatLngObjectList(_) => GeometryEncoding::LatLngObjects,
        }
    }

    /// The ring the area estimator runs on, in the geometry's own axis order.
    ///
    /// Returns `None` when a GeoJSON polygon carries no rings.
    pub fn exterior_ring(&self) -> Option<Vec<[f64; 2]>> {
        match self {
            ProviderGeometry::RawCoordList(coords) => Some(coords.clone()),
            ProviderGeometry::GeoJsonPolygon(polygon) => polygon.exterior().map(<[_]>::to_vec),
            ProviderGeometry::LatLngObjectList(vertices) => {
                Some(vertices.iter().map(|v| [v.lat, v.lng]).collect())
            }
        }
    }

    /// Every coordinate pair in traversal order, across all rings
    pub fn numeric_pairs(&self) -> Vec<[f64; 2]> {
        match self {
            ProviderGeometry::RawCoordList(coords) => coords.clone(),
            ProviderGeometry::GeoJsonPolygon(polygon) => {
                polygon.coordinates.iter().flatten().copied().collect()
            }
            ProviderGeometry::LatLngObjectList(vertices) => {
                vertices.iter().map(|v| [v.lat, v.lng]).collect()
            }
        }
    }

    /// Re-detect a geometry shape from arbitrary JSON
    pub fn detect(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Convert to serde_json::Value in the provider's wire shape
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
