//! Coordinate transforms from drawing order into provider encodings

use landcover_core::config::ProviderKind;
use landcover_core::error::{LandcoverError, Result};
use landcover_core::models::{GeoJsonPolygon, GeometryEncoding, LatLng, Polygon, ProviderGeometry};

use crate::validation::is_analyzable;

/// Encode a polygon for the given provider
pub fn transform(polygon: &Polygon, kind: ProviderKind) -> Result<ProviderGeometry> {
    if !is_analyzable(polygon) {
        return Err(LandcoverError::too_few_vertices(polygon.len()));
    }
    Ok(encode(polygon, kind.encoding()))
}

/// Encode a polygon without the vertex count check
fn encode(polygon: &Polygon, encoding: GeometryEncoding) -> ProviderGeometry {
    match encoding {
        GeometryEncoding::RawCoordList => ProviderGeometry::RawCoordList(polygon.to_pairs()),
        GeometryEncoding::GeoJson => {
            let ring = polygon.vertices().iter().map(|v| [v.lng, v.lat]).collect();
            ProviderGeometry::GeoJsonPolygon(GeoJsonPolygon::single_ring(ring))
        }
        GeometryEncoding::LatLngObjects => {
            ProviderGeometry::LatLngObjectList(polygon.vertices().to_vec())
        }
    }
}

/// Decode a provider geometry back into drawing order.
///
/// GeoJSON input is axis-swapped back to `(lat, lng)`, and an explicit
/// closing vertex is dropped since ring closure is implicit.
pub fn to_polygon(geometry: &ProviderGeometry) -> Polygon {
    match geometry {
        ProviderGeometry::RawCoordList(coords) => Polygon::from_pairs(coords.iter().copied()),
        ProviderGeometry::LatLngObjectList(vertices) => Polygon::new(vertices.clone()),
        ProviderGeometry::GeoJsonPolygon(polygon) => {
            let mut ring: Vec<LatLng> = polygon
                .exterior()
                .unwrap_or_default()
                .iter()
                .map(|p| LatLng::new(p[1], p[0]))
                .collect();
            if ring.len() > 1 && ring.first() == ring.last() {
                ring.pop();
            }
            Polygon::new(ring)
        }
    }
}
