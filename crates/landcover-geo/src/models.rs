//! Conversions between land cover geometries and the `geo`/`geojson` crates.

use geo::Centroid;
use landcover_core::models::{LatLng, Polygon, ProviderGeometry};

use crate::transform::to_polygon;

/// Convert a drawn polygon to a geo::Polygon with x = longitude, y = latitude
pub fn to_geo_polygon(polygon: &Polygon) -> geo::Polygon {
    let coords: Vec<geo::Coord> =
        polygon.vertices().iter().map(|v| geo::Coord { x: v.lng, y: v.lat }).collect();
    geo::Polygon::new(geo::LineString::new(coords), vec![])
}

/// Convert any provider geometry to a GeoJSON polygon in `[lng, lat]` order
pub fn to_geojson(geometry: &ProviderGeometry) -> geojson::Geometry {
    let polygon = to_polygon(geometry);
    let mut ring: Vec<Vec<f64>> = polygon.vertices().iter().map(|v| vec![v.lng, v.lat]).collect();
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }
    geojson::Geometry::new(geojson::Value::Polygon(vec![ring]))
}

/// Extension trait for Polygon with geo-crate operations
pub trait PolygonExt {
    /// Convert to geo::Polygon
    fn to_geo(&self) -> geo::Polygon;

    /// Get the centroid as a vertex
    fn centroid_latlng(&self) -> Option<LatLng>;
}

impl PolygonExt for Polygon {
    fn to_geo(&self) -> geo::Polygon {
        to_geo_polygon(self)
    }

    fn centroid_latlng(&self) -> Option<LatLng> {
        self.to_geo().centroid().map(|p| LatLng::new(p.y(), p.x()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landcover_core::config::ProviderKind;

    use crate::transform::transform;

    #[test]
    fn test_geo_polygon_is_closed() {
        let polygon = Polygon::from_pairs([[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]);
        let geo_polygon = polygon.to_geo();
        assert_eq!(geo_polygon.exterior().0.len(), 5);
        assert_eq!(geo_polygon.exterior().0[1], geo::Coord { x: 2.0, y: 0.0 });
    }

    #[test]
    fn test_centroid() {
        let polygon = Polygon::from_pairs([[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]);
        let centroid = polygon.centroid_latlng().unwrap();
        assert!((centroid.lat - 1.0).abs() < 1e-10);
        assert!((centroid.lng - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_to_geojson_closes_ring() {
        let polygon = Polygon::from_pairs([[37.7749, -122.4194], [37.78, -122.41], [37.77, -122.40]]);
        let geometry = transform(&polygon, ProviderKind::Usgs).unwrap();

        match to_geojson(&geometry).value {
            geojson::Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 4);
                assert_eq!(rings[0][0], vec![-122.4194, 37.7749]);
                assert_eq!(rings[0][0], rings[0][3]);
            }
            other => panic!("Expected Polygon, got {:?}", other),
        }
    }
}
