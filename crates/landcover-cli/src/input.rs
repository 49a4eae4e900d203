//! Polygon input parsing for the analyze command

use landcover_core::error::{LandcoverError, Result};
use landcover_core::models::{Polygon, ProviderGeometry};
use landcover_geo::transform::to_polygon;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a polygon from inline JSON or a JSON file path.
///
/// Any recognized shape is accepted and decoded back into drawing order:
/// a raw `[[lat, lng], ...]` list, a GeoJSON Polygon with `[lng, lat]`
/// positions (bare or wrapped in a Feature), or `[{"lat", "lng"}, ...]`.
pub fn parse_polygon_input(input: &str) -> Result<Polygon> {
    let trimmed = input.trim();
    let content = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        trimmed.to_string()
    } else {
        fs::read_to_string(Path::new(trimmed))?
    };

    let value: Value = serde_json::from_str(&content)?;
    parse_polygon_value(&value)
}

/// Decode a JSON value into a polygon
pub fn parse_polygon_value(value: &Value) -> Result<Polygon> {
    let value = match value.get("type").and_then(Value::as_str) {
        Some("Feature") => value.get("geometry").unwrap_or(&Value::Null),
        _ => value,
    };

    let geometry = ProviderGeometry::detect(value).ok_or_else(|| LandcoverError::InvalidGeometry {
        reason: "expected [[lat,lng],...], a GeoJSON Polygon, or [{\"lat\":..,\"lng\":..},...]"
            .to_string(),
    })?;

    tracing::debug!(encoding = ?geometry.encoding(), "Detected polygon input");
    Ok(to_polygon(&geometry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn expected() -> Polygon {
        Polygon::from_pairs([[37.7749, -122.4194], [37.78, -122.41], [37.77, -122.40]])
    }

    #[test]
    fn test_raw_list_inline() {
        let polygon =
            parse_polygon_input("[[37.7749,-122.4194],[37.78,-122.41],[37.77,-122.40]]").unwrap();
        assert_eq!(polygon, expected());
    }

    #[test]
    fn test_geojson_polygon_swaps_back() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[-122.4194, 37.7749], [-122.41, 37.78], [-122.40, 37.77], [-122.4194, 37.7749]]]
        });
        assert_eq!(parse_polygon_value(&value).unwrap(), expected());
    }

    #[test]
    fn test_geojson_feature() {
        let value = json!({
            "type": "Feature",
            "properties": {"name": "parcel"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-122.4194, 37.7749], [-122.41, 37.78], [-122.40, 37.77]]]
            }
        });
        assert_eq!(parse_polygon_value(&value).unwrap(), expected());
    }

    #[test]
    fn test_lat_lng_objects() {
        let value = json!([
            {"lat": 37.7749, "lng": -122.4194},
            {"lat": 37.78, "lng": -122.41},
            {"lat": 37.77, "lng": -122.40}
        ]);
        assert_eq!(parse_polygon_value(&value).unwrap(), expected());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]").unwrap();

        let polygon = parse_polygon_input(file.path().to_str().unwrap()).unwrap();
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_unrecognized_shape() {
        let result = parse_polygon_input(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#);
        assert!(matches!(result, Err(LandcoverError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_polygon_input("[[1.0, 2.0");
        assert!(matches!(result, Err(LandcoverError::Serialization(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_polygon_input("/nonexistent/parcel.json");
        assert!(matches!(result, Err(LandcoverError::Io(_))));
    }
}
