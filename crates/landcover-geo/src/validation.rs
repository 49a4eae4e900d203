use landcover_core::error::{LandcoverError, Result};
use landcover_core::models::{Polygon, ValidityMode, MIN_ANALYZABLE_VERTICES};
use std::collections::HashSet;

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }
}

/// Whether a polygon has enough vertices to be analyzed
pub fn is_analyzable(polygon: &Polygon) -> bool {
    polygon.len() >= MIN_ANALYZABLE_VERTICES
}

/// Validate a polygon for analysis
pub fn validate_polygon(polygon: &Polygon, mode: ValidityMode) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if !is_analyzable(polygon) {
        result.add_error(
            "Polygon".to_string(),
            format!(
                "Polygon must have at least {} vertices, found {}",
                MIN_ANALYZABLE_VERTICES,
                polygon.len()
            ),
        );
        return result;
    }

    if mode == ValidityMode::Lenient {
        return result;
    }

    for (i, vertex) in polygon.vertices().iter().enumerate() {
        if !vertex.is_finite() {
            result.add_error(format!("Polygon[{}]", i), "Coordinates must be finite".to_string());
        }
    }

    let distinct: HashSet<(u64, u64)> =
        polygon.vertices().iter().map(|v| (v.lat.to_bits(), v.lng.to_bits())).collect();
    if distinct.len() < MIN_ANALYZABLE_VERTICES {
        result.add_error(
            "Polygon".to_string(),
            format!(
                "Polygon must have at least {} distinct vertices, found {}",
                MIN_ANALYZABLE_VERTICES,
                distinct.len()
            ),
        );
    }

    result
}

/// Fail with `InvalidPolygon` unless the polygon passes validation
pub fn ensure_analyzable(polygon: &Polygon, mode: ValidityMode) -> Result<()> {
    let validation = validate_polygon(polygon, mode);
    if validation.is_valid {
        return Ok(());
    }

    Err(LandcoverError::InvalidPolygon {
        vertex_count: polygon.len(),
        reason: validation
            .errors
            .first()
            .map(|e| e.reason.clone())
            .unwrap_or_else(|| "Invalid polygon".to_string()),
    })
}
