//! Simulated land cover analysis.
//!
//! Draws four independent percentages whose upper bounds depend on whether
//! the polygon is large, then balances the remainder into `other`. Results
//! differ from call to call; the orchestrator's cache is what makes repeated
//! analysis of the same boundary stable.

use async_trait::async_trait;
use landcover_core::config::ProviderKind;
use landcover_core::error::Result;
use landcover_core::models::{LandCoverBreakdown, ProviderGeometry};
use landcover_core::ports::AnalysisProvider;
use landcover_geo::area::{geometry_area, is_large_area};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Upper bounds for each drawn category, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBounds {
    pub trees: f64,
    pub grass: f64,
    pub water: f64,
    pub buildings: f64,
}

impl CategoryBounds {
    /// Large areas lean towards vegetation and water
    pub const LARGE_AREA: CategoryBounds =
        CategoryBounds { trees: 40.0, grass: 30.0, water: 15.0, buildings: 20.0 };

    /// Small areas lean towards buildings
    pub const SMALL_AREA: CategoryBounds =
        CategoryBounds { trees: 20.0, grass: 15.0, water: 5.0, buildings: 60.0 };

    pub fn for_area(area: f64) -> Self {
        if is_large_area(area) {
            Self::LARGE_AREA
        } else {
            Self::SMALL_AREA
        }
    }
}

/// Mock provider producing pseudo-random breakdowns biased by polygon area
pub struct MockProvider {
    rng: Mutex<StdRng>,
}

impl MockProvider {
    /// Create a mock provider seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a reproducible mock provider
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng: Mutex::new(rng) }
    }

    /// Generate a breakdown for a geometry in any encoding
    pub fn generate(&self, geometry: &ProviderGeometry) -> LandCoverBreakdown {
        let area = geometry_area(geometry);
        let bounds = CategoryBounds::for_area(area);

        // A poisoned lock only means another draw panicked; the RNG state is still usable
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut draw = |max: f64| (rng.random::<f64>() * max).round();

        let trees = draw(bounds.trees);
        let grass = draw(bounds.grass);
        let water = draw(bounds.water);
        let buildings = draw(bounds.buildings);

        tracing::debug!(area, trees, grass, water, buildings, "Generated mock breakdown");

        LandCoverBreakdown::from_explicit(trees, grass, water, buildings)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisProvider for MockProvider {
    async fn analyze(&self, geometry: &ProviderGeometry) -> Result<LandCoverBreakdown> {
        Ok(self.generate(geometry))
    }

    fn name(&self) -> &str {
        ProviderKind::Mock.display_name()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landcover_core::models::{GeoJsonPolygon, PolygonType, NORMALIZATION_TOTAL};

    fn large_square() -> ProviderGeometry {
        ProviderGeometry::RawCoordList(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    }

    fn city_block() -> ProviderGeometry {
        ProviderGeometry::RawCoordList(vec![
            [37.7749, -122.4194],
            [37.7750, -122.4194],
            [37.7750, -122.4193],
        ])
    }

    fn assert_balanced(breakdown: &LandCoverBreakdown) {
        let explicit = breakdown.trees + breakdown.grass + breakdown.water + breakdown.buildings;
        if explicit <= NORMALIZATION_TOTAL {
            assert_eq!(breakdown.total(), NORMALIZATION_TOTAL);
        } else {
            assert_eq!(breakdown.other, 0.0);
        }
    }

    #[test]
    fn test_large_area_bounds() {
        let provider = MockProvider::seeded(7);
        for _ in 0..2000 {
            let breakdown = provider.generate(&large_square());
            assert!(breakdown.trees >= 0.0 && breakdown.trees <= 40.0);
            assert!(breakdown.grass <= 30.0);
            assert!(breakdown.water <= 15.0);
            assert!(breakdown.buildings <= 20.0);
            assert_balanced(&breakdown);
        }
    }

    #[test]
    fn test_small_area_bounds() {
        let provider = MockProvider::seeded(11);
        for _ in 0..2000 {
            let breakdown = provider.generate(&city_block());
            assert!(breakdown.trees <= 20.0);
            assert!(breakdown.grass <= 15.0);
            assert!(breakdown.water <= 5.0);
            assert!(breakdown.buildings <= 60.0);
            assert_balanced(&breakdown);
        }
    }

    #[test]
    fn test_values_are_whole_percentages() {
        let provider = MockProvider::seeded(3);
        let breakdown = provider.generate(&large_square());
        for (_, value) in breakdown.iter() {
            assert_eq!(value, value.round());
        }
    }

    #[test]
    fn test_extended_keys_never_populated() {
        let provider = MockProvider::seeded(5);
        let breakdown = provider.generate(&large_square());
        assert_eq!(breakdown.iter().count(), 5);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = MockProvider::seeded(42);
        let b = MockProvider::seeded(42);
        assert_eq!(a.generate(&large_square()), b.generate(&large_square()));
    }

    #[test]
    fn test_ringless_geometry_uses_small_bounds() {
        let geometry = ProviderGeometry::GeoJsonPolygon(GeoJsonPolygon {
            kind: PolygonType::Polygon,
            coordinates: vec![],
        });
        assert_eq!(CategoryBounds::for_area(geometry_area(&geometry)), CategoryBounds::SMALL_AREA);
    }

    #[tokio::test]
    async fn test_provider_port() {
        let provider = MockProvider::seeded(1);
        assert_eq!(provider.name(), "Mock");
        assert_eq!(provider.kind(), ProviderKind::Mock);

        let breakdown = provider.analyze(&large_square()).await.unwrap();
        assert_balanced(&breakdown);
    }
}
