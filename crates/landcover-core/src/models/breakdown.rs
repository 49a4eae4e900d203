//! Land cover composition of an analyzed polygon.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total that a fully balanced breakdown sums to (percent of area)
pub const NORMALIZATION_TOTAL: f64 = 100.0;

/// Land cover category keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandCoverCategory {
    Trees,
    Grass,
    Water,
    Buildings,
    Other,
    Crops,
    Barren,
    Shrubland,
    Wetlands,
    SnowIce,
}

impl LandCoverCategory {
    /// Categories every breakdown carries
    pub const REQUIRED: [LandCoverCategory; 5] = [
        LandCoverCategory::Trees,
        LandCoverCategory::Grass,
        LandCoverCategory::Water,
        LandCoverCategory::Buildings,
        LandCoverCategory::Other,
    ];

    /// Optional categories a richer classifier may report
    pub const EXTENDED: [LandCoverCategory; 5] = [
        LandCoverCategory::Crops,
        LandCoverCategory::Barren,
        LandCoverCategory::Shrubland,
        LandCoverCategory::Wetlands,
        LandCoverCategory::SnowIce,
    ];

    /// Stable key used in serialized output
    pub fn key(&self) -> &'static str {
        match self {
            LandCoverCategory::Trees => "trees",
            LandCoverCategory::Grass => "grass",
            LandCoverCategory::Water => "water",
            LandCoverCategory::Buildings => "buildings",
            LandCoverCategory::Other => "other",
            LandCoverCategory::Crops => "crops",
            LandCoverCategory::Barren => "barren",
            LandCoverCategory::Shrubland => "shrubland",
            LandCoverCategory::Wetlands => "wetlands",
            LandCoverCategory::SnowIce => "snow_ice",
        }
    }

    /// Human-readable label for legends
    pub fn label(&self) -> &'static str {
        match self {
            LandCoverCategory::Trees => "Trees",
            LandCoverCategory::Grass => "Grass",
            LandCoverCategory::Water => "Water",
            LandCoverCategory::Buildings => "Buildings",
            LandCoverCategory::Other => "Other",
            LandCoverCategory::Crops => "Crops",
            LandCoverCategory::Barren => "Barren",
            LandCoverCategory::Shrubland => "Shrubland",
            LandCoverCategory::Wetlands => "Wetlands",
            LandCoverCategory::SnowIce => "Snow/Ice",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for LandCoverCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category to share mapping, in percent of polygon area.
///
/// `other` is the balancing term. It is floored at zero, so a breakdown whose
/// explicit categories exceed [`NORMALIZATION_TOTAL`] sums to more than 100
/// rather than being rescaled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LandCoverBreakdown {
    pub trees: f64,
    pub grass: f64,
    pub water: f64,
    pub buildings: f64,
    pub other: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crops: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barren: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shrubland: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wetlands: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow_ice: Option<f64>,
}

impl LandCoverBreakdown {
    /// Build a five-key breakdown, deriving `other` as the clamped remainder
    pub fn from_explicit(trees: f64, grass: f64, water: f64, buildings: f64) -> Self {
        let mut breakdown = Self { trees, grass, water, buildings, ..Default::default() };
        breakdown.rebalance();
        breakdown
    }

    /// Recompute `other` from every other present category
    pub fn rebalance(&mut self) {
        self.other = (NORMALIZATION_TOTAL - self.explicit_total()).max(0.0);
    }

    /// Share for a category, `None` if an extended category is absent
    pub fn get(&self, category: LandCoverCategory) -> Option<f64> {
        match category {
            LandCoverCategory::Trees => Some(self.trees),
            LandCoverCategory::Grass => Some(self.grass),
            LandCoverCategory::Water => Some(self.water),
            LandCoverCategory::Buildings => Some(self.buildings),
            LandCoverCategory::Other => Some(self.other),
            LandCoverCategory::Crops => self.crops,
            LandCoverCategory::Barren => self.barren,
            LandCoverCategory::Shrubland => self.shrubland,
            LandCoverCategory::Wetlands => self.wetlands,
            LandCoverCategory::SnowIce => self.snow_ice,
        }
    }

    /// Set an extended category. Required categories are plain fields.
    pub fn set_extended(&mut self, category: LandCoverCategory, value: f64) {
        let slot = match category {
            LandCoverCategory::Crops => &mut self.crops,
            LandCoverCategory::Barren => &mut self.barren,
            LandCoverCategory::Shrubland => &mut self.shrubland,
            LandCoverCategory::Wetlands => &mut self.wetlands,
            LandCoverCategory::SnowIce => &mut self.snow_ice,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Present categories in display order
    pub fn iter(&self) -> impl Iterator<Item = (LandCoverCategory, f64)> + '_ {
        LandCoverCategory::REQUIRED
            .iter()
            .chain(LandCoverCategory::EXTENDED.iter())
            .filter_map(|category| self.get(*category).map(|value| (*category, value)))
    }

    /// Sum of all present categories
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    /// Sum of all present categories except the balancing `other` term
    pub fn explicit_total(&self) -> f64 {
        self.iter()
            .filter(|(category, _)| *category != LandCoverCategory::Other)
            .map(|(_, value)| value)
            .sum()
    }

    /// Whether the shares add up to the normalization total
    pub fn is_normalized(&self) -> bool {
        (self.total() - NORMALIZATION_TOTAL).abs() < 1e-9
    }
}
