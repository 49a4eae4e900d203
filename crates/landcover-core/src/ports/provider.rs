use async_trait::async_trait;

use crate::config::ProviderKind;
use crate::error::Result;
use crate::models::{LandCoverBreakdown, ProviderGeometry};

/// Port for land cover analysis providers
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Analyze a polygon already encoded for this provider
    ///
    /// # Arguments
    /// * `geometry` - The polygon in the provider's geometry encoding
    ///
    /// # Returns
    /// The land cover breakdown for the area inside the polygon
    async fn analyze(&self, geometry: &ProviderGeometry) -> Result<LandCoverBreakdown>;

    /// Get the display name of the provider
    fn name(&self) -> &str;

    /// Get the provider variant
    fn kind(&self) -> ProviderKind;
}
