use async_trait::async_trait;

use crate::error::Result;
use crate::models::LandCoverBreakdown;

/// Port for memoizing analysis results by canonical geometry key
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Look up a cached breakdown
    async fn get(&self, key: &str) -> Result<Option<LandCoverBreakdown>>;

    /// Store a breakdown, replacing any previous entry for the key
    async fn put(&self, key: &str, breakdown: LandCoverBreakdown) -> Result<()>;

    /// Drop every entry
    async fn clear(&self) -> Result<()>;

    /// Number of cached entries
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
