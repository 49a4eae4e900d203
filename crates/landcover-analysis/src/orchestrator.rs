//! Analysis orchestrator.
//!
//! Owns the provider configuration and the result cache, and runs each
//! request through validate → transform → cache lookup → provider call →
//! cache store. At most one analysis runs at a time: an overlapping call is
//! rejected with [`LandcoverError::AnalysisInProgress`] instead of racing on
//! the cache.

use chrono::Utc;
use landcover_core::config::{ProviderConfig, ProviderKind};
use landcover_core::error::{LandcoverError, Result};
use landcover_core::models::{LandCoverBreakdown, Polygon, ValidityMode};
use landcover_core::ports::{AnalysisProvider, ResultCache};
use landcover_geo::area::polygon_area;
use landcover_geo::models::PolygonExt;
use landcover_geo::transform::transform;
use landcover_geo::validation::ensure_analyzable;
use landcover_providers::ProviderFactory;
use landcover_store::{cache_key, MemoryResultCache};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::Instrument;
use uuid::Uuid;

use crate::models::{AnalysisOptions, AnalysisOutcome, AnalysisReport, AnalysisState};

/// Orchestrates land cover analysis for drawn polygons
pub struct AnalysisOrchestrator<C = MemoryResultCache>
where
    C: ResultCache,
{
    config: ProviderConfig,
    factory: ProviderFactory,
    provider: Box<dyn AnalysisProvider>,
    cache: C,
    validity_mode: ValidityMode,
    in_flight: AtomicBool,
    last_outcome: Mutex<Option<AnalysisOutcome>>,
}

impl AnalysisOrchestrator<MemoryResultCache> {
    /// Create an orchestrator with an in-memory cache and simulated provider latency
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_cache(config, ProviderFactory::default(), MemoryResultCache::new())
    }
}

impl<C> AnalysisOrchestrator<C>
where
    C: ResultCache,
{
    /// Create an orchestrator with an explicit provider factory and cache
    pub fn with_cache(config: ProviderConfig, factory: ProviderFactory, cache: C) -> Self {
        let provider = factory.create(&config);
        Self {
            config,
            factory,
            provider,
            cache,
            validity_mode: ValidityMode::default(),
            in_flight: AtomicBool::new(false),
            last_outcome: Mutex::new(None),
        }
    }

    /// Replace the provider factory and rebuild the active provider
    pub fn with_factory(mut self, factory: ProviderFactory) -> Self {
        self.provider = factory.create(&self.config);
        self.factory = factory;
        self
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.validity_mode = options.validity_mode;
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn validity_mode(&self) -> ValidityMode {
        self.validity_mode
    }

    pub fn state(&self) -> AnalysisState {
        if self.in_flight.load(Ordering::Acquire) {
            AnalysisState::Analyzing
        } else {
            AnalysisState::Idle
        }
    }

    /// How the most recent analysis ended, if any has run
    pub fn last_outcome(&self) -> Option<AnalysisOutcome> {
        self.last_outcome.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Switch to another provider.
    ///
    /// Cached breakdowns are provider-specific, so the cache is cleared even
    /// when the provider does not change.
    pub async fn set_provider(
        &mut self,
        kind: ProviderKind,
        credential: Option<String>,
    ) -> Result<()> {
        let config = ProviderConfig { kind, credential, ..self.config.clone() };
        let provider = self.factory.create(&config);
        self.switch_provider(config, provider).await
    }

    /// Switch to a custom provider adapter in place of a factory-built one.
    ///
    /// Clears the cache like [`set_provider`](Self::set_provider).
    pub async fn use_provider(&mut self, provider: Box<dyn AnalysisProvider>) -> Result<()> {
        let config = ProviderConfig { kind: provider.kind(), ..self.config.clone() };
        self.switch_provider(config, provider).await
    }

    // A failed clear must leave the previous provider in place
    async fn switch_provider(
        &mut self,
        config: ProviderConfig,
        provider: Box<dyn AnalysisProvider>,
    ) -> Result<()> {
        self.cache.clear().await?;

        let previous = self.config.kind;
        self.config = config;
        self.provider = provider;

        tracing::info!(from = previous.key(), to = self.config.kind.key(), "Switched analysis provider");
        Ok(())
    }

    /// Enable or disable result caching. Existing entries are kept.
    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.config.cache_enabled = enabled;
    }

    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await
    }

    pub async fn cached_entries(&self) -> Result<usize> {
        self.cache.len().await
    }

    /// Analyze a polygon and return its land cover breakdown
    pub async fn analyze(&self, polygon: Polygon) -> Result<LandCoverBreakdown> {
        let request_id = Uuid::new_v4();
        let (breakdown, _) = self.run(&polygon, request_id).await?;
        Ok(breakdown)
    }

    /// Analyze a polygon and return the breakdown with request metadata
    pub async fn analyze_report(&self, polygon: Polygon) -> Result<AnalysisReport> {
        let request_id = Uuid::new_v4();
        let (breakdown, from_cache) = self.run(&polygon, request_id).await?;
        let planar_area = polygon_area(&polygon)?;

        Ok(AnalysisReport {
            request_id,
            provider: self.config.kind,
            provider_name: self.provider.name().to_string(),
            breakdown,
            from_cache,
            vertex_count: polygon.len(),
            planar_area,
            centroid: polygon.centroid_latlng(),
            analyzed_at: Utc::now(),
        })
    }

    async fn run(&self, polygon: &Polygon, request_id: Uuid) -> Result<(LandCoverBreakdown, bool)> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let span = tracing::info_span!(
            "analysis",
            request_id = %request_id,
            provider = self.config.kind.key(),
            vertices = polygon.len()
        );

        let result = self.run_pipeline(polygon).instrument(span).await;

        let outcome = match &result {
            Ok((_, from_cache)) => AnalysisOutcome::Completed { from_cache: *from_cache },
            Err(err) => AnalysisOutcome::Failed { message: err.to_string() },
        };
        *self.last_outcome.lock().unwrap_or_else(PoisonError::into_inner) = Some(outcome);

        result
    }

    async fn run_pipeline(&self, polygon: &Polygon) -> Result<(LandCoverBreakdown, bool)> {
        ensure_analyzable(polygon, self.validity_mode)?;

        let geometry = transform(polygon, self.config.kind)?;
        let key = cache_key(&geometry);

        if self.config.cache_enabled {
            if let Some(cached) = self.cache.get(&key).await? {
                tracing::debug!(key = %key, "Cache hit");
                return Ok((cached, true));
            }
            tracing::debug!(key = %key, "Cache miss");
        }

        let breakdown = self.provider.analyze(&geometry).await.map_err(|err| match err {
            LandcoverError::AnalysisFailed { .. } => err,
            other => LandcoverError::AnalysisFailed {
                provider: self.provider.name().to_string(),
                message: other.to_string(),
            },
        })?;

        if self.config.cache_enabled {
            self.cache.put(&key, breakdown.clone()).await?;
        }

        tracing::info!(
            trees = breakdown.trees,
            grass = breakdown.grass,
            water = breakdown.water,
            buildings = breakdown.buildings,
            other = breakdown.other,
            "Analysis complete"
        );

        Ok((breakdown, false))
    }
}

/// Marks an analysis in flight until dropped
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| LandcoverError::AnalysisInProgress)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
