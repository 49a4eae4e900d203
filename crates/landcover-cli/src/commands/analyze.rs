//! Analyze command implementation

use crate::cli::AnalyzeArgs;
use crate::config::LayeredConfig;
use crate::input::parse_polygon_input;
use crate::output::{share_bar, OutputWriter};
use anyhow::{Context, Result};
use landcover_analysis::{AnalysisOrchestrator, AnalysisReport};
use landcover_geo::models::to_geojson;
use landcover_geo::transform::transform;
use landcover_providers::ProviderFactory;
use landcover_store::MemoryResultCache;
use serde::Serialize;
use tabled::Tabled;

/// Output for analyze command
#[derive(Debug, Serialize)]
struct AnalyzeOutput {
    #[serde(flatten)]
    report: AnalysisReport,
    runs: u32,
    cache_hits: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry: Option<serde_json::Value>,
    /// The encoded geometry as a closed GeoJSON ring, whatever the provider shape
    #[serde(skip_serializing_if = "Option::is_none")]
    geojson: Option<serde_json::Value>,
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

pub async fn execute(args: AnalyzeArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let polygon = parse_polygon_input(&args.polygon).context("Failed to read polygon input")?;

    let orchestrator = AnalysisOrchestrator::with_cache(
        config.provider_config(),
        ProviderFactory::new(config.latency_profile()),
        MemoryResultCache::new(),
    )
    .with_options(config.analysis_options());

    let mut cache_hits = 0;
    let mut last_report = None;
    for run in 1..=args.repeat {
        tracing::debug!(run, "Starting analysis run");
        let report = orchestrator
            .analyze_report(polygon.clone())
            .await
            .with_context(|| format!("Analysis with {} failed", orchestrator.provider_name()))?;

        if report.from_cache {
            cache_hits += 1;
        }
        if args.repeat > 1 {
            output.info(format!(
                "Run {}: {}",
                run,
                if report.from_cache { "served from cache" } else { "provider called" }
            ));
        }
        last_report = Some(report);
    }

    let report = last_report.context("No analysis runs were performed")?;
    let (geometry, geojson) = if args.show_geometry {
        let encoded = transform(&polygon, config.provider.value)?;
        let geojson = serde_json::to_value(to_geojson(&encoded))?;
        (Some(encoded.to_json()), Some(geojson))
    } else {
        (None, None)
    };

    if output.is_json() {
        return output.result(AnalyzeOutput {
            report,
            runs: args.repeat,
            cache_hits,
            geometry,
            geojson,
        });
    }

    output.section("Land Cover Breakdown");
    output.kv("Provider", &report.provider_name);
    output.kv("Vertices", report.vertex_count);
    output.kv("Planar area", format!("{:.6} deg²", report.planar_area));
    if let Some(centroid) = report.centroid {
        output.kv("Centroid", format!("{:.5}, {:.5}", centroid.lat, centroid.lng));
    }
    output.kv("Source", if report.from_cache { "cache" } else { "provider" });
    if args.repeat > 1 {
        output.kv("Cache hits", format!("{}/{}", cache_hits, args.repeat));
    }

    let rows: Vec<BreakdownRow> = report
        .breakdown
        .iter()
        .map(|(category, share)| BreakdownRow {
            category: category.label().to_string(),
            share: format!("{:.0}%", share),
            bar: share_bar(share),
        })
        .collect();
    output.table(rows);

    if let Some(geometry) = geometry {
        output.section(format!("Encoded Geometry ({})", config.provider.value.encoding().description()));
        println!("{}", serde_json::to_string_pretty(&geometry)?);
    }
    if let Some(geojson) = geojson {
        output.section("GeoJSON");
        println!("{}", serde_json::to_string_pretty(&geojson)?);
    }

    output.success(format!("Analyzed request {}", report.request_id));
    Ok(())
}
