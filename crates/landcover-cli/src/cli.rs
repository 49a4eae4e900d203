use clap::{Parser, Subcommand};
use landcover_core::config::ProviderKind;
use landcover_core::models::ValidityMode;
use std::path::PathBuf;

use crate::config::CliConfigOverrides;

/// Land cover analysis for drawn property polygons
#[derive(Parser, Debug)]
#[command(name = "landcover")]
#[command(about = "Land cover analysis for drawn property polygons", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./landcover.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Analysis provider (mock, sentinel-hub, earth-engine, usgs)
    #[arg(long, global = true, value_name = "PROVIDER")]
    pub provider: Option<ProviderKind>,

    /// API key for the selected provider
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Disable the result cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Skip the simulated network delay of remote providers
    #[arg(long, global = true)]
    pub no_latency: bool,

    /// Reject non-finite coordinates and degenerate rings
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration overrides carried by the global flags
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            provider: self.provider,
            api_key: self.api_key.clone(),
            cache_enabled: self.no_cache.then_some(false),
            simulate_latency: self.no_latency.then_some(false),
            geometry_validity: self.strict.then_some(ValidityMode::Strict),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the land cover of a polygon
    Analyze(AnalyzeArgs),

    /// List available analysis providers
    Providers,

    /// Show effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Polygon as inline JSON or a path to a JSON file.
    /// Accepts [[lat,lng],...], a GeoJSON Polygon or Feature, or [{"lat":..,"lng":..},...]
    /// Example: '[[37.7749,-122.4194],[37.78,-122.41],[37.77,-122.40]]'
    pub polygon: String,

    /// Run the analysis this many times on the same session
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    /// Print the geometry as encoded for the provider
    #[arg(long)]
    pub show_geometry: bool,
}
