//! Providers command implementation

use crate::config::LayeredConfig;
use crate::output::OutputWriter;
use anyhow::Result;
use landcover_providers::ProviderFactory;
use tabled::Tabled;

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "")]
    active: &'static str,
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Provider")]
    name: String,
    #[tabled(rename = "Geometry")]
    encoding: &'static str,
    #[tabled(rename = "Latency")]
    latency: String,
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let providers = ProviderFactory::new(config.latency_profile()).describe();

    if output.is_json() {
        return output.result(providers);
    }

    output.section("Analysis Providers");
    let rows = providers
        .iter()
        .map(|info| ProviderRow {
            active: if info.kind == config.provider.value { "*" } else { "" },
            key: info.kind.key(),
            name: info.name.clone(),
            encoding: info.encoding.description(),
            latency: format!("{} ms", info.latency_ms),
        })
        .collect();
    output.table::<ProviderRow>(rows);

    if !config.simulate_latency.value {
        output.info("Simulated latency is disabled");
    }
    Ok(())
}
