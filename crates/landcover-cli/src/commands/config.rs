//! Config command implementation

use crate::config::LayeredConfig;
use crate::output::OutputWriter;
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct ConfigEntry {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let entries: Vec<ConfigEntry> = config
        .to_inspection_list()
        .into_iter()
        .map(|(key, value, source)| ConfigEntry { key, value, source: format!("{:?}", source) })
        .collect();

    if output.is_json() {
        return output.result(entries);
    }

    output.section("Effective Configuration");
    output.table(entries);
    Ok(())
}
