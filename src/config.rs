use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level nccf configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NccfConfig {
    /// One unit for every column, or a table of column -> unit.
    #[serde(default)]
    pub units: Option<UnitsToml>,

    /// Input table settings.
    #[serde(default)]
    pub input: InputToml,

    /// Output file settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Station position.
    #[serde(default)]
    pub station: StationToml,

    /// Variable name and default overrides.
    #[serde(default)]
    pub naming: NamingToml,

    /// Extra global attributes.
    #[serde(default)]
    pub global_attributes: toml::Table,

    /// Platform variable attributes.
    #[serde(default)]
    pub platform: toml::Table,

    /// Instrument variable attributes.
    #[serde(default)]
    pub instrument: toml::Table,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UnitsToml {
    All(String),
    PerColumn(BTreeMap<String, String>),
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    pub path: Option<PathBuf>,
    /// `"csv"` or `"parquet"`; inferred from the extension when absent.
    pub format: Option<String>,
    pub time_column: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StationToml {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub depth: f64,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NamingToml {
    pub time: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub depth: Option<String>,
    pub platform: Option<String>,
    pub instrument: Option<String>,
    pub crs: Option<String>,
    pub fill_value: Option<f64>,
    pub conventions: Option<String>,
}
