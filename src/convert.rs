//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use nccf_cf::{AttrValue, Attributes, CfConfig, Station, TimeSeriesMetadata, Units};
use nccf_io::{ReaderConfig, TableFormat};

/// Parses a table format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<TableFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Ok(TableFormat::Csv),
        "parquet" => Ok(TableFormat::Parquet),
        other => bail!("unknown input format: {other:?}"),
    }
}

/// Builds a [`ReaderConfig`] from the TOML input configuration.
pub fn build_reader_config(input: &InputToml) -> Result<ReaderConfig> {
    let mut cfg = ReaderConfig::default();
    if let Some(ref format) = input.format {
        cfg = cfg.with_format(parse_format(format)?);
    }
    if let Some(ref column) = input.time_column {
        cfg = cfg.with_time_column(column);
    }
    Ok(cfg)
}

/// Builds a [`CfConfig`] from the TOML naming overrides.
pub fn build_cf_config(naming: &NamingToml) -> CfConfig {
    let mut cfg = CfConfig::default();
    if let Some(ref v) = naming.time {
        cfg = cfg.with_time_var(v);
    }
    if let Some(ref v) = naming.latitude {
        cfg = cfg.with_lat_var(v);
    }
    if let Some(ref v) = naming.longitude {
        cfg = cfg.with_lon_var(v);
    }
    if let Some(ref v) = naming.depth {
        cfg = cfg.with_depth_var(v);
    }
    if let Some(ref v) = naming.platform {
        cfg = cfg.with_platform_var(v);
    }
    if let Some(ref v) = naming.instrument {
        cfg = cfg.with_instrument_var(v);
    }
    if let Some(ref v) = naming.crs {
        cfg = cfg.with_crs_var(v);
    }
    if let Some(v) = naming.fill_value {
        cfg = cfg.with_fill_value(v);
    }
    if let Some(ref v) = naming.conventions {
        cfg = cfg.with_conventions(v);
    }
    cfg
}

/// Converts the TOML units setting; absent means every column is
/// dimensionless.
pub fn build_units(units: Option<&UnitsToml>) -> Units {
    match units {
        Some(UnitsToml::All(unit)) => Units::from(unit.as_str()),
        Some(UnitsToml::PerColumn(map)) => Units::from(map.clone()),
        None => Units::default(),
    }
}

/// Converts one TOML value to an attribute value.
///
/// Integers that do not fit `i32` become 64-bit attributes. Booleans,
/// dates, arrays and tables have no attribute form.
pub fn attr_value(key: &str, value: &toml::Value) -> Result<AttrValue> {
    match value {
        toml::Value::String(s) => Ok(AttrValue::from(s.as_str())),
        toml::Value::Integer(i) => Ok(match i32::try_from(*i) {
            Ok(v) => AttrValue::Int(v),
            Err(_) => AttrValue::Long(*i),
        }),
        toml::Value::Float(f) => Ok(AttrValue::Double(*f)),
        other => bail!(
            "attribute {key:?} has unsupported {} value",
            other.type_str()
        ),
    }
}

/// Builds an [`Attributes`] set from a TOML table.
pub fn build_attributes(table: &toml::Table) -> Result<Attributes> {
    table
        .iter()
        .map(|(key, value)| Ok((key.clone(), attr_value(key, value)?)))
        .collect()
}

/// Builds a [`Station`] from the TOML station position.
pub fn build_station(station: &StationToml) -> Station {
    Station::new(station.latitude, station.longitude, station.depth)
}

/// Builds the [`TimeSeriesMetadata`] from the attribute tables and units.
pub fn build_metadata(config: &NccfConfig) -> Result<TimeSeriesMetadata> {
    Ok(TimeSeriesMetadata::new()
        .with_global(build_attributes(&config.global_attributes)?)
        .with_platform(build_attributes(&config.platform)?)
        .with_instrument(build_attributes(&config.instrument)?)
        .with_units(build_units(config.units.as_ref())))
}
