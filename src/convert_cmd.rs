//! Convert command: read a station table and write a CF `timeSeries` file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use nccf_cf::{MemoryDataset, write_timeseries};
use nccf_io::read_table;

use crate::cli::ConvertArgs;
use crate::config::NccfConfig;
use crate::convert;

/// Run the conversion pipeline.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    // Step 1: Load config
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: NccfConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", args.config.display()))?;

    // Step 2: Resolve paths, CLI flags first
    let input = args
        .input
        .or_else(|| config.input.path.clone())
        .ok_or_else(|| anyhow!("no input path: set [input].path in config or use --input"))?;

    // Step 3: Build crate configs from TOML
    let reader_cfg = convert::build_reader_config(&config.input)?;
    let cf_cfg = convert::build_cf_config(&config.naming);
    let metadata = convert::build_metadata(&config).context("invalid attribute table")?;
    let station = convert::build_station(&config.station);

    // Step 4: Read the table
    info!(path = %input.display(), "reading station table");
    let table = read_table(&input, &reader_cfg)
        .with_context(|| format!("failed to read table: {}", input.display()))?;
    info!(
        n_rows = table.n_rows(),
        n_columns = table.n_columns(),
        "station table loaded"
    );

    // Step 5: Assemble
    if args.dry_run {
        let mut ds = MemoryDataset::new(dataset_name(&input));
        write_timeseries(&mut ds, cf_cfg, &table, station, &metadata)
            .context("failed to assemble timeSeries feature")?;
        println!("{ds}");
        return Ok(());
    }

    let output = args
        .output
        .or_else(|| config.output.path.clone())
        .unwrap_or_else(|| default_output(&input));

    info!(path = %output.display(), "writing netCDF");
    let mut file = netcdf::create(&output)
        .with_context(|| format!("failed to create netCDF: {}", output.display()))?;
    write_timeseries(&mut file, cf_cfg, &table, station, &metadata)
        .with_context(|| format!("failed to write timeSeries to {}", output.display()))?;
    drop(file);
    info!("netCDF written");

    Ok(())
}

/// Output path used when neither the CLI nor the config names one.
fn default_output(input: &Path) -> PathBuf {
    input.with_extension("nc")
}

/// Dataset name for the CDL header: the input file stem.
fn dataset_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "station".to_string())
}
