use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Write station time series as CF-1.6 netCDF.
#[derive(Parser)]
#[command(
    name = "nccf",
    version,
    about = "Write tabular station time series as CF-1.6 timeSeries netCDF files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a CSV or Parquet table into a timeSeries netCDF file.
    Convert(ConvertArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nccf.toml")]
    pub config: PathBuf,

    /// Override input table path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output netCDF path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the CDL header of the result instead of writing a file.
    #[arg(long)]
    pub dry_run: bool,
}
