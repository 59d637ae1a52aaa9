//! # nccf-io
//!
//! Read station observation tables from CSV and Parquet files into the
//! [`nccf_cf::Table`] consumed by the `timeSeries` writer.

mod config;
mod csv_read;
mod error;
mod parquet_read;
mod reader;
mod time_parse;

pub use config::{DEFAULT_TIME_COLUMN, ReaderConfig, TableFormat};
pub use csv_read::read_csv;
pub use error::IoError;
pub use parquet_read::read_parquet;
pub use reader::read_table;
