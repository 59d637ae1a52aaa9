//! # nccf-cf
//!
//! Map a time-indexed table onto the CF-1.6 discrete sampling geometry
//! `timeSeries` feature type for a single station.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Table"] -->|"TimeSeriesWriter::assemble()"| B["CfWriter primitives"]
//!     B -->|"Storage trait"| C["netcdf::FileMut"]
//!     B -->|"Storage trait"| D["MemoryDataset"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use nccf_cf::{CfConfig, Column, Station, Table, TimeSeriesMetadata, write_timeseries};
//!
//! let table = Table::new(index, vec![Column::new("temperature", temps)])?;
//! let meta = TimeSeriesMetadata::new().with_units("degC");
//!
//! let mut file = netcdf::create("station.nc")?;
//! write_timeseries(&mut file, CfConfig::default(), &table, Station::new(45.0, -70.0, 0.0), &meta)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `builder` | One primitive per CF variable (`CfWriter`) |
//! | `timeseries` | Ordered assembly of a `timeSeries` feature |
//! | `storage` | Storage-engine capability trait |
//! | `netcdf_store` | `Storage` for `netcdf::FileMut` |
//! | `memory` | In-memory `Storage` with a CDL rendering |
//! | `attrs` | Attribute values and ordered sets |
//! | `table` | Tabular input and units |
//! | `time` | Epoch-second conversions |
//! | `config` | Variable names and defaults |
//! | `error` | Error types |

mod attrs;
mod builder;
mod config;
mod error;
mod memory;
mod netcdf_store;
mod storage;
mod table;
mod time;
mod timeseries;
mod validate;
mod values;

pub use attrs::{AttrValue, Attributes};
pub use builder::{CfWriter, VarHandle, VarOptions};
pub use config::{CfConfig, DEFAULT_CONVENTIONS, DEFAULT_FILL_VALUE};
pub use error::CfError;
pub use memory::{MemoryDataset, MemoryVariable};
pub use storage::{Storage, Target};
pub use table::{Column, ColumnData, DIMENSIONLESS, Table, Units};
pub use time::{TIME_UNITS, datetimes_to_unix, unix_to_datetimes};
pub use timeseries::{
    DEFAULT_STATION_NAME, Station, TIMESERIES_VAR, TimeSeriesMetadata, TimeSeriesWriter,
    write_timeseries,
};
pub use values::{ArrayData, ValueKind, Values};
