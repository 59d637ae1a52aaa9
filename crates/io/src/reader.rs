//! Format dispatch.

use std::path::Path;

use nccf_cf::Table;
use tracing::info_span;

use crate::config::{ReaderConfig, TableFormat};
use crate::csv_read::read_csv;
use crate::error::IoError;
use crate::parquet_read::read_parquet;

/// Reads a station table, choosing the reader from
/// [`ReaderConfig::format`] or, when unset, the file extension.
///
/// # Errors
///
/// Returns [`IoError::UnknownFormat`] when the format cannot be inferred,
/// plus any error of the selected reader.
pub fn read_table(path: &Path, config: &ReaderConfig) -> Result<Table, IoError> {
    let format = config
        .format()
        .or_else(|| TableFormat::from_path(path))
        .ok_or_else(|| IoError::UnknownFormat {
            path: path.to_path_buf(),
        })?;

    let _span = info_span!("read_table", path = %path.display(), ?format).entered();
    match format {
        TableFormat::Csv => read_csv(path, config),
        TableFormat::Parquet => read_parquet(path, config),
    }
}
