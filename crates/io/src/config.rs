//! Reader configuration.

use std::path::Path;

/// Column holding timestamps in Parquet files when none is configured.
pub const DEFAULT_TIME_COLUMN: &str = "time";

/// Tabular file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated text with a header row.
    Csv,
    /// Apache Parquet.
    Parquet,
}

impl TableFormat {
    /// Infers the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" | "txt" => Some(Self::Csv),
            "parquet" | "pq" => Some(Self::Parquet),
            _ => None,
        }
    }
}

/// Configuration for reading a station table.
///
/// The [`Default`] implementation infers the format from the file extension
/// and uses the first CSV column, or the Parquet column `"time"`, as the
/// time index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderConfig {
    /// Explicit format; `None` infers it from the extension.
    format: Option<TableFormat>,
    /// Name of the time column.
    time_column: Option<String>,
}

impl ReaderConfig {
    /// Sets the file format.
    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the time column name.
    pub fn with_time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = Some(name.into());
        self
    }

    pub fn format(&self) -> Option<TableFormat> {
        self.format
    }

    pub fn time_column(&self) -> Option<&str> {
        self.time_column.as_deref()
    }
}
