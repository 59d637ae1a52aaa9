//! Error types for nccf-io.

use std::path::PathBuf;

use nccf_cf::CfError;

/// Error type for all fallible operations in the nccf-io crate.
///
/// Covers missing files, format-specific failures from the CSV and Parquet
/// libraries, schema problems, unparseable timestamps, and table shape errors
/// reported by nccf-cf.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library, or a cell that is
    /// not a number.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Returned when a configured column is not present in the file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a column has a data type that cannot be converted.
    #[error("column '{name}' has unsupported type {data_type}")]
    UnsupportedColumn {
        /// Name of the column.
        name: String,
        /// Data type as reported by the reader.
        data_type: String,
    },

    /// Returned when the table format is neither configured nor implied by
    /// the file extension.
    #[error("cannot infer table format of {}", path.display())]
    UnknownFormat {
        /// Path whose extension was inspected.
        path: PathBuf,
    },

    /// Returned when a time value cannot be parsed or is out of range.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time parsing issue.
        reason: String,
    },

    /// Returned when the assembled columns do not form a valid table.
    #[error(transparent)]
    Table(#[from] CfError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}
