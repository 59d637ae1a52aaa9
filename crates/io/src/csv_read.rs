//! CSV reading.

use std::path::Path;

use chrono::{DateTime, Utc};
use nccf_cf::{Column, Table};
use tracing::{debug, info};

use crate::config::ReaderConfig;
use crate::error::IoError;
use crate::time_parse::parse_timestamp;

/// Reads a CSV file with a header row into a [`Table`].
///
/// The time column is the configured one, or the first column. Every other
/// column becomes an `f64` column; empty cells and `NaN` read as NaN.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist
/// - [`IoError::MissingColumn`] if the configured time column is absent
/// - [`IoError::InvalidTime`] if a time cell cannot be parsed
/// - [`IoError::Csv`] on malformed records or non-numeric cells
/// - [`IoError::Table`] on duplicate or empty column names
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<Table, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let time_idx = match config.time_column() {
        Some(name) => headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })?,
        None if headers.is_empty() => {
            return Err(IoError::Csv {
                reason: format!("{} has no header row", path.display()),
            });
        }
        None => 0,
    };
    debug!(time_column = &headers[time_idx], "resolved time column");

    let value_idx: Vec<usize> = (0..headers.len()).filter(|&i| i != time_idx).collect();
    let mut index: Vec<DateTime<Utc>> = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); value_idx.len()];

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let line = row + 2;
        index.push(parse_timestamp(&record[time_idx])?);
        for (out, &i) in values.iter_mut().zip(&value_idx) {
            out.push(parse_cell(&record[i], line, &headers[i])?);
        }
    }

    let columns = value_idx
        .iter()
        .zip(values)
        .map(|(&i, data)| Column::new(&headers[i], data))
        .collect();
    let table = Table::new(index, columns)?;

    info!(
        path = %path.display(),
        n_rows = table.n_rows(),
        n_columns = table.n_columns(),
        "read csv table"
    );
    Ok(table)
}

/// Parses a numeric cell; empty reads as NaN.
fn parse_cell(text: &str, line: usize, column: &str) -> Result<f64, IoError> {
    if text.is_empty() {
        return Ok(f64::NAN);
    }
    text.parse::<f64>().map_err(|_| IoError::Csv {
        reason: format!("line {line}, column '{column}': '{text}' is not a number"),
    })
}
