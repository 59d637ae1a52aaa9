//! Parquet reading and Arrow column conversion.

use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray, RecordBatch};
use arrow::datatypes::{
    DataType, Date32Type, Float32Type, Float64Type, Int32Type, Int64Type, TimeUnit,
    TimestampMicrosecondType, TimestampMillisecondType, TimestampNanosecondType,
    TimestampSecondType,
};
use chrono::{DateTime, Utc};
use nccf_cf::{Column, ColumnData, Table};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::{debug, info};

use crate::config::{DEFAULT_TIME_COLUMN, ReaderConfig};
use crate::error::IoError;
use crate::time_parse::{
    from_epoch_days, from_epoch_micros, from_epoch_millis, from_epoch_nanos, from_epoch_seconds,
    parse_timestamp,
};

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;
    debug!(path = %path.display(), n_batches = batches.len(), "read parquet batches");
    Ok(batches)
}

/// Reads a Parquet file into a [`Table`].
///
/// The time column (configured, or `"time"`) may be an Arrow `Timestamp` of
/// any unit, `Date32`, `Int64` epoch seconds, or UTF-8 text. Every other
/// column must be `Float64`, `Float32`, `Int32` or `Int64` and keeps its
/// type. Nulls read as NaN in float columns.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist
/// - [`IoError::MissingColumn`] if the time column is absent
/// - [`IoError::UnsupportedColumn`] for any other column type
/// - [`IoError::InvalidTime`] for null or unparseable timestamps
/// - [`IoError::Parquet`] for nulls in integer columns
/// - [`IoError::Table`] on duplicate column names
pub fn read_parquet(path: &Path, config: &ReaderConfig) -> Result<Table, IoError> {
    let batches = read_batches(path)?;
    let time_name = config.time_column().unwrap_or(DEFAULT_TIME_COLUMN);

    let schema = match batches.first() {
        Some(batch) => batch.schema(),
        None => {
            // No row groups: an empty table with no columns.
            return Ok(Table::new(Vec::new(), Vec::new())?);
        }
    };
    let time_idx = schema
        .index_of(time_name)
        .map_err(|_| IoError::MissingColumn {
            name: time_name.to_string(),
            path: path.to_path_buf(),
        })?;

    let value_fields: Vec<(usize, String)> = schema
        .fields()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != time_idx)
        .map(|(i, f)| (i, f.name().clone()))
        .collect();

    let mut index = Vec::new();
    let mut columns: Vec<Option<ColumnData>> = vec![None; value_fields.len()];

    for batch in &batches {
        append_times(batch.column(time_idx), time_name, &mut index)?;
        for (slot, (i, name)) in columns.iter_mut().zip(&value_fields) {
            let chunk = column_values(batch.column(*i), name)?;
            match slot {
                Some(data) => extend(data, chunk, name)?,
                None => *slot = Some(chunk),
            }
        }
    }

    let columns = value_fields
        .into_iter()
        .zip(columns)
        .filter_map(|((_, name), data)| data.map(|d| Column::new(name, d)))
        .collect();
    let table = Table::new(index, columns)?;

    info!(
        path = %path.display(),
        n_rows = table.n_rows(),
        n_columns = table.n_columns(),
        "read parquet table"
    );
    Ok(table)
}

/// Converts one time column chunk and appends it to `out`.
fn append_times(
    array: &ArrayRef,
    name: &str,
    out: &mut Vec<DateTime<Utc>>,
) -> Result<(), IoError> {
    if array.null_count() > 0 {
        return Err(IoError::InvalidTime {
            reason: format!("time column '{name}' contains nulls"),
        });
    }

    match array.data_type() {
        DataType::Timestamp(TimeUnit::Second, _) => {
            for &v in array.as_primitive::<TimestampSecondType>().values() {
                out.push(from_epoch_seconds(v)?);
            }
        }
        DataType::Timestamp(TimeUnit::Millisecond, _) => {
            for &v in array.as_primitive::<TimestampMillisecondType>().values() {
                out.push(from_epoch_millis(v)?);
            }
        }
        DataType::Timestamp(TimeUnit::Microsecond, _) => {
            for &v in array.as_primitive::<TimestampMicrosecondType>().values() {
                out.push(from_epoch_micros(v)?);
            }
        }
        DataType::Timestamp(TimeUnit::Nanosecond, _) => {
            out.extend(
                array
                    .as_primitive::<TimestampNanosecondType>()
                    .values()
                    .iter()
                    .map(|&v| from_epoch_nanos(v)),
            );
        }
        DataType::Date32 => {
            for &v in array.as_primitive::<Date32Type>().values() {
                out.push(from_epoch_days(v)?);
            }
        }
        DataType::Int64 => {
            for &v in array.as_primitive::<Int64Type>().values() {
                out.push(from_epoch_seconds(v)?);
            }
        }
        DataType::Utf8 => {
            for text in array.as_string::<i32>().iter().flatten() {
                out.push(parse_timestamp(text)?);
            }
        }
        other => {
            return Err(IoError::UnsupportedColumn {
                name: name.to_string(),
                data_type: other.to_string(),
            });
        }
    }
    Ok(())
}

/// Converts one value column chunk, keeping its numeric type.
fn column_values(array: &ArrayRef, name: &str) -> Result<ColumnData, IoError> {
    let data = match array.data_type() {
        DataType::Float64 => {
            let arr = array.as_primitive::<Float64Type>();
            ColumnData::F64(arr.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
        }
        DataType::Float32 => {
            let arr = array.as_primitive::<Float32Type>();
            ColumnData::F32(arr.iter().map(|v| v.unwrap_or(f32::NAN)).collect())
        }
        DataType::Int32 => {
            reject_nulls(array, name)?;
            ColumnData::I32(array.as_primitive::<Int32Type>().values().to_vec())
        }
        DataType::Int64 => {
            reject_nulls(array, name)?;
            ColumnData::I64(array.as_primitive::<Int64Type>().values().to_vec())
        }
        other => {
            return Err(IoError::UnsupportedColumn {
                name: name.to_string(),
                data_type: other.to_string(),
            });
        }
    };
    Ok(data)
}

fn reject_nulls(array: &ArrayRef, name: &str) -> Result<(), IoError> {
    if array.null_count() > 0 {
        return Err(IoError::Parquet {
            reason: format!(
                "integer column '{name}' has {} null value(s) and no fill",
                array.null_count()
            ),
        });
    }
    Ok(())
}

/// Appends a later batch's chunk to an accumulated column.
fn extend(data: &mut ColumnData, chunk: ColumnData, name: &str) -> Result<(), IoError> {
    match (data, chunk) {
        (ColumnData::F64(a), ColumnData::F64(b)) => a.extend(b),
        (ColumnData::F32(a), ColumnData::F32(b)) => a.extend(b),
        (ColumnData::I32(a), ColumnData::I32(b)) => a.extend(b),
        (ColumnData::I64(a), ColumnData::I64(b)) => a.extend(b),
        (data, chunk) => {
            return Err(IoError::Parquet {
                reason: format!(
                    "column '{name}' changes type between batches ({} then {})",
                    data.values().kind(),
                    chunk.values().kind()
                ),
            });
        }
    }
    Ok(())
}
