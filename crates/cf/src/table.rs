//! Time-indexed tabular input and per-column units.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use crate::error::CfError;
use crate::validate::ValidationCollector;
use crate::values::Values;

/// Unit string given to columns without an explicit unit.
pub const DIMENSIONLESS: &str = "1";

/// Values of one observation column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// `double` values.
    F64(Vec<f64>),
    /// `float` values.
    F32(Vec<f32>),
    /// `int` values.
    I32(Vec<i32>),
    /// `int64` values.
    I64(Vec<i64>),
}

impl ColumnData {
    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::F64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
        }
    }

    /// Returns `true` when the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a borrowed view suitable for writing.
    pub fn values(&self) -> Values<'_> {
        match self {
            Self::F64(v) => Values::F64(v),
            Self::F32(v) => Values::F32(v),
            Self::I32(v) => Values::I32(v),
            Self::I64(v) => Values::I64(v),
        }
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self {
        Self::F64(v)
    }
}

impl From<Vec<f32>> for ColumnData {
    fn from(v: Vec<f32>) -> Self {
        Self::F32(v)
    }
}

impl From<Vec<i32>> for ColumnData {
    fn from(v: Vec<i32>) -> Self {
        Self::I32(v)
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(v: Vec<i64>) -> Self {
        Self::I64(v)
    }
}

/// A named observation column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Creates a column.
    pub fn new(name: impl Into<String>, data: impl Into<ColumnData>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column values.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }
}

/// Observation columns sharing one UTC time index.
///
/// Rows keep the order they were given in; nothing is sorted or
/// de-duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table after validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`CfError::Validation`] listing every failed check:
    /// - a column name is empty
    /// - a column name appears more than once
    /// - a column length differs from the index length
    pub fn new(index: Vec<DateTime<Utc>>, columns: Vec<Column>) -> Result<Self, CfError> {
        let mut c = ValidationCollector::new();
        let mut seen = HashSet::new();

        for (i, col) in columns.iter().enumerate() {
            if col.name.is_empty() {
                c.push(format!("column {i} has an empty name"));
            } else if !seen.insert(col.name.as_str()) {
                c.push(format!("duplicate column '{}'", col.name));
            }
            if col.data.len() != index.len() {
                c.push(format!(
                    "column '{}' length {} != index length {}",
                    col.name,
                    col.data.len(),
                    index.len()
                ));
            }
        }
        c.finish()?;

        Ok(Self { index, columns })
    }

    /// Returns the row timestamps.
    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Units assigned to observation columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Units {
    /// One unit string for every column.
    All(String),
    /// Units by column name; missing columns resolve to [`DIMENSIONLESS`].
    PerColumn(BTreeMap<String, String>),
}

impl Default for Units {
    fn default() -> Self {
        Self::PerColumn(BTreeMap::new())
    }
}

impl Units {
    /// Resolves the unit for `column`.
    pub fn resolve(&self, column: &str) -> &str {
        match self {
            Self::All(unit) => unit,
            Self::PerColumn(map) => map.get(column).map_or(DIMENSIONLESS, String::as_str),
        }
    }
}

impl From<&str> for Units {
    fn from(unit: &str) -> Self {
        Self::All(unit.to_string())
    }
}

impl From<BTreeMap<String, String>> for Units {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::PerColumn(map)
    }
}
