//! Error types for nccf-cf.

use crate::values::ValueKind;

/// Error type for all fallible operations in the nccf-cf crate.
///
/// Storage failures (duplicate names, undeclared dimensions, type and length
/// mismatches) are reported by the [`Storage`](crate::Storage) backend and
/// passed through the builder unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CfError {
    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a dimension name is declared twice.
    #[error("dimension '{name}' already exists")]
    DuplicateDimension {
        /// Name of the dimension.
        name: String,
    },

    /// Returned when a variable name is declared twice.
    #[error("variable '{name}' already exists")]
    DuplicateVariable {
        /// Name of the variable.
        name: String,
    },

    /// Returned when a variable is declared against an unknown dimension.
    #[error("variable '{variable}' uses undeclared dimension '{dimension}'")]
    MissingDimension {
        /// Variable being declared.
        variable: String,
        /// Dimension that does not exist.
        dimension: String,
    },

    /// Returned when attributes or values target an unknown variable.
    #[error("variable '{name}' not found")]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
    },

    /// Returned when a dimension would have length zero.
    #[error("dimension '{name}' would have zero length")]
    EmptyDimension {
        /// Name of the dimension.
        name: String,
    },

    /// Returned when values of one element type are written to a variable of
    /// another.
    #[error("variable '{variable}' holds {expected} values, got {got}")]
    TypeMismatch {
        /// Name of the variable.
        variable: String,
        /// Element type of the variable.
        expected: ValueKind,
        /// Element type of the supplied values.
        got: ValueKind,
    },

    /// Returned when the number of values does not match the variable shape.
    #[error("variable '{variable}' expects {expected} values, got {got}")]
    LengthMismatch {
        /// Name of the variable.
        variable: String,
        /// Number of cells in the variable.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a time value cannot be represented.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time conversion issue.
        reason: String,
    },
}

impl From<netcdf::Error> for CfError {
    fn from(e: netcdf::Error) -> Self {
        CfError::Netcdf {
            reason: e.to_string(),
        }
    }
}
