//! Storage-engine capability interface.

use crate::attrs::AttrValue;
use crate::error::CfError;
use crate::values::{ValueKind, Values};

/// Object an attribute is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// The dataset itself (global attributes).
    Global,
    /// A named variable.
    Variable(&'a str),
}

/// The primitives a dataset backend must provide.
///
/// Implementations report duplicate names, undeclared dimensions and
/// type/length mismatches as [`CfError`]s; callers propagate them unchanged.
pub trait Storage {
    /// Declares a dimension of fixed length.
    fn add_dimension(&mut self, name: &str, len: usize) -> Result<(), CfError>;

    /// Declares a variable over previously declared dimensions. An empty
    /// `dims` slice declares a scalar.
    fn add_variable(
        &mut self,
        name: &str,
        kind: ValueKind,
        dims: &[&str],
        fill_value: Option<f64>,
    ) -> Result<(), CfError>;

    /// Sets one attribute on the dataset or on a variable.
    fn put_attribute(
        &mut self,
        target: Target<'_>,
        key: &str,
        value: &AttrValue,
    ) -> Result<(), CfError>;

    /// Writes the complete contents of a variable.
    fn put_values(&mut self, variable: &str, values: Values<'_>) -> Result<(), CfError>;
}
