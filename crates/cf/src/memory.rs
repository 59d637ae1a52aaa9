//! In-memory [`Storage`] backend.
//!
//! [`MemoryDataset`] records dimensions, variables, attributes and values
//! with the same failure rules as a NetCDF file, and renders a CDL header in
//! the style of `ncdump -h` through [`Display`](std::fmt::Display).

use std::fmt;

use crate::attrs::{AttrValue, Attributes};
use crate::error::CfError;
use crate::storage::{Storage, Target};
use crate::values::{ArrayData, ValueKind, Values};

/// A variable held by a [`MemoryDataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryVariable {
    name: String,
    kind: ValueKind,
    dims: Vec<String>,
    fill_value: Option<f64>,
    attributes: Attributes,
    data: Option<ArrayData>,
}

impl MemoryVariable {
    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element type.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the dimension names, empty for a scalar.
    pub fn dimensions(&self) -> &[String] {
        &self.dims
    }

    /// Returns the fill value declared at creation.
    pub fn fill_value(&self) -> Option<f64> {
        self.fill_value
    }

    /// Returns all attributes in the order they were set.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns one attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Returns the written values, if any were written.
    pub fn data(&self) -> Option<&ArrayData> {
        self.data.as_ref()
    }
}

/// A dataset kept entirely in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDataset {
    name: String,
    dims: Vec<(String, usize)>,
    vars: Vec<MemoryVariable>,
    globals: Attributes,
}

impl MemoryDataset {
    /// Creates an empty dataset; `name` is only used in the CDL header.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the length of a dimension.
    pub fn dimension(&self, name: &str) -> Option<usize> {
        self.dims
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, len)| len)
    }

    /// Returns a variable by name.
    pub fn variable(&self, name: &str) -> Option<&MemoryVariable> {
        self.vars.iter().find(|v| v.name == name)
    }

    /// Iterates over variables in creation order.
    pub fn variables(&self) -> impl Iterator<Item = &MemoryVariable> {
        self.vars.iter()
    }

    /// Returns the global attributes.
    pub fn global_attributes(&self) -> &Attributes {
        &self.globals
    }

    fn variable_mut(&mut self, name: &str) -> Result<&mut MemoryVariable, CfError> {
        self.vars
            .iter_mut()
            .find(|v| v.name == name)
            .ok_or_else(|| CfError::MissingVariable {
                name: name.to_string(),
            })
    }
}

impl Storage for MemoryDataset {
    fn add_dimension(&mut self, name: &str, len: usize) -> Result<(), CfError> {
        if len == 0 {
            return Err(CfError::EmptyDimension {
                name: name.to_string(),
            });
        }
        if self.dimension(name).is_some() {
            return Err(CfError::DuplicateDimension {
                name: name.to_string(),
            });
        }
        self.dims.push((name.to_string(), len));
        Ok(())
    }

    fn add_variable(
        &mut self,
        name: &str,
        kind: ValueKind,
        dims: &[&str],
        fill_value: Option<f64>,
    ) -> Result<(), CfError> {
        if self.variable(name).is_some() {
            return Err(CfError::DuplicateVariable {
                name: name.to_string(),
            });
        }
        if let Some(missing) = dims.iter().find(|d| self.dimension(d).is_none()) {
            return Err(CfError::MissingDimension {
                variable: name.to_string(),
                dimension: missing.to_string(),
            });
        }
        self.vars.push(MemoryVariable {
            name: name.to_string(),
            kind,
            dims: dims.iter().map(|d| d.to_string()).collect(),
            fill_value: fill_value.and_then(|fv| kind.stored_fill(fv)),
            attributes: Attributes::new(),
            data: None,
        });
        Ok(())
    }

    fn put_attribute(
        &mut self,
        target: Target<'_>,
        key: &str,
        value: &AttrValue,
    ) -> Result<(), CfError> {
        match target {
            Target::Global => self.globals.insert(key, value.clone()),
            Target::Variable(name) => self.variable_mut(name)?.attributes.insert(key, value.clone()),
        }
        Ok(())
    }

    fn put_values(&mut self, variable: &str, values: Values<'_>) -> Result<(), CfError> {
        let expected: usize = {
            let var = self.variable(variable).ok_or_else(|| CfError::MissingVariable {
                name: variable.to_string(),
            })?;
            if var.kind != values.kind() {
                return Err(CfError::TypeMismatch {
                    variable: variable.to_string(),
                    expected: var.kind,
                    got: values.kind(),
                });
            }
            var.dims
                .iter()
                .map(|d| self.dimension(d).unwrap_or(0))
                .product()
        };
        if values.len() != expected {
            return Err(CfError::LengthMismatch {
                variable: variable.to_string(),
                expected,
                got: values.len(),
            });
        }
        self.variable_mut(variable)?.data = Some(values.to_owned_data());
        Ok(())
    }
}

/// Formats an attribute value as a CDL literal.
/// Formats a stored fill value with the literal suffix of its type.
fn fill_literal(kind: ValueKind, fill: f64) -> String {
    match kind {
        ValueKind::F32 => format!("{:?}f", fill as f32),
        ValueKind::I32 => format!("{}", fill as i32),
        ValueKind::I64 => format!("{}LL", fill as i64),
        ValueKind::F64 | ValueKind::Char => format!("{fill:?}"),
    }
}

fn cdl_literal(value: &AttrValue) -> String {
    match value {
        AttrValue::Str(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        AttrValue::Double(v) => format!("{v:?}"),
        AttrValue::Float(v) => format!("{v:?}f"),
        AttrValue::Int(v) => v.to_string(),
        AttrValue::Long(v) => format!("{v}LL"),
    }
}

impl fmt::Display for MemoryDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "netcdf {} {{", self.name)?;

        if !self.dims.is_empty() {
            writeln!(f, "dimensions:")?;
            for (name, len) in &self.dims {
                writeln!(f, "\t{name} = {len} ;")?;
            }
        }

        if !self.vars.is_empty() {
            writeln!(f, "variables:")?;
            for var in &self.vars {
                if var.dims.is_empty() {
                    writeln!(f, "\t{} {} ;", var.kind, var.name)?;
                } else {
                    writeln!(f, "\t{} {}({}) ;", var.kind, var.name, var.dims.join(", "))?;
                }
                if let Some(fv) = var.fill_value {
                    let literal = fill_literal(var.kind, fv);
                    writeln!(f, "\t\t{}:_FillValue = {literal} ;", var.name)?;
                }
                for (key, value) in var.attributes.iter() {
                    writeln!(f, "\t\t{}:{key} = {} ;", var.name, cdl_literal(value))?;
                }
            }
        }

        if !self.globals.is_empty() {
            writeln!(f)?;
            writeln!(f, "// global attributes:")?;
            for (key, value) in self.globals.iter() {
                writeln!(f, "\t\t:{key} = {} ;", cdl_literal(value))?;
            }
        }

        write!(f, "}}")
    }
}
