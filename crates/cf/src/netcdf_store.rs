//! [`Storage`] backend over an open, writable NetCDF file.

use netcdf::types::NcVariableType;

use crate::attrs::AttrValue;
use crate::error::CfError;
use crate::storage::{Storage, Target};
use crate::values::{ValueKind, Values};

/// Looks up a variable for writing, mapping absence to
/// [`CfError::MissingVariable`].
fn variable_mut<'f>(
    file: &'f mut netcdf::FileMut,
    name: &str,
) -> Result<netcdf::VariableMut<'f>, CfError> {
    file.variable_mut(name)
        .ok_or_else(|| CfError::MissingVariable {
            name: name.to_string(),
        })
}

impl Storage for netcdf::FileMut {
    fn add_dimension(&mut self, name: &str, len: usize) -> Result<(), CfError> {
        // A zero length would silently declare an unlimited dimension.
        if len == 0 {
            return Err(CfError::EmptyDimension {
                name: name.to_string(),
            });
        }
        netcdf::FileMut::add_dimension(self, name, len)?;
        Ok(())
    }

    fn add_variable(
        &mut self,
        name: &str,
        kind: ValueKind,
        dims: &[&str],
        fill_value: Option<f64>,
    ) -> Result<(), CfError> {
        match kind {
            ValueKind::F64 => {
                let mut var = netcdf::FileMut::add_variable::<f64>(self, name, dims)?;
                if let Some(fv) = fill_value {
                    var.set_fill_value(fv)?;
                }
            }
            ValueKind::F32 => {
                let mut var = netcdf::FileMut::add_variable::<f32>(self, name, dims)?;
                if let Some(fv) = fill_value {
                    var.set_fill_value(fv as f32)?;
                }
            }
            ValueKind::I32 => {
                let mut var = netcdf::FileMut::add_variable::<i32>(self, name, dims)?;
                if let Some(fv) = fill_value {
                    var.set_fill_value(fv as i32)?;
                }
            }
            ValueKind::I64 => {
                let mut var = netcdf::FileMut::add_variable::<i64>(self, name, dims)?;
                if let Some(fv) = fill_value {
                    var.set_fill_value(fv as i64)?;
                }
            }
            ValueKind::Char => {
                self.add_variable_with_type(name, dims, &NcVariableType::Char)?;
            }
        }
        Ok(())
    }

    fn put_attribute(
        &mut self,
        target: Target<'_>,
        key: &str,
        value: &AttrValue,
    ) -> Result<(), CfError> {
        let value = netcdf::AttributeValue::from(value.clone());
        match target {
            Target::Global => {
                self.add_attribute(key, value)?;
            }
            Target::Variable(name) => {
                variable_mut(self, name)?.put_attribute(key, value)?;
            }
        }
        Ok(())
    }

    fn put_values(&mut self, variable: &str, values: Values<'_>) -> Result<(), CfError> {
        let mut var = variable_mut(self, variable)?;
        match values {
            Values::F64(v) => var.put_values(v, ..)?,
            Values::F32(v) => var.put_values(v, ..)?,
            Values::I32(v) => var.put_values(v, ..)?,
            Values::I64(v) => var.put_values(v, ..)?,
            Values::Char(v) => var.put_raw_values(v, ..)?,
        }
        Ok(())
    }
}
