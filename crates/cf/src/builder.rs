//! CF variable builder primitives.
//!
//! Each primitive declares one variable (and, where needed, its dimension)
//! with a fixed CF attribute template and returns a [`VarHandle`] for further
//! attribute or value assignment.

use tracing::debug;

use crate::attrs::{AttrValue, Attributes};
use crate::config::CfConfig;
use crate::error::CfError;
use crate::storage::{Storage, Target};
use crate::table::{DIMENSIONLESS, Table, Units};
use crate::time::TIME_UNITS;
use crate::values::{ValueKind, Values};

/// Handle to a variable just created by a [`CfWriter`].
///
/// The handle borrows the dataset; drop it before the next builder call.
pub struct VarHandle<'w, S: Storage + ?Sized> {
    ds: &'w mut S,
    name: String,
}

impl<'w, S: Storage + ?Sized> VarHandle<'w, S> {
    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets one attribute on the variable.
    pub fn put_attribute(
        &mut self,
        key: &str,
        value: impl Into<AttrValue>,
    ) -> Result<(), CfError> {
        self.ds
            .put_attribute(Target::Variable(&self.name), key, &value.into())
    }

    /// Sets every attribute of `attrs`, in order.
    pub fn put_attributes(&mut self, attrs: &Attributes) -> Result<(), CfError> {
        for (key, value) in attrs.iter() {
            self.ds
                .put_attribute(Target::Variable(&self.name), key, value)?;
        }
        Ok(())
    }

    /// Writes the complete contents of the variable.
    pub fn put_values(&mut self, values: Values<'_>) -> Result<(), CfError> {
        self.ds.put_values(&self.name, values)
    }

    /// Writes the single value of a scalar `double` variable.
    pub fn put_scalar(&mut self, value: f64) -> Result<(), CfError> {
        self.put_values(Values::F64(&[value]))
    }
}

/// Optional settings of [`CfWriter::create_var`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarOptions {
    /// Fill value; `None` uses [`CfConfig::fill_value`].
    fill_value: Option<f64>,
    /// Inclusive `(valid_min, valid_max)`.
    valid_range: Option<(f64, f64)>,
    /// Unit string; `None` means dimensionless.
    units: Option<String>,
}

impl VarOptions {
    /// Creates options with every setting left at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill value.
    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    /// Sets the valid range.
    pub fn with_valid_range(mut self, min: f64, max: f64) -> Self {
        self.valid_range = Some((min, max));
        self
    }

    /// Sets the units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

/// Writes CF-compliant variables into a [`Storage`] backend.
///
/// The writer borrows the dataset exclusively. It never closes it.
pub struct CfWriter<'d, S: Storage + ?Sized> {
    ds: &'d mut S,
    config: CfConfig,
}

impl<'d, S: Storage + ?Sized> CfWriter<'d, S> {
    /// Creates a writer over `ds`.
    pub fn new(ds: &'d mut S, config: CfConfig) -> Self {
        Self { ds, config }
    }

    /// Returns the naming configuration.
    pub fn config(&self) -> &CfConfig {
        &self.config
    }

    /// Sets every attribute of `attrs` on the dataset.
    pub fn put_global_attributes(&mut self, attrs: &Attributes) -> Result<(), CfError> {
        for (key, value) in attrs.iter() {
            self.ds.put_attribute(Target::Global, key, value)?;
        }
        Ok(())
    }

    /// Returns the CDM feature variable list for `feature_type`:
    /// the feature identifier followed by latitude, longitude, depth,
    /// platform and instrument, joined by `", "`.
    pub fn feature_vars(&self, feature_type: &str) -> String {
        [
            feature_type,
            self.config.lat_var(),
            self.config.lon_var(),
            self.config.depth_var(),
            self.config.platform_var(),
            self.config.instrument_var(),
        ]
        .join(", ")
    }

    /// Declares a variable and applies `attrs`.
    fn declare(
        &mut self,
        name: &str,
        kind: ValueKind,
        dims: &[&str],
        fill_value: Option<f64>,
        attrs: &Attributes,
    ) -> Result<VarHandle<'_, S>, CfError> {
        self.ds.add_variable(name, kind, dims, fill_value)?;
        debug!(variable = name, kind = %kind, ?dims, "declared variable");
        let mut handle = VarHandle {
            ds: &mut *self.ds,
            name: name.to_string(),
        };
        handle.put_attributes(attrs)?;
        Ok(handle)
    }

    /// Creates the scalar coordinate reference system marker for WGS 84
    /// latitude/longitude.
    pub fn create_crs_var(&mut self, name: &str) -> Result<VarHandle<'_, S>, CfError> {
        let attrs = Attributes::new()
            .with("grid_mapping_name", "latitude_longitude")
            .with("longitude_of_prime_meridian", 0.0)
            .with("semi_major_axis", 6_378_137.0)
            .with("inverse_flattening", 298.257_223_563)
            .with("epsg_code", "EPSG:4326");
        self.declare(name, ValueKind::F64, &[], None, &attrs)
    }

    /// Creates a scalar `char` variable that only carries attributes.
    ///
    /// `long_name` defaults to `name`; `attributes` are applied on top.
    pub fn create_empty_var(
        &mut self,
        name: &str,
        attributes: &Attributes,
    ) -> Result<VarHandle<'_, S>, CfError> {
        let attrs = Attributes::new().with("long_name", name).merged(attributes);
        self.declare(name, ValueKind::Char, &[], None, &attrs)
    }

    /// Creates a feature identifier variable with `cf_role = "<name>_id"`.
    ///
    /// The identifier text (`long_name`, or `name` when absent) is stored as a
    /// `char` array over a new `<name>_dim` dimension with one cell per byte.
    ///
    /// # Errors
    ///
    /// Returns [`CfError::EmptyDimension`] without touching the dataset when
    /// the identifier text is empty.
    pub fn create_id_var(
        &mut self,
        name: &str,
        long_name: Option<&str>,
        attributes: &Attributes,
    ) -> Result<VarHandle<'_, S>, CfError> {
        let long_name = long_name.unwrap_or(name);
        let dim_name = format!("{name}_dim");
        if long_name.is_empty() {
            return Err(CfError::EmptyDimension { name: dim_name });
        }

        self.ds.add_dimension(&dim_name, long_name.len())?;
        debug!(dimension = %dim_name, len = long_name.len(), "declared dimension");

        let attrs = Attributes::new()
            .with("cf_role", format!("{name}_id"))
            .with("long_name", long_name)
            .merged(attributes);
        let mut handle = self.declare(name, ValueKind::Char, &[dim_name.as_str()], None, &attrs)?;
        handle.put_values(Values::Char(long_name.as_bytes()))?;
        Ok(handle)
    }

    /// Creates the time dimension and coordinate variable over the configured
    /// time dimension.
    pub fn create_time_var(&mut self, times: Values<'_>) -> Result<VarHandle<'_, S>, CfError> {
        let time = self.config.time_var().to_string();
        self.create_time_var_on(times, &[time.as_str()])
    }

    /// Creates the time dimension, sized to `times`, and a time variable over
    /// `dims`. Values are written in the order given.
    pub fn create_time_var_on(
        &mut self,
        times: Values<'_>,
        dims: &[&str],
    ) -> Result<VarHandle<'_, S>, CfError> {
        let time = self.config.time_var().to_string();
        self.ds.add_dimension(&time, times.len())?;
        debug!(dimension = %time, len = times.len(), "declared dimension");

        let attrs = Attributes::new()
            .with("units", TIME_UNITS)
            .with("standard_name", "time")
            .with("long_name", "time")
            .with("calendar", "gregorian")
            .with("axis", "T");
        let mut handle = self.declare(&time, times.kind(), dims, None, &attrs)?;
        handle.put_values(times)?;
        Ok(handle)
    }

    /// Creates a spatial coordinate variable with its fixed template.
    fn create_coord_var(
        &mut self,
        name: &str,
        units: &str,
        valid_range: (f64, f64),
        axis: &str,
        dims: &[&str],
    ) -> Result<VarHandle<'_, S>, CfError> {
        let attrs = Attributes::new()
            .with("long_name", name)
            .with("standard_name", name)
            .with("units", units)
            .with("valid_min", valid_range.0)
            .with("valid_max", valid_range.1)
            .with("axis", axis);
        self.declare(name, ValueKind::F64, dims, None, &attrs)
    }

    /// Creates the latitude variable; empty `dims` makes it scalar.
    pub fn create_lat_var(&mut self, dims: &[&str]) -> Result<VarHandle<'_, S>, CfError> {
        let name = self.config.lat_var().to_string();
        self.create_coord_var(&name, "degrees_north", (-90.0, 90.0), "Y", dims)
    }

    /// Creates the longitude variable; empty `dims` makes it scalar.
    pub fn create_lon_var(&mut self, dims: &[&str]) -> Result<VarHandle<'_, S>, CfError> {
        let name = self.config.lon_var().to_string();
        self.create_coord_var(&name, "degrees_east", (-180.0, 180.0), "X", dims)
    }

    /// Creates the depth variable, positive down, in metres; empty `dims`
    /// makes it scalar.
    pub fn create_depth_var(&mut self, dims: &[&str]) -> Result<VarHandle<'_, S>, CfError> {
        let name = self.config.depth_var().to_string();
        let mut handle = self.create_coord_var(&name, "m", (0.0, 10_971.0), "Z", dims)?;
        handle.put_attribute("positive", "down")?;
        Ok(handle)
    }

    /// Creates a numeric variable named `name` holding `values`.
    ///
    /// `long_name` and `standard_name` are both set to `name`; `units` default
    /// to `"1"`.
    pub fn create_var(
        &mut self,
        name: &str,
        values: Values<'_>,
        dims: &[&str],
        options: &VarOptions,
    ) -> Result<VarHandle<'_, S>, CfError> {
        let fill_value = options.fill_value.unwrap_or(self.config.fill_value());

        let mut attrs = Attributes::new()
            .with("long_name", name)
            .with("standard_name", name);
        if let Some((min, max)) = options.valid_range {
            attrs.insert("valid_min", min);
            attrs.insert("valid_max", max);
        }
        attrs.insert("units", options.units.as_deref().unwrap_or(DIMENSIONLESS));

        let mut handle = self.declare(name, values.kind(), dims, Some(fill_value), &attrs)?;
        handle.put_values(values)?;
        Ok(handle)
    }

    /// Creates the platform metadata variable.
    pub fn create_platform_var(
        &mut self,
        attributes: &Attributes,
    ) -> Result<VarHandle<'_, S>, CfError> {
        let name = self.config.platform_var().to_string();
        self.create_empty_var(&name, attributes)
    }

    /// Creates the instrument metadata variable.
    pub fn create_instrument_var(
        &mut self,
        attributes: &Attributes,
    ) -> Result<VarHandle<'_, S>, CfError> {
        let name = self.config.instrument_var().to_string();
        self.create_empty_var(&name, attributes)
    }

    /// Creates one observation variable per table column, in column order,
    /// linked to the coordinates, CRS marker, platform and instrument.
    ///
    /// Returns the names of the created variables.
    pub fn create_obs_vars(
        &mut self,
        table: &Table,
        dims: &[&str],
        units: &Units,
    ) -> Result<Vec<String>, CfError> {
        let coordinates = self.config.coordinates();
        let links = Attributes::new()
            .with("coordinates", coordinates)
            .with("grid_mapping", self.config.crs_var())
            .with("platform", self.config.platform_var())
            .with("instrument", self.config.instrument_var());

        let mut names = Vec::with_capacity(table.n_columns());
        for column in table.columns() {
            let options = VarOptions::new().with_units(units.resolve(column.name()));
            let mut handle =
                self.create_var(column.name(), column.data().values(), dims, &options)?;
            handle.put_attributes(&links)?;
            names.push(column.name().to_string());
        }
        Ok(names)
    }
}
