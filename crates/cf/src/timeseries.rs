//! Single-station CF `timeSeries` feature assembly.

use tracing::{info, info_span};

use crate::attrs::Attributes;
use crate::builder::CfWriter;
use crate::config::CfConfig;
use crate::error::CfError;
use crate::storage::Storage;
use crate::table::{Table, Units};
use crate::time::datetimes_to_unix;
use crate::values::Values;

/// Name of the station identifier variable.
pub const TIMESERIES_VAR: &str = "timeseries";

/// Identifier text used when the platform has no `long_name`.
pub const DEFAULT_STATION_NAME: &str = "my_station";

/// Fixed position of the station.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Station {
    /// Latitude in degrees north.
    pub latitude: f64,
    /// Longitude in degrees east.
    pub longitude: f64,
    /// Depth in metres, positive down.
    pub depth: f64,
}

impl Station {
    /// Creates a station at the given position.
    pub fn new(latitude: f64, longitude: f64, depth: f64) -> Self {
        Self {
            latitude,
            longitude,
            depth,
        }
    }
}

/// Caller-supplied metadata for a time series file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesMetadata {
    /// Global attributes, applied over the mandatory set.
    global: Attributes,
    /// Attributes of the platform variable.
    platform: Attributes,
    /// Attributes of the instrument variable.
    instrument: Attributes,
    /// Units of the observation columns.
    units: Units,
}

impl TimeSeriesMetadata {
    /// Creates empty metadata: no extra attributes, all columns dimensionless.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global attributes.
    pub fn with_global(mut self, attrs: Attributes) -> Self {
        self.global = attrs;
        self
    }

    /// Sets the platform attributes.
    pub fn with_platform(mut self, attrs: Attributes) -> Self {
        self.platform = attrs;
        self
    }

    /// Sets the instrument attributes.
    pub fn with_instrument(mut self, attrs: Attributes) -> Self {
        self.instrument = attrs;
        self
    }

    /// Sets the observation units.
    pub fn with_units(mut self, units: impl Into<Units>) -> Self {
        self.units = units.into();
        self
    }

    pub fn global(&self) -> &Attributes {
        &self.global
    }

    pub fn platform(&self) -> &Attributes {
        &self.platform
    }

    pub fn instrument(&self) -> &Attributes {
        &self.instrument
    }

    pub fn units(&self) -> &Units {
        &self.units
    }
}

/// Assembles a single-station `timeSeries` dataset from a [`Table`].
pub struct TimeSeriesWriter<'d, S: Storage + ?Sized> {
    cf: CfWriter<'d, S>,
}

impl<'d, S: Storage + ?Sized> TimeSeriesWriter<'d, S> {
    /// Creates a writer over `ds`.
    pub fn new(ds: &'d mut S, config: CfConfig) -> Self {
        Self {
            cf: CfWriter::new(ds, config),
        }
    }

    /// Returns the mandatory global attributes of a `timeSeries` dataset.
    pub fn mandatory_globals(&self) -> Attributes {
        let feature_vars = self.cf.feature_vars(TIMESERIES_VAR);
        Attributes::new()
            .with("Conventions", self.cf.config().conventions())
            .with("featureType", "timeSeries")
            .with("cdm_data_type", "TimeSeries")
            .with("cdm_timeseries_variables", feature_vars.as_str())
            .with("subsetVariables", feature_vars)
    }

    /// Writes the whole feature: global attributes, station identifier, time,
    /// position, platform, instrument, CRS marker, then one variable per
    /// column over the time dimension.
    ///
    /// # Errors
    ///
    /// Any storage failure aborts the assembly and is returned unchanged. The
    /// dataset keeps whatever was written before the failure.
    pub fn assemble(
        &mut self,
        table: &Table,
        station: Station,
        metadata: &TimeSeriesMetadata,
    ) -> Result<(), CfError> {
        let _span = info_span!("assemble_timeseries").entered();

        let globals = self.mandatory_globals().merged(&metadata.global);
        self.cf.put_global_attributes(&globals)?;

        // Numeric platform names are written as their text form.
        let station_name = metadata
            .platform
            .get("long_name")
            .map_or_else(|| DEFAULT_STATION_NAME.to_string(), ToString::to_string);
        self.cf.create_id_var(
            TIMESERIES_VAR,
            Some(station_name.as_str()),
            &Attributes::new(),
        )?;

        let times = datetimes_to_unix(table.index());
        self.cf.create_time_var(Values::F64(&times))?;

        self.cf.create_lat_var(&[])?.put_scalar(station.latitude)?;
        self.cf.create_lon_var(&[])?.put_scalar(station.longitude)?;
        self.cf.create_depth_var(&[])?.put_scalar(station.depth)?;

        self.cf.create_platform_var(&metadata.platform)?;
        self.cf.create_instrument_var(&metadata.instrument)?;

        let crs = self.cf.config().crs_var().to_string();
        self.cf.create_crs_var(&crs)?;

        let time = self.cf.config().time_var().to_string();
        let names = self
            .cf
            .create_obs_vars(table, &[time.as_str()], &metadata.units)?;

        info!(
            station = %station_name,
            n_rows = table.n_rows(),
            n_variables = names.len(),
            "assembled timeSeries feature"
        );
        Ok(())
    }
}

/// Writes `table` into `ds` as a single-station `timeSeries` feature.
///
/// Convenience wrapper around [`TimeSeriesWriter::assemble`].
pub fn write_timeseries<S: Storage + ?Sized>(
    ds: &mut S,
    config: CfConfig,
    table: &Table,
    station: Station,
    metadata: &TimeSeriesMetadata,
) -> Result<(), CfError> {
    TimeSeriesWriter::new(ds, config).assemble(table, station, metadata)
}
