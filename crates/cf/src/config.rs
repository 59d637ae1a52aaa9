//! Naming and default-value configuration for the CF writers.

/// Fill value used for observation variables unless overridden.
pub const DEFAULT_FILL_VALUE: f64 = -9999.9;

/// Conventions tag written to the `Conventions` global attribute.
pub const DEFAULT_CONVENTIONS: &str = "CF-1.6";

/// Variable names and defaults shared by every builder primitive.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use nccf_cf::CfConfig;
///
/// let config = CfConfig::default()
///     .with_crs_var("wgs84")
///     .with_fill_value(-999.0);
///
/// assert_eq!(config.crs_var(), "wgs84");
/// assert_eq!(config.time_var(), "time");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CfConfig {
    /// Name of the time dimension and coordinate variable.
    time_var: String,
    /// Name of the latitude variable.
    lat_var: String,
    /// Name of the longitude variable.
    lon_var: String,
    /// Name of the depth variable.
    depth_var: String,
    /// Name of the platform metadata variable.
    platform_var: String,
    /// Name of the instrument metadata variable.
    instrument_var: String,
    /// Name of the coordinate reference system marker.
    crs_var: String,
    /// Default fill value for numeric variables.
    fill_value: f64,
    /// Value of the `Conventions` global attribute.
    conventions: String,
}

impl Default for CfConfig {
    fn default() -> Self {
        Self {
            time_var: "time".to_string(),
            lat_var: "latitude".to_string(),
            lon_var: "longitude".to_string(),
            depth_var: "depth".to_string(),
            platform_var: "platform".to_string(),
            instrument_var: "instrument".to_string(),
            crs_var: "crs".to_string(),
            fill_value: DEFAULT_FILL_VALUE,
            conventions: DEFAULT_CONVENTIONS.to_string(),
        }
    }
}

impl CfConfig {
    /// Sets the time dimension/variable name.
    pub fn with_time_var(mut self, name: impl Into<String>) -> Self {
        self.time_var = name.into();
        self
    }

    /// Sets the latitude variable name.
    pub fn with_lat_var(mut self, name: impl Into<String>) -> Self {
        self.lat_var = name.into();
        self
    }

    /// Sets the longitude variable name.
    pub fn with_lon_var(mut self, name: impl Into<String>) -> Self {
        self.lon_var = name.into();
        self
    }

    /// Sets the depth variable name.
    pub fn with_depth_var(mut self, name: impl Into<String>) -> Self {
        self.depth_var = name.into();
        self
    }

    /// Sets the platform variable name.
    pub fn with_platform_var(mut self, name: impl Into<String>) -> Self {
        self.platform_var = name.into();
        self
    }

    /// Sets the instrument variable name.
    pub fn with_instrument_var(mut self, name: impl Into<String>) -> Self {
        self.instrument_var = name.into();
        self
    }

    /// Sets the coordinate reference system variable name.
    pub fn with_crs_var(mut self, name: impl Into<String>) -> Self {
        self.crs_var = name.into();
        self
    }

    /// Sets the default fill value.
    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = fill_value;
        self
    }

    /// Sets the `Conventions` tag.
    pub fn with_conventions(mut self, conventions: impl Into<String>) -> Self {
        self.conventions = conventions.into();
        self
    }

    pub fn time_var(&self) -> &str {
        &self.time_var
    }

    pub fn lat_var(&self) -> &str {
        &self.lat_var
    }

    pub fn lon_var(&self) -> &str {
        &self.lon_var
    }

    pub fn depth_var(&self) -> &str {
        &self.depth_var
    }

    pub fn platform_var(&self) -> &str {
        &self.platform_var
    }

    pub fn instrument_var(&self) -> &str {
        &self.instrument_var
    }

    pub fn crs_var(&self) -> &str {
        &self.crs_var
    }

    pub fn fill_value(&self) -> f64 {
        self.fill_value
    }

    pub fn conventions(&self) -> &str {
        &self.conventions
    }

    /// Returns the `coordinates` attribute shared by observation variables:
    /// time, depth, latitude and longitude names separated by spaces.
    pub fn coordinates(&self) -> String {
        [
            self.time_var.as_str(),
            self.depth_var.as_str(),
            self.lat_var.as_str(),
            self.lon_var.as_str(),
        ]
        .join(" ")
    }
}
