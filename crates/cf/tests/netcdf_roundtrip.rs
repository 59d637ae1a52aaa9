//! Integration test: write a time series to a NetCDF file and read it back.

use chrono::{Duration, TimeZone, Utc};
use nccf_cf::{
    Attributes, CfConfig, CfError, Column, Station, Table, TimeSeriesMetadata, write_timeseries,
};
use netcdf::AttributeValue;
use netcdf::types::NcVariableType;
use tempfile::tempdir;

fn string_attr(value: Option<Result<AttributeValue, netcdf::Error>>) -> String {
    match value.expect("attribute present").expect("attribute readable") {
        AttributeValue::Str(s) => s,
        other => panic!("expected string attribute, got {other:?}"),
    }
}

fn double_attr(value: Option<Result<AttributeValue, netcdf::Error>>) -> f64 {
    match value.expect("attribute present").expect("attribute readable") {
        AttributeValue::Double(v) => v,
        other => panic!("expected double attribute, got {other:?}"),
    }
}

fn sample_table() -> Table {
    let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let index = vec![t0, t0 + Duration::hours(1), t0 + Duration::hours(2)];
    Table::new(
        index,
        vec![
            Column::new("temperature", vec![10.0, 10.5, 11.0]),
            Column::new("pressure", vec![1013_i32, 1012, 1011]),
        ],
    )
    .expect("valid table")
}

#[test]
fn round_trip_timeseries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("station.nc");

    let meta = TimeSeriesMetadata::new()
        .with_units("degC")
        .with_global(Attributes::new().with("title", "Round trip"))
        .with_platform(Attributes::new().with("long_name", "Pier"));

    {
        let mut file = netcdf::create(&path).expect("create file");
        write_timeseries(
            &mut file,
            CfConfig::default(),
            &sample_table(),
            Station::new(45.0, -70.0, 0.0),
            &meta,
        )
        .expect("write succeeds");
    }

    let file = netcdf::open(&path).expect("reopen file");

    assert_eq!(file.dimension("time").expect("time dim").len(), 3);
    assert_eq!(file.dimension("timeseries_dim").expect("id dim").len(), 4);

    let conventions = file
        .attribute("Conventions")
        .expect("Conventions present")
        .value()
        .expect("readable");
    assert_eq!(conventions, AttributeValue::Str("CF-1.6".to_string()));
    let title = file.attribute("title").expect("title").value().expect("readable");
    assert_eq!(title, AttributeValue::Str("Round trip".to_string()));

    let time = file.variable("time").expect("time var");
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap().timestamp() as f64;
    assert_eq!(
        time.get_values::<f64, _>(..).expect("time values"),
        vec![start, start + 3600.0, start + 7200.0]
    );
    assert_eq!(
        string_attr(time.attribute_value("units")),
        "seconds since 1970-01-01T00:00:00Z"
    );

    let lat = file.variable("latitude").expect("latitude var");
    assert!(lat.dimensions().is_empty());
    assert_eq!(lat.get_values::<f64, _>(..).expect("lat value"), vec![45.0]);
    assert_eq!(double_attr(lat.attribute_value("valid_min")), -90.0);

    let depth = file.variable("depth").expect("depth var");
    assert_eq!(string_attr(depth.attribute_value("positive")), "down");
    assert_eq!(double_attr(depth.attribute_value("valid_max")), 10971.0);

    let temp = file.variable("temperature").expect("temperature var");
    assert_eq!(
        temp.get_values::<f64, _>(..).expect("temperature values"),
        vec![10.0, 10.5, 11.0]
    );
    assert_eq!(string_attr(temp.attribute_value("units")), "degC");
    assert_eq!(
        string_attr(temp.attribute_value("coordinates")),
        "time depth latitude longitude"
    );
    assert_eq!(string_attr(temp.attribute_value("grid_mapping")), "crs");
    assert_eq!(double_attr(temp.attribute_value("_FillValue")), -9999.9);

    let pressure = file.variable("pressure").expect("pressure var");
    assert_eq!(
        pressure.get_values::<i32, _>(..).expect("pressure values"),
        vec![1013, 1012, 1011]
    );
    assert!(matches!(
        pressure
            .attribute_value("_FillValue")
            .expect("fill present")
            .expect("fill readable"),
        AttributeValue::Int(-9999)
    ));

    let crs = file.variable("crs").expect("crs var");
    assert_eq!(string_attr(crs.attribute_value("epsg_code")), "EPSG:4326");
    assert_eq!(
        string_attr(crs.attribute_value("grid_mapping_name")),
        "latitude_longitude"
    );

    let id = file.variable("timeseries").expect("id var");
    assert_eq!(string_attr(id.attribute_value("cf_role")), "timeseries_id");
    assert_eq!(string_attr(id.attribute_value("long_name")), "Pier");
    assert!(matches!(id.vartype(), NcVariableType::Char));
    assert_eq!(file.dimension("timeseries_dim").expect("id dim").len(), 4);
    assert_eq!(id.get_raw_values(..).expect("id chars"), b"Pier".to_vec());
}

#[test]
fn duplicate_write_into_same_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("twice.nc");
    let mut file = netcdf::create(&path).expect("create file");

    write_timeseries(
        &mut file,
        CfConfig::default(),
        &sample_table(),
        Station::default(),
        &TimeSeriesMetadata::new(),
    )
    .expect("first write succeeds");

    let err = write_timeseries(
        &mut file,
        CfConfig::default(),
        &sample_table(),
        Station::default(),
        &TimeSeriesMetadata::new(),
    )
    .unwrap_err();
    assert!(matches!(err, CfError::Netcdf { .. }));
}
