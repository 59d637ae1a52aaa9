//! Integration tests: read station tables from Parquet files.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanArray, Date32Array, Float32Array, Float64Array, Int32Array, Int64Array,
    RecordBatch, StringArray, TimestampMillisecondArray,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use chrono::{TimeZone, Utc};
use nccf_cf::ColumnData;
use nccf_io::{IoError, ReaderConfig, TableFormat, read_parquet, read_table};
use parquet::arrow::ArrowWriter;

/// Writes `batches` (sharing `schema`) to `dir/name`.
fn write_parquet(dir: &Path, name: &str, schema: Arc<Schema>, batches: &[RecordBatch]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("writer");
    for batch in batches {
        writer.write(batch).expect("write batch");
    }
    writer.close().expect("close writer");
    path
}

fn millis(h: u32) -> i64 {
    Utc.with_ymd_and_hms(2020, 1, 1, h, 0, 0)
        .unwrap()
        .timestamp_millis()
}

#[test]
fn typed_columns_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Timestamp(TimeUnit::Millisecond, None), false),
        Field::new("temperature", DataType::Float64, true),
        Field::new("salinity", DataType::Float32, true),
        Field::new("count", DataType::Int32, false),
        Field::new("bytes", DataType::Int64, false),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(TimestampMillisecondArray::from(vec![millis(0), millis(1), millis(2)])),
        Arc::new(Float64Array::from(vec![Some(10.0), None, Some(11.0)])),
        Arc::new(Float32Array::from(vec![35.0_f32, 35.1, 35.2])),
        Arc::new(Int32Array::from(vec![1, 2, 3])),
        Arc::new(Int64Array::from(vec![10_i64, 20, 30])),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
    let path = write_parquet(dir.path(), "obs.parquet", schema, &[batch]);

    let table = read_parquet(&path, &ReaderConfig::default()).expect("read succeeds");
    assert_eq!(table.n_rows(), 3);
    assert_eq!(
        table.index()[1],
        Utc.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap()
    );

    match table.column("temperature").unwrap().data() {
        ColumnData::F64(v) => {
            assert_eq!(v[0], 10.0);
            assert!(v[1].is_nan());
            assert_eq!(v[2], 11.0);
        }
        other => panic!("expected F64, got {other:?}"),
    }
    assert!(matches!(
        table.column("salinity").unwrap().data(),
        ColumnData::F32(_)
    ));
    assert_eq!(
        table.column("count").unwrap().data(),
        &ColumnData::I32(vec![1, 2, 3])
    );
    assert_eq!(
        table.column("bytes").unwrap().data(),
        &ColumnData::I64(vec![10, 20, 30])
    );
}

#[test]
fn multiple_batches_are_concatenated() {
    let dir = tempfile::tempdir().unwrap();
    let schema = Arc::new(Schema::new(vec![
        Field::new("t", DataType::Int64, false),
        Field::new("x", DataType::Float64, false),
    ]));
    let first = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![0_i64, 60])) as ArrayRef,
            Arc::new(Float64Array::from(vec![1.0, 2.0])),
        ],
    )
    .unwrap();
    let second = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![120_i64])) as ArrayRef,
            Arc::new(Float64Array::from(vec![3.0])),
        ],
    )
    .unwrap();
    let path = write_parquet(dir.path(), "epoch.parquet", schema, &[first, second]);

    let config = ReaderConfig::default().with_time_column("t");
    let table = read_parquet(&path, &config).expect("read succeeds");
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.index()[2].timestamp(), 120);
    assert_eq!(
        table.column("x").unwrap().data(),
        &ColumnData::F64(vec![1.0, 2.0, 3.0])
    );
}

#[test]
fn date_and_text_time_columns() {
    let dir = tempfile::tempdir().unwrap();

    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Date32, false),
        Field::new("x", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Date32Array::from(vec![18_262])) as ArrayRef,
            Arc::new(Float64Array::from(vec![1.0])),
        ],
    )
    .unwrap();
    let path = write_parquet(dir.path(), "dates.parquet", schema, &[batch]);
    let table = read_parquet(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(
        table.index()[0],
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    );

    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Utf8, false),
        Field::new("x", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec!["2020-01-01T06:00:00+06:00"])) as ArrayRef,
            Arc::new(Float64Array::from(vec![1.0])),
        ],
    )
    .unwrap();
    let path = write_parquet(dir.path(), "text.parquet", schema, &[batch]);
    let table = read_parquet(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(
        table.index()[0],
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn unsupported_value_column() {
    let dir = tempfile::tempdir().unwrap();
    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Int64, false),
        Field::new("flag", DataType::Boolean, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![0_i64])) as ArrayRef,
            Arc::new(BooleanArray::from(vec![true])),
        ],
    )
    .unwrap();
    let path = write_parquet(dir.path(), "flags.parquet", schema, &[batch]);

    let err = read_parquet(&path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedColumn { ref name, .. } if name == "flag"));
}

#[test]
fn missing_time_column() {
    let dir = tempfile::tempdir().unwrap();
    let schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Float64, false)]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(Float64Array::from(vec![1.0])) as ArrayRef],
    )
    .unwrap();
    let path = write_parquet(dir.path(), "notime.parquet", schema, &[batch]);

    let err = read_parquet(&path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::MissingColumn { ref name, .. } if name == "time"));
}

#[test]
fn explicit_format_for_odd_extension() {
    let dir = tempfile::tempdir().unwrap();
    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Int64, false),
        Field::new("x", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![0_i64])) as ArrayRef,
            Arc::new(Float64Array::from(vec![1.0])),
        ],
    )
    .unwrap();
    let path = write_parquet(dir.path(), "obs.data", schema, &[batch]);

    assert!(matches!(
        read_table(&path, &ReaderConfig::default()),
        Err(IoError::UnknownFormat { .. })
    ));
    let config = ReaderConfig::default().with_format(TableFormat::Parquet);
    assert_eq!(read_table(&path, &config).unwrap().n_rows(), 1);
}
