use bikeshare_explorer::ExplorerError;
use bikeshare_explorer::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use bikeshare_explorer::report::{BirthYears, NOT_DISCLOSED, Stat, trip_durations, users};
use bikeshare_explorer::types::{DataType, Value};

#[test]
fn ingest_csv_from_path_happy_path() {
    let table = ingest_csv_from_path("tests/fixtures/chicago.csv").unwrap();

    assert_eq!(table.row_count(), 7);
    assert_eq!(
        table.schema.field_names().collect::<Vec<_>>(),
        vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
            "Gender",
            "Birth Year",
        ]
    );
    assert_eq!(table.rows[0][3], Value::Float64(300.0));
    assert_eq!(table.rows[0][4], Value::Utf8("Clark St & Lake St".to_string()));
    assert_eq!(table.rows[2][7], Value::Null);
    assert!(matches!(table.rows[0][1], Value::Timestamp(_)));
}

#[test]
fn schema_follows_header_types() {
    let table = ingest_csv_from_path("tests/fixtures/washington.csv").unwrap();
    let types: Vec<&DataType> = table.schema.fields.iter().map(|f| &f.data_type).collect();
    assert_eq!(
        types,
        vec![
            &DataType::Utf8,
            &DataType::Timestamp,
            &DataType::Utf8,
            &DataType::Float64,
            &DataType::Utf8,
            &DataType::Utf8,
        ]
    );
    assert!(!table.schema.has_column("Gender"));
    assert_eq!(
        table.rows[2][4],
        Value::Utf8("Jefferson Dr & 14th St SW, Mall".to_string())
    );
}

#[test]
fn ingest_csv_allows_reordered_columns() {
    let input = "Trip Duration,Start Time\n42,2017-04-01 10:00:00\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let table = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows[0][0], Value::Float64(42.0));
    assert_eq!(table.schema.index_of("Start Time"), Some(1));
}

#[test]
fn ingest_csv_errors_on_missing_start_time() {
    let err = ingest_csv_from_path("tests/fixtures/no_start_time.csv").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'Start Time'"));
}

#[test]
fn ingest_csv_errors_on_unparseable_start_time() {
    let err = ingest_csv_from_path("tests/fixtures/bad_start_time.csv").unwrap_err();
    match err {
        ExplorerError::ParseError { row, column, raw, .. } => {
            assert_eq!(row, 3);
            assert_eq!(column, "Start Time");
            assert_eq!(raw, "not a time");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn ingest_csv_errors_on_empty_start_time() {
    let input = "Start Time,Trip Duration\n,10\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("failed to parse value at row 2 column 'Start Time'"));
}

#[test]
fn ingest_csv_errors_on_bad_number() {
    let input = "Start Time,Trip Duration\n2017-04-01 10:00:00,long\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("column 'Trip Duration'"));
}

#[test]
fn missing_value_markers_do_not_leak_into_stats() {
    let table = ingest_csv_from_path("tests/fixtures/missing_markers.csv").unwrap();
    assert_eq!(table.rows[0][1], Value::Null);
    assert_eq!(table.rows[2][2], Value::Null);

    let riders = users(&table);
    assert_eq!(
        riders.genders,
        Stat::Value(vec![(NOT_DISCLOSED.to_string(), 2), ("Male".to_string(), 1)])
    );
    assert_eq!(
        riders.birth_years,
        Stat::Value(BirthYears {
            earliest: 1985,
            latest: 1990,
            most_common: 1985,
        })
    );

    let durations = trip_durations(&table).unwrap();
    assert_eq!(durations.total, Stat::Value(900.0));
    assert_eq!(durations.mean, Stat::Value(450.0));
}
