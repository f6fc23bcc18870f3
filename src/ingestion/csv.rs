//! CSV ingestion of trip files.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{ExplorerError, ExplorerResult};
use crate::types::{DataType, Field, Schema, TripTable, Value, columns};

/// Timestamp layouts seen in the trip files, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Cell texts read as missing values, matched exactly.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Ingest a trip CSV file into an in-memory [`TripTable`].
///
/// Rules:
///
/// - The file must have a header row, and the header must contain "Start Time".
/// - The schema follows the header: column order and presence are whatever the file has.
/// - Each value is parsed according to [`DataType::for_trip_column`]. Blank cells, the usual
///   missing-value markers ("NaN", "NA", "N/A", "null", ...) and non-finite numbers are `Null`,
///   except in "Start Time" where every row must carry a parseable timestamp.
/// - Text cells keep their raw content, surrounding whitespace included.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> ExplorerResult<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest trip CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> ExplorerResult<TripTable> {
    let headers = rdr.headers()?.clone();
    let schema = Schema::new(
        headers
            .iter()
            .map(|h| Field::new(h, DataType::for_trip_column(h)))
            .collect(),
    );

    if !schema.has_column(columns::START_TIME) {
        return Err(ExplorerError::SchemaMismatch {
            message: format!(
                "missing required column '{}'. headers={:?}",
                columns::START_TIME,
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (csv_idx, field) in schema.fields.iter().enumerate() {
            let raw = record.get(csv_idx).unwrap_or("");
            let value = parse_typed_value(user_row, &field.name, &field.data_type, raw)?;
            if value.is_null() && field.name == columns::START_TIME {
                return Err(ExplorerError::ParseError {
                    row: user_row,
                    column: field.name.clone(),
                    raw: raw.to_owned(),
                    message: "start time is required".to_string(),
                });
            }
            row.push(value);
        }
        rows.push(row);
    }

    Ok(TripTable::new(schema, rows))
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: &DataType,
    raw: &str,
) -> ExplorerResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NA_TOKENS.contains(&raw) {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| ExplorerError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
        DataType::Float64 => match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Value::Float64(v)),
            Ok(_) => Ok(Value::Null),
            Err(e) => Err(parse_error(e.to_string())),
        },
        DataType::Timestamp => parse_timestamp(trimmed)
            .map(Value::Timestamp)
            .map_err(parse_error),
    }
}

/// Parse a start/end time cell.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| "expected a date and time such as 2017-01-01 09:07:57".to_string())
}
