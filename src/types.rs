//! Core data model types.
//!
//! A city dataset is loaded into an in-memory [`TripTable`]. Its [`Schema`] is derived from the
//! CSV header, so consumers check for optional columns with [`Schema::has_column`] instead of
//! assuming a fixed layout.

use std::fmt;

use chrono::NaiveDateTime;

/// Well-known column names of the bike-share trip files.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
    /// Derived column appended by the station report.
    pub const ROUTE: &str = "route";
}

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
    /// Naive (zone-less) date and time.
    Timestamp,
}

impl DataType {
    /// Type used for a column of a trip file, by header name.
    ///
    /// Columns this crate does not interpret (index columns, "End Time", ...) stay text.
    pub fn for_trip_column(name: &str) -> Self {
        match name {
            columns::START_TIME => DataType::Timestamp,
            columns::TRIP_DURATION | columns::BIRTH_YEAR => DataType::Float64,
            _ => DataType::Utf8,
        }
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of fields describing the shape of a [`TripTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

/// A single typed value in a [`TripTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Date and time.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Whether the cell was blank or a missing-value marker in the source file.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of the value; `None` for anything but `Utf8`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Timestamp view of the value; only "Start Time" cells carry one.
    pub fn as_timestamp(&self) -> Option<&NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NaN"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
            Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// In-memory table of trip records for one city.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields, and keep the
/// order they had in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl TripTable {
    /// Create a table from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows. The schema is kept either way.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column in row order, or `None` if the column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let idx = self.schema.index_of(name)?;
        Some(self.rows.iter().map(move |row| row.get(idx).unwrap_or(&Value::Null)))
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// The returned table preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Reduce (fold) all rows into an accumulator value.
    ///
    /// This is similar to `Iterator::fold`, but provides each row as `&[Value]`.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &[Value]) -> A,
    {
        self.rows
            .iter()
            .fold(init, |acc, row| reducer(acc, row.as_slice()))
    }

    /// Append a column computed from each existing row.
    ///
    /// Existing columns are never overwritten: if `field.name` is already present this is a
    /// no-op and returns `false`.
    pub fn append_derived_column<F>(&mut self, field: Field, mut derive: F) -> bool
    where
        F: FnMut(&[Value]) -> Value,
    {
        if self.schema.has_column(&field.name) {
            return false;
        }
        for row in &mut self.rows {
            let value = derive(row.as_slice());
            row.push(value);
        }
        self.schema.fields.push(field);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{DataType, Field, Schema, TripTable, Value, columns};

    fn stations() -> TripTable {
        let schema = Schema::new(vec![
            Field::new(columns::START_STATION, DataType::Utf8),
            Field::new(columns::END_STATION, DataType::Utf8),
        ]);
        TripTable::new(
            schema,
            vec![
                vec![Value::Utf8("A".to_string()), Value::Utf8("B".to_string())],
                vec![Value::Utf8("C".to_string()), Value::Null],
            ],
        )
    }

    #[test]
    fn schema_reports_columns() {
        let t = stations();
        assert!(t.schema.has_column(columns::START_STATION));
        assert!(!t.schema.has_column(columns::GENDER));
        assert_eq!(t.schema.index_of(columns::END_STATION), Some(1));
    }

    #[test]
    fn column_iterates_in_row_order() {
        let t = stations();
        let ends: Vec<&Value> = t.column(columns::END_STATION).unwrap().collect();
        assert_eq!(ends, vec![&Value::Utf8("B".to_string()), &Value::Null]);
        assert!(t.column("missing").is_none());
    }

    #[test]
    fn filter_rows_can_return_empty_table() {
        let t = stations();
        let out = t.filter_rows(|_| false);
        assert_eq!(out.schema, t.schema);
        assert!(out.is_empty());
        assert_eq!(t.row_count(), 2);
    }

    #[test]
    fn append_derived_column_is_idempotent() {
        let mut t = stations();
        let field = Field::new("n", DataType::Float64);
        assert!(t.append_derived_column(field.clone(), |_| Value::Float64(1.0)));
        assert!(!t.append_derived_column(field, |_| Value::Float64(2.0)));
        assert_eq!(t.schema.fields.len(), 3);
        assert!(t.rows.iter().all(|r| r[2] == Value::Float64(1.0)));
    }

    #[test]
    fn trip_columns_get_expected_types() {
        assert_eq!(DataType::for_trip_column("Start Time"), DataType::Timestamp);
        assert_eq!(DataType::for_trip_column("Birth Year"), DataType::Float64);
        assert_eq!(DataType::for_trip_column("End Time"), DataType::Utf8);
        assert_eq!(DataType::for_trip_column(""), DataType::Utf8);
    }
}
