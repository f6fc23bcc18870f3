//! In-memory transformations and statistics over [`crate::types::TripTable`].
//!
//! - [`filter()`], [`apply_selection`]: row filtering by predicate or by month/weekday
//! - [`reduce()`]: sum/mean/min/max over a numeric column
//! - [`mode`], [`value_counts`]: frequency statistics with first-occurrence tie-breaking
//!
//! ## Example: filter then reduce
//!
//! ```rust
//! use bikeshare_explorer::processing::{filter, reduce, ReduceOp};
//! use bikeshare_explorer::types::{TripTable, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("User Type", DataType::Utf8),
//!     Field::new("Trip Duration", DataType::Float64),
//! ]);
//! let table = TripTable::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("Subscriber".into()), Value::Float64(300.0)],
//!         vec![Value::Utf8("Customer".into()), Value::Float64(900.0)],
//!         vec![Value::Utf8("Subscriber".into()), Value::Null],
//!     ],
//! );
//!
//! let subscribers = filter(&table, |row| row[0].as_str() == Some("Subscriber"));
//! let total = reduce(&subscribers, "Trip Duration", ReduceOp::Sum).unwrap();
//! assert_eq!(total, Value::Float64(300.0));
//! ```

pub mod filter;
pub mod frequency;
pub mod reduce;

pub use filter::{Filtered, apply_selection, filter, filter_by_month, filter_by_weekday};
pub use frequency::{mode, value_counts};
pub use reduce::{ReduceOp, reduce};
