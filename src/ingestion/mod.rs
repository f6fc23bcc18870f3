//! Loading trip datasets.
//!
//! Most callers should use [`load_trips`] (from [`loader`]) which:
//!
//! - resolves the city to a CSV file through [`crate::config::ExplorerConfig`]
//! - ingests it into an in-memory [`crate::types::TripTable`]
//! - applies the month/weekday filters of a [`crate::selection::FilterSelection`]
//! - reports success/failure/alerts to any configured [`LoadObserver`]s

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{LoadOptions, load_trips};
pub use observability::{FileObserver, LoadContext, LoadObserver, LoadStats, LogObserver};
