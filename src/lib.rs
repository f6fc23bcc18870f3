//! `bikeshare-explorer` loads US bike-share trip files (Chicago, New York City, Washington) into
//! an in-memory [`types::TripTable`], narrows them by month and weekday, and reports descriptive
//! statistics: popular travel times, popular stations and routes, trip durations and rider
//! demographics.
//!
//! The `bikeshare` binary wraps this in an interactive prompt loop; every stage is also usable
//! headless.
//!
//! ## Pipeline
//!
//! 1. [`selection`]: validated (city, month, weekday) choice
//! 2. [`ingestion`]: city -> CSV -> [`types::TripTable`] -> month/weekday filter
//! 3. [`report`]: time, station, duration and user statistics, each timed
//! 4. [`pager`]: raw rows, five at a time
//!
//! Trip files do not all carry the same columns (Washington has no gender or birth year, for
//! example). The table schema follows the file header and reporters skip statistics whose column
//! is absent, except trip duration, which every file must have.
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_explorer::config::ExplorerConfig;
//! use bikeshare_explorer::ingestion::{load_trips, LoadOptions};
//! use bikeshare_explorer::report::{travel_times, Stat};
//! use bikeshare_explorer::selection::{parse_month, City, DayFilter, FilterSelection};
//!
//! # fn main() -> Result<(), bikeshare_explorer::ExplorerError> {
//! let selection = FilterSelection {
//!     city: City::Chicago,
//!     month: parse_month("june").unwrap(),
//!     day: DayFilter::All,
//! };
//! let table = load_trips(&ExplorerConfig::default(), &selection, &LoadOptions::default())?;
//! if let Stat::Value(hour) = travel_times(&table).hour {
//!     println!("busiest hour in June: {hour}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: data directory, city-to-file catalog, page size
//! - [`error`]: the crate error type and severity classification
//! - [`processing`]: filters, reductions, mode and value counts
//! - [`prompt`], [`session`]: the interactive surface

pub mod config;
pub mod error;
pub mod ingestion;
pub mod pager;
pub mod processing;
pub mod prompt;
pub mod report;
pub mod selection;
pub mod session;
pub mod types;

pub use error::{ExplorerError, ExplorerResult};
