//! Statistics reporters.
//!
//! Each reporter computes a typed result from a [`TripTable`] (useful on its own, and what the
//! tests check) and renders it into a timed [`Section`] for the terminal. A statistic whose
//! column is absent is [`Stat::Missing`] and produces no output line; a present column with no
//! usable values is [`Stat::NoData`].

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use std::fmt::Display;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::processing::mode;
use crate::types::TripTable;

pub use duration::{TripDurations, duration_stats, trip_durations};
pub use station::{StationStats, add_route_column, route_name, station_stats, stations};
pub use time::{TravelTimes, time_stats, travel_times};
pub use users::{BirthYears, NOT_DISCLOSED, UserStats, user_stats, users};

/// Outcome of one statistic.
#[derive(Debug, Clone, PartialEq)]
pub enum Stat<T> {
    /// The column the statistic needs is not in the table.
    Missing,
    /// The column exists but holds no non-null values.
    NoData,
    Value(T),
}

impl<T> Stat<T> {
    /// `Missing` unless `present`; then `NoData` or `Value` depending on `value`.
    pub fn gated(present: bool, value: Option<T>) -> Self {
        match (present, value) {
            (false, _) => Stat::Missing,
            (true, None) => Stat::NoData,
            (true, Some(v)) => Stat::Value(v),
        }
    }

    /// Transform the value, keeping `Missing` and `NoData` as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stat<U> {
        match self {
            Stat::Missing => Stat::Missing,
            Stat::NoData => Stat::NoData,
            Stat::Value(v) => Stat::Value(f(v)),
        }
    }

    pub fn as_ref(&self) -> Stat<&T> {
        match self {
            Stat::Missing => Stat::Missing,
            Stat::NoData => Stat::NoData,
            Stat::Value(v) => Stat::Value(v),
        }
    }

    /// Whether the column behind this statistic is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, Stat::Missing)
    }
}

/// A rendered, timed block of report output.
#[derive(Debug, Clone)]
pub struct Section {
    /// Shown as "Calculating <title>...".
    pub title: String,
    pub lines: Vec<String>,
    pub elapsed: Duration,
}

impl Section {
    /// Run `build` and record how long it took.
    pub fn timed(title: impl Into<String>, build: impl FnOnce(&mut Vec<String>)) -> Self {
        let started = Instant::now();
        let mut lines = Vec::new();
        build(&mut lines);
        Self {
            title: title.into(),
            lines,
            elapsed: started.elapsed(),
        }
    }

    /// Write the section as "Calculating ...", its lines, the timing and a rule.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\nCalculating {}...\n", self.title)?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "\nThis took {} seconds.", self.elapsed.as_secs_f64())?;
        writeln!(out, "{}", "-".repeat(40))
    }
}

/// `label` padded with dots to 40 columns, then the value.
pub(crate) fn dotted(label: &str, value: impl Display) -> String {
    format!("{label:.<40} {value}")
}

/// Append a dotted line for `stat`, or nothing when the column is missing.
pub(crate) fn push_stat<T: Display>(lines: &mut Vec<String>, label: &str, stat: Stat<T>) {
    match stat {
        Stat::Missing => {}
        Stat::NoData => lines.push(dotted(label, "no data")),
        Stat::Value(v) => lines.push(dotted(label, v)),
    }
}

/// `title` centered in a 78-wide rule of `fill`, preceded by a blank line.
pub(crate) fn banner(title: &str, fill: char) -> String {
    let padded = format!(" {title} ");
    let width = padded.chars().count();
    if width >= 78 {
        return format!("\n{padded}");
    }
    let left = (78 - width) / 2;
    let right = 78 - width - left;
    format!(
        "\n{}{padded}{}",
        fill.to_string().repeat(left),
        fill.to_string().repeat(right)
    )
}

/// Mode of a text column over its non-null values.
pub(crate) fn text_mode(table: &TripTable, column: &str) -> Stat<String> {
    match table.column(column) {
        None => Stat::Missing,
        Some(values) => Stat::gated(
            true,
            mode(values.filter_map(|v| v.as_str()).map(str::to_owned)),
        ),
    }
}
