//! Most frequent times of travel.

use chrono::{Datelike, Month, Timelike, Weekday};

use super::{Section, Stat, banner, push_stat};
use crate::processing::mode;
use crate::selection::weekday_name;
use crate::types::{TripTable, columns};

/// Most common start month, weekday and hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelTimes {
    pub month: Stat<Month>,
    pub weekday: Stat<Weekday>,
    /// Start hour, 0 to 23.
    pub hour: Stat<u32>,
}

/// Modes of the "Start Time" column, ties going to the earliest row.
pub fn travel_times(table: &TripTable) -> TravelTimes {
    let present = table.schema.has_column(columns::START_TIME);
    let starts = || {
        table
            .column(columns::START_TIME)
            .into_iter()
            .flatten()
            .filter_map(|v| v.as_timestamp())
    };

    TravelTimes {
        month: Stat::gated(present, mode(starts().map(|ts| ts.month())))
            .map(|m| Month::try_from(m as u8).unwrap_or(Month::January)),
        weekday: Stat::gated(present, mode(starts().map(|ts| ts.weekday()))),
        hour: Stat::gated(present, mode(starts().map(|ts| ts.hour()))),
    }
}

/// Travel-time section; empty when the table has no "Start Time".
pub fn time_stats(table: &TripTable) -> Section {
    Section::timed("The Most Frequent Times of Travel", |lines| {
        let times = travel_times(table);
        if times.month.is_missing() {
            return;
        }
        lines.push(banner("Calculating The Most Frequent Times of Travel", '='));
        push_stat(lines, "Most common Month", times.month.map(|m| m.name()));
        push_stat(lines, "Most common day of the week", times.weekday.map(weekday_name));
        push_stat(lines, "Most common Start Hour", times.hour);
    })
}
