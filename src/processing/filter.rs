//! Row filtering for [`crate::types::TripTable`].

use chrono::{Datelike, Month, Weekday};

use crate::selection::{DayFilter, FilterSelection, MonthFilter, weekday_name};
use crate::types::{TripTable, Value, columns};

/// Returns a new [`TripTable`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`TripTable::filter_rows`].
pub fn filter<F>(table: &TripTable, predicate: F) -> TripTable
where
    F: FnMut(&[Value]) -> bool,
{
    table.filter_rows(predicate)
}

/// Keep rows whose start time falls in `month`.
pub fn filter_by_month(table: &TripTable, month: Month) -> TripTable {
    let Some(idx) = table.schema.index_of(columns::START_TIME) else {
        return table.filter_rows(|_| false);
    };
    let wanted = month.number_from_month();
    filter(table, |row| {
        matches!(row.get(idx), Some(Value::Timestamp(ts)) if ts.month() == wanted)
    })
}

/// Keep rows whose start time falls on `day`.
///
/// Matching is by weekday name, case-insensitively.
pub fn filter_by_weekday(table: &TripTable, day: Weekday) -> TripTable {
    let Some(idx) = table.schema.index_of(columns::START_TIME) else {
        return table.filter_rows(|_| false);
    };
    let wanted = weekday_name(day);
    filter(table, |row| match row.get(idx) {
        Some(Value::Timestamp(ts)) => weekday_name(ts.weekday()).eq_ignore_ascii_case(wanted),
        _ => false,
    })
}

/// Result of [`apply_selection`]: the kept rows plus how many rows each restriction removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered {
    pub table: TripTable,
    pub dropped_by_month: usize,
    pub dropped_by_day: usize,
}

/// Apply the month then weekday restriction of `selection`; `All` leaves rows untouched.
pub fn apply_selection(table: &TripTable, selection: &FilterSelection) -> Filtered {
    let by_month = match selection.month {
        MonthFilter::All => table.clone(),
        MonthFilter::Only(month) => filter_by_month(table, month),
    };
    let dropped_by_month = table.row_count() - by_month.row_count();

    let kept = match selection.day {
        DayFilter::All => by_month,
        DayFilter::Only(day) => filter_by_weekday(&by_month, day),
    };
    Filtered {
        dropped_by_month,
        dropped_by_day: table.row_count() - dropped_by_month - kept.row_count(),
        table: kept,
    }
}
