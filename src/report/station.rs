//! Most popular stations and route.

use super::{Section, Stat, push_stat, text_mode};
use crate::types::{DataType, Field, TripTable, Value, columns};

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start: Stat<String>,
    pub end: Stat<String>,
    /// Most frequent "<start> -> <end>" pair.
    pub route: Stat<String>,
}

/// Route label for a start/end pair.
pub fn route_name(start: &str, end: &str) -> String {
    format!("{start} -> {end}")
}

/// Append the derived "route" column when both station columns exist.
///
/// Rows missing either station get a null route. Returns whether the table now has a route
/// column.
pub fn add_route_column(table: &mut TripTable) -> bool {
    let (Some(start_idx), Some(end_idx)) = (
        table.schema.index_of(columns::START_STATION),
        table.schema.index_of(columns::END_STATION),
    ) else {
        return false;
    };

    table.append_derived_column(Field::new(columns::ROUTE, DataType::Utf8), |row| {
        match (
            row.get(start_idx).and_then(Value::as_str),
            row.get(end_idx).and_then(Value::as_str),
        ) {
            (Some(start), Some(end)) => Value::Utf8(route_name(start, end)),
            _ => Value::Null,
        }
    });
    true
}

/// Compute station statistics, adding the route column first if possible.
pub fn stations(table: &mut TripTable) -> StationStats {
    let route = if add_route_column(table) {
        text_mode(table, columns::ROUTE)
    } else {
        Stat::Missing
    };
    StationStats {
        start: text_mode(table, columns::START_STATION),
        end: text_mode(table, columns::END_STATION),
        route,
    }
}

/// Station section. Adds the route column as a side effect, so later pages show it.
pub fn station_stats(table: &mut TripTable) -> Section {
    Section::timed("The Most Popular Stations and Trip", |lines| {
        let stats = stations(table);
        push_stat(lines, "Most commonly used Start station", stats.start);
        push_stat(lines, "Most commonly used End station", stats.end);
        push_stat(lines, "Most frequent route", stats.route);
    })
}
