//! Total and mean trip duration.
//!
//! Unlike the other reporters this one does not tolerate an absent column: a trip file without
//! "Trip Duration" is an error.

use super::{Section, Stat};
use crate::error::{ExplorerError, ExplorerResult};
use crate::processing::{ReduceOp, reduce};
use crate::types::{TripTable, columns};

#[derive(Debug, Clone, PartialEq)]
pub struct TripDurations {
    /// Seconds.
    pub total: Stat<f64>,
    /// Seconds.
    pub mean: Stat<f64>,
}

/// Total and mean of "Trip Duration", or [`ExplorerError::MissingColumn`] without it.
pub fn trip_durations(table: &TripTable) -> ExplorerResult<TripDurations> {
    let numeric = |op| match reduce(table, columns::TRIP_DURATION, op) {
        None => Err(ExplorerError::MissingColumn {
            column: columns::TRIP_DURATION.to_string(),
        }),
        Some(value) => Ok(Stat::gated(true, value.as_f64())),
    };

    Ok(TripDurations {
        total: numeric(ReduceOp::Sum)?,
        mean: numeric(ReduceOp::Mean)?,
    })
}

fn seconds(label: &str, stat: Stat<f64>) -> String {
    match stat {
        Stat::Value(v) => format!("{label}: {v} seconds"),
        _ => format!("{label}: no data"),
    }
}

pub fn duration_stats(table: &TripTable) -> ExplorerResult<Section> {
    let mut outcome = Ok(());
    let section = Section::timed("Trip Duration", |lines| match trip_durations(table) {
        Ok(durations) => {
            lines.push(seconds("Total travel time", durations.total));
            lines.push(seconds("Mean travel time", durations.mean));
        }
        Err(e) => outcome = Err(e),
    });
    outcome.map(|()| section)
}
