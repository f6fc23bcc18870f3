//! Dataset loader: city -> file -> parsed table -> month/day filtered table.

use std::fmt;
use std::sync::Arc;

use crate::config::ExplorerConfig;
use crate::error::{ExplorerResult, LoadSeverity};
use crate::processing::apply_selection;
use crate::selection::FilterSelection;
use crate::types::TripTable;

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadStats};

/// Options controlling how loads are reported.
#[derive(Clone)]
pub struct LoadOptions {
    /// Observers notified of every load, in order.
    pub observers: Vec<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observers", &self.observers.len())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load the dataset for `selection.city` and apply its month and weekday filters.
///
/// The returned table may be empty. Any unparseable "Start Time" fails the whole load.
///
/// Each observer in `options` receives:
///
/// - `on_success` with the rows read, the rows each filter dropped, and the rows kept
/// - `on_failure` on failure, with the error's severity
/// - `on_alert` on failure when that severity is >= `options.alert_at_or_above`
pub fn load_trips(
    config: &ExplorerConfig,
    selection: &FilterSelection,
    options: &LoadOptions,
) -> ExplorerResult<TripTable> {
    let ctx = LoadContext {
        selection: *selection,
        path: config.dataset_path(selection.city)?,
    };

    let result = csv::ingest_csv_from_path(&ctx.path).map(|table| {
        let filtered = apply_selection(&table, selection);
        let stats = LoadStats {
            rows_read: table.row_count(),
            dropped_by_month: filtered.dropped_by_month,
            dropped_by_day: filtered.dropped_by_day,
            rows_kept: filtered.table.row_count(),
        };
        log::debug!(
            "filtered {} by {}/{}: {} of {} rows kept",
            selection.city,
            selection.month,
            selection.day,
            stats.rows_kept,
            stats.rows_read
        );
        (filtered.table, stats)
    });

    for obs in &options.observers {
        match &result {
            Ok((_, stats)) => obs.on_success(&ctx, *stats),
            Err(e) => {
                let sev = e.severity();
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(table, _)| table)
}
