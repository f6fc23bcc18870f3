//! Load events: what was asked for, what the file held, and what the filters removed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::error::{ExplorerError, ExplorerResult, LoadSeverity};
use crate::selection::{City, FilterSelection};

/// The request behind one load.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub selection: FilterSelection,
    /// Resolved dataset path.
    pub path: PathBuf,
}

/// Row counts reported on a successful load.
///
/// `rows_read == dropped_by_month + dropped_by_day + rows_kept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Rows read from the file.
    pub rows_read: usize,
    /// Rows outside the selected month.
    pub dropped_by_month: usize,
    /// Rows in the selected month but not on the selected weekday.
    pub dropped_by_day: usize,
    /// Rows handed to the reports.
    pub rows_kept: usize,
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &ExplorerError) {}

    /// Called, after [`Self::on_failure`], when the failure meets the alert threshold.
    fn on_alert(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &ExplorerError) {}
}

/// Forwards load events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        let s = &ctx.selection;
        log::info!(
            "loaded {} month={} day={}: {} rows read, {} outside month, {} outside day, {} kept",
            s.city,
            s.month,
            s.day,
            stats.rows_read,
            stats.dropped_by_month,
            stats.dropped_by_day,
            stats.rows_kept
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExplorerError) {
        log::warn!(
            "[{severity:?}] could not load {} from {}: {error}",
            ctx.selection.city,
            ctx.path.display()
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExplorerError) {
        log::error!(
            "[ALERT][{severity:?}] {} is unavailable ({}): {error}",
            ctx.selection.city,
            ctx.path.display()
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum EventKind {
    Loaded,
    Failed,
    Alert,
}

/// One line of the event log.
#[derive(Debug, Serialize)]
struct LoadEvent<'a> {
    at: String,
    event: EventKind,
    city: City,
    month: String,
    day: String,
    path: &'a Path,
    #[serde(flatten)]
    stats: Option<LoadStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<LoadSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> LoadEvent<'a> {
    fn new(event: EventKind, ctx: &'a LoadContext) -> Self {
        Self {
            at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            event,
            city: ctx.selection.city,
            month: ctx.selection.month.to_string(),
            day: ctx.selection.day.to_string(),
            path: &ctx.path,
            stats: None,
            severity: None,
            error: None,
        }
    }

    fn failed(event: EventKind, ctx: &'a LoadContext, severity: LoadSeverity, error: &ExplorerError) -> Self {
        Self {
            severity: Some(severity),
            error: Some(error.to_string()),
            ..Self::new(event, ctx)
        }
    }
}

/// Appends one JSON object per load event to a file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileObserver {
    /// Open `path` for appending, creating it if needed.
    pub fn create(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    fn record(&self, event: &LoadEvent<'_>) {
        let written = serde_json::to_string(event)
            .map_err(ExplorerError::from)
            .and_then(|line| {
                let mut file = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                writeln!(file, "{line}").map_err(ExplorerError::from)
            });
        // Write failures are logged and dropped.
        if let Err(e) = written {
            log::warn!("could not append to event log {}: {e}", self.path.display());
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.record(&LoadEvent {
            stats: Some(stats),
            ..LoadEvent::new(EventKind::Loaded, ctx)
        });
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExplorerError) {
        self.record(&LoadEvent::failed(EventKind::Failed, ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExplorerError) {
        self.record(&LoadEvent::failed(EventKind::Alert, ctx, severity, error));
    }
}
