use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use bikeshare_explorer::ExplorerError;
use bikeshare_explorer::config::{CityCatalog, ExplorerConfig};
use bikeshare_explorer::error::LoadSeverity;
use bikeshare_explorer::ingestion::{
    FileObserver, LoadContext, LoadObserver, LoadOptions, LoadStats, load_trips,
};
use bikeshare_explorer::selection::{City, FilterSelection, parse_day, parse_month};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &ExplorerError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &ExplorerError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn fixtures(catalog: &str) -> ExplorerConfig {
    ExplorerConfig {
        data_dir: PathBuf::from("tests/fixtures"),
        catalog: CityCatalog::from_json_str(catalog).unwrap(),
        ..Default::default()
    }
}

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("bikeshare-explorer-events-{nanos}.{ext}"))
}

#[test]
fn observer_receives_row_counts_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observers: vec![obs.clone()],
        ..Default::default()
    };
    let selection = FilterSelection {
        month: parse_month("june").unwrap(),
        day: parse_day("monday").unwrap(),
        ..FilterSelection::unfiltered(City::Chicago)
    };

    load_trips(&fixtures("{}"), &selection, &opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![LoadStats {
            rows_read: 7,
            dropped_by_month: 4,
            dropped_by_day: 2,
            rows_kept: 1,
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observers: vec![obs.clone()],
        alert_at_or_above: LoadSeverity::Critical,
    };
    let cfg = fixtures(r#"{"washington": "does_not_exist.csv"}"#);

    // Missing file -> Io error -> Critical
    let err = load_trips(&cfg, &FilterSelection::unfiltered(City::Washington), &opts).unwrap_err();
    assert_eq!(err.severity(), LoadSeverity::Critical);

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Critical]);
    assert_eq!(alerts, vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_bad_data() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observers: vec![obs.clone()],
        alert_at_or_above: LoadSeverity::Critical,
    };
    let cfg = fixtures(r#"{"chicago": "bad_start_time.csv"}"#);

    // Parse error -> Error severity (not Critical) -> should not alert
    let _ = load_trips(&cfg, &FilterSelection::unfiltered(City::Chicago), &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn file_observer_appends_json_events() {
    let log_path = tmp_file("jsonl");
    let opts = LoadOptions {
        observers: vec![Arc::new(FileObserver::create(&log_path).unwrap())],
        ..Default::default()
    };
    let cfg = fixtures(r#"{"new york city": "missing.csv"}"#);
    let june = FilterSelection {
        month: parse_month("june").unwrap(),
        ..FilterSelection::unfiltered(City::Chicago)
    };

    load_trips(&cfg, &june, &opts).unwrap();
    let _ = load_trips(&cfg, &FilterSelection::unfiltered(City::NewYorkCity), &opts).unwrap_err();

    let text = std::fs::read_to_string(&log_path).unwrap();
    let events: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events.len(), 3);

    assert_eq!(events[0]["event"], "loaded");
    assert_eq!(events[0]["city"], "chicago");
    assert_eq!(events[0]["month"], "june");
    assert_eq!(events[0]["day"], "all");
    assert_eq!(events[0]["rows_read"], 7);
    assert_eq!(events[0]["dropped_by_month"], 4);
    assert_eq!(events[0]["dropped_by_day"], 0);
    assert_eq!(events[0]["rows_kept"], 3);
    assert!(events[0].get("error").is_none());

    assert_eq!(events[1]["event"], "failed");
    assert_eq!(events[1]["city"], "new york city");
    assert_eq!(events[1]["severity"], "Critical");
    assert!(events[1].get("rows_read").is_none());
    assert_eq!(events[2]["event"], "alert");

    let _ = std::fs::remove_file(&log_path);
}

#[test]
fn file_observer_fails_fast_on_unwritable_path() {
    let dir = tmp_file("dir");
    std::fs::create_dir_all(&dir).unwrap();
    // A directory cannot be opened for appending.
    assert!(FileObserver::create(&dir).is_err());
    let _ = std::fs::remove_dir(&dir);
}
