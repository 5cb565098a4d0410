/// End-to-end scanner integration tests.
///
/// These tests drive the real background runner (`start_scan`) against real
/// wordlist files in a temporary directory, draining the crossbeam channel
/// the same way the GUI does.
use pwtester_core::model::{ScanTarget, SourceResult};
use pwtester_core::scanner::progress::{ScanEvent, ScanProgress};
use pwtester_core::scanner::sources::discover_wordlists;
use pwtester_core::scanner::{start_scan, ScanHandle, ScanOptions, ScanState};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_list(dir: &Path, name: &str, words: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, words.join("\n")).unwrap();
    path
}

/// Build a reproducible wordlist directory:
///
/// ```text
/// root/
///   01-common.txt   123456, password, qwerty
///   02-names.txt    alice, bob, correct, dave
///   03-misc.txt     zebra, banana
/// ```
fn build_wordlists(root: &Path) {
    write_list(root, "01-common.txt", &["123456", "password", "qwerty"]);
    write_list(root, "02-names.txt", &["alice", "bob", "correct", "dave"]);
    write_list(root, "03-misc.txt", &["zebra", "banana"]);
}

/// Outcome of draining a handle until its terminal message.
struct Drained {
    events: Vec<ScanEvent>,
    cancelled: bool,
}

impl Drained {
    fn results(&self) -> Vec<&SourceResult> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ScanEvent::SourceCompleted(r) => Some(r),
                _ => None,
            })
            .collect()
    }
}

/// Drain all messages, panicking after a generous timeout.
fn drain(handle: &ScanHandle) -> Drained {
    let deadline = Instant::now() + Duration::from_secs(30);
    let mut events = Vec::new();
    loop {
        assert!(Instant::now() < deadline, "scan did not finish within 30 seconds");
        match handle.progress_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(ScanProgress::Event(e)) => events.push(e),
            Ok(ScanProgress::Complete { .. }) => {
                return Drained {
                    events,
                    cancelled: false,
                }
            }
            Ok(ScanProgress::Cancelled) => {
                return Drained {
                    events,
                    cancelled: true,
                }
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => continue,
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                panic!("scanner channel disconnected before a terminal message")
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A password present in one list is reported for that list only.
#[test]
fn runner_reports_match_per_source() {
    let tmp = TempDir::new().unwrap();
    build_wordlists(tmp.path());
    let sources = discover_wordlists(tmp.path()).unwrap();

    let handle = start_scan(
        ScanTarget::new("correct", sources, false),
        ScanOptions::default(),
    )
    .unwrap();
    let drained = drain(&handle);

    assert!(!drained.cancelled);
    let results = drained.results();
    assert_eq!(results.len(), 3);
    assert!(!results[0].matched);
    assert!(results[1].matched);
    assert_eq!(results[1].matched_line, Some(3));
    assert!(!results[2].matched);
    assert_eq!(handle.state(), ScanState::Completed);
}

/// Progress lines for one source never mention lines after the match.
#[test]
fn runner_stops_source_at_first_match() {
    let tmp = TempDir::new().unwrap();
    let list = write_list(tmp.path(), "dup.txt", &["a", "pw", "b", "pw"]);

    let handle = start_scan(ScanTarget::new("pw", vec![list], false), ScanOptions::default())
        .unwrap();
    let drained = drain(&handle);

    let lines: Vec<&str> = drained
        .events
        .iter()
        .filter_map(|e| match e {
            ScanEvent::Progress(l) => Some(l.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec!["dup.txt Line 1 \"a\" - NO MATCH", "dup.txt Line 2 \"pw\" - MATCH!"]
    );
    assert_eq!(drained.results()[0].matched_line, Some(2));
}

/// Cancelling during the inter-source pause leaves the later sources unscanned.
#[test]
fn cancel_during_pause_skips_remaining_sources() {
    let tmp = TempDir::new().unwrap();
    build_wordlists(tmp.path());
    let sources = discover_wordlists(tmp.path()).unwrap();

    let options = ScanOptions {
        source_pause: Duration::from_secs(20),
        ..ScanOptions::default()
    };
    let handle = start_scan(ScanTarget::new("nothing", sources, false), options).unwrap();

    // Wait for the first result, then cancel while the worker is pausing.
    let deadline = Instant::now() + Duration::from_secs(30);
    let mut first = None;
    while first.is_none() {
        assert!(Instant::now() < deadline, "first source never completed");
        if let Ok(ScanProgress::Event(ScanEvent::SourceCompleted(r))) =
            handle.progress_rx.recv_timeout(Duration::from_millis(100))
        {
            first = Some(r);
        }
    }
    handle.cancel();
    assert!(handle.is_cancelled());

    let started = Instant::now();
    let rest = drain(&handle);
    assert!(rest.cancelled);
    assert!(rest.results().is_empty(), "no results after cancellation");
    assert!(started.elapsed() < Duration::from_secs(10), "pause ignored cancel");
    assert_eq!(handle.state(), ScanState::Aborted);
    assert_eq!(first.unwrap().source, "01-common.txt");
}

/// A handle cancelled immediately finishes with a terminal message either way.
#[test]
fn immediate_cancel_terminates() {
    let tmp = TempDir::new().unwrap();
    build_wordlists(tmp.path());
    let sources = discover_wordlists(tmp.path()).unwrap();

    let handle = start_scan(ScanTarget::new("x", sources, true), ScanOptions::default()).unwrap();
    handle.cancel();
    let drained = drain(&handle);
    // The worker may have finished a source before it saw the flag.
    assert!(drained.results().len() <= 3);
    assert!(!handle.state().is_running());
}

/// Unavailable sources are reported inline and the scan carries on.
#[test]
fn missing_source_does_not_stop_scan() {
    let tmp = TempDir::new().unwrap();
    let good = write_list(tmp.path(), "good.txt", &["hunter2"]);
    let sources = vec![tmp.path().join("missing.txt"), good];

    let handle = start_scan(ScanTarget::new("hunter2", sources, false), ScanOptions::default())
        .unwrap();
    let drained = drain(&handle);

    assert!(!drained.cancelled);
    let results = drained.results();
    assert_eq!(results.len(), 2);
    assert!(!results[0].matched);
    assert_eq!(results[0].elapsed_secs, 0.0);
    assert!(results[1].matched);
    assert!(drained.events.iter().any(|e| matches!(
        e,
        ScanEvent::Progress(l) if l.starts_with("ERROR: Wordlist not found:")
    )));
}

/// Large sources switch to heartbeat output at the default thresholds.
#[test]
fn large_source_uses_condensed_output() {
    let tmp = TempDir::new().unwrap();
    let words: Vec<String> = (0..50_001).map(|i| format!("word{i}")).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let list = write_list(tmp.path(), "huge.txt", &refs);

    let handle = start_scan(ScanTarget::new("absent", vec![list], false), ScanOptions::default())
        .unwrap();
    let drained = drain(&handle);

    let progress: Vec<&ScanEvent> = drained
        .events
        .iter()
        .filter(|e| matches!(e, ScanEvent::Progress(_)))
        .collect();
    // One heartbeat per 1 000 lines: 1 000, 2 000, ... 50 000.
    assert_eq!(progress.len(), 50);
    assert_eq!(
        progress[0],
        &ScanEvent::Progress("huge.txt Line 1000 ... still scanning".into())
    );
}
