/// Scan events and progress messages.
///
/// [`ScanEvent`] is what the engine iterator yields. [`ScanProgress`] wraps
/// those events for the trip across the crossbeam channel to the UI thread,
/// adding the two terminal messages.
use crate::model::SourceResult;
use compact_str::CompactString;
use std::time::Duration;

/// One item of the lazy event sequence produced by [`super::Scan`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// The engine is about to open source `index`.
    SourceStarted { index: usize, source: CompactString },
    /// A human-readable progress line.
    Progress(String),
    /// A source finished without cancellation.
    SourceCompleted(SourceResult),
}

/// Messages sent from the scan thread to the coordinator.
#[derive(Debug)]
pub enum ScanProgress {
    Event(ScanEvent),
    /// Every source was scanned.
    Complete { duration: Duration },
    /// The scan was cancelled; no result follows for the interrupted source.
    Cancelled,
}

/// `<source> Line <n> "<candidate>" - MATCH!` / `- NO MATCH`.
pub fn candidate_line(source: &str, line: u64, candidate: &str, is_match: bool) -> String {
    let verdict = if is_match { "MATCH!" } else { "NO MATCH" };
    format!("{source} Line {line} \"{candidate}\" - {verdict}")
}

/// Condensed-mode liveness line.
pub fn heartbeat_line(source: &str, line: u64) -> String {
    format!("{source} Line {line} ... still scanning")
}
