/// Scanner module — sequential wordlist scanning with cancellation.
///
/// Two layers:
/// - [`Scan`] is the engine: a lazy, single-threaded iterator of
///   [`ScanEvent`]s that can be collected directly in tests.
/// - [`start_scan`] runs a `Scan` on a background thread, forwards its events
///   over a bounded crossbeam channel, and inserts the human-paced pause
///   between sources.
///
/// The cancel flag and the [`ScanState`] are the only state shared between
/// the coordinator and the worker; everything else travels through the
/// channel.
pub mod cancel;
pub mod engine;
pub mod progress;
pub mod sources;

pub use cancel::CancellationToken;
pub use engine::Scan;
pub use progress::{ScanEvent, ScanProgress};

use crate::config::AppConfig;
use crate::model::ScanTarget;
use crossbeam_channel::{Receiver, Sender};
use parking_lot::RwLock;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

/// Maximum number of progress messages that may queue up in the channel.
///
/// The UI drains this channel once per frame. In cinematic mode the worker
/// produces roughly one line per millisecond, so 4 096 messages is a few
/// seconds of headroom before back-pressure briefly stalls the scanner.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Granularity of the inter-source pause; bounds cancel latency while pausing.
const PAUSE_SLICE: Duration = Duration::from_millis(50);

/// Lifecycle of one scan invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning { index: usize },
    Aborted,
    Completed,
}

impl ScanState {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Idle | Self::Scanning { .. })
    }
}

/// Tuning knobs for the engine and the runner.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Sleep after each verbose progress line.
    pub verbose_delay: Duration,
    /// Pause between two sources (runner only).
    pub source_pause: Duration,
    /// Sources with at most this many lines are scanned verbosely.
    pub verbose_line_threshold: usize,
    /// Condensed mode emits a heartbeat every this many lines.
    pub heartbeat_interval: u64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbose_delay: Duration::ZERO,
            source_pause: Duration::ZERO,
            verbose_line_threshold: 50_000,
            heartbeat_interval: 1_000,
        }
    }
}

impl ScanOptions {
    /// Options for one scan. The pacing delay only applies in cinematic mode.
    pub fn from_config(config: &AppConfig, cinematic: bool) -> Self {
        Self {
            verbose_delay: if cinematic {
                Duration::from_millis(config.cinematic_delay_ms)
            } else {
                Duration::ZERO
            },
            source_pause: Duration::from_millis(config.source_pause_ms),
            verbose_line_threshold: config.verbose_line_threshold,
            heartbeat_interval: config.heartbeat_interval,
        }
    }
}

/// Handle to a running or completed scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    cancel: CancellationToken,
    state: Arc<RwLock<ScanState>>,
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Worker's current state, as last published.
    pub fn state(&self) -> ScanState {
        *self.state.read()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Start a new scan on a background thread.
///
/// Returns a `ScanHandle` for receiving progress and requesting
/// cancellation. The last message on the channel is always
/// [`ScanProgress::Complete`] or [`ScanProgress::Cancelled`].
pub fn start_scan(target: ScanTarget, options: ScanOptions) -> io::Result<ScanHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel = CancellationToken::new();
    let state = Arc::new(RwLock::new(ScanState::Idle));

    let worker_cancel = cancel.clone();
    let worker_state = state.clone();
    let thread = thread::Builder::new()
        .name("pwtester-scanner".into())
        .spawn(move || run_scan(target, options, worker_cancel, worker_state, progress_tx))?;

    Ok(ScanHandle {
        progress_rx,
        cancel,
        state,
        _thread: Some(thread),
    })
}

fn run_scan(
    target: ScanTarget,
    options: ScanOptions,
    cancel: CancellationToken,
    state: Arc<RwLock<ScanState>>,
    progress_tx: Sender<ScanProgress>,
) {
    let start = Instant::now();
    info!(
        "Starting scan of {} wordlists (cinematic: {})",
        target.sources().len(),
        target.cinematic()
    );

    let pause = options.source_pause;
    let mut scan = Scan::new(target, options, cancel.clone());

    while let Some(event) = scan.next() {
        *state.write() = scan.state();
        let pause_after =
            matches!(event, ScanEvent::SourceCompleted(_)) && scan.has_remaining_sources();

        if progress_tx.send(ScanProgress::Event(event)).is_err() {
            // Receiver dropped: nobody is listening, stop reading files.
            cancel.cancel();
            break;
        }
        if pause_after {
            pause_between_sources(pause, &cancel);
        }
    }

    let finished = scan.state() == ScanState::Completed;
    *state.write() = if finished {
        ScanState::Completed
    } else {
        ScanState::Aborted
    };

    if finished {
        let duration = start.elapsed();
        info!("Scan finished in {duration:?}");
        let _ = progress_tx.send(ScanProgress::Complete { duration });
    } else {
        info!("Scan aborted after {:?}", start.elapsed());
        let _ = progress_tx.send(ScanProgress::Cancelled);
    }
}

/// Sleep for `pause`, waking early if the scan is cancelled.
fn pause_between_sources(pause: Duration, cancel: &CancellationToken) {
    let deadline = Instant::now() + pause;
    while !cancel.is_cancelled() {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(PAUSE_SLICE.min(deadline - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_config_only_pace_cinematic() {
        let config = AppConfig::default();
        let plain = ScanOptions::from_config(&config, false);
        assert_eq!(plain.verbose_delay, Duration::ZERO);
        assert_eq!(plain.source_pause, Duration::from_secs(3));

        let cinematic = ScanOptions::from_config(&config, true);
        assert_eq!(cinematic.verbose_delay, Duration::from_millis(1));
    }

    #[test]
    fn pause_returns_early_when_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let t = Instant::now();
        pause_between_sources(Duration::from_secs(10), &cancel);
        assert!(t.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn running_states() {
        assert!(ScanState::Idle.is_running());
        assert!(ScanState::Scanning { index: 3 }.is_running());
        assert!(!ScanState::Aborted.is_running());
        assert!(!ScanState::Completed.is_running());
    }
}
