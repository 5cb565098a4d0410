/// Application state management.
///
/// `AppState` is the coordinator: it owns the user's inputs, starts either a
/// dictionary scan or a brute-force estimate, and folds scan messages into
/// the console, the per-source results, and the running [`ScanSummary`].
/// The scan thread communicates via a channel; state updates happen in
/// `process_scan_messages()` which runs once per frame.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use pwtester_core::config::AppConfig;
use pwtester_core::estimator;
use pwtester_core::model::format::format_elapsed;
use pwtester_core::model::{AttackMode, EstimateResult, ScanSummary, ScanTarget, SourceResult};
use pwtester_core::scanner::progress::{ScanEvent, ScanProgress};
use pwtester_core::scanner::sources::discover_wordlists;
use pwtester_core::scanner::{ScanHandle, ScanOptions};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Nothing has run yet.
    Idle,
    /// A dictionary scan is in progress.
    Scanning,
    /// A scan or estimate has finished; results are on screen.
    Results,
}

/// Tone of the result label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Neutral,
    Weak,
    Strong,
    Error,
}

/// First console line, shown before any check runs.
pub const CONSOLE_BANNER: &str = "Password Tester Console Initialized...";

/// Maximum scan messages drained from the channel per frame.
///
/// Cinematic mode produces roughly one line per millisecond; at 60 fps that
/// is well under this budget, while a backlog after the window was hidden
/// still cannot stall a frame for long.
const MAX_MESSAGES_PER_FRAME: usize = 2_000;

/// Console scrollback. Older lines are dropped first.
pub const MAX_CONSOLE_LINES: usize = 20_000;

/// All application state.
pub struct AppState {
    // ── Inputs ─────────────────────────────────────────
    pub password: String,
    pub mode: AttackMode,
    pub cinematic: bool,
    pub config: AppConfig,

    // ── Scan ───────────────────────────────────────────
    pub phase: AppPhase,
    pub scan_handle: Option<ScanHandle>,
    pub summary: ScanSummary,
    pub source_results: Vec<SourceResult>,
    /// Source currently being scanned, for the status bar.
    pub current_source: Option<CompactString>,
    pub scan_started_at: Option<DateTime<Local>>,
    pub scan_duration: Option<Duration>,
    /// True if the most recent scan was cancelled.
    pub scan_was_cancelled: bool,

    // ── Brute force ────────────────────────────────────
    pub estimate: Option<EstimateResult>,

    // ── Output ─────────────────────────────────────────
    pub console: VecDeque<String>,
    pub result_label: String,
    pub verdict: Verdict,

    // ── Theme ──────────────────────────────────────────
    /// `false` = light mode (default), `true` = dark mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut console = VecDeque::new();
        console.push_back(CONSOLE_BANNER.to_string());
        Self {
            password: String::new(),
            mode: AttackMode::Dictionary,
            cinematic: false,
            config,
            phase: AppPhase::Idle,
            scan_handle: None,
            summary: ScanSummary::default(),
            source_results: Vec::new(),
            current_source: None,
            scan_started_at: None,
            scan_duration: None,
            scan_was_cancelled: false,
            estimate: None,
            console,
            result_label: String::new(),
            verdict: Verdict::Neutral,
            dark_mode: false,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == AppPhase::Scanning
    }

    /// Handle the "Check Password" action for the selected mode.
    ///
    /// Ignored while a scan is running; the UI disables the button then,
    /// so a second scan can only start after the first one is cancelled.
    pub fn check_password(&mut self) {
        if self.is_scanning() {
            return;
        }
        match self.mode {
            AttackMode::Dictionary => self.start_dictionary_scan(),
            AttackMode::BruteForce => self.run_brute_force(),
        }
    }

    /// Enumerate the configured wordlist directory and scan every file in it.
    pub fn start_dictionary_scan(&mut self) {
        match discover_wordlists(&self.config.wordlists_dir) {
            Ok(sources) => self.start_scan(sources),
            Err(e) => {
                tracing::warn!("{e}");
                self.push_line(format!("ERROR: {e}"));
                self.set_result(Verdict::Error, "No wordlists available.");
                self.phase = AppPhase::Results;
            }
        }
    }

    /// Start a dictionary scan of `sources`, cancelling any running scan first.
    pub fn start_scan(&mut self, sources: Vec<PathBuf>) {
        self.cancel_scan();
        self.scan_handle = None;

        let password = self.password.trim().to_owned();
        self.phase = AppPhase::Scanning;
        self.summary = ScanSummary::default();
        self.source_results.clear();
        self.current_source = None;
        self.scan_started_at = Some(Local::now());
        self.scan_duration = None;
        self.scan_was_cancelled = false;
        self.estimate = None;

        self.push_blank();
        self.push_line(format!("=== Starting scan for: '{password}' ==="));
        self.set_result(Verdict::Neutral, "Scanning...");

        let target = ScanTarget::new(&password, sources, self.cinematic);
        let options = ScanOptions::from_config(&self.config, self.cinematic);
        match pwtester_core::scanner::start_scan(target, options) {
            Ok(handle) => self.scan_handle = Some(handle),
            Err(e) => {
                tracing::error!("Failed to start scan thread: {e}");
                self.push_line(format!("ERROR: could not start scan: {e}"));
                self.set_result(Verdict::Error, "Scan failed to start.");
                self.phase = AppPhase::Results;
            }
        }
    }

    /// Cancel any running scan.
    pub fn cancel_scan(&mut self) {
        if let Some(ref handle) = self.scan_handle {
            handle.cancel();
        }
    }

    /// Compute and display the brute-force estimate for the current password.
    pub fn run_brute_force(&mut self) {
        let password = self.password.trim().to_owned();
        let charset = self.config.charset_for(&password);

        // The status bar describes the latest check only.
        self.summary = ScanSummary::default();
        self.source_results.clear();
        self.scan_started_at = None;
        self.scan_duration = None;
        self.scan_was_cancelled = false;

        self.push_blank();
        self.push_line(format!("=== Brute-force estimate for: '{password}' ==="));

        match estimator::estimate(&password, &charset, self.config.guess_rate) {
            Ok(result) => {
                for line in result.report_lines() {
                    self.push_line(line);
                }
                let label = format!("Estimated brute-force time: {}", result.breakdown());
                self.set_result(Verdict::Neutral, label);
                self.estimate = Some(result);
            }
            Err(e) => {
                tracing::warn!("Estimate failed: {e}");
                self.push_line(format!("ERROR: {e}"));
                self.set_result(Verdict::Error, format!("Cannot estimate: {e}"));
                self.estimate = None;
            }
        }
        self.phase = AppPhase::Results;
    }

    /// Process pending scan progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_scan_messages(&mut self) -> bool {
        let mut repaint = false;

        // Drain available messages without blocking, subject to a per-frame
        // budget so a large backlog cannot stall the render thread.
        for _ in 0..MAX_MESSAGES_PER_FRAME {
            let msg = match self.scan_handle.as_ref().map(|h| h.progress_rx.try_recv()) {
                Some(Ok(m)) => m,
                _ => break,
            };
            repaint = true;
            match msg {
                ScanProgress::Event(ScanEvent::SourceStarted { source, .. }) => {
                    self.push_blank();
                    self.push_line(format!("--- Checking {source} ---"));
                    self.current_source = Some(source);
                }
                ScanProgress::Event(ScanEvent::Progress(line)) => {
                    self.push_line(line);
                }
                ScanProgress::Event(ScanEvent::SourceCompleted(result)) => {
                    self.record_source(result);
                }
                ScanProgress::Complete { duration } => {
                    self.scan_duration = Some(duration);
                    self.finish_scan();
                    return true;
                }
                ScanProgress::Cancelled => {
                    self.scan_was_cancelled = true;
                    self.push_blank();
                    self.push_line("=== Scan cancelled ===".to_string());
                    self.set_result(
                        Verdict::Neutral,
                        format!(
                            "Scan cancelled after {} of the lists.",
                            self.summary.sources_scanned
                        ),
                    );
                    self.phase = AppPhase::Results;
                    self.current_source = None;
                    self.scan_handle = None;
                    return true;
                }
            }
        }

        repaint
    }

    fn record_source(&mut self, result: SourceResult) {
        self.summary.record(&result);
        let elapsed = format_elapsed(result.elapsed_secs);
        match result.matched_line {
            Some(line) => {
                self.push_blank();
                self.push_line(format!(
                    "*** Match found in {}, line {line} (time {elapsed}).",
                    result.source
                ));
                self.set_result(Verdict::Weak, format!("Weak: found in {}", result.source));
            }
            None => self.push_line(format!(
                "Completed {} with no match. (time {elapsed})",
                result.source
            )),
        }
        self.source_results.push(result);
    }

    fn finish_scan(&mut self) {
        self.push_blank();
        self.push_line(self.summary.finished_line());
        let verdict = if self.summary.is_weak() {
            Verdict::Weak
        } else {
            Verdict::Strong
        };
        self.set_result(verdict, self.summary.verdict());
        self.phase = AppPhase::Results;
        self.current_source = None;
        self.scan_handle = None;
    }

    fn set_result(&mut self, verdict: Verdict, label: impl Into<String>) {
        self.verdict = verdict;
        self.result_label = label.into();
    }

    fn push_blank(&mut self) {
        self.push_line(String::new());
    }

    /// Append a console line, evicting the oldest past [`MAX_CONSOLE_LINES`].
    pub fn push_line(&mut self, line: String) {
        if self.console.len() >= MAX_CONSOLE_LINES {
            self.console.pop_front();
        }
        self.console.push_back(line);
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
        self.console.push_back(CONSOLE_BANNER.to_string());
    }
}
