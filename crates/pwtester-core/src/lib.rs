/// Password Tester Core — wordlist scanning, brute-force estimation, and data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// The egui frontend in `pwtester-gui` is one consumer; the scan engine is a
/// plain iterator, so a CLI or test harness can drive it just as easily.
///
/// # Modules
///
/// - [`model`] — Scan targets, per-source results, summaries, and formatting.
/// - [`scanner`] — Sequential wordlist scan engine and its background runner.
/// - [`estimator`] — Exact brute-force rank and time estimation.
/// - [`config`] — JSON/environment configuration.
/// - [`error`] — Typed errors shared by the modules above.
pub mod config;
pub mod error;
pub mod estimator;
pub mod model;
pub mod scanner;
