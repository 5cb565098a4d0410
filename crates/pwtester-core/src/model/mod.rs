/// Data model — scan targets, per-source results, estimates, and formatting.
///
/// Everything here is plain data. The scan engine produces [`SourceResult`]s,
/// the coordinator folds them into a [`ScanSummary`], and the estimator
/// returns an [`EstimateResult`].
pub mod estimate;
pub mod format;
pub mod result;
pub mod target;

pub use estimate::{EstimateResult, TimeBreakdown};
pub use result::{ScanSummary, SourceResult};
pub use target::{AttackMode, ScanTarget};
