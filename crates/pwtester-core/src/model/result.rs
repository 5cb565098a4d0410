/// Per-source scan outcomes and the running summary built from them.
use compact_str::CompactString;

/// Outcome of scanning a single wordlist.
///
/// `matched_line` is `Some` exactly when `matched` is true; use the
/// constructors rather than building the struct by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceResult {
    /// File name of the source (not the full path).
    pub source: CompactString,
    pub matched: bool,
    /// 1-based line number of the match.
    pub matched_line: Option<u64>,
    /// Wall-clock seconds spent on this source alone.
    pub elapsed_secs: f64,
}

impl SourceResult {
    pub fn matched(source: CompactString, line: u64, elapsed_secs: f64) -> Self {
        debug_assert!(line >= 1, "line numbers are 1-based");
        Self {
            source,
            matched: true,
            matched_line: Some(line),
            elapsed_secs: elapsed_secs.max(0.0),
        }
    }

    pub fn unmatched(source: CompactString, elapsed_secs: f64) -> Self {
        Self {
            source,
            matched: false,
            matched_line: None,
            elapsed_secs: elapsed_secs.max(0.0),
        }
    }

    /// Result for a source that could not be opened.
    pub fn unavailable(source: CompactString) -> Self {
        Self::unmatched(source, 0.0)
    }
}

/// Running totals across all completed sources.
///
/// Only the coordinator mutates this, once per [`SourceResult`] it receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub sources_scanned: usize,
    pub sources_with_match: usize,
}

impl ScanSummary {
    pub fn record(&mut self, result: &SourceResult) {
        self.sources_scanned += 1;
        if result.matched {
            self.sources_with_match += 1;
        }
    }

    pub fn is_weak(&self) -> bool {
        self.sources_with_match > 0
    }

    /// Final one-line verdict shown in the result label.
    pub fn verdict(&self) -> String {
        if self.is_weak() {
            format!(
                "Weak password (found in {}/{} lists).",
                self.sources_with_match, self.sources_scanned
            )
        } else {
            "Not found in any wordlist.".to_string()
        }
    }

    /// Closing console line for a scan that ran to completion.
    pub fn finished_line(&self) -> String {
        if self.is_weak() {
            format!(
                "=== Scan finished. Matches found in {}/{} lists. ===",
                self.sources_with_match, self.sources_scanned
            )
        } else {
            "=== Scan finished. No matches found. ===".to_string()
        }
    }
}
