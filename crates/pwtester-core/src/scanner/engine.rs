/// Sequential wordlist scan engine.
///
/// [`Scan`] is a lazy iterator of [`ScanEvent`]s. Each call to `next` does at
/// most one unit of work (open a source, read one line, or sleep one pacing
/// delay) and polls the cancellation token before doing it, so a cancel
/// request is observed within a single candidate.
///
/// # Verbosity
///
/// Small sources get one progress line per candidate; large ones only get
/// the match line plus a heartbeat. "Small" means at most
/// `verbose_line_threshold` lines. Instead of counting lines in a separate
/// pass, the engine reads ahead into a bounded buffer of at most
/// `threshold + 1` candidates: hitting EOF first means verbose, overflowing
/// the buffer means condensed. The buffered candidates are then consumed
/// before reading resumes, so every source is read exactly once.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
use super::cancel::CancellationToken;
use super::progress::{candidate_line, heartbeat_line, ScanEvent};
use super::{ScanOptions, ScanState};
use crate::error::SourceError;
use crate::model::{ScanTarget, SourceResult};
use compact_str::CompactString;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Reader buffer per open source.
const READ_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    /// Still reading ahead to find out whether the source is small.
    Undecided,
    Verbose,
    Condensed,
}

/// Read position within the source currently being scanned.
struct SourceCursor {
    name: CompactString,
    reader: Box<dyn BufRead + Send>,
    line_buf: Vec<u8>,
    /// Candidates read ahead while `verbosity` was undecided.
    lookahead: VecDeque<String>,
    exhausted: bool,
    verbosity: Verbosity,
    /// Number of candidates consumed so far (1-based line of the last one).
    line_no: u64,
    started: Instant,
    /// A verbose line was just emitted; sleep before the next candidate.
    pace_due: bool,
}

impl SourceCursor {
    fn open(path: &Path, name: CompactString, verbosity: Verbosity) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        Ok(Self::from_reader(name, Box::new(reader), verbosity))
    }

    fn from_reader(
        name: CompactString,
        reader: Box<dyn BufRead + Send>,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            name,
            reader,
            line_buf: Vec::with_capacity(256),
            lookahead: VecDeque::new(),
            exhausted: false,
            verbosity,
            line_no: 0,
            started: Instant::now(),
            pace_due: false,
        }
    }

    /// Read the next line from disk, bypassing the look-ahead buffer.
    fn read_candidate(&mut self) -> io::Result<Option<String>> {
        if self.exhausted {
            return Ok(None);
        }
        self.line_buf.clear();
        if !read_line_raw(&mut self.reader, &mut self.line_buf)? {
            self.exhausted = true;
            return Ok(None);
        }
        Ok(Some(decode_candidate(&self.line_buf)))
    }

    fn next_candidate(&mut self) -> io::Result<Option<String>> {
        match self.lookahead.pop_front() {
            Some(candidate) => Ok(Some(candidate)),
            None => self.read_candidate(),
        }
    }
}

/// Append the next line of `reader` to `buf`, without its terminator.
///
/// Returns `false` at end of input when nothing was read. A `\r` directly
/// followed by `\n` is one terminator.
fn read_line_raw(reader: &mut dyn BufRead, buf: &mut Vec<u8>) -> io::Result<bool> {
    let mut read_any = false;
    loop {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = available[i];
                buf.extend_from_slice(&available[..i]);
                reader.consume(i + 1);
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

/// Decode a raw line into a candidate: invalid UTF-8 sequences are dropped
/// (not replaced) and surrounding whitespace, including the line ending, is
/// trimmed.
pub fn decode_candidate(raw: &[u8]) -> String {
    let mut decoded = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        decoded.push_str(chunk.valid());
    }
    decoded.trim().to_owned()
}

/// Display name of a source: its file name, or the whole path if it has none.
pub fn source_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        None => CompactString::new(path.to_string_lossy()),
    }
}

/// One scan invocation over an ordered list of sources.
///
/// Produces, in order, for every source: `SourceStarted`, zero or more
/// `Progress` lines, and `SourceCompleted`, unless cancelled. Once the token
/// is cancelled the iterator yields nothing more and [`Scan::state`] reports
/// [`ScanState::Aborted`].
pub struct Scan {
    target: ScanTarget,
    options: ScanOptions,
    cancel: CancellationToken,
    state: ScanState,
    next_source: usize,
    cursor: Option<SourceCursor>,
    pending: VecDeque<ScanEvent>,
}

impl Scan {
    pub fn new(target: ScanTarget, options: ScanOptions, cancel: CancellationToken) -> Self {
        Self {
            target,
            options,
            cancel,
            state: ScanState::Idle,
            next_source: 0,
            cursor: None,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn target(&self) -> &ScanTarget {
        &self.target
    }

    /// Whether any source has yet to be started.
    pub fn has_remaining_sources(&self) -> bool {
        self.next_source < self.target.sources().len()
    }

    fn abort(&mut self) {
        match self.state {
            ScanState::Scanning { index } => info!("Scan cancelled during source {index}"),
            _ => info!("Scan cancelled before it started"),
        }
        self.pending.clear();
        self.cursor = None;
        self.state = ScanState::Aborted;
    }

    fn begin_next_source(&mut self) {
        let index = self.next_source;
        let Some(path) = self.target.sources().get(index).cloned() else {
            info!("Scan complete: {} sources", self.target.sources().len());
            self.state = ScanState::Completed;
            return;
        };
        self.next_source += 1;
        self.state = ScanState::Scanning { index };

        let name = source_name(&path);
        self.pending.push_back(ScanEvent::SourceStarted {
            index,
            source: name.clone(),
        });

        let verbosity = if self.target.cinematic() {
            Verbosity::Verbose
        } else {
            Verbosity::Undecided
        };
        match SourceCursor::open(&path, name.clone(), verbosity) {
            Ok(cursor) => {
                debug!("Scanning {}", path.display());
                self.cursor = Some(cursor);
            }
            Err(err) => {
                let err = SourceError::from_open(path, err);
                warn!("{err}");
                self.pending.push_back(ScanEvent::Progress(err.to_string()));
                self.pending
                    .push_back(ScanEvent::SourceCompleted(SourceResult::unavailable(name)));
            }
        }
    }

    /// Advance the current source by one unit of work.
    fn step(&mut self) {
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };

        if cursor.pace_due {
            cursor.pace_due = false;
            std::thread::sleep(self.options.verbose_delay);
            return;
        }

        // `Some(line)` finishes the source; the inner option is the match line.
        let finished: Option<Option<u64>> = if cursor.verbosity == Verbosity::Undecided {
            match cursor.read_candidate() {
                Ok(Some(candidate)) => {
                    cursor.lookahead.push_back(candidate);
                    if cursor.lookahead.len() > self.options.verbose_line_threshold {
                        cursor.verbosity = Verbosity::Condensed;
                    }
                    None
                }
                Ok(None) => {
                    cursor.verbosity = Verbosity::Verbose;
                    None
                }
                Err(source) => {
                    let err = SourceError::Read {
                        name: cursor.name.to_string(),
                        source,
                    };
                    warn!("{err}");
                    self.pending.push_back(ScanEvent::Progress(err.to_string()));
                    // Lines already buffered are still compared.
                    cursor.exhausted = true;
                    cursor.verbosity = Verbosity::Condensed;
                    None
                }
            }
        } else {
            match cursor.next_candidate() {
                Ok(Some(candidate)) => {
                    cursor.line_no += 1;
                    let line = cursor.line_no;
                    let is_match = candidate == self.target.password();

                    if cursor.verbosity == Verbosity::Verbose {
                        self.pending.push_back(ScanEvent::Progress(candidate_line(
                            &cursor.name,
                            line,
                            &candidate,
                            is_match,
                        )));
                        cursor.pace_due = !is_match && !self.options.verbose_delay.is_zero();
                    } else if is_match {
                        self.pending.push_back(ScanEvent::Progress(candidate_line(
                            &cursor.name,
                            line,
                            &candidate,
                            true,
                        )));
                    } else if line % self.options.heartbeat_interval.max(1) == 0 {
                        self.pending
                            .push_back(ScanEvent::Progress(heartbeat_line(&cursor.name, line)));
                    }

                    is_match.then_some(Some(line))
                }
                Ok(None) => Some(None),
                Err(source) => {
                    let err = SourceError::Read {
                        name: cursor.name.to_string(),
                        source,
                    };
                    warn!("{err}");
                    self.pending.push_back(ScanEvent::Progress(err.to_string()));
                    Some(None)
                }
            }
        };

        if let Some(matched_line) = finished {
            self.finish_source(matched_line);
        }
    }

    fn finish_source(&mut self, matched_line: Option<u64>) {
        let Some(cursor) = self.cursor.take() else {
            return;
        };
        let elapsed = cursor.started.elapsed().as_secs_f64();
        debug!(
            "{}: {} after {} lines in {:.3}s",
            cursor.name,
            if matched_line.is_some() { "match" } else { "no match" },
            cursor.line_no,
            elapsed
        );
        let result = match matched_line {
            Some(line) => SourceResult::matched(cursor.name, line, elapsed),
            None => SourceResult::unmatched(cursor.name, elapsed),
        };
        self.pending.push_back(ScanEvent::SourceCompleted(result));
    }
}

impl Iterator for Scan {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            if matches!(self.state, ScanState::Completed | ScanState::Aborted) {
                return None;
            }
            if self.cancel.is_cancelled() {
                self.abort();
                return None;
            }
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.cursor.is_some() {
                self.step();
            } else {
                self.begin_next_source();
            }
        }
    }
}

impl FusedIterator for Scan {}
