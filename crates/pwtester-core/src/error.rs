/// Typed errors for the core crate.
///
/// Source-level errors never escape the scan engine: they are rendered into
/// progress lines through their `Display` impl. Estimator and configuration
/// errors are returned to the caller.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single wordlist could not be opened or read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("ERROR: Wordlist not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("ERROR: Wordlist unreadable: {} ({source})", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ERROR: Failed reading {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Classify an error returned by `File::open`.
    pub fn from_open(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Unreadable { path, source: err }
        }
    }
}

/// The wordlist directory could not be enumerated.
#[derive(Debug, Error)]
pub enum SourceDirError {
    #[error("wordlist directory does not exist: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read wordlist directory {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },
}

/// Brute-force estimation failed; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("character {ch:?} at position {position} is not in the charset")]
    InvalidCharacter { ch: char, position: usize },

    #[error("guess rate must be a positive, finite number (got {0})")]
    InvalidGuessRate(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    #[error("character {0:?} appears more than once in the charset")]
    Duplicate(char),
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
