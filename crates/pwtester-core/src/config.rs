/// Application configuration — defaults, an optional JSON file, and
/// environment overrides, applied in that order.
///
/// ```json
/// {
///   "wordlists_dir": "C:\\wordlists",
///   "source_pause_ms": 0,
///   "guess_rate": 1e10,
///   "charset": "abcdefghijklmnopqrstuvwxyz0123456789"
/// }
/// ```
use crate::error::ConfigError;
use crate::estimator::{Charset, DEFAULT_GUESS_RATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// File looked up in the working directory when `PWTESTER_CONFIG` is unset.
pub const CONFIG_FILE_NAME: &str = "pwtester.json";

pub const ENV_CONFIG: &str = "PWTESTER_CONFIG";
pub const ENV_WORDLISTS: &str = "PWTESTER_WORDLISTS";
pub const ENV_SOURCE_PAUSE_MS: &str = "PWTESTER_SOURCE_PAUSE_MS";
pub const ENV_GUESS_RATE: &str = "PWTESTER_GUESS_RATE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory whose files are scanned as wordlists, in name order.
    pub wordlists_dir: PathBuf,
    /// Pause between two wordlists.
    pub source_pause_ms: u64,
    /// Pause after each verbose line, cinematic mode only.
    pub cinematic_delay_ms: u64,
    /// Sources with at most this many lines get one progress line per candidate.
    pub verbose_line_threshold: usize,
    /// Condensed mode emits a heartbeat every this many lines.
    pub heartbeat_interval: u64,
    /// Guesses per second assumed by the brute-force estimate.
    pub guess_rate: f64,
    /// Explicit brute-force charset. `None` derives one from the password.
    pub charset: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wordlists_dir: default_wordlists_dir(),
            source_pause_ms: 3_000,
            cinematic_delay_ms: 1,
            verbose_line_threshold: 50_000,
            heartbeat_interval: 1_000,
            guess_rate: DEFAULT_GUESS_RATE,
            charset: None,
        }
    }
}

/// `wordlists/` next to the executable if present, otherwise relative to
/// the working directory.
fn default_wordlists_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("wordlists")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("wordlists"))
}

impl AppConfig {
    /// Load configuration from `PWTESTER_CONFIG`, or `pwtester.json` in the
    /// working directory if it exists, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(ENV_CONFIG)
            .map(PathBuf::from)
            .or_else(|| {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                local.is_file().then_some(local)
            });

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides. `lookup` is injected so tests need not
    /// touch the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_WORDLISTS).filter(|v| !v.is_empty()) {
            self.wordlists_dir = PathBuf::from(dir);
        }
        if let Some(ms) = lookup(ENV_SOURCE_PAUSE_MS).filter(|v| !v.is_empty()) {
            self.source_pause_ms = ms.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_SOURCE_PAUSE_MS} is not an integer: {ms}"))
            })?;
        }
        if let Some(rate) = lookup(ENV_GUESS_RATE).filter(|v| !v.is_empty()) {
            self.guess_rate = rate.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_GUESS_RATE} is not a number: {rate}"))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.guess_rate.is_finite() || self.guess_rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "guess_rate must be positive and finite, got {}",
                self.guess_rate
            )));
        }
        if self.heartbeat_interval == 0 {
            return Err(ConfigError::Invalid(
                "heartbeat_interval must be at least 1".into(),
            ));
        }
        if self.verbose_line_threshold == 0 {
            return Err(ConfigError::Invalid(
                "verbose_line_threshold must be at least 1".into(),
            ));
        }
        if let Some(ref cs) = self.charset {
            cs.parse::<Charset>()
                .map_err(|e| ConfigError::Invalid(format!("charset: {e}")))?;
        }
        Ok(())
    }

    /// Charset to estimate `password` against.
    pub fn charset_for(&self, password: &str) -> Charset {
        self.charset
            .as_deref()
            .and_then(|cs| cs.parse().ok())
            .unwrap_or_else(|| Charset::for_password(password))
    }
}
