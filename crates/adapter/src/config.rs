//! Host configuration read from the environment

use std::env;
use std::path::PathBuf;

use crate::types::{Language, SESSION_MAX_AGE_SECS};

const SESSION_FILE: &str = "session.json";
const PROGRESS_FILE: &str = "progress.json";

/// Adapter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Directory holding the session and progress files
    pub data_dir: PathBuf,
    pub language: Language,
    /// Saved sessions older than this are discarded
    pub session_max_age_secs: u64,
    /// Log at debug level
    pub debug: bool,
    /// Capacity of the generation result channel
    pub max_pending_results: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".word-search"),
            language: Language::En,
            session_max_age_secs: SESSION_MAX_AGE_SECS,
            debug: false,
            max_pending_results: 8,
        }
    }
}

impl AdapterConfig {
    /// Create from environment variables
    ///
    /// - `WORD_SEARCH_DATA_DIR`: data directory (default `.word-search`)
    /// - `WORD_SEARCH_LANGUAGE`: `en` or `es` (default `en`)
    /// - `WORD_SEARCH_SESSION_MAX_AGE_SECS`: session expiry (default 86400)
    /// - `WORD_SEARCH_DEBUG`: `1` or `true` for debug logging
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_dir = env::var("WORD_SEARCH_DATA_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let language = env::var("WORD_SEARCH_LANGUAGE")
            .ok()
            .and_then(|s| Language::from_str(&s))
            .unwrap_or(defaults.language);

        let session_max_age_secs = env::var("WORD_SEARCH_SESSION_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.session_max_age_secs);

        let debug = env::var("WORD_SEARCH_DEBUG")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        Self {
            data_dir,
            language,
            session_max_age_secs,
            debug,
            ..defaults
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_FILE)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
