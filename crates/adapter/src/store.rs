//! JSON file persistence for the session snapshot and player progress
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write leaves the previous file intact. A file that fails to parse
//! or validate is removed; the player starts fresh rather than getting stuck.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::LevelCatalog;
use crate::config::AdapterConfig;
use crate::engine::{GameSession, PlayerProgress, SessionSnapshot, SessionSummary};
use crate::types::Language;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Seconds since the Unix epoch
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Day number for streak bookkeeping
pub fn unix_day(secs: u64) -> u32 {
    (secs / SECS_PER_DAY) as u32
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let json = serde_json::to_vec_pretty(value).context("serialize")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("rename into {}", path.display()))?;
    Ok(())
}

/// `Ok(None)` when the file does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    let value =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(value))
}

fn remove(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("remove {}", path.display())),
    }
}

/// Resumable session file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    max_age_secs: u64,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>, max_age_secs: u64) -> Self {
        Self {
            path: path.into(),
            max_age_secs,
        }
    }

    pub fn from_config(config: &AdapterConfig) -> Self {
        Self::new(config.session_path(), config.session_max_age_secs)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        write_json(&self.path, snapshot)
    }

    /// Snapshot the session (if not idle) stamped with the current time
    pub fn save_session(&self, session: &GameSession) -> Result<bool> {
        match session.snapshot(unix_now()) {
            Some(snapshot) => self.save(&snapshot).map(|_| true),
            None => Ok(false),
        }
    }

    /// Load a fresh snapshot. Corrupt or expired files are removed.
    pub fn load(&self, now: u64) -> Option<SessionSnapshot> {
        let snapshot = match read_json::<SessionSnapshot>(&self.path) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return None,
            Err(e) => {
                warn!("discarding unreadable session: {e:#}");
                self.clear_quietly();
                return None;
            }
        };
        if snapshot.is_expired(now, self.max_age_secs) {
            debug!("session for level {} expired", snapshot.level_id);
            self.clear_quietly();
            return None;
        }
        Some(snapshot)
    }

    pub fn has_session(&self, now: u64) -> bool {
        self.load(now).is_some()
    }

    pub fn summary(&self, now: u64) -> Option<SessionSummary> {
        self.load(now).map(|s| s.summary())
    }

    /// Load and validate a session against the catalog. Invalid files are removed.
    pub fn resume(&self, catalog: &LevelCatalog, lang: Language, now: u64) -> Option<GameSession> {
        let snapshot = self.load(now)?;
        match GameSession::restore(catalog, lang, snapshot, now, self.max_age_secs) {
            Ok(session) => Some(session),
            Err(_) => {
                self.clear_quietly();
                None
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        remove(&self.path)
    }

    fn clear_quietly(&self) {
        if let Err(e) = self.clear() {
            warn!("failed to clear session: {e:#}");
        }
    }
}

/// Player progress file
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &AdapterConfig) -> Self {
        Self::new(config.progress_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load progress and record today as a play day.
    ///
    /// A missing or unreadable file yields fresh progress.
    pub fn load(&self, now: u64) -> PlayerProgress {
        let mut progress = match read_json::<PlayerProgress>(&self.path) {
            Ok(Some(progress)) => progress,
            Ok(None) => PlayerProgress::new(),
            Err(e) => {
                warn!("starting with fresh progress: {e:#}");
                PlayerProgress::new()
            }
        };
        progress.record_play_day(unix_day(now));
        progress
    }

    pub fn save(&self, progress: &PlayerProgress) -> Result<()> {
        write_json(&self.path, progress)
    }

    pub fn clear(&self) -> Result<()> {
        remove(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HintKind, SESSION_MAX_AGE_SECS};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let n = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir()
            .join(format!("word-search-store-{}-{n}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn playing() -> (LevelCatalog, GameSession) {
        let catalog = LevelCatalog::new();
        let mut session = GameSession::new();
        session.start(&catalog, 12, Language::En).unwrap();
        session.use_hint(HintKind::SingleLetter);
        session.tick();
        (catalog, session)
    }

    #[test]
    fn test_missing_file() {
        let store = SessionStore::new(scratch_dir().join("session.json"), SESSION_MAX_AGE_SECS);
        assert!(store.load(unix_now()).is_none());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_session_round_trip() {
        let dir = scratch_dir();
        let store = SessionStore::new(dir.join("session.json"), SESSION_MAX_AGE_SECS);
        let (catalog, session) = playing();
        let now = unix_now();
        store.save(&session.snapshot(now).unwrap()).unwrap();

        assert!(store.has_session(now));
        assert_eq!(store.summary(now).unwrap().level_id, 12);
        let resumed = store.resume(&catalog, Language::En, now).unwrap();
        assert_eq!(resumed.hinted_cells(), session.hinted_cells());
        assert_eq!(resumed.time_elapsed(), 1);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_expired_session_removed() {
        let dir = scratch_dir();
        let store = SessionStore::new(dir.join("session.json"), 60);
        let (_, session) = playing();
        store.save(&session.snapshot(1_000).unwrap()).unwrap();

        assert!(store.load(1_030).is_some());
        assert!(store.load(1_061).is_none());
        assert!(!store.path().exists());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_corrupt_session_removed() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.json");
        fs::write(&path, b"{\"levelId\": 3, \"grid\": ").unwrap();

        let store = SessionStore::new(&path, SESSION_MAX_AGE_SECS);
        assert!(store.load(unix_now()).is_none());
        assert!(!path.exists());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_truncated_grid_removed_on_resume() {
        let dir = scratch_dir();
        let store = SessionStore::new(dir.join("session.json"), SESSION_MAX_AGE_SECS);
        let (catalog, session) = playing();
        let now = unix_now();
        let mut json = serde_json::to_value(session.snapshot(now).unwrap()).unwrap();
        json["grid"]["letters"] = serde_json::json!(["A", "B"]);
        fs::create_dir_all(&dir).unwrap();
        fs::write(store.path(), serde_json::to_vec(&json).unwrap()).unwrap();

        assert!(store.resume(&catalog, Language::En, now).is_none());
        assert!(!store.path().exists());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_invalid_session_removed_on_resume() {
        let dir = scratch_dir();
        let store = SessionStore::new(dir.join("session.json"), SESSION_MAX_AGE_SECS);
        let (catalog, session) = playing();
        let now = unix_now();
        let mut snapshot = session.snapshot(now).unwrap();
        snapshot.words_info.pop();
        store.save(&snapshot).unwrap();

        assert!(store.resume(&catalog, Language::En, now).is_none());
        assert!(!store.path().exists());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_progress_round_trip() {
        let dir = scratch_dir();
        let store = ProgressStore::new(dir.join("progress.json"));
        let day0 = 100 * SECS_PER_DAY;

        let mut progress = store.load(day0);
        assert_eq!(progress.coins, 200);
        assert_eq!(progress.stats.current_streak, 1);
        assert!(progress.try_spend(HintKind::SingleLetter));
        store.save(&progress).unwrap();

        let next_day = store.load(day0 + SECS_PER_DAY);
        assert_eq!(next_day.coins, 150);
        assert_eq!(next_day.stats.current_streak, 2);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_corrupt_progress_starts_fresh() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("progress.json");
        fs::write(&path, b"not json").unwrap();
        let progress = ProgressStore::new(&path).load(unix_now());
        assert_eq!(progress.coins, 200);
        let _ = fs::remove_dir_all(dir);
    }
}
