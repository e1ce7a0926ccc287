//! Resumable session snapshot
//!
//! The snapshot is plain data (camelCase when serialized) and carries enough to
//! rebuild a [`GameSession`] exactly. Restoring never trusts it: the level is
//! regenerated from the catalog and every field is checked against it. Any
//! mismatch discards the snapshot.

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::LevelCatalog;
use crate::core::Grid;
use crate::session::{FoundCell, GameSession, Phase, WordInfo};
use crate::types::{Coord, Language, SessionView, TOTAL_LEVELS};

/// Persisted shape of an in-progress level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub level_id: u32,
    pub block_id: String,
    pub grid: Grid,
    pub words_info: Vec<WordInfo>,
    pub found_words_cells: Vec<FoundCell>,
    pub hinted_cells: Vec<Coord>,
    pub time_elapsed: u32,
    pub view: SessionView,
    #[serde(default)]
    pub hints_used: u32,
    #[serde(default)]
    pub completion_processed: bool,
    /// Unix seconds
    pub saved_at: u64,
}

/// Why a snapshot was discarded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot is {age_secs}s old")]
    Expired { age_secs: u64 },
    #[error("snapshot names unknown level {0}")]
    UnknownLevel(u32),
    #[error("snapshot block {found} does not own level {level_id} (expected {expected})")]
    BlockMismatch {
        level_id: u32,
        expected: String,
        found: String,
    },
    #[error("snapshot grid is {found}x{found}, level needs {expected}x{expected}")]
    GridSizeMismatch { expected: usize, found: usize },
    #[error("snapshot grid has a blank cell at ({row}, {col})")]
    BlankCell { row: u8, col: u8 },
    #[error("snapshot word list no longer matches level {level_id}")]
    WordListMismatch { level_id: u32 },
    #[error("snapshot cells for {word} do not spell it")]
    WordCellsMismatch { word: String },
    #[error("snapshot cell ({row}, {col}) is outside the grid")]
    CellOutOfBounds { row: u8, col: u8 },
}

/// Short form for a "continue level N" prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub level_id: u32,
    pub found: usize,
    pub total: usize,
    pub time_elapsed: u32,
}

impl SessionSummary {
    /// `found/total`
    pub fn progress(&self) -> String {
        format!("{}/{}", self.found, self.total)
    }
}

impl SessionSnapshot {
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            level_id: self.level_id,
            found: self.words_info.iter().filter(|w| w.found).count(),
            total: self.words_info.len(),
            time_elapsed: self.time_elapsed,
        }
    }

    /// Seconds between `saved_at` and `now` (0 if saved in the future)
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.saved_at)
    }

    pub fn is_expired(&self, now: u64, max_age_secs: u64) -> bool {
        self.age(now) > max_age_secs
    }
}

impl GameSession {
    /// Capture the current level, `None` while idle
    pub fn snapshot(&self, saved_at: u64) -> Option<SessionSnapshot> {
        let view = match self.phase {
            Phase::Idle => return None,
            Phase::Playing => SessionView::Game,
            Phase::Complete => SessionView::Complete,
        };
        Some(SessionSnapshot {
            level_id: self.level.as_ref()?.id,
            block_id: self.block.as_ref()?.id.clone(),
            grid: self.grid.clone()?,
            words_info: self.words.clone(),
            found_words_cells: self.found_cells.clone(),
            hinted_cells: self.hinted_cells.clone(),
            time_elapsed: self.time_elapsed,
            view,
            hints_used: self.hints_used,
            completion_processed: self.has_processed_completion,
            saved_at,
        })
    }

    /// Rebuild a session from `snapshot`, validating it against the catalog.
    ///
    /// The restored session is never paused.
    pub fn restore(
        catalog: &LevelCatalog,
        lang: Language,
        snapshot: SessionSnapshot,
        now: u64,
        max_age_secs: u64,
    ) -> Result<Self, SnapshotError> {
        let result = Self::restore_checked(catalog, lang, snapshot, now, max_age_secs);
        if let Err(err) = &result {
            warn!("discarding saved session: {err}");
        }
        result
    }

    fn restore_checked(
        catalog: &LevelCatalog,
        lang: Language,
        snapshot: SessionSnapshot,
        now: u64,
        max_age_secs: u64,
    ) -> Result<Self, SnapshotError> {
        if snapshot.is_expired(now, max_age_secs) {
            return Err(SnapshotError::Expired {
                age_secs: snapshot.age(now),
            });
        }
        let level_id = snapshot.level_id;
        if !(1..=TOTAL_LEVELS).contains(&level_id) {
            return Err(SnapshotError::UnknownLevel(level_id));
        }
        let (level, block) = catalog
            .level_with_block(level_id, lang)
            .ok_or(SnapshotError::UnknownLevel(level_id))?;

        if block.id != snapshot.block_id {
            return Err(SnapshotError::BlockMismatch {
                level_id,
                expected: block.id.clone(),
                found: snapshot.block_id,
            });
        }

        let grid = snapshot.grid;
        if grid.size() != level.grid_size {
            return Err(SnapshotError::GridSizeMismatch {
                expected: level.grid_size,
                found: grid.size(),
            });
        }
        if let Some(blank) = grid.cells().find(|c| c.letter.is_none()) {
            return Err(SnapshotError::BlankCell {
                row: blank.row,
                col: blank.col,
            });
        }

        let words_match = snapshot.words_info.len() == level.words.len()
            && snapshot
                .words_info
                .iter()
                .zip(&level.words)
                .all(|(info, word)| &info.word == word);
        if !words_match {
            return Err(SnapshotError::WordListMismatch { level_id });
        }
        for info in &snapshot.words_info {
            if grid.read_line(&info.cells).as_deref() != Some(info.word.as_str()) {
                return Err(SnapshotError::WordCellsMismatch {
                    word: info.word.clone(),
                });
            }
        }

        let size = grid.size();
        let stray = snapshot
            .found_words_cells
            .iter()
            .map(FoundCell::coord)
            .chain(snapshot.hinted_cells.iter().copied())
            .find(|c| !c.in_bounds(size));
        if let Some(c) = stray {
            return Err(SnapshotError::CellOutOfBounds { row: c.row, col: c.col });
        }

        // The word list decides the phase; a "complete" view with words left resumes play
        let phase = if snapshot.words_info.iter().all(|w| w.found) {
            Phase::Complete
        } else {
            Phase::Playing
        };
        let trophy_earned = (phase == Phase::Complete && level.is_last_in_block())
            .then(|| block.trophy.clone());

        // Hinted cells of found words are dropped when the word is found
        let found: HashSet<Coord> = snapshot
            .found_words_cells
            .iter()
            .map(FoundCell::coord)
            .collect();
        let mut hinted = snapshot.hinted_cells;
        hinted.retain(|c| !found.contains(c));

        Ok(Self {
            phase,
            level: Some(level),
            block: Some(block),
            grid: Some(grid),
            words: snapshot.words_info,
            found_cells: snapshot.found_words_cells,
            hinted_cells: hinted,
            time_elapsed: snapshot.time_elapsed,
            paused: false,
            hints_used: snapshot.hints_used,
            has_processed_completion: phase == Phase::Complete && snapshot.completion_processed,
            trophy_earned,
            events: Vec::new(),
        })
    }
}
