//! Session module - the per-level state machine
//!
//! ```text
//! Idle --start--> Playing --last word--> Complete --leave/start--> Idle | Playing
//!                  ^   |
//!           resume |   | pause
//!                  |   v
//!                 (paused flag)
//! ```
//!
//! Pausing is a flag on `Playing`, not a phase of its own. `tick` checks it
//! even though the host is expected to stop ticking while paused.

use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogError, Level, LevelBlock, LevelCatalog, Trophy};
use crate::core::{
    calculate_stars, completion_reward, seeded_shuffle, Grid, GridPacker, PackSeed, PackedGrid,
};
use crate::hints::{hint_order, letter_target, HintReveal};
use crate::types::{Coord, Difficulty, HintKind, Language, FALLBACK_SEED_OFFSET, WORD_COLORS};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No level loaded (menu)
    #[default]
    Idle,
    Playing,
    Complete,
}

/// Live tracking record for one word of the active level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    pub word: String,
    pub found: bool,
    pub color: String,
    /// Placement cells in reading order
    pub cells: Vec<Coord>,
}

/// A cell claimed by a found word, tagged with that word's color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoundCell {
    pub row: u8,
    pub col: u8,
    pub color: String,
}

impl FoundCell {
    pub fn new(coord: Coord, color: &str) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            color: color.to_owned(),
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Facts a progress ledger needs to book a completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    pub level_id: u32,
    pub difficulty: Difficulty,
    pub words_found: u32,
    pub stars: u8,
    pub time_elapsed: u32,
    pub hints_used: u32,
    pub is_first_completion: bool,
    pub coins: u32,
    /// Block trophy, when this level closes its block
    pub trophy: Option<Trophy>,
}

/// Read side of the progress ledger used by [`GameSession::complete`]
pub trait CompletionLedger {
    fn has_completed(&self, level_id: u32) -> bool;
}

/// Something observers may want to react to (sound, haptics, toasts)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LevelStarted { level_id: u32 },
    WordFound { word: String, color: String, by_hint: bool },
    HintRevealed(HintReveal),
    TrophyEarned(Trophy),
    LevelCompleted(CompletionReport),
}

/// Why a level could not be entered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("level {level_id} could not be packed")]
    Unpackable { level_id: u32 },
    #[error("grid is {actual}x{actual}, level {level_id} needs {expected}x{expected}")]
    GridMismatch {
        level_id: u32,
        expected: usize,
        actual: usize,
    },
}

/// Pack a level's grid from its id, falling back to `id + 9999` once.
///
/// `None` means both seeds failed; the level must not be presented.
pub fn pack_level(level: &Level) -> Option<PackedGrid> {
    pack_level_with(&GridPacker::default(), level)
}

/// [`pack_level`] with a caller-supplied packer
pub fn pack_level_with(packer: &GridPacker, level: &Level) -> Option<PackedGrid> {
    let seeds = [level.id, level.id.wrapping_add(FALLBACK_SEED_OFFSET)];
    for seed in seeds {
        let packed = packer.pack(level.grid_size, &level.words, PackSeed::Fixed(seed));
        if packed.covers(&level.words) {
            return Some(packed);
        }
        warn!("level {} did not pack with seed {seed}", level.id);
    }
    None
}

/// Highlight color of the `index`-th word of `level_id`
pub fn word_color(level_id: u32, index: usize) -> &'static str {
    let palette = seeded_shuffle(&WORD_COLORS, level_id);
    palette[index % palette.len()]
}

/// The active play-through
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    pub(crate) phase: Phase,
    pub(crate) level: Option<Arc<Level>>,
    pub(crate) block: Option<Arc<LevelBlock>>,
    pub(crate) grid: Option<Grid>,
    pub(crate) words: Vec<WordInfo>,
    pub(crate) found_cells: Vec<FoundCell>,
    pub(crate) hinted_cells: Vec<Coord>,
    pub(crate) time_elapsed: u32,
    pub(crate) paused: bool,
    /// Successful hint calls this run
    pub(crate) hints_used: u32,
    pub(crate) has_processed_completion: bool,
    pub(crate) trophy_earned: Option<Trophy>,
    pub(crate) events: Vec<SessionEvent>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn level(&self) -> Option<&Arc<Level>> {
        self.level.as_ref()
    }

    pub fn block(&self) -> Option<&Arc<LevelBlock>> {
        self.block.as_ref()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn words(&self) -> &[WordInfo] {
        &self.words
    }

    pub fn found_cells(&self) -> &[FoundCell] {
        &self.found_cells
    }

    pub fn hinted_cells(&self) -> &[Coord] {
        &self.hinted_cells
    }

    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn has_processed_completion(&self) -> bool {
        self.has_processed_completion
    }

    /// Trophy earned by finishing the last level of a block, if any
    pub fn trophy_earned(&self) -> Option<&Trophy> {
        self.trophy_earned.as_ref()
    }

    pub fn words_found(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }

    pub fn words_remaining(&self) -> usize {
        self.words.len() - self.words_found()
    }

    /// Drain pending events (consumed by observers)
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Resolve, pack and enter level `level_id`.
    ///
    /// On failure the session is back in `Idle`.
    pub fn start(
        &mut self,
        catalog: &LevelCatalog,
        level_id: u32,
        lang: Language,
    ) -> Result<(), StartError> {
        self.start_with(catalog, &GridPacker::default(), level_id, lang)
    }

    /// [`start`](Self::start) packing with `packer`
    pub fn start_with(
        &mut self,
        catalog: &LevelCatalog,
        packer: &GridPacker,
        level_id: u32,
        lang: Language,
    ) -> Result<(), StartError> {
        self.leave();
        let (level, block) = catalog
            .level_with_block(level_id, lang)
            .ok_or(CatalogError::LevelOutOfRange(level_id))?;
        let packed = pack_level_with(packer, &level)
            .ok_or(StartError::Unpackable { level_id: level.id })?;
        self.begin(level, block, packed)
    }

    /// Enter a level whose grid was packed elsewhere (e.g. on a worker thread)
    pub fn begin(
        &mut self,
        level: Arc<Level>,
        block: Arc<LevelBlock>,
        packed: PackedGrid,
    ) -> Result<(), StartError> {
        self.leave();
        if packed.grid.size() != level.grid_size {
            return Err(StartError::GridMismatch {
                level_id: level.id,
                expected: level.grid_size,
                actual: packed.grid.size(),
            });
        }
        if !packed.covers(&level.words) {
            return Err(StartError::Unpackable { level_id: level.id });
        }

        let palette = seeded_shuffle(&WORD_COLORS, level.id);
        let PackedGrid {
            grid, mut placements, ..
        } = packed;
        self.words = level
            .words
            .iter()
            .enumerate()
            .map(|(i, word)| WordInfo {
                word: word.clone(),
                found: false,
                color: palette[i % palette.len()].to_owned(),
                cells: placements.remove(word).unwrap_or_default(),
            })
            .collect();

        info!(
            "level {} started ({} words, {}x{})",
            level.id,
            self.words.len(),
            level.grid_size,
            level.grid_size
        );
        self.events.push(SessionEvent::LevelStarted { level_id: level.id });
        self.grid = Some(grid);
        self.level = Some(level);
        self.block = Some(block);
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Mark `word` found along `cells`. No-op (false) unless it is an unfound word.
    pub fn word_found(&mut self, word: &str, cells: &[Coord]) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(idx) = self.words.iter().position(|w| !w.found && w.word == word) else {
            return false;
        };
        self.reveal_word(idx, cells, false);
        true
    }

    /// Validate a finished drag: the forward spelling is tried, then the reversed one.
    ///
    /// Returns the word that was found. Ignored while paused.
    pub fn submit_selection(&mut self, cells: &[Coord]) -> Option<String> {
        if self.paused || cells.len() < 2 {
            return None;
        }
        let forward = self.grid.as_ref()?.read_line(cells)?;
        let reversed: String = forward.chars().rev().collect();
        [forward, reversed]
            .into_iter()
            .find(|candidate| self.word_found(candidate, cells))
    }

    fn reveal_word(&mut self, idx: usize, cells: &[Coord], by_hint: bool) {
        let info = &mut self.words[idx];
        info.found = true;
        let color = info.color.clone();
        let word = info.word.clone();

        self.found_cells
            .extend(cells.iter().map(|&c| FoundCell::new(c, &color)));
        self.hinted_cells.retain(|h| !cells.contains(h));
        self.events.push(SessionEvent::WordFound {
            word,
            color,
            by_hint,
        });

        if self.words.iter().all(|w| w.found) {
            self.phase = Phase::Complete;
            self.paused = false;
            if let (Some(level), Some(block)) = (&self.level, &self.block) {
                if level.is_last_in_block() {
                    self.trophy_earned = Some(block.trophy.clone());
                    self.events.push(SessionEvent::TrophyEarned(block.trophy.clone()));
                }
            }
        }
    }

    /// Spend a hint. `None` (nothing changed) when there is nothing left to reveal.
    pub fn use_hint(&mut self, kind: HintKind) -> Option<HintReveal> {
        if self.phase != Phase::Playing {
            return None;
        }
        let order = hint_order(&self.words, &self.hinted_cells);
        let reveal = match kind {
            HintKind::FullWord => {
                let idx = *order.first()?;
                let cells = self.words[idx].cells.clone();
                let word = self.words[idx].word.clone();
                self.reveal_word(idx, &cells, true);
                HintReveal::Word { word }
            }
            HintKind::SingleLetter => {
                let cell =
                    letter_target(&self.words, &order, &self.hinted_cells, &self.found_cells)?;
                self.hinted_cells.push(cell);
                HintReveal::Letter { cell }
            }
        };
        self.hints_used += 1;
        self.events.push(SessionEvent::HintRevealed(reveal.clone()));
        Some(reveal)
    }

    /// Advance the clock by one second while playing and not paused
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing || self.paused {
            return false;
        }
        self.time_elapsed += 1;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Playing || self.paused {
            return false;
        }
        self.paused = true;
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Book the completion once. Later calls return `None`.
    pub fn complete(&mut self, ledger: &impl CompletionLedger) -> Option<CompletionReport> {
        if self.phase != Phase::Complete || self.has_processed_completion {
            return None;
        }
        let level = self.level.as_ref()?;
        self.has_processed_completion = true;

        let is_first_completion = !ledger.has_completed(level.id);
        let report = CompletionReport {
            level_id: level.id,
            difficulty: level.difficulty,
            words_found: self.words_found() as u32,
            stars: calculate_stars(self.time_elapsed, level.difficulty),
            time_elapsed: self.time_elapsed,
            hints_used: self.hints_used,
            is_first_completion,
            coins: completion_reward(level.difficulty, is_first_completion),
            trophy: self.trophy_earned.clone(),
        };
        info!(
            "level {} complete: {} stars in {}s, {} coins",
            report.level_id, report.stars, report.time_elapsed, report.coins
        );
        self.events.push(SessionEvent::LevelCompleted(report.clone()));
        Some(report)
    }

    /// Discard the current level and return to `Idle`
    pub fn leave(&mut self) {
        let events = std::mem::take(&mut self.events);
        *self = Self {
            events,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{generate_grid, PackerConfig};
    use std::collections::HashSet;

    struct Ledger(HashSet<u32>);

    impl CompletionLedger for Ledger {
        fn has_completed(&self, level_id: u32) -> bool {
            self.0.contains(&level_id)
        }
    }

    fn fresh() -> Ledger {
        Ledger(HashSet::new())
    }

    fn started(level_id: u32) -> GameSession {
        let catalog = LevelCatalog::new();
        let mut session = GameSession::new();
        session.start(&catalog, level_id, Language::En).unwrap();
        session
    }

    fn find_all(session: &mut GameSession) {
        let words: Vec<(String, Vec<Coord>)> = session
            .words()
            .iter()
            .map(|w| (w.word.clone(), w.cells.clone()))
            .collect();
        for (word, cells) in words {
            session.word_found(&word, &cells);
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let mut session = GameSession::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.tick());
        assert!(session.use_hint(HintKind::FullWord).is_none());
        assert!(session.complete(&fresh()).is_none());
    }

    #[test]
    fn test_start_level_one() {
        let session = started(1);
        assert!(session.is_playing());
        assert_eq!(session.grid().unwrap().rows(), vec!["ESAG", "ENUL", "ROUE", "TWFN"]);
        let words: Vec<&str> = session.words().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["SNOW", "GLEN", "TREE"]);
        let colors: Vec<&str> = session.words().iter().map(|w| w.color.as_str()).collect();
        assert_eq!(colors, ["#e879f9", "#2dd4bf", "#fb7185"]);
        assert_eq!(session.time_elapsed(), 0);
        assert!(session.found_cells().is_empty());
    }

    #[test]
    fn test_word_found_and_duplicates() {
        let mut session = started(1);
        let cells = session.words()[0].cells.clone();
        assert!(session.word_found("SNOW", &cells));
        assert!(!session.word_found("SNOW", &cells));
        assert!(!session.word_found("WONS", &cells));
        assert_eq!(session.found_cells().len(), 4);
        assert!(session.found_cells().iter().all(|c| c.color == "#e879f9"));
        assert!(session.is_playing());
    }

    #[test]
    fn test_submit_selection_both_directions() {
        let mut session = started(1);
        // TREE is placed bottom-up in column 0; drag it top-down
        let down: Vec<Coord> = (0..4).map(|r| Coord::new(r, 0)).collect();
        assert_eq!(session.submit_selection(&down).as_deref(), Some("TREE"));

        let snow: Vec<Coord> = (0..4).map(|r| Coord::new(r, 1)).collect();
        assert_eq!(session.submit_selection(&snow).as_deref(), Some("SNOW"));

        let junk = [Coord::new(0, 0), Coord::new(0, 1)];
        assert_eq!(session.submit_selection(&junk), None);
    }

    #[test]
    fn test_complete_once() {
        let mut session = started(1);
        for _ in 0..12 {
            session.tick();
        }
        find_all(&mut session);
        assert!(session.is_complete());
        assert!(!session.tick());

        let report = session.complete(&fresh()).unwrap();
        assert_eq!(report.level_id, 1);
        assert_eq!(report.stars, 3);
        assert_eq!(report.time_elapsed, 12);
        assert_eq!(report.words_found, 3);
        assert!(report.is_first_completion);
        assert_eq!(report.coins, 10);
        assert!(report.trophy.is_none());

        assert!(session.has_processed_completion());
        assert!(session.complete(&fresh()).is_none());
    }

    #[test]
    fn test_replay_reward() {
        let mut session = started(1);
        find_all(&mut session);
        let report = session.complete(&Ledger(HashSet::from([1]))).unwrap();
        assert!(!report.is_first_completion);
        assert_eq!(report.coins, 5);
    }

    #[test]
    fn test_last_level_of_block_earns_trophy() {
        let mut session = started(50);
        find_all(&mut session);
        assert_eq!(session.trophy_earned().map(|t| t.id.as_str()), Some("trophy_block_1"));
        let report = session.complete(&fresh()).unwrap();
        assert_eq!(report.trophy.unwrap().name, "The Green Forest Master");
        let events = session.take_events();
        assert!(events.iter().any(|e| matches!(e, SessionEvent::TrophyEarned(_))));
    }

    #[test]
    fn test_pause_blocks_tick() {
        let mut session = started(1);
        assert!(session.tick());
        assert!(session.pause());
        assert!(!session.tick());
        assert!(!session.pause());
        assert_eq!(session.time_elapsed(), 1);
        assert!(session.toggle_pause());
        assert!(!session.is_paused());
        assert!(session.tick());
        assert_eq!(session.time_elapsed(), 2);
    }

    #[test]
    fn test_full_word_hint() {
        let mut session = started(1);
        let reveal = session.use_hint(HintKind::FullWord).unwrap();
        // Equal lengths: first word in level order
        assert_eq!(reveal, HintReveal::Word { word: "SNOW".to_owned() });
        assert_eq!(session.words_found(), 1);
        assert_eq!(session.hints_used(), 1);
    }

    #[test]
    fn test_found_word_clears_its_hints() {
        let mut session = started(1);
        let reveal = session.use_hint(HintKind::SingleLetter).unwrap();
        assert_eq!(reveal, HintReveal::Letter { cell: Coord::new(0, 1) });
        assert_eq!(session.hinted_cells(), &[Coord::new(0, 1)]);

        let cells = session.words()[0].cells.clone();
        session.word_found("SNOW", &cells);
        assert!(session.hinted_cells().is_empty());
    }

    #[test]
    fn test_letter_hints_exhaust() {
        let mut session = started(1);
        let mut count = 0u32;
        while session.use_hint(HintKind::SingleLetter).is_some() {
            count += 1;
            assert!(count <= 16, "hints never ran out");
        }
        // SNOW, GLEN and TREE share no cells
        assert_eq!(count, 12);
        assert_eq!(session.hinted_cells().len(), 12);
        assert!(session.use_hint(HintKind::SingleLetter).is_none());
        assert_eq!(session.hints_used(), 12);
        assert!(session.is_playing());
    }

    #[test]
    fn test_hints_after_completion_are_noops() {
        let mut session = started(1);
        find_all(&mut session);
        assert!(session.use_hint(HintKind::SingleLetter).is_none());
        assert!(session.use_hint(HintKind::FullWord).is_none());
    }

    #[test]
    fn test_begin_rejects_failed_grid() {
        let catalog = LevelCatalog::new();
        let (level, block) = catalog.level_with_block(1, Language::En).unwrap();
        let mut session = GameSession::new();
        let err = session
            .begin(level.clone(), block.clone(), PackedGrid::failed(4, 100))
            .unwrap_err();
        assert_eq!(err, StartError::Unpackable { level_id: 1 });
        assert_eq!(session.phase(), Phase::Idle);

        let wrong = generate_grid(5, &level.words, PackSeed::Fixed(1));
        assert!(matches!(
            session.begin(level, block, wrong),
            Err(StartError::GridMismatch { expected: 4, actual: 5, .. })
        ));
    }

    #[test]
    fn test_pack_level_succeeds_first_seed() {
        let catalog = LevelCatalog::new();
        let level = catalog.level(137, Language::En);
        let packed = pack_level(&level).unwrap();
        assert_eq!(packed, generate_grid(6, &level.words, PackSeed::Fixed(137)));
    }

    fn starved_packer() -> GridPacker {
        GridPacker::new(PackerConfig {
            max_retries: 1,
            small_grid_attempts: 5,
            ..PackerConfig::default()
        })
    }

    #[test]
    fn test_pack_level_falls_back_to_second_seed() {
        let catalog = LevelCatalog::new();
        let level = catalog.level(1, Language::En);
        let packer = starved_packer();
        assert!(packer.pack(4, &level.words, PackSeed::Fixed(1)).is_failure());

        let packed = pack_level_with(&packer, &level).unwrap();
        assert!(packed.covers(&level.words));
        assert_eq!(packed, packer.pack(4, &level.words, PackSeed::Fixed(10_000)));
    }

    #[test]
    fn test_pack_level_gives_up() {
        let catalog = LevelCatalog::new();
        let mut level = (*catalog.level(1, Language::En)).clone();
        level.words.push("AVALANCHE".to_owned());
        assert!(pack_level(&level).is_none());
    }

    #[test]
    fn test_start_unpackable_stays_idle() {
        let catalog = LevelCatalog::new();
        let mut session = started(3);
        let never = GridPacker::new(PackerConfig {
            max_retries: 0,
            ..PackerConfig::default()
        });
        let err = session.start_with(&catalog, &never, 7, Language::En).unwrap_err();
        assert_eq!(err, StartError::Unpackable { level_id: 7 });
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.level().is_none());
        assert!(session.grid().is_none());

        session.start_with(&catalog, &starved_packer(), 1, Language::En).unwrap();
        assert!(session.is_playing());
    }

    #[test]
    fn test_leave_resets() {
        let mut session = started(1);
        session.tick();
        session.leave();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.grid().is_none());
        assert!(session.words().is_empty());
        assert_eq!(session.time_elapsed(), 0);
    }

    #[test]
    fn test_word_color_palette() {
        assert_eq!(word_color(1, 0), "#e879f9");
        assert_eq!(word_color(1, 12), word_color(1, 0));
    }
}
