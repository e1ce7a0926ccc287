//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the puzzle core.
//! All types are plain data with serde derives, so they can flow unchanged from
//! the packer into a session and out into a persisted snapshot.
//!
//! # Grid Dimensions
//!
//! Grids are square. The difficulty tier decides the side length:
//!
//! | Tier | Grid | Words | Reward | 3★ ≤ | 2★ ≤ |
//! |------|------|-------|--------|------|------|
//! | Easy | 4x4 | 3 | 10 | 30s | 60s |
//! | Medium | 5x5 | 4 | 15 | 45s | 90s |
//! | Hard | 6x6 | 6 | 20 | 75s | 150s |
//! | Expert | 8x8 | 8 | 25 | 120s | 240s |
//!
//! Anything slower than the 2-star threshold earns 1 star.
//!
//! # Level Space
//!
//! - **Levels**: 1-based ids in `1..=1000`
//! - **Blocks ("worlds")**: 20 blocks of 50 contiguous levels, `block = (id - 1) / 50`
//! - **Tier inside a block**: positions 0-9 Easy, 10-24 Medium, 25-39 Hard, 40-49 Expert
//!
//! # Examples
//!
//! ```
//! use word_search_types::{Coord, Difficulty, HintKind, Language, MAX_GRID_SIZE};
//!
//! let tier = Difficulty::for_index_in_block(12);
//! assert_eq!(tier, Difficulty::Medium);
//! assert_eq!(tier.grid_size(), 5);
//!
//! assert_eq!(Language::from_str("ES"), Some(Language::Es));
//! assert_eq!(HintKind::from_str("full_word"), Some(HintKind::FullWord));
//!
//! let c = Coord::new(2, 3);
//! assert_eq!((c.row, c.col), (2, 3));
//! assert_eq!(MAX_GRID_SIZE, 8);
//! ```

use serde::{Deserialize, Serialize};

/// Largest supported grid side length
pub const MAX_GRID_SIZE: usize = 8;

/// Number of levels in one block (world)
pub const LEVELS_PER_BLOCK: u32 = 50;

/// Total number of levels in the catalog
pub const TOTAL_LEVELS: u32 = 1000;

/// Number of blocks (worlds) in the catalog
pub const TOTAL_BLOCKS: u32 = TOTAL_LEVELS.div_ceil(LEVELS_PER_BLOCK);

/// Seed stride between two packing retries (prime)
pub const RETRY_SEED_STRIDE: u32 = 7919;

/// Seed offset used for the second packing attempt when a level fails to pack
pub const FALLBACK_SEED_OFFSET: u32 = 9999;

/// Upper bound on packing retries for one call
pub const MAX_PACK_RETRIES: u32 = 100;

/// Retry index after which the wall-clock budget is enforced
pub const PACK_BAILOUT_RETRY: u32 = 50;

/// Wall-clock budget for one packing call (1 second)
pub const PACK_TIME_BUDGET_MS: u64 = 1000;

/// Placement attempts per word on grids up to `LARGE_GRID_THRESHOLD`
pub const SMALL_GRID_WORD_ATTEMPTS: u32 = 80;

/// Placement attempts per word on grids above `LARGE_GRID_THRESHOLD`
pub const LARGE_GRID_WORD_ATTEMPTS: u32 = 150;

/// Grids strictly larger than this use `LARGE_GRID_WORD_ATTEMPTS`
pub const LARGE_GRID_THRESHOLD: usize = 6;

/// Seed range used when the caller asks for a non-deterministic grid
pub const ENTROPY_SEED_RANGE: u32 = 10_000;

/// Coins awarded for replaying an already completed level
pub const REPLAY_REWARD_COINS: u32 = 5;

/// Score awarded for a first completion
pub const FIRST_COMPLETION_SCORE: u32 = 100;

/// Score awarded for a replay completion
pub const REPLAY_COMPLETION_SCORE: u32 = 20;

/// Coin cost of a single-letter hint
pub const HINT_COST_LETTER: u32 = 50;

/// Coin cost of a full-word hint
pub const HINT_COST_WORD: u32 = 150;

/// Coins a new player starts with
pub const STARTING_COINS: u32 = 200;

/// A level finished within this many seconds counts as "fast"
pub const FAST_LEVEL_SECS: u32 = 30;

/// Saved sessions older than this are discarded (24 hours)
pub const SESSION_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Letters used to fill unused grid cells
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The eight straight-line directions as `(d_row, d_col)`.
///
/// Order matters: the packer indexes into this table with seeded draws.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (-1, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (1, -1),
];

/// Highlight palette assigned to words (shuffled per level)
pub const WORD_COLORS: [&str; 12] = [
    "#f87171", "#fb923c", "#facc15", "#a3e635", "#34d399", "#22d3ee", "#60a5fa", "#818cf8",
    "#c084fc", "#e879f9", "#fb7185", "#2dd4bf",
];

/// Row/column position inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step `n` cells along `(d_row, d_col)`.
    ///
    /// Returns `None` when the result leaves `[0, size)²`.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_search_types::Coord;
    ///
    /// assert_eq!(Coord::new(0, 0).offset((1, 1), 3, 4), Some(Coord::new(3, 3)));
    /// assert_eq!(Coord::new(0, 0).offset((-1, 0), 1, 4), None);
    /// ```
    pub fn offset(self, dir: (i8, i8), n: usize, size: usize) -> Option<Self> {
        let row = self.row as i32 + dir.0 as i32 * n as i32;
        let col = self.col as i32 + dir.1 as i32 * n as i32;
        if row < 0 || col < 0 || row >= size as i32 || col >= size as i32 {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }

    /// Whether this coordinate lies inside a grid of side `size`
    pub fn in_bounds(self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

/// A letter slot in the grid
///
/// - `None`: blank (only seen mid-generation or in a failed grid)
/// - `Some(char)`: uppercase letter
pub type Letter = Option<char>;

/// Read-only view of one grid cell with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Letter,
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Time thresholds (seconds, inclusive) for 3 and 2 stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarThresholds {
    pub three_star_secs: u32,
    pub two_star_secs: u32,
}

/// Difficulty tier of a level
///
/// Each tier fixes the grid size, the number of hidden words, the coin reward
/// and the star thresholds. See the module table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Tier for a 0-based position inside a block
    pub fn for_index_in_block(index: u32) -> Self {
        match index {
            0..=9 => Difficulty::Easy,
            10..=24 => Difficulty::Medium,
            25..=39 => Difficulty::Hard,
            _ => Difficulty::Expert,
        }
    }

    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 5,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    pub fn word_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    /// Coins paid on first completion
    pub fn reward_coins(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
            Difficulty::Expert => 25,
        }
    }

    pub fn star_thresholds(&self) -> StarThresholds {
        let (three, two) = match self {
            Difficulty::Easy => (30, 60),
            Difficulty::Medium => (45, 90),
            Difficulty::Hard => (75, 150),
            Difficulty::Expert => (120, 240),
        };
        StarThresholds {
            three_star_secs: three,
            two_star_secs: two,
        }
    }

    /// Parse a tier name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use word_search_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Expert"), Some(Difficulty::Expert));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Word bank / world name language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Parse an ISO 639-1 code (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

/// Kind of hint a player can buy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    /// Reveal one cell of the hardest unfound word
    SingleLetter,
    /// Reveal the hardest unfound word outright
    FullWord,
}

impl HintKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single_letter" | "letter" => Some(HintKind::SingleLetter),
            "full_word" | "word" => Some(HintKind::FullWord),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HintKind::SingleLetter => "single_letter",
            HintKind::FullWord => "full_word",
        }
    }

    /// Coin cost charged by the progress ledger
    pub fn cost(&self) -> u32 {
        match self {
            HintKind::SingleLetter => HINT_COST_LETTER,
            HintKind::FullWord => HINT_COST_WORD,
        }
    }
}

/// Which screen a persisted session was saved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionView {
    Game,
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_space_partition() {
        assert_eq!(TOTAL_BLOCKS, 20);
        assert_eq!(TOTAL_BLOCKS * LEVELS_PER_BLOCK, TOTAL_LEVELS);
    }

    #[test]
    fn tier_table_matches_positions() {
        assert_eq!(Difficulty::for_index_in_block(0), Difficulty::Easy);
        assert_eq!(Difficulty::for_index_in_block(9), Difficulty::Easy);
        assert_eq!(Difficulty::for_index_in_block(10), Difficulty::Medium);
        assert_eq!(Difficulty::for_index_in_block(24), Difficulty::Medium);
        assert_eq!(Difficulty::for_index_in_block(25), Difficulty::Hard);
        assert_eq!(Difficulty::for_index_in_block(39), Difficulty::Hard);
        assert_eq!(Difficulty::for_index_in_block(40), Difficulty::Expert);
        assert_eq!(Difficulty::for_index_in_block(49), Difficulty::Expert);
    }

    #[test]
    fn word_count_never_exceeds_grid_size() {
        for tier in Difficulty::ALL {
            assert!(tier.word_count() <= tier.grid_size());
            assert!(tier.grid_size() <= MAX_GRID_SIZE);
        }
    }

    #[test]
    fn directions_are_unit_steps() {
        for (dr, dc) in DIRECTIONS {
            assert!((-1..=1).contains(&dr));
            assert!((-1..=1).contains(&dc));
            assert!(dr != 0 || dc != 0);
        }
    }

    #[test]
    fn star_thresholds_widen_with_difficulty() {
        let mut prev = 0;
        for tier in Difficulty::ALL {
            let t = tier.star_thresholds();
            assert!(t.three_star_secs < t.two_star_secs);
            assert!(t.three_star_secs > prev);
            prev = t.three_star_secs;
        }
    }
}
