//! Packer module - places words into a square grid
//!
//! One packing call runs up to `max_retries` independent attempts. Attempt `r`
//! uses a fresh [`SeededRandom`] seeded with `seed + r * seed_stride`, so a given
//! `(size, words, seed)` always lands on the same attempt and the same grid.
//!
//! Inside an attempt, words are placed longest-first. Each word gets a fixed
//! number of random tries; every try draws a direction, then a row, then a
//! column (in that order, the draw order is part of the output contract).
//! A word that exhausts its tries abandons the attempt.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::rng::SeededRandom;
use crate::types::{
    Coord, ALPHABET, DIRECTIONS, ENTROPY_SEED_RANGE, LARGE_GRID_THRESHOLD,
    LARGE_GRID_WORD_ATTEMPTS, MAX_PACK_RETRIES, PACK_BAILOUT_RETRY, PACK_TIME_BUDGET_MS,
    RETRY_SEED_STRIDE, SMALL_GRID_WORD_ATTEMPTS,
};

/// Word -> ordered cells it occupies, in reading order
pub type Placements = BTreeMap<String, Vec<Coord>>;

/// Tuning knobs for [`GridPacker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackerConfig {
    pub max_retries: u32,
    pub seed_stride: u32,
    /// Retry index after which `time_budget` is enforced
    pub bailout_retry: u32,
    pub time_budget: Duration,
    pub small_grid_attempts: u32,
    pub large_grid_attempts: u32,
    /// Grids strictly larger than this use `large_grid_attempts`
    pub large_grid_threshold: usize,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_PACK_RETRIES,
            seed_stride: RETRY_SEED_STRIDE,
            bailout_retry: PACK_BAILOUT_RETRY,
            time_budget: Duration::from_millis(PACK_TIME_BUDGET_MS),
            small_grid_attempts: SMALL_GRID_WORD_ATTEMPTS,
            large_grid_attempts: LARGE_GRID_WORD_ATTEMPTS,
            large_grid_threshold: LARGE_GRID_THRESHOLD,
        }
    }
}

impl PackerConfig {
    /// Placement tries per word for a grid of side `size`
    pub fn attempts_for(&self, size: usize) -> u32 {
        if size > self.large_grid_threshold {
            self.large_grid_attempts
        } else {
            self.small_grid_attempts
        }
    }
}

/// Where the packing seed comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackSeed {
    /// Reproducible: the same seed always yields the same grid
    Fixed(u32),
    /// Every retry draws a fresh seed from the thread RNG
    Entropy,
}

impl From<u32> for PackSeed {
    fn from(seed: u32) -> Self {
        PackSeed::Fixed(seed)
    }
}

/// Result of one packing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedGrid {
    pub grid: Grid,
    pub placements: Placements,
    /// Index of the attempt that succeeded (`max_retries` on failure)
    pub retries: u32,
}

impl PackedGrid {
    /// All-blank grid with no placements
    pub fn failed(size: usize, retries: u32) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Placements::new(),
            retries,
        }
    }

    /// Whether packing gave up
    pub fn is_failure(&self) -> bool {
        !self.grid.is_filled()
    }

    /// Whether every word in `words` has a placement
    pub fn covers<S: AsRef<str>>(&self, words: &[S]) -> bool {
        !self.is_failure() && words.iter().all(|w| self.placements.contains_key(w.as_ref()))
    }
}

/// Seeded word packer
#[derive(Debug, Clone, Default)]
pub struct GridPacker {
    config: PackerConfig,
}

impl GridPacker {
    pub fn new(config: PackerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Pack `words` into a `size` x `size` grid.
    ///
    /// # Panics
    ///
    /// Panics when `size` is 0 or above the supported maximum.
    pub fn pack<S: AsRef<str>>(&self, size: usize, words: &[S], seed: PackSeed) -> PackedGrid {
        // Fail fast on a bad size even when there is nothing to place
        let _ = Grid::new(size);

        let mut sorted: Vec<Vec<char>> = words
            .iter()
            .map(|w| w.as_ref().chars().collect())
            .collect();
        // Stable: equal lengths keep caller order
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));

        let started = Instant::now();
        for retry in 0..self.config.max_retries {
            if retry > self.config.bailout_retry && started.elapsed() > self.config.time_budget {
                warn!(
                    "packing {} words into {size}x{size} ran out of time after {retry} retries",
                    sorted.len()
                );
                return PackedGrid::failed(size, retry);
            }

            let effective_seed = match seed {
                PackSeed::Fixed(base) => {
                    base.wrapping_add(retry.wrapping_mul(self.config.seed_stride))
                }
                PackSeed::Entropy => rand::thread_rng().gen_range(0..ENTROPY_SEED_RANGE),
            };

            match self.try_pack(size, &sorted, effective_seed) {
                Some((grid, placements)) => {
                    return PackedGrid {
                        grid,
                        placements,
                        retries: retry,
                    };
                }
                None => debug!("packing retry {retry} (seed {effective_seed}) failed"),
            }
        }

        warn!(
            "packing {} words into {size}x{size} failed after {} retries",
            sorted.len(),
            self.config.max_retries
        );
        PackedGrid::failed(size, self.config.max_retries)
    }

    /// One attempt with a single generator; `None` if some word did not fit
    fn try_pack(&self, size: usize, sorted: &[Vec<char>], seed: u32) -> Option<(Grid, Placements)> {
        let mut rng = SeededRandom::new(seed);
        let mut grid = Grid::new(size);
        let mut placements = Placements::new();
        let attempts = self.config.attempts_for(size);

        for word in sorted {
            let cells = (0..attempts).find_map(|_| {
                let dir = DIRECTIONS[rng.next_index(DIRECTIONS.len())];
                let origin = Coord::new(rng.next_index(size) as u8, rng.next_index(size) as u8);
                fit(&grid, word, origin, dir)
            })?;

            for (&coord, &ch) in cells.iter().zip(word) {
                grid.set(coord, Some(ch));
            }
            placements.insert(word.iter().collect(), cells);
        }

        grid.fill_blanks(|| ALPHABET[rng.next_index(ALPHABET.len())] as char);
        Some((grid, placements))
    }
}

/// Cells `word` would occupy from `origin` along `dir`, if it fits
fn fit(grid: &Grid, word: &[char], origin: Coord, dir: (i8, i8)) -> Option<Vec<Coord>> {
    word.iter()
        .enumerate()
        .map(|(i, &ch)| {
            let coord = origin.offset(dir, i, grid.size())?;
            match grid.letter(coord) {
                Some(existing) if existing != ch => None,
                _ => Some(coord),
            }
        })
        .collect()
}

/// Pack with the default configuration
pub fn generate_grid<S: AsRef<str>>(size: usize, words: &[S], seed: PackSeed) -> PackedGrid {
    GridPacker::default().pack(size, words, seed)
}
