//! Grid module - square letter grid
//!
//! The grid is an NxN matrix of letter slots stored in a flat row-major vector.
//! Coordinates: (row, col) where both range over `0..size`, row 0 at the top.
//! A slot is blank (`None`) only while the packer is still working or when the
//! packer gave up; a finished grid has a letter in every slot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Cell, Coord, Letter, MAX_GRID_SIZE};

/// Square letter grid with flat storage
///
/// Deserialization rejects an unsupported size or a slot count other than
/// `size * size`, so every `Grid` in memory can be indexed safely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    /// Row-major slots (row * size + col)
    letters: Vec<Letter>,
}

/// Why a serialized grid was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size {0} is outside 1..=8")]
    UnsupportedSize(usize),
    #[error("grid of size {size} has {len} slots")]
    SlotCount { size: usize, len: usize },
}

/// Unchecked wire shape of a [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    letters: Vec<Letter>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if !(1..=MAX_GRID_SIZE).contains(&raw.size) {
            return Err(GridError::UnsupportedSize(raw.size));
        }
        if raw.letters.len() != raw.size * raw.size {
            return Err(GridError::SlotCount {
                size: raw.size,
                len: raw.letters.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            letters: raw.letters,
        })
    }
}

impl Grid {
    /// Create a blank grid.
    ///
    /// # Panics
    ///
    /// Panics when `size` is 0 or larger than [`MAX_GRID_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_GRID_SIZE).contains(&size),
            "grid size must be in 1..={MAX_GRID_SIZE}, got {size}"
        );
        Self {
            size,
            letters: vec![None; size * size],
        }
    }

    /// Build a grid from row strings (one char per cell, `'.'` or `' '` for blank)
    ///
    /// Returns `None` if the rows are not square or the size is unsupported.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = rows.len();
        if !(1..=MAX_GRID_SIZE).contains(&size) {
            return None;
        }
        let mut grid = Self::new(size);
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.as_ref().chars().collect();
            if chars.len() != size {
                return None;
            }
            for (c, ch) in chars.into_iter().enumerate() {
                let letter = match ch {
                    '.' | ' ' => None,
                    other => Some(other),
                };
                grid.letters[r * size + c] = letter;
            }
        }
        Some(grid)
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if !coord.in_bounds(self.size) {
            return None;
        }
        Some(coord.row as usize * self.size + coord.col as usize)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the slot at `coord`.
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Letter> {
        self.index(coord).map(|idx| self.letters[idx])
    }

    /// Letter at `coord`, `None` if blank or out of bounds
    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.get(coord).flatten()
    }

    /// Set the slot at `coord`.
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, letter: Letter) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.letters[idx] = letter;
                true
            }
            None => false,
        }
    }

    /// Whether `coord` is inside the grid and blank
    pub fn is_blank(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(None))
    }

    /// Whether every slot holds a letter
    pub fn is_filled(&self) -> bool {
        self.letters.iter().all(|l| l.is_some())
    }

    /// Whether every slot is blank
    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(|l| l.is_none())
    }

    /// Blank every slot
    pub fn clear(&mut self) {
        self.letters.iter_mut().for_each(|l| *l = None);
    }

    /// Fill every blank slot using `pick`, visited in row-major order
    pub fn fill_blanks(&mut self, mut pick: impl FnMut() -> char) {
        for slot in self.letters.iter_mut().filter(|l| l.is_none()) {
            *slot = Some(pick());
        }
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.letters.iter().enumerate().map(move |(idx, &letter)| Cell {
            letter,
            row: (idx / self.size) as u8,
            col: (idx % self.size) as u8,
        })
    }

    /// One string per row, blanks rendered as `'.'`
    pub fn rows(&self) -> Vec<String> {
        self.letters
            .chunks(self.size)
            .map(|row| row.iter().map(|l| l.unwrap_or('.')).collect())
            .collect()
    }

    /// Read the letters along `cells`.
    ///
    /// Returns `None` when any cell is out of bounds or blank.
    pub fn read_line(&self, cells: &[Coord]) -> Option<String> {
        cells.iter().map(|&c| self.letter(c)).collect()
    }
}
