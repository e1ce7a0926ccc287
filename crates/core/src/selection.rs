//! Selection module - maps a drag gesture to a straight line of cells
//!
//! Runs on every pointer move, so the line lives in a fixed-capacity
//! [`ArrayVec`] and nothing here allocates. A drag that is not horizontal,
//! vertical or 45° diagonal collapses to the start cell.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Coord, MAX_GRID_SIZE};

/// Cells of one straight selection, at most one grid side long
pub type Line = ArrayVec<Coord, MAX_GRID_SIZE>;

/// Straight line from `start` to `end`, both inclusive.
///
/// Returns `[start]` when the two cells are equal or not on a common row,
/// column or diagonal.
///
/// # Examples
///
/// ```
/// use word_search_core::cells_between;
/// use word_search_core::types::Coord;
///
/// let diag = cells_between(Coord::new(0, 0), Coord::new(2, 2));
/// assert_eq!(diag.as_slice(), &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
///
/// let knight = cells_between(Coord::new(0, 0), Coord::new(2, 3));
/// assert_eq!(knight.as_slice(), &[Coord::new(0, 0)]);
/// ```
pub fn cells_between(start: Coord, end: Coord) -> Line {
    let mut line = Line::new();
    cells_between_into(start, end, &mut line);
    line
}

/// Same as [`cells_between`] but writes into a caller-owned buffer
pub fn cells_between_into(start: Coord, end: Coord, out: &mut Line) {
    out.clear();
    let dr = end.row as i32 - start.row as i32;
    let dc = end.col as i32 - start.col as i32;
    let steps = dr.abs().max(dc.abs());

    let straight = dr == 0 || dc == 0 || dr.abs() == dc.abs();
    if steps == 0 || !straight || steps as usize >= MAX_GRID_SIZE {
        out.push(start);
        return;
    }

    let (ir, ic) = (dr / steps, dc / steps);
    for i in 0..=steps {
        let row = start.row as i32 + i * ir;
        let col = start.col as i32 + i * ic;
        out.push(Coord::new(row as u8, col as u8));
    }
}

/// Letters along `cells`, `None` if any cell is blank or off the grid
pub fn read_line(grid: &Grid, cells: &[Coord]) -> Option<String> {
    grid.read_line(cells)
}

/// Drag state for one grid
///
/// `begin` anchors the drag, every `update` recomputes the line and
/// `finish` hands the final line to the caller. Coordinates outside the grid
/// collapse the line to the anchor cell.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    size: usize,
    anchor: Option<Coord>,
    end: Option<Coord>,
    line: Line,
}

impl SelectionTracker {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            anchor: None,
            end: None,
            line: Line::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a drag is in progress
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Coord> {
        self.anchor
    }

    /// Current line (empty when idle)
    pub fn line(&self) -> &[Coord] {
        &self.line
    }

    /// Start a drag. Returns false (and stays idle) if `at` is off the grid.
    pub fn begin(&mut self, at: Coord) -> bool {
        self.cancel();
        if !at.in_bounds(self.size) {
            return false;
        }
        self.anchor = Some(at);
        self.line.push(at);
        true
    }

    /// Move the drag end to `to` and return the resulting line
    pub fn update(&mut self, to: Coord) -> &[Coord] {
        let Some(anchor) = self.anchor else {
            return &self.line;
        };
        if self.end == Some(to) {
            return &self.line;
        }
        self.end = Some(to);
        if to.in_bounds(self.size) {
            cells_between_into(anchor, to, &mut self.line);
        } else {
            self.line.clear();
            self.line.push(anchor);
        }
        &self.line
    }

    /// End the drag and take its line.
    ///
    /// A press that never moved yields `None`, like a tap.
    pub fn finish(&mut self) -> Option<Line> {
        let line = if self.anchor.is_some() && self.end.is_some() {
            Some(std::mem::take(&mut self.line))
        } else {
            None
        };
        self.cancel();
        line
    }

    /// Drop the current drag without producing a line
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.end = None;
        self.line.clear();
    }
}
