use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Cells of a completed line, ordered from the line's anchor outwards.
pub type WinningLine = SmallVec<[Coord2; COLUMNS as usize]>;

/// The 6×7 grid. Row 0 is the top, pieces settle toward row 5.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellState>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default(SIZE.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        SIZE
    }

    /// Panics if `coords` is off the board; use [`Board::get`] for unchecked input.
    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self[coords]
    }

    pub fn get(&self, coords: Coord2) -> Option<CellState> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Row a piece dropped into `column` would land on.
    pub fn lowest_empty_row(&self, column: Coord) -> Option<Coord> {
        if column >= COLUMNS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self[(row, column)].is_empty())
    }

    pub fn is_column_full(&self, column: Coord) -> bool {
        self.lowest_empty_row(column).is_none()
    }

    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|column| self.is_column_full(column))
    }

    pub fn piece_count(&self) -> u8 {
        self.cells
            .iter()
            .filter(|cell| !cell.is_empty())
            .count()
            .try_into()
            .unwrap_or(u8::MAX)
    }

    /// No occupied cell sits above an empty one.
    pub fn is_gravity_consistent(&self) -> bool {
        (0..COLUMNS).all(|column| {
            (1..ROWS).all(|row| {
                self[(row - 1, column)].is_empty() || !self[(row, column)].is_empty()
            })
        })
    }

    /// First run of at least [`WINNING_LENGTH`] cells along `direction` through
    /// `coords` that match the marker at `coords`.
    ///
    /// The whole line is scanned; the run does not have to touch `coords`.
    pub fn winning_run(&self, coords: Coord2, direction: Direction) -> Option<WinningLine> {
        let target = self.get(coords)?;
        if target.is_empty() {
            return None;
        }

        let mut run = WinningLine::new();
        for pos in direction.line_through(coords) {
            if self[pos] == target {
                run.push(pos);
            } else if run.len() >= WINNING_LENGTH {
                break;
            } else {
                run.clear();
            }
        }

        (run.len() >= WINNING_LENGTH).then_some(run)
    }

    pub(crate) fn place(&mut self, coords: Coord2, marker: CellState) {
        self.cells[coords.to_nd_index()] = marker;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = CellState;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
