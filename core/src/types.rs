use serde::{Deserialize, Serialize};

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, column)`, row 0 at the top.
pub type Coord2 = (Coord, Coord);

pub const ROWS: Coord = 6;
pub const COLUMNS: Coord = 7;
pub const WINNING_LENGTH: usize = 4;

/// Board dimensions as `(rows, columns)`.
pub const SIZE: Coord2 = (ROWS, COLUMNS);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((row, column): Coord2) -> bool {
    row < ROWS && column < COLUMNS
}

/// The four line orientations a win can lie on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Step taken when scanning forward along the line, as `(d_row, d_column)`.
    pub const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Horizontal => (0, 1),
            Vertical => (1, 0),
            Diagonal => (1, 1),
            AntiDiagonal => (1, -1),
        }
    }

    /// First cell of the line through `coords`, i.e. the cell scanning starts from.
    ///
    /// For the diagonals this is `min(row, column)` (or `min(row, 6 - column)`)
    /// steps back from `coords`.
    pub const fn anchor(self, (row, column): Coord2) -> Coord2 {
        use Direction::*;
        match self {
            Horizontal => (row, 0),
            Vertical => (0, column),
            Diagonal => {
                let back = if row < column { row } else { column };
                (row - back, column - back)
            }
            AntiDiagonal => {
                let to_edge = COLUMNS - 1 - column;
                let back = if row < to_edge { row } else { to_edge };
                (row - back, column + back)
            }
        }
    }

    /// Every cell of the line through `coords`, from its anchor to the far edge.
    pub fn line_through(self, coords: Coord2) -> LineIter {
        LineIter::new(self.anchor(coords), self.delta())
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
fn apply_delta(coords: Coord2, delta: (isize, isize)) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    let next_column = column.checked_add_signed(d_column.try_into().ok()?)?;
    let next = (next_row, next_column);

    in_bounds(next).then_some(next)
}

#[derive(Debug, Clone)]
pub struct LineIter {
    next: Option<Coord2>,
    delta: (isize, isize),
}

impl LineIter {
    fn new(start: Coord2, delta: (isize, isize)) -> Self {
        Self {
            next: in_bounds(start).then_some(start),
            delta,
        }
    }
}

impl Iterator for LineIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = apply_delta(current, self.delta);
        Some(current)
    }
}
