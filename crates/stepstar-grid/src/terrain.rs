//! Terrain cost grid.
//!
//! Every cell holds a movement cost from 0 to 9. Cells at or above the
//! configured impassable threshold (9 by default) cannot be entered, and
//! reading outside the grid yields [`TerrainGrid::OUTSIDE`] so the border
//! behaves like a wall.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Bounds, Position};

/// Errors from building a [`TerrainGrid`] out of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// No rows were given.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a decimal digit.
    InvalidCell { ch: char, pos: Position },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "terrain has no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::InvalidCell { ch, pos } => {
                write!(f, "invalid terrain cell {ch:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for TerrainError {}

/// A rectangular grid of per-cell movement costs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    bounds: Bounds,
    cells: Vec<u8>,
}

impl TerrainGrid {
    /// Cost reported for positions outside the grid.
    pub const OUTSIDE: u8 = 9;

    /// Create a grid with every cell set to `cost`.
    pub fn new(width: i32, height: i32, cost: u8) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            bounds,
            cells: vec![cost; bounds.len()],
        }
    }

    /// Build a grid from rows of digits, one digit per cell.
    ///
    /// Leading and trailing whitespace on each row is ignored.
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self, TerrainError> {
        let Some(first) = rows.first() else {
            return Err(TerrainError::Empty);
        };
        let width = first.as_ref().trim().chars().count();
        if width == 0 {
            return Err(TerrainError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim();
            let found = row.chars().count();
            if found != width {
                return Err(TerrainError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let digit = ch.to_digit(10).ok_or(TerrainError::InvalidCell {
                    ch,
                    pos: Position::new(x as i32, y as i32),
                })?;
                cells.push(digit as u8);
            }
        }

        Ok(Self {
            bounds: Bounds::new(width as i32, rows.len() as i32),
            cells,
        })
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Cost of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Position) -> Option<u8> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Cost of the cell at `p`, [`OUTSIDE`](Self::OUTSIDE) outside the grid.
    #[inline]
    pub fn cost(&self, p: Position) -> u8 {
        self.get(p).unwrap_or(Self::OUTSIDE)
    }

    /// Set the cost at `p`. Returns `false` (and does nothing) outside the
    /// grid.
    pub fn set(&mut self, p: Position, cost: u8) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = cost;
                true
            }
            None => false,
        }
    }

    /// Iterate over every cell as `(position, cost)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for TerrainGrid {
    type Err = TerrainError;

    /// One line per row; blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.bounds.width.max(1) as usize) {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digit_rows() {
        let t = TerrainGrid::from_rows(&["123", "456"]).unwrap();
        assert_eq!(t.bounds(), Bounds::new(3, 2));
        assert_eq!(t.get(Position::new(0, 0)), Some(1));
        assert_eq!(t.get(Position::new(2, 1)), Some(6));
        assert_eq!(t.get(Position::new(3, 1)), None);
    }

    #[test]
    fn outside_reads_as_wall() {
        let t = TerrainGrid::new(2, 2, 1);
        assert_eq!(t.cost(Position::new(-1, 0)), TerrainGrid::OUTSIDE);
        assert_eq!(t.cost(Position::new(0, 2)), TerrainGrid::OUTSIDE);
        assert_eq!(t.cost(Position::new(1, 1)), 1);
    }

    #[test]
    fn rejects_bad_input() {
        let rows: [&str; 0] = [];
        assert_eq!(TerrainGrid::from_rows(&rows), Err(TerrainError::Empty));
        assert_eq!(
            TerrainGrid::from_rows(&["111", "11"]),
            Err(TerrainError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        let err = TerrainGrid::from_rows(&["11", "1x"]).unwrap_err();
        assert_eq!(
            err,
            TerrainError::InvalidCell {
                ch: 'x',
                pos: Position::new(1, 1)
            }
        );
        assert_eq!(err.to_string(), "invalid terrain cell 'x' at (1, 1)");
    }

    #[test]
    fn from_str_and_display_agree() {
        let text = "\n1191\n1111\n\n";
        let t: TerrainGrid = text.parse().unwrap();
        assert_eq!(t.to_string(), "1191\n1111\n");
    }

    #[test]
    fn set_inside_only() {
        let mut t = TerrainGrid::new(3, 3, 1);
        assert!(t.set(Position::new(1, 1), 9));
        assert!(!t.set(Position::new(3, 0), 9));
        assert_eq!(t.iter().filter(|&(_, c)| c == 9).count(), 1);
    }
}
