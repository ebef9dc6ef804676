use std::ops::Index;

use crate::Position;

/// An owned snapshot of board contents.
///
/// Cells are stored row-major; each label in `0..size²` appears exactly
/// once and `0` marks the blank. A `Grid` is immutable once constructed,
/// so the permutation invariant holds for every grid in existence and a
/// caller holding a snapshot can never reach the live board through it.
///
/// Snapshots come from [`Board::snapshot`] and friends, or from
/// [`Grid::from_cells`] when reconstructing a position from external data.
///
/// [`Board::snapshot`]: crate::Board::snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<usize>,
}

impl Grid {
    /// Builds a grid from row-major cells, validating the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size < 2`,
    /// [`GridError::CellCount`] if `cells.len() != size²`, and
    /// [`GridError::NotAPermutation`] unless every label in `0..size²`
    /// appears exactly once.
    pub fn from_cells(size: usize, cells: Vec<usize>) -> Result<Self, GridError> {
        if size < 2 {
            return Err(GridError::InvalidSize { size });
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                size,
                expected,
                actual: cells.len(),
            });
        }
        let mut seen = vec![false; expected];
        for &label in &cells {
            if label >= expected || seen[label] {
                return Err(GridError::NotAPermutation { count: expected });
            }
            seen[label] = true;
        }
        Ok(Self { size, cells })
    }

    /// The goal configuration for the given side length.
    pub(crate) fn goal(size: usize) -> Self {
        Self {
            size,
            cells: (0..size * size).collect(),
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The label at `pos`, or `None` when `pos` is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<usize> {
        if pos.row() < self.size && pos.col() < self.size {
            Some(self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks_exact(self.size)
    }

    /// Whether the cells read `0, 1, …, size²-1` in row-major order.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, &label)| label == i)
    }

    /// Position of the given label.
    ///
    /// The permutation invariant guarantees a hit for labels below `size²`.
    #[must_use]
    pub fn position_of(&self, label: usize) -> Option<Position> {
        let index = self.cells.iter().position(|&cell| cell == label)?;
        Some(Position::new(index / self.size, index % self.size))
    }

    pub(crate) fn index_of(&self, pos: Position) -> usize {
        pos.row() * self.size + pos.col()
    }

    pub(crate) fn swap(&mut self, a: Position, b: Position) {
        let (a, b) = (self.index_of(a), self.index_of(b));
        self.cells.swap(a, b);
    }
}

impl Index<Position> for Grid {
    type Output = usize;

    fn index(&self, pos: Position) -> &usize {
        &self.cells[self.index_of(pos)]
    }
}

/// Errors from [`Grid::from_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The side length is below the 2×2 minimum.
    #[display("grid size must be at least 2, got {size}")]
    InvalidSize {
        /// The rejected side length.
        size: usize,
    },
    /// The cell vector does not hold `size²` entries.
    #[display("expected {expected} cells for size {size}, got {actual}")]
    CellCount {
        /// Side length the cells were validated against.
        size: usize,
        /// Required number of cells (`size²`).
        expected: usize,
        /// Number of cells actually supplied.
        actual: usize,
    },
    /// The cells are not a permutation of `0..size²`.
    #[display("cells must hold each label in 0..{count} exactly once")]
    NotAPermutation {
        /// Number of distinct labels required (`size²`).
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_reads_ascending() {
        let grid = Grid::goal(3);
        assert_eq!(grid.cells(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(grid.is_goal());
        assert_eq!(grid.position_of(0), Some(Position::new(0, 0)));
        assert_eq!(grid.position_of(5), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_rows_chunk_row_major() {
        let grid = Grid::goal(3);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[3, 4, 5][..], &[6, 7, 8][..]]);
    }

    #[test]
    fn test_from_cells_accepts_any_permutation() {
        let grid = Grid::from_cells(2, vec![3, 1, 2, 0]).unwrap();
        assert!(!grid.is_goal());
        assert_eq!(grid[Position::new(0, 0)], 3);
        assert_eq!(grid.position_of(0), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_from_cells_rejects_bad_input() {
        assert_eq!(
            Grid::from_cells(1, vec![0]),
            Err(GridError::InvalidSize { size: 1 })
        );
        assert_eq!(
            Grid::from_cells(2, vec![0, 1, 2]),
            Err(GridError::CellCount {
                size: 2,
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Grid::from_cells(2, vec![0, 1, 1, 3]),
            Err(GridError::NotAPermutation { count: 4 })
        );
        assert_eq!(
            Grid::from_cells(2, vec![0, 1, 2, 4]),
            Err(GridError::NotAPermutation { count: 4 })
        );
    }

    #[test]
    fn test_get_bounds_checks() {
        let grid = Grid::goal(2);
        assert_eq!(grid.get(Position::new(1, 1)), Some(3));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(0, 2)), None);
    }
}
