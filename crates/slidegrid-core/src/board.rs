use rand::Rng;
use rand::RngExt;
use tinyvec::ArrayVec;

use crate::{Direction, Grid, Position};

/// A sliding-tile board: an `n×n` grid of labels `0..n²` with `0` as the
/// blank.
///
/// The shape is fixed for the board's lifetime; the contents mutate in
/// place. Exactly one cell holds the blank at all times — every mutation
/// is a swap, so the cell multiset is always the full label permutation.
///
/// Boards start in goal order (`0, 1, …, n²-1` row-major, blank at the
/// top-left). [`Board::reset`] re-shuffles the same instance in place; a
/// new game does not need a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    blank: Position,
}

impl Board {
    /// Creates a goal-ordered board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size < 2`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            grid: Grid::goal(size),
            blank: Position::new(0, 0),
        })
    }

    /// Adopts a validated snapshot as the live position.
    ///
    /// [`Grid`] upholds the permutation invariant by construction, so this
    /// conversion is total.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let blank = grid
            .position_of(0)
            .expect("grid invariant: exactly one blank cell");
        Self { grid, blank }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Current position of the blank cell.
    #[must_use]
    pub fn blank(&self) -> Position {
        self.blank
    }

    /// Returns an independent copy of the current contents.
    ///
    /// Two snapshots taken without an intervening mutation are equal, and
    /// holding a snapshot gives no access to the live cells.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// The goal configuration for this board's size, without touching the
    /// live contents.
    #[must_use]
    pub fn goal_grid(&self) -> Grid {
        Grid::goal(self.size())
    }

    /// Overwrites the live contents from a snapshot of the same size.
    ///
    /// Together with [`Board::snapshot`] this supports speculative play:
    /// save, mutate, read a metric, restore.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot's size differs from the board's.
    pub fn restore(&mut self, snapshot: &Grid) {
        assert_eq!(
            snapshot.size(),
            self.size(),
            "snapshot size must match board size"
        );
        self.grid = snapshot.clone();
        self.blank = snapshot
            .position_of(0)
            .expect("grid invariant: exactly one blank cell");
    }

    /// Resets to goal order, then applies `shuffle_count` random moves.
    ///
    /// Each draw picks uniformly from all four directions, not just the
    /// currently legal ones; an illegal draw is an inert swap attempt that
    /// still consumes one count. Shuffling by moves keeps the board
    /// solvable, though fewer than `shuffle_count` effective moves may
    /// occur. `reset(rng, 0)` leaves the goal order exactly.
    ///
    /// Returns the resulting snapshot.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, shuffle_count: usize) -> Grid {
        self.grid = Grid::goal(self.size());
        self.blank = Position::new(0, 0);
        for _ in 0..shuffle_count {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            self.apply_move(direction);
        }
        self.snapshot()
    }

    /// Attempts a move, returning whether the swap happened.
    ///
    /// Illegality is a normal outcome, not an error: the board is
    /// unchanged and `false` comes back. The direction-to-swap mapping is
    /// the one documented on [`Direction`] — `Up` swaps the blank with the
    /// cell below it, `Down` with the cell above, `Left` with the cell to
    /// its right, `Right` with the cell to its left.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let Some(target) = self.swap_target(direction) else {
            return false;
        };
        self.grid.swap(self.blank, target);
        self.blank = target;
        true
    }

    /// Whether the cells read `0, 1, …, size²-1` in row-major order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_goal()
    }

    /// Currently legal directions, in canonical `Up, Down, Left, Right`
    /// order.
    ///
    /// Consumers that tie-break over moves rely on this order.
    #[must_use]
    pub fn legal_moves(&self) -> ArrayVec<[Direction; 4]> {
        let mut moves = ArrayVec::new();
        for direction in Direction::ALL {
            if self.swap_target(direction).is_some() {
                moves.push(direction);
            }
        }
        moves
    }

    /// Sum over non-blank tiles of the taxicab distance to each tile's
    /// goal position. The blank contributes 0.
    ///
    /// A lower bound on the remaining move count, never exact against the
    /// optimal solve length (it ignores linear conflicts); its monotonic
    /// decrease is what hinting keys on.
    #[must_use]
    pub fn manhattan_distance(&self) -> usize {
        let size = self.size();
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label != 0)
            .map(|(index, &label)| {
                let pos = Position::new(index / size, index % size);
                pos.taxicab_to(Position::goal_of(label, size))
            })
            .sum()
    }

    /// Whether the current arrangement can reach the goal at all.
    ///
    /// Shuffling by moves preserves solvability, but [`Board::from_grid`]
    /// can adopt an arbitrary permutation. The check counts inversions
    /// among non-blank tiles: with the blank's goal on the top row, a
    /// horizontal blank move never changes inversion parity and a
    /// vertical one flips it `size - 1` times, so odd sides need an even
    /// inversion count and even sides need `inversions + blank_row` even.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let cells = self.grid.cells();
        let inversions: usize = cells
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label != 0)
            .map(|(index, &label)| {
                cells[index + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < label)
                    .count()
            })
            .sum();
        if self.size() % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank.row()) % 2 == 0
        }
    }

    fn swap_target(&self, direction: Direction) -> Option<Position> {
        let (row, col) = (self.blank.row(), self.blank.col());
        match direction {
            Direction::Up if row + 1 < self.size() => Some(Position::new(row + 1, col)),
            Direction::Down if row > 0 => Some(Position::new(row - 1, col)),
            Direction::Left if col + 1 < self.size() => Some(Position::new(row, col + 1)),
            Direction::Right if col > 0 => Some(Position::new(row, col - 1)),
            _ => None,
        }
    }
}

/// Errors from board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The side length is below the 2×2 minimum.
    #[display("board size must be at least 2, got {size}")]
    InvalidSize {
        /// The rejected side length.
        size: usize,
    },
}
