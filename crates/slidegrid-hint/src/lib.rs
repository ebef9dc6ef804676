//! One-step greedy hinting for slidegrid boards.
//!
//! An [`Advisor`] looks at a board and suggests a single move. The shipped
//! implementation, [`GreedyAdvisor`], scores each legal move by the
//! Manhattan distance it leaves behind and picks the first strict
//! improvement in canonical direction order. It is a 1-ply local search,
//! not a planner: near the goal every legal move can tie or worsen the
//! distance, and the advisor reports that honestly instead of guessing.
//!
//! # Example
//!
//! ```
//! use slidegrid_core::{Board, Direction};
//! use slidegrid_hint::{Advisor as _, GreedyAdvisor, Hint};
//!
//! let mut board = Board::new(3)?;
//! board.apply_move(Direction::Up);
//!
//! // One move from goal, the inverse move solves the puzzle.
//! let hint = GreedyAdvisor::new().suggest(&mut board);
//! assert_eq!(hint, Hint::Move { direction: Direction::Down, distance: 0 });
//! # Ok::<(), slidegrid_core::BoardError>(())
//! ```

use slidegrid_core::{Board, Direction};

/// Outcome of a hint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Hint {
    /// A single move that strictly reduces the Manhattan distance.
    Move {
        /// The direction to apply.
        direction: Direction,
        /// The Manhattan distance after applying it.
        distance: usize,
    },
    /// The board is already in the goal configuration.
    AlreadySolved,
    /// No single move strictly reduces the distance.
    ///
    /// Distinct from [`Hint::AlreadySolved`]: the puzzle still needs work,
    /// but a one-move lookahead cannot make progress. This occurs
    /// transiently near the goal; callers must not assume it cannot.
    NoImprovement,
}

/// A hint strategy over a board.
///
/// `suggest` may mutate the board speculatively but must restore it
/// bit-for-bit before returning; callers must not interleave other
/// mutations with a `suggest` call.
pub trait Advisor {
    /// Suggests a single move for the given board.
    fn suggest(&self, board: &mut Board) -> Hint;
}

/// The 1-ply greedy advisor.
///
/// Tries every legal move against the live board using a
/// save/mutate/restore loop, keeping the first direction (in canonical
/// `Up, Down, Left, Right` order) that achieves the minimum resulting
/// distance, and only suggests it if that minimum strictly beats the
/// current distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyAdvisor;

impl GreedyAdvisor {
    /// Creates a new advisor.
    #[must_use]
    pub const fn new() -> Self {
        GreedyAdvisor
    }
}

impl Advisor for GreedyAdvisor {
    fn suggest(&self, board: &mut Board) -> Hint {
        if board.is_solved() {
            return Hint::AlreadySolved;
        }

        let base = board.manhattan_distance();
        let saved = board.snapshot();
        let mut best: Option<(Direction, usize)> = None;
        for direction in board.legal_moves() {
            board.apply_move(direction);
            let distance = board.manhattan_distance();
            board.restore(&saved);
            // Strict comparison: the first direction reaching a given
            // minimum wins ties.
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((direction, distance));
            }
        }

        match best {
            Some((direction, distance)) if distance < base => Hint::Move {
                direction,
                distance,
            },
            _ => Hint::NoImprovement,
        }
    }
}

#[cfg(test)]
mod tests {
    use slidegrid_core::Grid;

    use super::*;

    fn board_from(size: usize, cells: Vec<usize>) -> Board {
        Board::from_grid(Grid::from_cells(size, cells).unwrap())
    }

    #[test]
    fn test_solved_board_reports_already_solved() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(GreedyAdvisor::new().suggest(&mut board), Hint::AlreadySolved);
    }

    #[test]
    fn test_one_move_from_goal_suggests_the_inverse() {
        for direction in [Direction::Up, Direction::Left] {
            let mut board = Board::new(3).unwrap();
            board.apply_move(direction);
            let hint = GreedyAdvisor::new().suggest(&mut board);
            assert_eq!(
                hint,
                Hint::Move {
                    direction: direction.opposite(),
                    distance: 0
                }
            );
        }
    }

    #[test]
    fn test_suggest_restores_the_board() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(Direction::Up);
        board.apply_move(Direction::Left);
        let before = board.snapshot();
        let blank = board.blank();

        let _ = GreedyAdvisor::new().suggest(&mut board);
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.blank(), blank);
    }

    #[test]
    fn test_ties_break_in_canonical_order() {
        // Blank in the center; the tiles above, left, and right of it all
        // get one cell closer to home when swapped in, while the tile
        // below moves away. Down is the first improving direction.
        let mut board = board_from(3, vec![1, 7, 2, 5, 0, 3, 6, 8, 4]);
        assert_eq!(board.manhattan_distance(), 10);
        let hint = GreedyAdvisor::new().suggest(&mut board);
        assert_eq!(
            hint,
            Hint::Move {
                direction: Direction::Down,
                distance: 9
            }
        );
    }

    #[test]
    fn test_plateau_reports_no_improvement() {
        // Every neighbor of the blank already sits on its goal cell, so
        // each of the four moves worsens the distance by one.
        let mut board = board_from(3, vec![8, 1, 2, 3, 0, 5, 6, 7, 4]);
        assert!(board.is_solvable());
        let before = board.snapshot();

        let hint = GreedyAdvisor::new().suggest(&mut board);
        assert_eq!(hint, Hint::NoImprovement);
        assert_eq!(board.snapshot(), before);
    }
}
