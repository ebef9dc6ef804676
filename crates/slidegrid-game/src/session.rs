use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use slidegrid_core::{Board, BoardError, Direction, DirectionCodeError, Grid};
use slidegrid_hint::{Advisor as _, GreedyAdvisor, Hint};

use crate::Difficulty;

/// A full report of the current board, returned by [`Session::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Snapshot of the current contents.
    pub grid: Grid,
    /// Whether the goal configuration is reached.
    pub solved: bool,
    /// Manhattan distance to the goal.
    pub distance: usize,
    /// Legal directions in canonical `Up, Down, Left, Right` order.
    pub legal_moves: Vec<Direction>,
    /// Whether the current arrangement can reach the goal at all.
    pub solvable: bool,
}

/// The outcome of a move attempt, returned by [`Session::apply_move`] and
/// [`Session::apply_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the swap happened. `false` means the move was illegal and
    /// the board is unchanged.
    pub moved: bool,
    /// Snapshot after the attempt.
    pub grid: Grid,
    /// Whether the goal configuration is reached.
    pub solved: bool,
}

/// A long-lived game session: one board, one seeded random generator.
///
/// The driver owns exactly one `Session` per active game and threads it
/// into every call. Starting a new game re-shuffles the same board in
/// place; the session is never replaced mid-game.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    rng: Pcg64Mcg,
    seed: u64,
}

impl Session {
    /// Creates a session with a seed drawn from thread entropy.
    ///
    /// The board starts in goal order; call [`Session::start`] to shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size < 2`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_seed(size, rand::rng().random())
    }

    /// Creates a session with an explicit seed.
    ///
    /// Two sessions built from the same size and seed produce identical
    /// shuffle sequences.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size < 2`.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            rng: Pcg64Mcg::seed_from_u64(seed),
            seed,
        })
    }

    /// The seed this session's shuffles are derived from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Borrows the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts a new game at the given difficulty's shuffle depth.
    pub fn start(&mut self, difficulty: Difficulty) -> Grid {
        self.shuffle(difficulty.shuffle_count())
    }

    /// Resets to goal order, then applies an explicit number of shuffle
    /// moves. `shuffle(0)` leaves the goal order exactly.
    pub fn shuffle(&mut self, shuffle_count: usize) -> Grid {
        self.board.reset(&mut self.rng, shuffle_count)
    }

    /// Snapshot of the current contents.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.board.snapshot()
    }

    /// The goal configuration for this session's board size.
    ///
    /// A pure query; the live contents are untouched.
    #[must_use]
    pub fn goal(&self) -> Grid {
        self.board.goal_grid()
    }

    /// Reports the current grid, solved flag, distance, legal moves, and
    /// solvability in one call.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            grid: self.board.snapshot(),
            solved: self.board.is_solved(),
            distance: self.board.manhattan_distance(),
            legal_moves: self.board.legal_moves().to_vec(),
            solvable: self.board.is_solvable(),
        }
    }

    /// Applies a direction to the board.
    ///
    /// Illegal moves are a normal outcome: `moved` is `false` and the
    /// grid in the outcome equals the grid before the call.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let moved = self.board.apply_move(direction);
        MoveOutcome {
            moved,
            grid: self.board.snapshot(),
            solved: self.board.is_solved(),
        }
    }

    /// Applies a wire-coded direction (`0..=3`, see [`Direction`]).
    ///
    /// # Errors
    ///
    /// Returns [`DirectionCodeError`] for codes outside `0..=3`; the
    /// board is untouched in that case.
    pub fn apply_code(&mut self, code: u8) -> Result<MoveOutcome, DirectionCodeError> {
        let direction = Direction::try_from(code)?;
        Ok(self.apply_move(direction))
    }

    /// Suggests a single move via the greedy one-step advisor.
    ///
    /// The board is restored bit-for-bit after the advisor's trial moves.
    pub fn hint(&mut self) -> Hint {
        GreedyAdvisor::new().suggest(&mut self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_with_equal_seeds_replay() {
        let mut a = Session::with_seed(4, 1234).unwrap();
        let mut b = Session::with_seed(4, 1234).unwrap();
        assert_eq!(a.start(Difficulty::Hard), b.start(Difficulty::Hard));
        assert_eq!(a.start(Difficulty::Easy), b.start(Difficulty::Easy));

        let mut c = Session::with_seed(4, 4321).unwrap();
        assert_ne!(a.start(Difficulty::Hard), c.start(Difficulty::Hard));
    }

    #[test]
    fn test_new_rejects_small_sizes() {
        assert_eq!(Session::new(1).unwrap_err(), BoardError::InvalidSize { size: 1 });
    }

    #[test]
    fn test_shuffle_zero_is_goal_order() {
        let mut session = Session::with_seed(3, 7).unwrap();
        session.start(Difficulty::Medium);
        let grid = session.shuffle(0);
        assert!(grid.is_goal());
        assert!(session.status().solved);
    }

    #[test]
    fn test_status_on_goal_board() {
        let session = Session::with_seed(3, 7).unwrap();
        let status = session.status();
        assert!(status.solved);
        assert!(status.solvable);
        assert_eq!(status.distance, 0);
        assert_eq!(status.legal_moves, [Direction::Up, Direction::Left]);
        assert!(status.grid.is_goal());
    }

    #[test]
    fn test_apply_code_maps_like_apply_move() {
        for (code, direction) in (0u8..).zip(Direction::ALL) {
            let mut by_code = Session::with_seed(3, 99).unwrap();
            let mut by_direction = Session::with_seed(3, 99).unwrap();
            by_code.start(Difficulty::Medium);
            by_direction.start(Difficulty::Medium);

            let a = by_code.apply_code(code).unwrap();
            let b = by_direction.apply_move(direction);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_apply_code_out_of_range_leaves_state_alone() {
        let mut session = Session::with_seed(3, 5).unwrap();
        session.start(Difficulty::Easy);
        let before = session.status();

        assert_eq!(
            session.apply_code(7),
            Err(DirectionCodeError { code: 7 })
        );
        assert_eq!(session.status(), before);
    }

    #[test]
    fn test_illegal_move_is_reported_not_raised() {
        let mut session = Session::with_seed(3, 5).unwrap();
        let outcome = session.apply_move(Direction::Down);
        assert!(!outcome.moved);
        assert!(outcome.grid.is_goal());
        assert!(outcome.solved);
    }

    #[test]
    fn test_solving_move_flips_the_solved_flag() {
        let mut session = Session::with_seed(3, 5).unwrap();
        session.apply_move(Direction::Up);
        assert!(!session.status().solved);

        let outcome = session.apply_move(Direction::Down);
        assert!(outcome.moved);
        assert!(outcome.solved);

        // Solved is not absorbing: play continues after the goal.
        let outcome = session.apply_move(Direction::Up);
        assert!(outcome.moved);
        assert!(!outcome.solved);
    }

    #[test]
    fn test_hint_round_trip_near_goal() {
        let mut session = Session::with_seed(3, 5).unwrap();
        session.apply_move(Direction::Left);
        assert_eq!(
            session.hint(),
            Hint::Move {
                direction: Direction::Right,
                distance: 0
            }
        );
        // The hint itself did not move anything.
        assert_eq!(session.status().distance, 1);

        session.apply_move(Direction::Right);
        assert_eq!(session.hint(), Hint::AlreadySolved);
    }

    #[test]
    fn test_goal_preview_does_not_mutate() {
        let mut session = Session::with_seed(4, 17).unwrap();
        session.start(Difficulty::Hard);
        let before = session.grid();
        assert!(session.goal().is_goal());
        assert_eq!(session.grid(), before);
    }
}
