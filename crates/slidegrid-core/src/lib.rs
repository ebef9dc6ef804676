//! Core types for the slidegrid sliding-tile puzzle engine.
//!
//! The central type is [`Board`], an `n×n` grid of tile labels
//! `0..n²` where `0` marks the blank cell. A board is created in goal
//! order, shuffled by applying random moves, and mutated in place by
//! [`Board::apply_move`]. [`Grid`] is the owned, immutable snapshot type
//! returned by every query that exposes board contents; callers can never
//! reach the live cells through one.
//!
//! # Example
//!
//! ```
//! use slidegrid_core::{Board, Direction};
//!
//! let mut board = Board::new(3)?;
//! assert!(board.is_solved());
//!
//! // From goal order the blank sits at the top-left corner, so only the
//! // tile below it and the tile to its right can slide in.
//! assert_eq!(board.legal_moves().as_slice(), [Direction::Up, Direction::Left]);
//!
//! assert!(board.apply_move(Direction::Up));
//! assert_eq!(board.manhattan_distance(), 1);
//!
//! assert!(board.apply_move(Direction::Down));
//! assert!(board.is_solved());
//! # Ok::<(), slidegrid_core::BoardError>(())
//! ```

mod board;
mod direction;
mod grid;
mod position;

pub use self::{
    board::{Board, BoardError},
    direction::{Direction, DirectionCodeError},
    grid::{Grid, GridError},
    position::Position,
};
