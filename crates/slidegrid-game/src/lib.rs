//! Session layer for the slidegrid engine.
//!
//! A [`Session`] owns one long-lived board and its random generator, and
//! exposes the operations an external driver (a CLI, a tool-invocation
//! layer) calls with primitive arguments: start a game at a
//! [`Difficulty`], apply moves by direction or wire code, query a
//! [`Status`], ask for a hint. Results come back as plain values — the
//! engine never formats text for display.
//!
//! # Example
//!
//! ```
//! use slidegrid_game::{Difficulty, Session};
//!
//! let mut session = Session::with_seed(3, 42)?;
//! session.start(Difficulty::Easy);
//!
//! let status = session.status();
//! assert!(status.solvable);
//! assert!(!status.legal_moves.is_empty());
//! # Ok::<(), slidegrid_core::BoardError>(())
//! ```

mod difficulty;
mod session;

pub use self::{
    difficulty::{Difficulty, UnknownDifficulty},
    session::{MoveOutcome, Session, Status},
};
