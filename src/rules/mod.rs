//! Peg solitaire rules.
//!
//! - `engine`: the stateful board engine (legality, moves, undo/redo, status)
//! - `error`: typed reasons for rejecting a move
//! - `playout`: random legal-move playouts

pub mod engine;
pub mod error;
pub mod playout;

pub use engine::{BoardEngine, GameStatus, HistoryOutcome};
pub use error::MoveError;
pub use playout::{random_playout, PlayoutSummary};
