//! Core board types: configuration, positions, cells, moves, RNG.
//!
//! These are plain values with no game logic beyond geometry. The rules that
//! tie them together live in `rules`.

pub mod config;
pub mod position;
pub mod board;
pub mod action;
pub mod rng;

pub use config::{BoardConfig, ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_HISTORY_DEPTH};
pub use position::{Direction, Position};
pub use board::{Board, CellState};
pub use action::Move;
pub use rng::GameRng;
