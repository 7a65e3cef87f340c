//! # peg-solitaire
//!
//! A rules engine for English peg solitaire (the 33-hole cross board).
//!
//! ## Rules
//!
//! A piece jumps over an orthogonally adjacent piece into the empty cell
//! directly beyond it, and the jumped piece is removed. The game starts with
//! every hole filled except the center. It ends when no jump remains: won
//! with a single piece left, lost otherwise.
//!
//! ## Design
//!
//! - **Single owner**: `BoardEngine` is an ordinary value with no globals or
//!   interior mutability. Hosts call it from one thread.
//!
//! - **Total**: every operation is defined for every input. Illegal moves and
//!   empty-history undo/redo are no-ops; typed outcomes say what happened.
//!
//! - **Bounded history**: undo and redo stacks keep the most recent
//!   `history_depth` moves. A fresh move discards the redo stack.
//!
//! ## Modules
//!
//! - `core`: configuration, positions, cells, boards, moves, RNG
//! - `history`: capped undo/redo stacks
//! - `rules`: the board engine, move errors, random playouts
//! - `session`: host-side selection, hover, notifications, layout, snapshots

pub mod core;
pub mod history;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, CellState, ConfigError, Direction, GameRng, Move, Position,
};

pub use crate::history::{BoundedStack, History};

pub use crate::rules::{
    random_playout, BoardEngine, GameStatus, HistoryOutcome, MoveError, PlayoutSummary,
};

pub use crate::session::{
    BoardLayout, Command, CommandOutcome, GameSession, Notification, NotificationKind,
    SessionConfig, Snapshot,
};
