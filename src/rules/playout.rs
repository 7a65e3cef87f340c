//! Random playouts.
//!
//! Plays uniformly random legal moves until the game ends or a move budget
//! runs out. Deterministic for a given RNG seed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{BoardEngine, GameStatus};
use crate::core::{GameRng, Move};

/// What a playout did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// Moves made, in order.
    pub moves: Vec<Move>,

    /// Status when the playout stopped.
    pub status: GameStatus,

    /// Pieces left when the playout stopped.
    pub remaining_pieces: usize,
}

impl PlayoutSummary {
    /// Check whether the playout reached the end of the game.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.status.is_over()
    }
}

/// Play up to `max_moves` random legal moves on `engine`.
///
/// Stops early when no legal move remains. The engine's history reflects
/// the moves made, subject to its usual cap.
pub fn random_playout(engine: &mut BoardEngine, rng: &mut GameRng, max_moves: usize) -> PlayoutSummary {
    let mut moves = Vec::new();

    while moves.len() < max_moves {
        let legal = engine.legal_moves();
        let Some(&mv) = rng.choose(&legal) else {
            break;
        };
        engine.apply_move(mv);
        moves.push(mv);
    }

    let status = engine.check_terminal();
    debug!(moves = moves.len(), %status, "playout finished");

    PlayoutSummary {
        moves,
        status,
        remaining_pieces: engine.remaining_pieces(),
    }
}
