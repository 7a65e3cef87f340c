//! The board engine: legality, move application, undo/redo, terminal status.
//!
//! `BoardEngine` is a plain single-owner state machine. Every operation runs
//! to completion synchronously; hosts that share one across threads must
//! wrap the whole engine in a single lock.
//!
//! ## Error policy
//!
//! No input makes the engine panic. Illegal moves and undo/redo on an empty
//! stack leave state untouched. `try_apply_move` reports why a move was
//! refused; `apply_move` swallows the reason.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::error::MoveError;
use crate::core::{Board, BoardConfig, CellState, ConfigError, Direction, Move, Position};
use crate::history::History;

/// Classification of the current position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one legal move remains.
    #[default]
    InProgress,
    /// No legal move and exactly one piece left.
    Won,
    /// No legal move and more than one piece left.
    Lost,
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Result of an undo or redo request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryOutcome {
    /// The move was reversed (undo) or replayed (redo).
    Applied(Move),
    /// The stack was empty; nothing changed.
    RejectedEmpty,
}

impl HistoryOutcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, HistoryOutcome::Applied(_))
    }
}

/// Peg solitaire rules engine.
///
/// ## Example
///
/// ```
/// use peg_solitaire::core::Move;
/// use peg_solitaire::rules::{BoardEngine, GameStatus, HistoryOutcome};
///
/// let mut engine = BoardEngine::default();
/// assert_eq!(engine.remaining_pieces(), 32);
///
/// let opening = Move::from_coords((1, 3), (3, 3));
/// assert!(engine.is_legal_move(opening));
/// assert_eq!(engine.apply_move(opening), GameStatus::InProgress);
/// assert_eq!(engine.remaining_pieces(), 31);
///
/// assert_eq!(engine.undo(), HistoryOutcome::Applied(opening));
/// assert_eq!(engine.remaining_pieces(), 32);
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: BoardConfig,
    board: Board,
    history: History,
    /// Kept in step with the board's filled count on every transition.
    remaining: usize,
    status: GameStatus,
    started_at: Instant,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl BoardEngine {
    /// Create an engine in the starting position.
    ///
    /// Panics if `config` fails validation; use [`BoardEngine::try_new`] to
    /// handle that as an error.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid board config: {e}");
        }
        Self::build(config)
    }

    /// Create an engine, rejecting invalid configurations.
    pub fn try_new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: BoardConfig) -> Self {
        let mut engine = Self {
            config,
            board: Board::new(config.size),
            history: History::new(config.history_depth),
            remaining: 0,
            status: GameStatus::InProgress,
            started_at: Instant::now(),
        };
        engine.initialize();
        engine
    }

    // === Lifecycle ===

    /// Put the board back in the starting position.
    ///
    /// Fills every playable cell except the center, clears both history
    /// stacks, sets status to in-progress and restarts the session clock.
    pub fn initialize(&mut self) {
        self.board.fill_start();
        self.remaining = self.config.starting_pieces();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.started_at = Instant::now();
        self.debug_check_invariants();

        info!(
            size = self.config.size,
            pieces = self.remaining,
            "board initialized"
        );
    }

    /// Same as [`BoardEngine::initialize`].
    pub fn reset(&mut self) {
        self.initialize();
    }

    // === Legality ===

    /// Check every rule for `mv`, returning the jumped-over cell on success.
    pub fn validate_move(&self, mv: Move) -> Result<Position, MoveError> {
        let size = self.board.size();
        if !mv.from.in_bounds(size) || !mv.to.in_bounds(size) {
            return Err(MoveError::OutOfBounds(mv));
        }
        if !self.board.is(mv.from, CellState::Filled) {
            return Err(MoveError::SourceNotFilled(mv.from));
        }
        if !self.board.is(mv.to, CellState::Empty) {
            return Err(MoveError::DestinationNotEmpty(mv.to));
        }
        let mid = mv.midpoint().ok_or(MoveError::NotAJump(mv))?;
        if !self.board.is(mid, CellState::Filled) {
            return Err(MoveError::NothingToJump(mid));
        }
        Ok(mid)
    }

    /// Check whether `mv` is legal on the current board. No side effects.
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Legal jumps starting at `from`, in direction scan order.
    #[must_use]
    pub fn moves_from(&self, from: Position) -> SmallVec<[Move; 4]> {
        let size = self.board.size();
        if !self.board.is(from, CellState::Filled) {
            return SmallVec::new();
        }
        Direction::ALL
            .iter()
            .filter_map(|&dir| {
                let over = from.step(dir, 1, size)?;
                let to = from.step(dir, 2, size)?;
                (self.board.is(over, CellState::Filled) && self.board.is(to, CellState::Empty))
                    .then(|| Move::new(from, to))
            })
            .collect()
    }

    /// Every legal move, sources in row-major order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .iter()
            .filter(|&(_, state)| state == CellState::Filled)
            .flat_map(|(pos, _)| self.moves_from(pos))
            .collect()
    }

    /// Check whether any legal move exists.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.board
            .iter()
            .filter(|&(_, state)| state == CellState::Filled)
            .any(|(pos, _)| !self.moves_from(pos).is_empty())
    }

    // === Transitions ===

    /// Apply `mv` if legal, reporting why it was refused otherwise.
    ///
    /// On success the jump is made, the move is pushed onto the undo stack
    /// (evicting the oldest entry past the cap), the redo stack is cleared,
    /// one piece is removed and terminal status is re-evaluated.
    pub fn try_apply_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        let mid = self.validate_move(mv)?;
        self.jump_forward(mv, mid);
        self.history.record(mv);
        debug!(%mv, remaining = self.remaining, "move applied");
        Ok(self.check_terminal())
    }

    /// Apply `mv` if legal; illegal moves are silently ignored.
    ///
    /// Returns the status after the call either way.
    pub fn apply_move(&mut self, mv: Move) -> GameStatus {
        match self.try_apply_move(mv) {
            Ok(status) => status,
            Err(e) => {
                trace!(%e, "move ignored");
                self.status
            }
        }
    }

    /// Reverse the most recent move.
    ///
    /// Always leaves the game in progress, even if the restored position
    /// would itself be terminal.
    pub fn undo(&mut self) -> HistoryOutcome {
        let Some(mv) = self.history.take_undo() else {
            debug!("undo rejected: history empty");
            return HistoryOutcome::RejectedEmpty;
        };
        if let Some(mid) = mv.midpoint() {
            self.board.set(mv.from, CellState::Filled);
            self.board.set(mid, CellState::Filled);
            self.board.set(mv.to, CellState::Empty);
            self.remaining += 1;
        }
        self.status = GameStatus::InProgress;
        self.debug_check_invariants();
        debug!(%mv, remaining = self.remaining, "move undone");
        HistoryOutcome::Applied(mv)
    }

    /// Replay the most recently undone move.
    pub fn redo(&mut self) -> HistoryOutcome {
        let Some(mv) = self.history.take_redo() else {
            return HistoryOutcome::RejectedEmpty;
        };
        if let Some(mid) = mv.midpoint() {
            self.jump_forward(mv, mid);
        }
        debug!(%mv, remaining = self.remaining, "move redone");
        self.check_terminal();
        HistoryOutcome::Applied(mv)
    }

    /// Re-evaluate and store the terminal status.
    ///
    /// In progress while any piece can jump; otherwise won with one piece
    /// left and lost with more.
    pub fn check_terminal(&mut self) -> GameStatus {
        let status = if self.has_legal_move() {
            GameStatus::InProgress
        } else if self.remaining == 1 {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };

        if status.is_over() && !self.status.is_over() {
            info!(%status, remaining = self.remaining, "game over");
        }
        self.status = status;
        status
    }

    fn jump_forward(&mut self, mv: Move, mid: Position) {
        self.board.set(mv.from, CellState::Empty);
        self.board.set(mid, CellState::Empty);
        self.board.set(mv.to, CellState::Filled);
        self.remaining -= 1;
        self.debug_check_invariants();
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(
            self.remaining,
            self.board.filled_count(),
            "remaining piece count out of step with board"
        );
        debug_assert!(self.remaining >= 1, "board emptied of pieces");
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State of the cell at `pos`, or `None` if off the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        self.board.get(pos)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn remaining_pieces(&self) -> usize {
        self.remaining
    }

    /// Status as of the last transition.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_len()
    }

    /// Cap shared by the undo and redo stacks.
    #[must_use]
    pub fn history_cap(&self) -> usize {
        self.history.depth()
    }

    /// Most recent undoable move.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last_move()
    }

    /// When the current game was initialized.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Time between initialization and `now`. Zero if `now` is earlier.
    #[must_use]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::from_coords(from, to)
    }

    #[test]
    fn test_initial_position() {
        let engine = BoardEngine::default();

        assert_eq!(engine.remaining_pieces(), 32);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.cell(Position::new(3, 3)), Some(CellState::Empty));
        assert_eq!(engine.undo_depth(), 0);
        assert_eq!(engine.redo_depth(), 0);
        assert_eq!(engine.history_cap(), 3);
    }

    #[test]
    fn test_opening_moves() {
        let engine = BoardEngine::default();
        assert_eq!(
            engine.legal_moves(),
            vec![
                mv((1, 3), (3, 3)),
                mv((3, 1), (3, 3)),
                mv((3, 5), (3, 3)),
                mv((5, 3), (3, 3)),
            ]
        );
    }

    #[test]
    fn test_validate_reports_first_violation() {
        let engine = BoardEngine::default();

        assert_eq!(
            engine.validate_move(mv((1, 3), (7, 3))),
            Err(MoveError::OutOfBounds(mv((1, 3), (7, 3))))
        );
        assert_eq!(
            engine.validate_move(mv((3, 3), (1, 3))),
            Err(MoveError::SourceNotFilled(Position::new(3, 3)))
        );
        assert_eq!(
            engine.validate_move(mv((0, 0), (3, 3))),
            Err(MoveError::SourceNotFilled(Position::new(0, 0)))
        );
        assert_eq!(
            engine.validate_move(mv((3, 1), (3, 2))),
            Err(MoveError::DestinationNotEmpty(Position::new(3, 2)))
        );
        assert_eq!(
            engine.validate_move(mv((1, 1), (3, 3))),
            Err(MoveError::SourceNotFilled(Position::new(1, 1)))
        );
        assert_eq!(
            engine.validate_move(mv((2, 2), (3, 3))),
            Err(MoveError::NotAJump(mv((2, 2), (3, 3))))
        );
        assert_eq!(engine.validate_move(mv((1, 3), (3, 3))), Ok(Position::new(2, 3)));
    }

    #[test]
    fn test_nothing_to_jump() {
        let mut engine = BoardEngine::default();
        engine.apply_move(mv((1, 3), (3, 3)));
        // (2,3) is now empty; (0,3) -> (2,3) has nothing at (1,3) to jump
        assert_eq!(
            engine.validate_move(mv((0, 3), (2, 3))),
            Err(MoveError::NothingToJump(Position::new(1, 3)))
        );
    }

    #[test]
    fn test_apply_and_undo() {
        let mut engine = BoardEngine::default();
        let before = engine.board().clone();

        engine.apply_move(mv((5, 3), (3, 3)));
        assert_eq!(engine.cell(Position::new(5, 3)), Some(CellState::Empty));
        assert_eq!(engine.cell(Position::new(4, 3)), Some(CellState::Empty));
        assert_eq!(engine.cell(Position::new(3, 3)), Some(CellState::Filled));
        assert_eq!(engine.remaining_pieces(), 31);
        assert_eq!(engine.last_move(), Some(mv((5, 3), (3, 3))));

        assert!(engine.undo().is_applied());
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.remaining_pieces(), 32);
        assert_eq!(engine.redo_depth(), 1);
    }

    #[test]
    fn test_illegal_move_ignored() {
        let mut engine = BoardEngine::default();
        let before = engine.board().clone();

        assert_eq!(engine.apply_move(mv((0, 0), (2, 0))), GameStatus::InProgress);
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.remaining_pieces(), 32);
        assert_eq!(engine.undo_depth(), 0);
    }

    #[test]
    fn test_undo_empty() {
        let mut engine = BoardEngine::default();
        assert_eq!(engine.undo(), HistoryOutcome::RejectedEmpty);
        assert_eq!(engine.redo(), HistoryOutcome::RejectedEmpty);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = BoardEngine::default();
        engine.apply_move(mv((1, 3), (3, 3)));
        engine.apply_move(mv((4, 3), (2, 3)));
        engine.undo();

        engine.reset();
        assert_eq!(engine.board(), &Board::new(7));
        assert_eq!(engine.remaining_pieces(), 32);
        assert_eq!(engine.undo_depth(), 0);
        assert_eq!(engine.redo_depth(), 0);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_moves_from() {
        let engine = BoardEngine::default();
        assert_eq!(
            engine.moves_from(Position::new(1, 3)).as_slice(),
            &[mv((1, 3), (3, 3))]
        );
        assert!(engine.moves_from(Position::new(0, 3)).is_empty());
        assert!(engine.moves_from(Position::new(3, 3)).is_empty());
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let err = BoardEngine::try_new(BoardConfig::new().with_size(6)).unwrap_err();
        assert_eq!(err, ConfigError::SizeNotOdd(6));
    }

    #[test]
    #[should_panic(expected = "invalid board config")]
    fn test_new_panics_on_bad_config() {
        let _ = BoardEngine::new(BoardConfig::new().with_history_depth(0));
    }

    #[test]
    fn test_larger_board() {
        let engine = BoardEngine::new(BoardConfig::new().with_size(9));
        assert_eq!(engine.remaining_pieces(), 64);
        assert_eq!(engine.legal_moves().len(), 4);
    }

    #[test]
    fn test_elapsed_at() {
        let engine = BoardEngine::default();
        let later = engine.started_at() + Duration::from_secs(75);
        assert_eq!(engine.elapsed_at(later), Duration::from_secs(75));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won.to_string(), "won");
        assert!(GameStatus::Lost.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }
}
