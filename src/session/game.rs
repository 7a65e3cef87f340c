//! Host-side game session.
//!
//! Wraps a [`BoardEngine`] with the transient UI state the engine does not
//! own: the selected piece, the hovered cell, the window layout and timed
//! notifications.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::command::{Command, CommandOutcome};
use super::layout::BoardLayout;
use super::notification::{Notification, NotificationKind, DEFAULT_NOTIFICATION_DURATION};
use super::snapshot::Snapshot;
use crate::core::{BoardConfig, CellState, GameRng, Move, Position};
use crate::rules::{random_playout, BoardEngine, HistoryOutcome, PlayoutSummary};

/// Display settings for a session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long notifications stay visible.
    pub notification_duration: Duration,

    /// Initial window width in pixels.
    pub window_width: f64,

    /// Initial window height in pixels.
    pub window_height: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            window_width: 1000.0,
            window_height: 1000.0,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }
}

/// A game in progress plus its UI state.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: BoardEngine,
    layout: BoardLayout,
    config: SessionConfig,
    selection: Option<Position>,
    hover: Option<Position>,
    notification: Option<Notification>,
    quit_requested: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BoardConfig::default(), SessionConfig::default())
    }
}

impl GameSession {
    /// Create a session over a fresh engine.
    #[must_use]
    pub fn new(board: BoardConfig, config: SessionConfig) -> Self {
        Self::with_engine(BoardEngine::new(board), config)
    }

    /// Create a session over an existing engine.
    #[must_use]
    pub fn with_engine(engine: BoardEngine, config: SessionConfig) -> Self {
        let layout = BoardLayout::new(config.window_width, config.window_height, engine.size());
        Self {
            engine,
            layout,
            config,
            selection: None,
            hover: None,
            notification: None,
            quit_requested: false,
        }
    }

    // === Commands ===

    /// Handle a command at the current time.
    pub fn handle(&mut self, command: Command) -> CommandOutcome {
        self.handle_at(command, Instant::now())
    }

    /// Handle a command as if issued at `now`.
    pub fn handle_at(&mut self, command: Command, now: Instant) -> CommandOutcome {
        let outcome = match command {
            Command::Reset => {
                self.engine.reset();
                self.selection = None;
                self.notification = None;
                CommandOutcome::Reset
            }
            Command::SelectOrMove(pos) => self.select_or_move(pos),
            Command::Cancel => {
                if self.selection.take().is_some() {
                    CommandOutcome::Deselected
                } else {
                    CommandOutcome::Ignored
                }
            }
            Command::Undo => match self.engine.undo() {
                HistoryOutcome::Applied(mv) => CommandOutcome::Undone(mv),
                HistoryOutcome::RejectedEmpty => {
                    self.notification =
                        Some(Notification::new(NotificationKind::UndoUnavailable, now));
                    CommandOutcome::UndoRejected
                }
            },
            Command::Redo => match self.engine.redo() {
                HistoryOutcome::Applied(mv) => CommandOutcome::Redone(mv),
                HistoryOutcome::RejectedEmpty => CommandOutcome::RedoIgnored,
            },
            Command::Quit => {
                info!("quit requested");
                self.quit_requested = true;
                CommandOutcome::Quit
            }
        };
        debug!(?command, ?outcome, "command handled");
        outcome
    }

    fn select_or_move(&mut self, pos: Position) -> CommandOutcome {
        if !pos.in_bounds(self.engine.size()) {
            return CommandOutcome::Ignored;
        }

        let Some(from) = self.selection.take() else {
            if self.engine.cell(pos) == Some(CellState::Filled) {
                self.selection = Some(pos);
                return CommandOutcome::Selected(pos);
            }
            return CommandOutcome::Ignored;
        };

        let mv = Move::new(from, pos);
        match self.engine.try_apply_move(mv) {
            Ok(status) => {
                self.notification = None;
                CommandOutcome::Moved { mv, status }
            }
            Err(e) => CommandOutcome::MoveRejected(e),
        }
    }

    /// Play up to `max_moves` random legal moves, dropping any selection.
    pub fn autoplay(&mut self, rng: &mut GameRng, max_moves: usize) -> PlayoutSummary {
        self.selection = None;
        let summary = random_playout(&mut self.engine, rng, max_moves);
        if !summary.moves.is_empty() {
            self.notification = None;
        }
        summary
    }

    // === Pointer input ===

    /// Track the pointer, returning the hovered cell.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Position {
        let pos = self.layout.cell_at(x, y);
        self.hover = Some(pos);
        pos
    }

    /// The pointer left the window.
    pub fn pointer_left(&mut self) {
        self.hover = None;
    }

    /// Primary-button press at a pixel.
    pub fn click(&mut self, x: f64, y: f64) -> CommandOutcome {
        self.click_at(x, y, Instant::now())
    }

    /// Primary-button press at a pixel, as if at `now`.
    pub fn click_at(&mut self, x: f64, y: f64, now: Instant) -> CommandOutcome {
        let pos = self.layout.cell_at(x, y);
        self.handle_at(Command::SelectOrMove(pos), now)
    }

    /// The window was resized.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout.resize(width, height);
    }

    // === Notifications ===

    /// The notification visible at `now`, if any.
    #[must_use]
    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|n| n.is_visible(now, self.config.notification_duration))
    }

    /// Drop the notification if it has expired by `now`.
    pub fn expire_notifications(&mut self, now: Instant) {
        if self.notification_at(now).is_none() {
            self.notification = None;
        }
    }

    // === Snapshots ===

    /// Capture the current frame.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_at(Instant::now())
    }

    /// Capture the frame as it should look at `now`.
    #[must_use]
    pub fn snapshot_at(&self, now: Instant) -> Snapshot {
        let engine = &self.engine;
        Snapshot {
            size: engine.size(),
            cells: engine.board().cells().to_vec(),
            selection: self.selection,
            hover: self.hover,
            remaining_pieces: engine.remaining_pieces(),
            status: engine.status(),
            elapsed: engine.elapsed_at(now),
            undo_depth: engine.undo_depth(),
            redo_depth: engine.redo_depth(),
            history_cap: engine.history_cap(),
            notification: self
                .notification_at(now)
                .map(|n| n.kind.message().to_string()),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    #[must_use]
    pub fn hover(&self) -> Option<Position> {
        self.hover
    }

    /// Check whether the player asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_requires_piece() {
        let mut session = GameSession::default();

        assert_eq!(
            session.handle(Command::SelectOrMove(Position::new(3, 3))),
            CommandOutcome::Ignored
        );
        assert_eq!(
            session.handle(Command::SelectOrMove(Position::new(0, 0))),
            CommandOutcome::Ignored
        );
        assert_eq!(
            session.handle(Command::SelectOrMove(Position::new(9, 9))),
            CommandOutcome::Ignored
        );
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_cancel() {
        let mut session = GameSession::default();
        session.handle(Command::SelectOrMove(Position::new(1, 3)));

        assert_eq!(session.handle(Command::Cancel), CommandOutcome::Deselected);
        assert_eq!(session.handle(Command::Cancel), CommandOutcome::Ignored);
    }

    #[test]
    fn test_quit() {
        let mut session = GameSession::default();
        assert!(!session.should_quit());
        assert_eq!(session.handle(Command::Quit), CommandOutcome::Quit);
        assert!(session.should_quit());
    }

    #[test]
    fn test_autoplay_clears_selection() {
        let mut session = GameSession::default();
        session.handle(Command::SelectOrMove(Position::new(1, 3)));

        let summary = session.autoplay(&mut GameRng::new(3), 5);
        assert_eq!(summary.moves.len(), 5);
        assert_eq!(session.selection(), None);
        assert_eq!(session.engine().remaining_pieces(), 27);
    }

    #[test]
    fn test_pointer_tracking() {
        let mut session = GameSession::new(
            BoardConfig::default(),
            SessionConfig::default().with_window_size(700.0, 700.0),
        );

        assert_eq!(session.pointer_moved(150.0, 50.0), Position::new(0, 1));
        assert_eq!(session.hover(), Some(Position::new(0, 1)));

        session.pointer_left();
        assert_eq!(session.hover(), None);
    }
}
