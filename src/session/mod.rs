//! Host-facing session layer.
//!
//! The engine owns the rules. A host (window, terminal, test harness) owns
//! everything transient around them:
//! - **Selection**: the piece picked up by the first click
//! - **Hover**: the cell under the pointer
//! - **Notifications**: timed messages such as "No more undos available!"
//! - **Layout**: pixel ↔ cell mapping
//!
//! `GameSession` bundles these and turns discrete [`Command`]s into engine
//! calls. Renderers read a [`Snapshot`] each frame.
//!
//! ```
//! use peg_solitaire::core::Position;
//! use peg_solitaire::session::{Command, CommandOutcome, GameSession};
//!
//! let mut session = GameSession::default();
//! session.handle(Command::SelectOrMove(Position::new(1, 3)));
//! let outcome = session.handle(Command::SelectOrMove(Position::new(3, 3)));
//! assert!(matches!(outcome, CommandOutcome::Moved { .. }));
//! assert_eq!(session.snapshot().remaining_pieces, 31);
//! ```

mod command;
mod game;
mod layout;
mod notification;
mod snapshot;

pub use command::{Command, CommandOutcome};
pub use game::{GameSession, SessionConfig};
pub use layout::BoardLayout;
pub use notification::{Notification, NotificationKind, DEFAULT_NOTIFICATION_DURATION};
pub use snapshot::Snapshot;
