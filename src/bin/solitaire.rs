//! Terminal front end for peg solitaire.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! <row> <col>   select a piece, or move the selected piece there
//! u | undo      undo the last move
//! y | redo      redo the last undone move
//! c | cancel    drop the selection
//! r | reset     start over
//! h | hint      list legal moves
//! auto [seed]   finish the game with random moves
//! q | quit      exit
//! ```
//!
//! Logs go to stderr at `info` unless `RUST_LOG` says otherwise; set
//! `RUST_LOG=debug` to see every move and history step.

use std::io::{self, BufRead, Write};

use peg_solitaire::{
    CellState, Command, CommandOutcome, GameRng, GameSession, GameStatus, Move, Position,
    Snapshot,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> io::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    let mut session = GameSession::default();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    render(&mut out, &session.snapshot())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse(input) {
            Some(Input::Command(command)) => {
                let outcome = session.handle(command);
                if let CommandOutcome::MoveRejected(e) = outcome {
                    writeln!(out, "{e}")?;
                }
            }
            Some(Input::Hint) => {
                let moves = session.engine().legal_moves();
                if moves.is_empty() {
                    writeln!(out, "No moves left.")?;
                }
                for mv in moves {
                    writeln!(out, "  {}", hint_line(mv))?;
                }
                continue;
            }
            Some(Input::Auto(seed)) => {
                let summary = session.autoplay(&mut GameRng::new(seed), usize::MAX);
                writeln!(out, "Played {} random moves.", summary.moves.len())?;
            }
            None => {
                writeln!(out, "Unrecognized command: {input}")?;
                continue;
            }
        }

        if session.should_quit() {
            break;
        }
        render(&mut out, &session.snapshot())?;
    }

    Ok(())
}

/// Build the log filter from `RUST_LOG` directives, falling back to `info`
/// when they are unset, blank or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn hint_line(mv: Move) -> String {
    match mv.direction() {
        Some(dir) => format!("{mv}  ({dir})"),
        None => mv.to_string(),
    }
}

enum Input {
    Command(Command),
    Hint,
    Auto(u64),
}

fn parse(input: &str) -> Option<Input> {
    let mut words = input.split_whitespace();
    let first = words.next()?;

    let input = match first {
        "u" | "undo" => Input::Command(Command::Undo),
        "y" | "redo" => Input::Command(Command::Redo),
        "c" | "cancel" => Input::Command(Command::Cancel),
        "r" | "reset" => Input::Command(Command::Reset),
        "q" | "quit" => Input::Command(Command::Quit),
        "h" | "hint" => Input::Hint,
        "auto" => Input::Auto(words.next().and_then(|s| s.parse().ok()).unwrap_or(0)),
        _ => {
            let row = first.parse().ok()?;
            let col = words.next()?.parse().ok()?;
            Input::Command(Command::SelectOrMove(Position::new(row, col)))
        }
    };
    Some(input)
}

fn render(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "   ")?;
    for col in 0..snapshot.size {
        write!(out, "{col} ")?;
    }
    writeln!(out)?;

    for row in 0..snapshot.size {
        write!(out, "{row}  ")?;
        for col in 0..snapshot.size {
            let pos = Position::new(row, col);
            let glyph = match snapshot.cell(pos) {
                _ if snapshot.selection == Some(pos) => '@',
                Some(CellState::Filled) => 'o',
                Some(CellState::Empty) => '.',
                Some(CellState::Invalid) | None => ' ',
            };
            write!(out, "{glyph} ")?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "Time: {}  Pieces: {}  Undo: {}",
        snapshot.clock(),
        snapshot.remaining_pieces,
        snapshot.history_label()
    )?;

    if let Some(message) = &snapshot.notification {
        writeln!(out, "{message}")?;
    }

    match snapshot.status {
        GameStatus::Won => writeln!(out, "Congratulations! You won!")?,
        GameStatus::Lost => writeln!(out, "Game over. Better luck next time!")?,
        GameStatus::InProgress => {}
    }
    out.flush()
}
