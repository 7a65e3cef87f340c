//! Reasons a move can be rejected.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Position};

/// Why a requested move is not legal on the current board.
///
/// Variants are checked in declaration order; the first violated rule is
/// reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum MoveError {
    #[error("move {0} leaves the board")]
    OutOfBounds(Move),

    #[error("no piece at {0} to jump with")]
    SourceNotFilled(Position),

    #[error("cannot land on {0}: cell is not empty")]
    DestinationNotEmpty(Position),

    #[error("move {0} is not a straight jump of two cells")]
    NotAJump(Move),

    #[error("no piece at {0} to jump over")]
    NothingToJump(Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NotAJump(Move::from_coords((2, 2), (4, 4)));
        assert_eq!(
            err.to_string(),
            "move (2, 2) -> (4, 4) is not a straight jump of two cells"
        );

        let err = MoveError::SourceNotFilled(Position::new(3, 3));
        assert_eq!(err.to_string(), "no piece at (3, 3) to jump with");
    }
}
