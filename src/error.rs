use std::fmt;

use crate::coord::Square;
use crate::moves::Move;


// Reasons the rules engine may refuse to apply a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveError {
    NullMove,
    PieceMissing,
    WrongTurnOrder,
    DestinationOccupied,
    MissingPromotion,
    BadPromotion,
}

// None of these are retried: they all point at malformed input data or a caller contract violation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DiagramError {
    InvalidSquare(String),
    UnknownPiece(char),
    EmptyOriginSquare(Square),
    // `ply` is the 0-based index of the rejected move in the move list.
    IllegalMove { ply: usize, mv: Move, reason: MoveError },
    InvalidFen(String),
    InvalidMoveNotation(String),
    // A style value that would draw outside its cell or with impossible opacity.
    InvalidStyle(String),
    PositionOutOfRange { index: usize, len: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::NullMove => "origin and destination coincide",
            MoveError::PieceMissing => "no piece on the origin square",
            MoveError::WrongTurnOrder => "piece belongs to the side not on move",
            MoveError::DestinationOccupied => "destination holds a piece of the same color",
            MoveError::MissingPromotion => "pawn reaches the last rank without promotion",
            MoveError::BadPromotion => "promotion is not allowed here",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::InvalidSquare(s) => write!(f, "invalid square: '{s}'"),
            DiagramError::UnknownPiece(ch) => write!(f, "unknown piece: '{ch}'"),
            DiagramError::EmptyOriginSquare(sq) => write!(f, "no piece to move on {sq}"),
            DiagramError::IllegalMove { ply, mv, reason } => {
                write!(f, "illegal move #{} ({}): {}", ply + 1, mv.to_uci(), reason)
            }
            DiagramError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            DiagramError::InvalidMoveNotation(s) => write!(f, "invalid move notation: '{s}'"),
            DiagramError::InvalidStyle(msg) => write!(f, "invalid style: {msg}"),
            DiagramError::PositionOutOfRange { index, len } => {
                write!(f, "position {index} is out of range: the game has {len} positions")
            }
        }
    }
}

impl std::error::Error for MoveError {}
impl std::error::Error for DiagramError {}
