//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by board setup, move
//! generation, move application and search. Each variant carries enough
//! context (squares, colours, piece kinds) for a caller to log or display a
//! precise diagnostic.
//!
//! Usage guidelines:
//! - Rule violations (`OccupiedBySelf`, `NotAPseudoLegalDestination`,
//!   `LeavesKingInCheck`, ...) are recoverable. They are raised before any
//!   mutation begins, so the board is left exactly as it was.
//! - `MissingKing` means the board is malformed. It aborts the current
//!   operation and callers should not keep evaluating the position.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Position};

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square index outside `0..=63`.
    OutOfBounds(usize),

    /// A row/column pair outside `0..=7`.
    ///
    /// Payload: (row, column).
    InvalidRowOrColumn((u8, u8)),

    /// The destination holds a piece of the mover's own colour.
    OccupiedBySelf(Position),

    /// The destination is not reachable by the piece's movement pattern
    /// (including castling and en passant augmentation).
    ///
    /// Payload: (from, to).
    NotAPseudoLegalDestination((Position, Position)),

    /// The move would leave the mover's own king attacked (pin violation).
    ///
    /// Payload: (from, to).
    LeavesKingInCheck((Position, Position)),

    /// The board has no king of the given colour. Fatal.
    MissingKing(Color),

    /// A move was attempted while a promotion choice is still outstanding.
    ///
    /// Payload: the square holding the pawn awaiting promotion.
    PendingPromotionUnresolved(Position),

    /// Tried to move from an empty square.
    NoPieceOnSquare(Position),

    /// Tried to move a piece that does not belong to the side to move.
    NotSideToMove(Position),

    /// Tried to place a piece on a square that is already occupied.
    SquareOccupied(Position),

    /// A promotion choice was supplied for a square with no pending promotion.
    NoPendingPromotion(Position),

    /// Promotion must be to a queen, rook, knight or bishop.
    InvalidPromotionKind(PieceKind),

    /// The side to move has no legal moves (checkmate or stalemate).
    NoLegalMoves,

    /// A square name such as `e4` failed to parse.
    InvalidAlgebraicString(String),

    /// A textual board layout failed to parse.
    InvalidLayout(String),
}

impl ChessErrors {
    /// Whether the error reflects a malformed board rather than a rejected
    /// request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ChessErrors::MissingKing(_))
    }
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds(index) => write!(f, "square index {index} is off the board"),
            ChessErrors::InvalidRowOrColumn((row, col)) => {
                write!(f, "row {row} / column {col} is off the board")
            }
            ChessErrors::OccupiedBySelf(square) => {
                write!(f, "{square} is occupied by a piece of the same colour")
            }
            ChessErrors::NotAPseudoLegalDestination((from, to)) => {
                write!(f, "the piece on {from} cannot move to {to}")
            }
            ChessErrors::LeavesKingInCheck((from, to)) => {
                write!(f, "{from}{to} would leave the king in check")
            }
            ChessErrors::MissingKing(color) => write!(f, "board has no {color:?} king"),
            ChessErrors::PendingPromotionUnresolved(square) => {
                write!(f, "pawn on {square} is waiting for a promotion choice")
            }
            ChessErrors::NoPieceOnSquare(square) => write!(f, "no piece on {square}"),
            ChessErrors::NotSideToMove(square) => {
                write!(f, "the piece on {square} does not belong to the side to move")
            }
            ChessErrors::SquareOccupied(square) => write!(f, "{square} is already occupied"),
            ChessErrors::NoPendingPromotion(square) => {
                write!(f, "no promotion is pending on {square}")
            }
            ChessErrors::InvalidPromotionKind(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessErrors::NoLegalMoves => write!(f, "side to move has no legal moves"),
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
            ChessErrors::InvalidLayout(msg) => write!(f, "invalid board layout: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
