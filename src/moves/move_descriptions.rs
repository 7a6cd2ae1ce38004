//! Transient move values produced by generation and consumed by
//! make/unmake.

use std::fmt;

use crate::game_state::board::Piece;
use crate::game_state::chess_types::{PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    None,
    Castle(CastleSide),
    EnPassant,
    Promotion(PieceKind),
}

/// A fully classified move. `moved_piece` and `captured_piece` are the
/// pieces as they stood before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub special: SpecialMove,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        match self.special {
            SpecialMove::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// The square the captured piece stood on. Differs from `to` only for
    /// en passant.
    pub fn capture_square(&self) -> Option<Position> {
        self.captured_piece.map(|piece| piece.position)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
