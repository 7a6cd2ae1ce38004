//! Pseudo-legal destinations per piece, dispatched through a per-kind
//! generator table.
//!
//! Pseudo-legal means the movement pattern and occupancy rules hold; whether
//! the mover's own king is left attacked is not considered here.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

pub type MoveGeneratorFn = fn(&Board, Position, Color, &mut Vec<Position>);

#[inline]
pub fn move_generator_for(kind: PieceKind) -> MoveGeneratorFn {
    match kind {
        PieceKind::Pawn => generate_pawn_moves,
        PieceKind::Knight => generate_knight_moves,
        PieceKind::Bishop => generate_bishop_moves,
        PieceKind::Rook => generate_rook_moves,
        PieceKind::Queen => generate_queen_moves,
        PieceKind::King => generate_king_moves,
    }
}

/// Pseudo-legal destinations of the piece on `square`; empty for a vacant
/// square.
pub fn pseudo_legal_moves(board: &Board, square: Position) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = board.piece_at(square) {
        (move_generator_for(piece.kind))(board, square, piece.color, &mut out);
    }
    out
}
