//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Scores are absolute: positive favours White, negative favours Black,
//! whichever side is to move. Search maximizes for White and minimizes for
//! Black.

use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::piece_moves::pseudo_legal_moves;

pub trait BoardScorer {
    fn score(&self, board: &Board) -> i32;
}

/// Material balance only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|piece| piece.color.sign() * piece.kind.material_value())
            .sum()
    }
}

/// Indexed `[row][col]` from the owner's side: row 0 is the owner's back
/// rank and row 1 the rank its pawns start on. White reads through the
/// mirrored board row, Black reads the board row directly.
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const MOBILITY_WEIGHT: i32 = 10;
pub const KING_EDGE_PENALTY: i32 = 100;
pub const KING_CENTRE_TERM: i32 = 50;
pub const CENTRAL_PAWN_BONUS: i32 = 10;

/// Material, pawn and knight placement, mobility, king exposure and
/// central pawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    #[inline]
    fn table_value(table: &[[i32; 8]; 8], piece: &Piece) -> i32 {
        let row = match piece.color {
            Color::White => 7 - piece.position.row(),
            Color::Black => piece.position.row(),
        };
        table[row as usize][piece.position.col() as usize]
    }

    #[inline]
    fn mobility(board: &Board, piece: &Piece) -> i32 {
        MOBILITY_WEIGHT * pseudo_legal_moves(board, piece.position).len() as i32
    }

    #[inline]
    fn on_edge(index: u8) -> bool {
        matches!(index, 0 | 1 | 6 | 7)
    }

    /// Per-piece contribution from White's point of view.
    fn piece_term(board: &Board, piece: &Piece) -> i32 {
        let sign = piece.color.sign();
        let mut value = sign * piece.kind.material_value();

        match piece.kind {
            PieceKind::Pawn => {
                value += sign * Self::table_value(&PAWN_TABLE, piece);
                if (2..=5).contains(&piece.position.col()) {
                    value += sign * CENTRAL_PAWN_BONUS;
                }
            }
            PieceKind::Knight => {
                value += sign * Self::table_value(&KNIGHT_TABLE, piece);
                value += sign * Self::mobility(board, piece);
            }
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                value += sign * Self::mobility(board, piece);
            }
            PieceKind::King => {
                // Same magnitudes for both colours; a central king costs less.
                if Self::on_edge(piece.position.row()) || Self::on_edge(piece.position.col()) {
                    value -= sign * KING_EDGE_PENALTY;
                } else {
                    value -= sign * KING_CENTRE_TERM;
                }
            }
        }
        value
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|piece| Self::piece_term(board, piece))
            .sum()
    }
}
