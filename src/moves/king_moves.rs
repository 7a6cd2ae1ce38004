//! Single-step king moves. Whether the destination is attacked is left to
//! the legality filter; castling is added by the special-rule layer.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];

pub fn generate_king_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    for (d_row, d_col) in KING_OFFSETS {
        if let Some(target) = from.offset(d_row, d_col) {
            if board.color_at(target) != Some(color) {
                out.push(target);
            }
        }
    }
}
