use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn generate_knight_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(target) = from.offset(d_row, d_col) {
            if board.color_at(target) != Some(color) {
                out.push(target);
            }
        }
    }
}
