use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::bishop_moves::trace_ray;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_rook_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}
