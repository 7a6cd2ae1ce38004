//! Text dump of the board for debugging and compatibility tests.
//!
//! One character per square (`-` when vacant, Black uppercase, White
//! lowercase), each square preceded by `|`, each rank closed by `|` and a
//! newline. Row 0 (rank 8) is printed first.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;

pub fn board_dump(board: &Board) -> String {
    let mut out = String::with_capacity(8 * 18);
    for row in 0..8u8 {
        for col in 0..8u8 {
            out.push('|');
            out.push(
                board
                    .piece_at(Position::at(row, col))
                    .map_or('-', |piece| piece.display_char()),
            );
        }
        out.push_str("|\n");
    }
    out
}
