//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and internal
//! `Position` values. Rank 8 is row 0.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Position::from_row_col(row, col)
}

/// Convert a position to algebraic notation (for example: "e4").
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.col());
    let rank_char = char::from(b'8' - position.row());
    format!("{file_char}{rank_char}")
}
