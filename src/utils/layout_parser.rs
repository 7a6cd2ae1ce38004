//! Parser for the board-dump layout.
//!
//! Accepts exactly eight non-empty lines, row 0 (rank 8) first. Pipes and
//! spaces are ignored, so both the `|R|N|...|` dump and a bare `RNB...`
//! grid parse. Kings and rooks on their home squares are treated as unmoved.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Position};

pub fn parse_board_layout(layout: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidLayout(format!(
            "expected 8 ranks, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|ch| *ch != '|' && *ch != ' ').collect();
        if cells.len() != 8 {
            return Err(ChessErrors::InvalidLayout(format!(
                "rank {} has {} squares",
                8 - row,
                cells.len()
            )));
        }

        for (col, ch) in cells.into_iter().enumerate() {
            if ch == '-' || ch == '.' {
                continue;
            }
            let (kind, color) = PieceKind::from_display_char(ch)
                .ok_or_else(|| ChessErrors::InvalidLayout(format!("unknown piece '{ch}'")))?;
            board.place_piece(kind, color, Position::from_row_col(row as u8, col as u8)?)?;
        }
    }

    Ok(board)
}
