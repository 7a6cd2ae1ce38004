//! Terminal-state classification, recomputed from the board on every call.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Checkmate,
    Stalemate,
}

pub fn status(board: &mut Board, color: Color) -> ChessResult<GameStatus> {
    let in_check = is_king_attacked(board, color)?;
    if has_legal_move(board, color)? {
        return Ok(GameStatus::Normal);
    }
    Ok(if in_check {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    })
}
