//! Move generator abstraction used by search and perft.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::Move;

pub trait MoveGenerator {
    /// All legal moves for `color`. The board is used as scratch space and
    /// must be left exactly as it was passed in.
    fn generate_legal_moves(&self, board: &mut Board, color: Color) -> ChessResult<Vec<Move>>;
}

/// Make/unmake based legal move generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &mut Board, color: Color) -> ChessResult<Vec<Move>> {
        all_legal_moves(board, color)
    }
}
