use crate::game_state::board::Piece;
use crate::game_state::chess_types::Position;
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Holds the exact prior contents of every square the move touched,
/// including the square of a pawn whose en passant flag was cleared.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub saved_squares: Vec<(Position, Option<Piece>)>,
}

impl UndoState {
    pub(crate) fn new(mv: Move) -> Self {
        Self {
            mv,
            saved_squares: Vec::with_capacity(5),
        }
    }

    /// Record `contents` for `square` unless it was already recorded.
    pub(crate) fn save(&mut self, square: Position, contents: Option<Piece>) {
        if !self.saved_squares.iter().any(|(saved, _)| *saved == square) {
            self.saved_squares.push((square, contents));
        }
    }
}
