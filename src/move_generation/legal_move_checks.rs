//! Attack and check detection.
//!
//! Attacks are read from the attackers' unfiltered pseudo-legal moves, never
//! from legal moves, so check detection cannot recurse into the legality
//! filter.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::piece_moves::pseudo_legal_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Safe,
    Attacked { attackers: Vec<Position> },
}

impl CheckStatus {
    #[inline]
    pub fn is_attacked(&self) -> bool {
        matches!(self, CheckStatus::Attacked { .. })
    }
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> ChessResult<Position> {
    board
        .king_square(color)
        .ok_or(ChessErrors::MissingKing(color))
}

/// Squares of every `attacker_color` piece that could move onto `square`.
pub fn attackers_to_square(board: &Board, square: Position, attacker_color: Color) -> Vec<Position> {
    board
        .pieces_of(attacker_color)
        .filter(|piece| pseudo_legal_moves(board, piece.position).contains(&square))
        .map(|piece| piece.position)
        .collect()
}

pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|piece| pseudo_legal_moves(board, piece.position).contains(&square))
}

pub fn is_in_check(board: &Board, color: Color) -> ChessResult<CheckStatus> {
    let king = king_square(board, color)?;
    let attackers = attackers_to_square(board, king, color.opposite());
    if attackers.is_empty() {
        Ok(CheckStatus::Safe)
    } else {
        Ok(CheckStatus::Attacked { attackers })
    }
}

/// Cheaper form of [`is_in_check`] that stops at the first attacker.
pub fn is_king_attacked(board: &Board, color: Color) -> ChessResult<bool> {
    let king = king_square(board, color)?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_in_check, is_king_attacked, CheckStatus};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Position};
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("valid square")
    }

    #[test]
    fn starting_position_is_safe_for_both_sides() {
        let board = Board::new_game();
        assert_eq!(is_in_check(&board, Color::White), Ok(CheckStatus::Safe));
        assert_eq!(is_in_check(&board, Color::Black), Ok(CheckStatus::Safe));
    }

    #[test]
    fn double_check_reports_both_attackers() {
        let board = Board::from_layout(
            "----K---
             --------
             --------
             B-------
             --------
             --------
             --------
             ----k--R",
        )
        .expect("layout parses");
        let status = is_in_check(&board, Color::White).expect("kings present");
        let CheckStatus::Attacked { mut attackers } = status else {
            panic!("white king should be attacked");
        };
        attackers.sort();
        assert_eq!(attackers, vec![sq("a5"), sq("h1")]);
        assert!(is_king_attacked(&board, Color::White).expect("kings present"));
    }

    #[test]
    fn blocked_pawn_push_is_not_an_attack() {
        let board = Board::from_layout(
            "--------
             --------
             --------
             --------
             ----K---
             ----p---
             --------
             ----k---",
        )
        .expect("layout parses");
        assert!(attackers_to_square(&board, sq("e4"), Color::White).is_empty());
        assert_eq!(
            attackers_to_square(&board, sq("e3"), Color::Black),
            vec![sq("e4")]
        );
    }

    #[test]
    fn missing_king_is_fatal() {
        let board = Board::empty();
        let err = is_in_check(&board, Color::Black).expect_err("no king on board");
        assert_eq!(err, ChessErrors::MissingKing(Color::Black));
        assert!(err.is_fatal());
    }
}
