//! Pawn pushes and diagonal captures.
//!
//! En passant is not produced here; it is a special rule added by the legal
//! move generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_vacant(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_vacant(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        if board.color_at(target) == Some(color.opposite()) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Position};
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("valid square")
    }

    fn moves(board: &Board, from: &str, color: Color) -> Vec<Position> {
        let mut out = Vec::new();
        generate_pawn_moves(board, sq(from), color, &mut out);
        out.sort();
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let board = Board::new_game();
        assert_eq!(moves(&board, "e2", Color::White), vec![sq("e4"), sq("e3")]);
        assert_eq!(moves(&board, "d7", Color::Black), vec![sq("d6"), sq("d5")]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::from_layout(
            "----K---
             --------
             --------
             --------
             --------
             ----N---
             ----p---
             ----k---",
        )
        .expect("layout parses");
        assert!(moves(&board, "e2", Color::White).is_empty());
    }

    #[test]
    fn captures_only_onto_enemy_pieces_and_respect_the_edge() {
        let board = Board::from_layout(
            "----K---
             --------
             --------
             --------
             -P------
             p-n-----
             --------
             ----k---",
        )
        .expect("layout parses");
        // a3 pawn: push to a4, capture b4; no wrap-around to the h-file.
        assert_eq!(moves(&board, "a3", Color::White), vec![sq("a4"), sq("b4")]);
        assert_eq!(
            moves(&board, "b4", Color::Black),
            vec![sq("a3"), sq("b3"), sq("c3")]
        );
    }
}
