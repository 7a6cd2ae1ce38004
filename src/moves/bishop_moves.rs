//! Sliding move generation.
//!
//! `trace_ray` is shared by bishops, rooks and queens: walk one direction
//! until the edge or the first occupied square, including that square only
//! when it holds an enemy piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

pub(crate) fn trace_ray(
    board: &Board,
    from: Position,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Position>,
) {
    let mut cursor = from;
    while let Some(target) = cursor.offset(d_row, d_col) {
        match board.color_at(target) {
            None => out.push(target),
            Some(occupant) => {
                if occupant != color {
                    out.push(target);
                }
                break;
            }
        }
        cursor = target;
    }
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::algebraic_to_position;

    #[test]
    fn bishop_on_empty_d4_sees_thirteen_squares() {
        let mut out = Vec::new();
        let d4 = algebraic_to_position("d4").expect("d4");
        generate_bishop_moves(&Board::empty(), d4, Color::White, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn blocker_stops_ray_and_enemy_is_capturable() {
        let board = Board::from_layout(
            "----K---
             --------
             --------
             --------
             --------
             ----P---
             --------
             --b-k---",
        )
        .expect("layout parses");
        let mut out = Vec::new();
        let c1 = algebraic_to_position("c1").expect("c1");
        generate_bishop_moves(&board, c1, Color::White, &mut out);

        let e3 = algebraic_to_position("e3").expect("e3");
        let f4 = algebraic_to_position("f4").expect("f4");
        assert!(out.contains(&e3));
        assert!(!out.contains(&f4));
        // b2, a3 on the other diagonal plus d2, e3.
        assert_eq!(out.len(), 4);
    }
}
