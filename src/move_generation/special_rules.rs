//! Castling, en passant and promotion gating.
//!
//! Castling only requires the king and rook to be unmoved with nothing
//! between them. Transit squares are not tested for attacks; the king's
//! destination is filtered by the normal legality check like any other move.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::moves::move_descriptions::CastleSide;

/// Row on which a pawn of `color` may capture en passant.
#[inline]
pub const fn en_passant_row(color: Color) -> u8 {
    match color {
        Color::White => 3,
        Color::Black => 4,
    }
}

#[inline]
pub const fn is_promotion_square(color: Color, square: Position) -> bool {
    square.row() == color.promotion_row()
}

#[inline]
pub const fn castle_rook_col(side: CastleSide) -> u8 {
    match side {
        CastleSide::Kingside => KINGSIDE_ROOK_COL,
        CastleSide::Queenside => QUEENSIDE_ROOK_COL,
    }
}

/// King destination when castling toward `side`.
#[inline]
pub const fn castle_king_target(color: Color, side: CastleSide) -> Position {
    match side {
        CastleSide::Kingside => Position::at(color.back_row(), KING_HOME_COL + 2),
        CastleSide::Queenside => Position::at(color.back_row(), KING_HOME_COL - 2),
    }
}

/// Rook (from, to) squares for a castle toward `side`.
#[inline]
pub const fn castle_rook_squares(color: Color, side: CastleSide) -> (Position, Position) {
    let row = color.back_row();
    match side {
        CastleSide::Kingside => (
            Position::at(row, KINGSIDE_ROOK_COL),
            Position::at(row, KING_HOME_COL + 1),
        ),
        CastleSide::Queenside => (
            Position::at(row, QUEENSIDE_ROOK_COL),
            Position::at(row, KING_HOME_COL - 1),
        ),
    }
}

/// Which castles `color` may currently attempt.
pub fn castling_options(board: &Board, color: Color) -> Vec<CastleSide> {
    let row = color.back_row();
    let king_square = Position::at(row, KING_HOME_COL);
    let king_ready = matches!(
        board.piece_at(king_square),
        Some(piece) if piece.kind == PieceKind::King && piece.color == color && !piece.has_moved
    );
    if !king_ready {
        return Vec::new();
    }

    let mut options = Vec::with_capacity(2);
    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        let rook_col = castle_rook_col(side);
        let rook_ready = matches!(
            board.piece_at(Position::at(row, rook_col)),
            Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
        );
        let (low, high) = if rook_col > KING_HOME_COL {
            (KING_HOME_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_HOME_COL)
        };
        let path_clear = (low..high).all(|col| board.is_vacant(Position::at(row, col)));
        if rook_ready && path_clear {
            options.push(side);
        }
    }
    options
}

/// An available en passant capture for one pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassantCapture {
    /// Column delta toward the captured pawn, -1 or 1.
    pub direction: i8,
    /// Square the capturing pawn lands on.
    pub target: Position,
    /// Square of the pawn being removed.
    pub captured: Position,
}

/// The en passant capture available to the pawn on `pawn_square`, if any.
pub fn en_passant_capture(board: &Board, pawn_square: Position) -> Option<EnPassantCapture> {
    let pawn = board.piece_at(pawn_square)?;
    if pawn.kind != PieceKind::Pawn || pawn_square.row() != en_passant_row(pawn.color) {
        return None;
    }
    [-1i8, 1].into_iter().find_map(|direction| {
        let captured = pawn_square.offset(0, direction)?;
        let victim = board.piece_at(captured)?;
        if victim.kind != PieceKind::Pawn
            || victim.color == pawn.color
            || !victim.en_passant_eligible
        {
            return None;
        }
        let target = captured.offset(pawn.color.forward(), 0)?;
        board.is_vacant(target).then_some(EnPassantCapture {
            direction,
            target,
            captured,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::{castle_king_target, castle_rook_squares, castling_options, en_passant_capture};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Position};
    use crate::moves::move_descriptions::CastleSide;
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("valid square")
    }

    #[test]
    fn clear_back_rank_offers_both_castles() {
        let board = Board::from_layout(
            "----K---
             --------
             --------
             --------
             --------
             --------
             --------
             r---k--r",
        )
        .expect("layout parses");
        assert_eq!(
            castling_options(&board, Color::White),
            vec![CastleSide::Kingside, CastleSide::Queenside]
        );
        assert!(castling_options(&board, Color::Black).is_empty());
    }

    #[test]
    fn blocked_or_moved_pieces_remove_castles() {
        let mut board = Board::from_layout(
            "----K---
             --------
             --------
             --------
             --------
             --------
             --------
             rn--k--r",
        )
        .expect("layout parses");
        assert_eq!(
            castling_options(&board, Color::White),
            vec![CastleSide::Kingside]
        );

        board.piece_at_mut(sq("h1")).expect("rook").has_moved = true;
        assert!(castling_options(&board, Color::White).is_empty());
    }

    #[test]
    fn starting_position_has_no_castles() {
        let board = Board::new_game();
        assert!(castling_options(&board, Color::White).is_empty());
        assert!(castling_options(&board, Color::Black).is_empty());
    }

    #[test]
    fn castle_squares_match_board_geometry() {
        assert_eq!(castle_king_target(Color::White, CastleSide::Kingside), sq("g1"));
        assert_eq!(castle_king_target(Color::Black, CastleSide::Queenside), sq("c8"));
        assert_eq!(
            castle_rook_squares(Color::White, CastleSide::Queenside),
            (sq("a1"), sq("d1"))
        );
        assert_eq!(
            castle_rook_squares(Color::Black, CastleSide::Kingside),
            (sq("h8"), sq("f8"))
        );
    }

    #[test]
    fn en_passant_requires_flagged_adjacent_enemy_pawn() {
        let mut board = Board::from_layout(
            "----K---
             --------
             --------
             ---Pp---
             --------
             --------
             --------
             ----k---",
        )
        .expect("layout parses");
        assert_eq!(en_passant_capture(&board, sq("e5")), None);

        board.piece_at_mut(sq("d5")).expect("pawn").en_passant_eligible = true;
        let capture = en_passant_capture(&board, sq("e5")).expect("capture available");
        assert_eq!(capture.direction, -1);
        assert_eq!(capture.target, sq("d6"));
        assert_eq!(capture.captured, sq("d5"));
    }
}
