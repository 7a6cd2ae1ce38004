//! Move construction and the make/unmake pair used by legality checks,
//! search and move commitment.
//!
//! `make_move` records the exact prior contents of every square it touches
//! before mutating anything; `unmake_move` writes them back. No move kind
//! needs its own inverse logic.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::special_rules::{castle_rook_squares, is_promotion_square};
use crate::moves::move_descriptions::{CastleSide, Move, SpecialMove};

/// Classify the move of the piece on `from` to `to`.
///
/// Kings moving two columns castle, pawns moving diagonally onto an empty
/// square capture en passant, and pawns reaching their last rank promote to
/// a queen. Movement rules are not checked here.
pub fn build_move(board: &Board, from: Position, to: Position) -> ChessResult<Move> {
    let moved_piece = *board
        .piece_at(from)
        .ok_or(ChessErrors::NoPieceOnSquare(from))?;
    let col_delta = to.col() as i8 - from.col() as i8;

    let (special, captured_piece) = match moved_piece.kind {
        PieceKind::King if from.row() == to.row() && col_delta.abs() == 2 => {
            let side = if col_delta > 0 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            (SpecialMove::Castle(side), None)
        }
        PieceKind::Pawn if col_delta != 0 && board.is_vacant(to) => {
            let captured_square = Position::at(from.row(), to.col());
            (SpecialMove::EnPassant, board.piece_at(captured_square).copied())
        }
        PieceKind::Pawn if is_promotion_square(moved_piece.color, to) => (
            SpecialMove::Promotion(PieceKind::Queen),
            board.piece_at(to).copied(),
        ),
        _ => (SpecialMove::None, board.piece_at(to).copied()),
    };

    Ok(Move {
        from,
        to,
        moved_piece,
        captured_piece,
        special,
    })
}

/// Apply `mv` to `board` in place and return the record that reverts it.
///
/// Any pawn still flagged en passant eligible is cleared first; a pawn
/// making a two-square advance is flagged afterwards.
pub fn make_move(board: &mut Board, mv: &Move) -> ChessResult<UndoState> {
    let mover = *board
        .piece_at(mv.from)
        .ok_or(ChessErrors::NoPieceOnSquare(mv.from))?;

    let mut undo = UndoState::new(*mv);
    undo.save(mv.from, Some(mover));
    undo.save(mv.to, board.piece_at(mv.to).copied());
    if let Some(captured) = mv.capture_square() {
        undo.save(captured, board.piece_at(captured).copied());
    }
    let rook_squares = match mv.special {
        SpecialMove::Castle(side) => Some(castle_rook_squares(mover.color, side)),
        _ => None,
    };
    if let Some((rook_from, rook_to)) = rook_squares {
        undo.save(rook_from, board.piece_at(rook_from).copied());
        undo.save(rook_to, board.piece_at(rook_to).copied());
    }
    let stale_en_passant = board.en_passant_pawn();
    if let Some(square) = stale_en_passant {
        undo.save(square, board.piece_at(square).copied());
    }

    if let Some(square) = stale_en_passant {
        if let Some(pawn) = board.piece_at_mut(square) {
            pawn.en_passant_eligible = false;
        }
    }

    match mv.special {
        SpecialMove::None => {
            board.relocate(mv.from, mv.to);
        }
        SpecialMove::EnPassant => {
            if let Some(captured) = mv.capture_square() {
                board.take(captured);
            }
            board.relocate(mv.from, mv.to);
        }
        SpecialMove::Castle(_) => {
            board.relocate(mv.from, mv.to);
            if let Some((rook_from, rook_to)) = rook_squares {
                board.relocate(rook_from, rook_to);
                if let Some(rook) = board.piece_at_mut(rook_to) {
                    rook.has_moved = true;
                }
            }
        }
        SpecialMove::Promotion(kind) => {
            board.take(mv.from);
            board.take(mv.to);
            let mut promoted = Piece::new(kind, mover.color, mv.to);
            promoted.has_moved = true;
            board.put(promoted);
        }
    }

    if let Some(piece) = board.piece_at_mut(mv.to) {
        piece.has_moved = true;
        if piece.kind == PieceKind::Pawn && mv.from.row().abs_diff(mv.to.row()) == 2 {
            piece.en_passant_eligible = true;
        }
    }

    Ok(undo)
}

/// Revert a move made by [`make_move`]. The board must not have been
/// changed since.
pub fn unmake_move(board: &mut Board, undo: UndoState) {
    for (square, contents) in undo.saved_squares.into_iter().rev() {
        board.restore(square, contents);
    }
}

#[cfg(test)]
mod tests {
    use super::{build_move, make_move, unmake_move};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::moves::move_descriptions::{CastleSide, SpecialMove};
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("valid square")
    }

    fn assert_round_trip(board: &mut Board, from: &str, to: &str) -> Board {
        let before = board.clone();
        let mv = build_move(board, sq(from), sq(to)).expect("piece on from-square");
        let undo = make_move(board, &mv).expect("move applies");
        let after = board.clone();
        unmake_move(board, undo);
        assert_eq!(*board, before, "{from}{to} did not revert exactly");
        after
    }

    #[test]
    fn quiet_move_round_trips_and_flags_double_push() {
        let mut board = Board::new_game();
        let after = assert_round_trip(&mut board, "e2", "e4");
        let pawn = after.piece_at(sq("e4")).expect("pawn moved");
        assert_eq!(pawn.position, sq("e4"));
        assert!(pawn.en_passant_eligible);
        assert!(after.is_vacant(sq("e2")));
    }

    #[test]
    fn next_move_clears_previous_en_passant_flag() {
        let mut board = Board::new_game();
        let push = build_move(&board, sq("e2"), sq("e4")).expect("pawn");
        make_move(&mut board, &push).expect("move applies");
        let reply = build_move(&board, sq("g8"), sq("f6")).expect("knight");
        let undo = make_move(&mut board, &reply).expect("move applies");
        assert_eq!(board.en_passant_pawn(), None);

        unmake_move(&mut board, undo);
        assert_eq!(board.en_passant_pawn(), Some(sq("e4")));
    }

    #[test]
    fn capture_round_trips() {
        let mut board = Board::from_layout(
            "----K---
             --------
             --------
             ---Q----
             --------
             --------
             --------
             ---rk---",
        )
        .expect("layout parses");
        let mv = build_move(&board, sq("d1"), sq("d5")).expect("rook");
        assert_eq!(
            mv.captured_piece.map(|piece| piece.kind),
            Some(PieceKind::Queen)
        );
        let after = assert_round_trip(&mut board, "d1", "d5");
        assert_eq!(after.pieces_of(Color::Black).count(), 1);
    }

    #[test]
    fn castle_moves_rook_and_round_trips() {
        let mut board = Board::from_layout(
            "R---K--R
             --------
             --------
             --------
             --------
             --------
             --------
             r---k--r",
        )
        .expect("layout parses");
        let mv = build_move(&board, sq("e1"), sq("g1")).expect("king");
        assert_eq!(mv.special, SpecialMove::Castle(CastleSide::Kingside));

        let after = assert_round_trip(&mut board, "e1", "g1");
        let rook = after.piece_at(sq("f1")).expect("rook moved");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(after.piece_at(sq("g1")).expect("king moved").has_moved);
        assert!(after.is_vacant(sq("h1")));

        let after = assert_round_trip(&mut board, "e8", "c8");
        assert_eq!(
            after.piece_at(sq("d8")).map(|piece| piece.kind),
            Some(PieceKind::Rook)
        );
        assert!(after.is_vacant(sq("a8")));
    }

    #[test]
    fn en_passant_removes_bypassed_pawn_and_round_trips() {
        let mut board = Board::from_layout(
            "----K---
             ---P----
             --------
             ----p---
             --------
             --------
             --------
             ----k---",
        )
        .expect("layout parses");
        let push = build_move(&board, sq("d7"), sq("d5")).expect("pawn");
        make_move(&mut board, &push).expect("move applies");

        let mv = build_move(&board, sq("e5"), sq("d6")).expect("pawn");
        assert_eq!(mv.special, SpecialMove::EnPassant);
        assert_eq!(mv.capture_square(), Some(sq("d5")));

        let after = assert_round_trip(&mut board, "e5", "d6");
        assert!(after.is_vacant(sq("d5")));
        assert_eq!(after.pieces_of(Color::Black).count(), 1);
        assert_eq!(after.en_passant_pawn(), None);
    }

    #[test]
    fn promotion_creates_queen_and_round_trips() {
        let mut board = Board::from_layout(
            "-R--K---
             --p-----
             --------
             --------
             --------
             --------
             --------
             ----k---",
        )
        .expect("layout parses");
        let mv = build_move(&board, sq("c7"), sq("b8")).expect("pawn");
        assert_eq!(mv.special, SpecialMove::Promotion(PieceKind::Queen));
        assert_eq!(mv.to_string(), "c7b8q");

        let after = assert_round_trip(&mut board, "c7", "b8");
        let queen = after.piece_at(sq("b8")).expect("promoted piece");
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::White));
        assert!(queen.has_moved);
        assert!(after.is_vacant(sq("c7")));
    }
}
