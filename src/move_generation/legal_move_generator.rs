//! Legal move generation.
//!
//! Candidates are the pseudo-legal destinations of a piece plus castling and
//! en passant. Each candidate is made on the board, the mover's king is
//! tested, and the move is unmade before the next candidate is tried.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legal_move_apply::{build_move, make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::special_rules::{
    castle_king_target, castling_options, en_passant_capture,
};
use crate::moves::move_descriptions::Move;
use crate::moves::piece_moves::pseudo_legal_moves;

/// Pseudo-legal destinations of the piece on `square` with castling and en
/// passant appended. Empty for a vacant square.
pub fn candidate_destinations(board: &Board, square: Position) -> ChessResult<Vec<Position>> {
    let Some(piece) = board.piece_at(square).copied() else {
        return Ok(Vec::new());
    };
    let mut destinations = pseudo_legal_moves(board, square);
    match piece.kind {
        PieceKind::King => {
            let options = castling_options(board, piece.color);
            if !options.is_empty() && !is_king_attacked(board, piece.color)? {
                destinations.extend(
                    options
                        .into_iter()
                        .map(|side| castle_king_target(piece.color, side)),
                );
            }
        }
        PieceKind::Pawn => {
            if let Some(capture) = en_passant_capture(board, square) {
                destinations.push(capture.target);
            }
        }
        _ => {}
    }
    Ok(destinations)
}

/// Candidate moves of the piece on `square`, classified but not yet
/// filtered for king safety.
pub fn candidate_moves(board: &Board, square: Position) -> ChessResult<Vec<Move>> {
    candidate_destinations(board, square)?
        .into_iter()
        .map(|to| build_move(board, square, to))
        .collect()
}

/// Whether making `mv` leaves the mover's own king unattacked. The board is
/// restored before returning, including on error.
pub fn is_legal(board: &mut Board, mv: &Move) -> ChessResult<bool> {
    let color = mv.moved_piece.color;
    let undo = make_move(board, mv)?;
    let attacked = is_king_attacked(board, color);
    unmake_move(board, undo);
    Ok(!attacked?)
}

/// Legal moves of the piece on `square`.
pub fn legal_move_list(board: &mut Board, square: Position) -> ChessResult<Vec<Move>> {
    let mut legal = Vec::new();
    for mv in candidate_moves(board, square)? {
        if is_legal(board, &mv)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Legal destination squares of the piece on `square`.
pub fn legal_moves(board: &mut Board, square: Position) -> ChessResult<Vec<Position>> {
    Ok(legal_move_list(board, square)?
        .into_iter()
        .map(|mv| mv.to)
        .collect())
}

/// Every legal move for `color`, in board order.
pub fn all_legal_moves(board: &mut Board, color: Color) -> ChessResult<Vec<Move>> {
    let squares: Vec<Position> = board.pieces_of(color).map(|piece| piece.position).collect();
    let mut moves = Vec::with_capacity(48);
    for square in squares {
        moves.extend(legal_move_list(board, square)?);
    }
    Ok(moves)
}

/// Whether `color` has at least one legal move. Stops at the first one.
pub fn has_legal_move(board: &mut Board, color: Color) -> ChessResult<bool> {
    let squares: Vec<Position> = board.pieces_of(color).map(|piece| piece.position).collect();
    for square in squares {
        for mv in candidate_moves(board, square)? {
            if is_legal(board, &mv)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
