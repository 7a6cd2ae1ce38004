//! Canonical chess-rule constants.
//!
//! Row numbers follow the board orientation used throughout the crate:
//! row 0 is Black's back rank, row 7 is White's.

use crate::game_state::chess_types::PieceKind;

pub const BLACK_BACK_ROW: u8 = 0;
pub const BLACK_PAWN_START_ROW: u8 = 1;
pub const WHITE_PAWN_START_ROW: u8 = 6;
pub const WHITE_BACK_ROW: u8 = 7;

/// Home column of both kings (the e-file).
pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Back-rank layout from the a-file to the h-file, identical for both sides.
pub const STARTING_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position in board-dump layout (Black uppercase).
pub const STARTING_LAYOUT: &str = "\
RNBQKBNR
PPPPPPPP
--------
--------
--------
--------
pppppppp
rnbqkbnr";
