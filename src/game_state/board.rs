//! Mailbox board model.
//!
//! A `Board` owns all 64 squares and, through them, every piece. A vacant
//! square is `None`. Each `Piece` stores the square it stands on; the board
//! keeps that field in sync whenever a piece is placed, so
//! `board.piece_at(p).map(|x| x.position) == Some(p)` always holds.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{KING_HOME_COL, STARTING_BACK_RANK};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::utils::layout_generator::board_dump;
use crate::utils::layout_parser::parse_board_layout;

/// A single piece with its per-kind flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    /// Castling eligibility for kings and rooks.
    pub has_moved: bool,
    /// Set on a pawn for the single ply after its two-square advance.
    pub en_passant_eligible: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
            en_passant_eligible: false,
        }
    }

    #[inline]
    pub const fn display_char(&self) -> char {
        self.kind.display_char(self.color)
    }
}

/// The 8x8 grid. Every value is independently owned; cloning yields a
/// board that shares nothing with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard 32-piece starting layout.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for color in [Color::Black, Color::White] {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in STARTING_BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.put(Piece::new(*kind, color, Position::at(back, col)));
                board.put(Piece::new(PieceKind::Pawn, color, Position::at(pawns, col)));
            }
        }
        board
    }

    /// Build a board from the text produced by [`Board::dump`].
    pub fn from_layout(layout: &str) -> ChessResult<Self> {
        parse_board_layout(layout)
    }

    /// One character per square, pipe-delimited, one rank per line.
    pub fn dump(&self) -> String {
        board_dump(self)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.squares[position.index()].as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, position: Position) -> Option<&mut Piece> {
        self.squares[position.index()].as_mut()
    }

    #[inline]
    pub fn is_vacant(&self, position: Position) -> bool {
        self.squares[position.index()].is_none()
    }

    #[inline]
    pub fn color_at(&self, position: Position) -> Option<Color> {
        self.piece_at(position).map(|piece| piece.color)
    }

    /// Place a fresh piece on a vacant square. Kings and rooks on their home
    /// squares count as unmoved; any other king or rook counts as moved.
    pub fn place_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        position: Position,
    ) -> ChessResult<()> {
        if !self.is_vacant(position) {
            return Err(ChessErrors::SquareOccupied(position));
        }
        let mut piece = Piece::new(kind, color, position);
        piece.has_moved = match kind {
            PieceKind::King => position != Position::at(color.back_row(), KING_HOME_COL),
            PieceKind::Rook => {
                position.row() != color.back_row() || (position.col() != 0 && position.col() != 7)
            }
            _ => false,
        };
        self.put(piece);
        Ok(())
    }

    /// Store `piece` on the square named by its own `position`.
    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        self.squares[piece.position.index()] = Some(piece);
    }

    /// Overwrite a square verbatim. Used by undo to restore saved contents.
    #[inline]
    pub(crate) fn restore(&mut self, position: Position, contents: Option<Piece>) {
        self.squares[position.index()] = contents;
    }

    #[inline]
    pub(crate) fn take(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.index()].take()
    }

    /// Move whatever stands on `from` to `to`, updating its stored position.
    /// Returns the piece previously on `to`, which is discarded from the
    /// board.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let captured = self.take(to);
        if let Some(mut piece) = self.take(from) {
            piece.position = to;
            self.put(piece);
        }
        captured
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.position)
    }

    /// The pawn currently flagged as capturable en passant, if any.
    pub fn en_passant_pawn(&self) -> Option<Position> {
        self.pieces()
            .find(|piece| piece.kind == PieceKind::Pawn && piece.en_passant_eligible)
            .map(|piece| piece.position)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
