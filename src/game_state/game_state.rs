//! Turn-level game state.
//!
//! `GameState` owns the board plus what the board alone does not say: whose
//! turn it is, which pawn may currently be captured en passant, and whether
//! a promotion choice is outstanding. Every request is validated completely
//! before the board is touched; a rejected request leaves it unchanged.

use log::{debug, info};
use rand::Rng;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::game_status::{status, GameStatus};
use crate::move_generation::legal_move_apply::{build_move, make_move};
use crate::move_generation::legal_move_generator::{
    candidate_destinations, is_legal, legal_moves,
};
use crate::move_generation::move_generator::LegalMoveGenerator;
use crate::moves::move_descriptions::{Move, SpecialMove};
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::{search, SearchConfig};

/// Result of a committed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A pawn reached its last rank; `supply_promotion` must be called for
    /// this square before play continues.
    AwaitingPromotion(Position),
    /// The named colour has been checkmated.
    Checkmate(Color),
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub en_passant_pawn: Option<Position>,
    pub pending_promotion: Option<Position>,
    pub ply: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_board(Board::new_game(), Color::White)
    }

    /// Start from an arbitrary position with `side_to_move` to play.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let en_passant_pawn = board.en_passant_pawn();
        Self {
            board,
            side_to_move,
            en_passant_pawn,
            pending_promotion: None,
            ply: 0,
        }
    }

    #[inline]
    pub fn board_dump(&self) -> String {
        self.board.dump()
    }

    #[inline]
    fn ensure_no_pending_promotion(&self) -> ChessResult<()> {
        match self.pending_promotion {
            Some(square) => Err(ChessErrors::PendingPromotionUnresolved(square)),
            None => Ok(()),
        }
    }

    /// Legal destinations of the piece on `square`. Empty when the square is
    /// vacant or holds a piece of the side not to move.
    pub fn legal_moves(&mut self, square: Position) -> ChessResult<Vec<Position>> {
        self.ensure_no_pending_promotion()?;
        if self.board.color_at(square) != Some(self.side_to_move) {
            return Ok(Vec::new());
        }
        legal_moves(&mut self.board, square)
    }

    /// Terminal classification for the side to move.
    pub fn status(&mut self) -> ChessResult<GameStatus> {
        status(&mut self.board, self.side_to_move)
    }

    /// Move the piece on `from` to `to` for the side to move.
    pub fn apply_move(&mut self, from: Position, to: Position) -> ChessResult<ApplyOutcome> {
        let mv = match self.validate_move(from, to) {
            Ok(mv) => mv,
            Err(err) => {
                debug!("rejected {from}{to}: {err}");
                return Err(err);
            }
        };

        if mv.promotion().is_some() {
            let relocation = Move {
                special: SpecialMove::None,
                ..mv
            };
            make_move(&mut self.board, &relocation)?;
            self.en_passant_pawn = None;
            self.pending_promotion = Some(to);
            info!("{:?} played {from}{to}, awaiting promotion choice", self.side_to_move);
            return Ok(ApplyOutcome::AwaitingPromotion(to));
        }

        make_move(&mut self.board, &mv)?;
        info!("{:?} played {mv}", self.side_to_move);
        self.finish_turn()
    }

    fn validate_move(&mut self, from: Position, to: Position) -> ChessResult<Move> {
        self.ensure_no_pending_promotion()?;
        let piece = self
            .board
            .piece_at(from)
            .ok_or(ChessErrors::NoPieceOnSquare(from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::NotSideToMove(from));
        }
        if self.board.color_at(to) == Some(self.side_to_move) {
            return Err(ChessErrors::OccupiedBySelf(to));
        }
        if !candidate_destinations(&self.board, from)?.contains(&to) {
            return Err(ChessErrors::NotAPseudoLegalDestination((from, to)));
        }
        let mv = build_move(&self.board, from, to)?;
        if !is_legal(&mut self.board, &mv)? {
            return Err(ChessErrors::LeavesKingInCheck((from, to)));
        }
        Ok(mv)
    }

    /// Replace the pawn waiting on `square` with `kind` and complete the
    /// turn.
    pub fn supply_promotion(&mut self, square: Position, kind: PieceKind) -> ChessResult<ApplyOutcome> {
        if self.pending_promotion != Some(square) {
            return Err(ChessErrors::NoPendingPromotion(square));
        }
        if !kind.is_promotion_choice() {
            return Err(ChessErrors::InvalidPromotionKind(kind));
        }
        let pawn = self
            .board
            .take(square)
            .ok_or(ChessErrors::NoPieceOnSquare(square))?;
        let mut promoted = Piece::new(kind, pawn.color, square);
        promoted.has_moved = true;
        self.board.put(promoted);
        self.pending_promotion = None;
        info!("{:?} promoted on {square} to {kind:?}", pawn.color);
        self.finish_turn()
    }

    /// Search with the default scorer at `depth` plies and commit the chosen
    /// move. Promotions are always to a queen.
    pub fn select_ai_move(&mut self, depth: u8) -> ChessResult<Move> {
        self.select_ai_move_with(&SearchConfig::with_depth(depth), &mut rand::rng())
    }

    pub fn select_ai_move_with<R: Rng + ?Sized>(
        &mut self,
        config: &SearchConfig,
        rng: &mut R,
    ) -> ChessResult<Move> {
        self.ensure_no_pending_promotion()?;
        let result = search(
            &mut self.board,
            self.side_to_move,
            &LegalMoveGenerator,
            &StandardScorer,
            config,
            rng,
        )?;
        let mv = result.best_move.ok_or(ChessErrors::NoLegalMoves)?;
        make_move(&mut self.board, &mv)?;
        info!(
            "{:?} engine played {mv} (score {}, {} tied, {} nodes)",
            self.side_to_move,
            result.best_score,
            result.candidates.len(),
            result.nodes
        );
        self.finish_turn()?;
        Ok(mv)
    }

    fn finish_turn(&mut self) -> ChessResult<ApplyOutcome> {
        self.side_to_move = self.side_to_move.opposite();
        self.ply = self.ply.saturating_add(1);
        self.en_passant_pawn = self.board.en_passant_pawn();

        let outcome = match status(&mut self.board, self.side_to_move)? {
            GameStatus::Normal => ApplyOutcome::Applied,
            GameStatus::Checkmate => {
                info!("{:?} is checkmated", self.side_to_move);
                ApplyOutcome::Checkmate(self.side_to_move)
            }
            GameStatus::Stalemate => {
                info!("stalemate, {:?} has no legal move", self.side_to_move);
                ApplyOutcome::Stalemate
            }
        };
        Ok(outcome)
    }
}
