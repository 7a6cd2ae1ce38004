//! Fixed-depth minimax with alpha-beta pruning over make/unmake.
//!
//! White maximizes and Black minimizes the scorer's value. Nodes at the
//! depth limit, or whose side to move has no legal move, return the static
//! score. At the root every move reaching the best value is kept, and the
//! final move is drawn uniformly from those ties.

use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;

const SCORE_BOUND: i32 = 1_000_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
    /// Wall-clock budget. The first root move is always searched to
    /// completion; the deadline applies after that.
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            movetime_ms: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    /// Every root move that reached `best_score`.
    pub candidates: Vec<Move>,
    pub nodes: u64,
    /// False when the time budget cut the root search short.
    pub completed: bool,
    pub elapsed_ms: u64,
}

struct SearchContext<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    deadline: Option<Instant>,
    nodes: u64,
}

impl<G: MoveGenerator, S: BoardScorer> SearchContext<'_, G, S> {
    #[inline]
    fn out_of_time(&self) -> bool {
        self.deadline.is_some_and(|limit| Instant::now() >= limit)
    }
}

#[inline]
fn elapsed_ms(started_at: Instant) -> u64 {
    u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Search `board` for `side` and pick a move. The board is used as scratch
/// space and is restored before returning, also on error.
pub fn search<G, S, R>(
    board: &mut Board,
    side: Color,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
    rng: &mut R,
) -> ChessResult<SearchResult>
where
    G: MoveGenerator,
    S: BoardScorer,
    R: Rng + ?Sized,
{
    let started_at = Instant::now();
    let deadline = config
        .movetime_ms
        .and_then(|ms| started_at.checked_add(Duration::from_millis(ms)));
    let mut ctx = SearchContext {
        generator,
        scorer,
        deadline: None,
        nodes: 1,
    };

    let root_moves = if config.depth == 0 {
        Vec::new()
    } else {
        generator.generate_legal_moves(board, side)?
    };
    if root_moves.is_empty() {
        return Ok(SearchResult {
            best_score: scorer.score(board),
            nodes: 1,
            completed: true,
            elapsed_ms: elapsed_ms(started_at),
            ..SearchResult::default()
        });
    }

    let maximizing = side == Color::White;
    let mut best_score = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };
    let mut candidates: Vec<Move> = Vec::new();
    let mut completed = true;
    let mut searched = 0usize;

    for mv in &root_moves {
        if !candidates.is_empty() {
            ctx.deadline = deadline;
            if ctx.out_of_time() {
                completed = false;
                break;
            }
        }

        // Later moves get a window one point past the best score, so a tie
        // still comes back as an exact value.
        let (alpha, beta) = match (candidates.is_empty(), maximizing) {
            (true, _) => (-SCORE_BOUND, SCORE_BOUND),
            (false, true) => (best_score - 1, SCORE_BOUND),
            (false, false) => (-SCORE_BOUND, best_score + 1),
        };

        let undo = make_move(board, mv)?;
        let outcome = minimax(
            board,
            side.opposite(),
            config.depth - 1,
            alpha,
            beta,
            &mut ctx,
        );
        unmake_move(board, undo);

        let Some(score) = outcome? else {
            completed = false;
            break;
        };
        searched += 1;

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if candidates.is_empty() || improves {
            best_score = score;
            candidates.clear();
            candidates.push(*mv);
        } else if score == best_score {
            candidates.push(*mv);
        }
    }

    let best_move = candidates.choose(rng).copied();
    let elapsed_ms = elapsed_ms(started_at);

    if !completed {
        warn!(
            "search for {side:?} stopped by time budget after {elapsed_ms} ms; {} of {} root moves searched",
            searched,
            root_moves.len()
        );
    }
    debug!(
        "search {side:?} depth {} nodes {} score {} ties {} best {}",
        config.depth,
        ctx.nodes,
        best_score,
        candidates.len(),
        best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string())
    );

    Ok(SearchResult {
        best_move,
        best_score,
        candidates,
        nodes: ctx.nodes,
        completed,
        elapsed_ms,
    })
}

/// Value of `board` with `side` to move, or `None` once the deadline has
/// passed.
fn minimax<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    side: Color,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_, G, S>,
) -> ChessResult<Option<i32>> {
    ctx.nodes += 1;
    if ctx.out_of_time() {
        return Ok(None);
    }
    if depth == 0 {
        return Ok(Some(ctx.scorer.score(board)));
    }

    let moves = ctx.generator.generate_legal_moves(board, side)?;
    if moves.is_empty() {
        return Ok(Some(ctx.scorer.score(board)));
    }

    let maximizing = side == Color::White;
    let mut value = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };

    for mv in &moves {
        let undo = make_move(board, mv)?;
        let outcome = minimax(board, side.opposite(), depth - 1, alpha, beta, ctx);
        unmake_move(board, undo);
        let Some(score) = outcome? else {
            return Ok(None);
        };

        if maximizing {
            value = value.max(score);
            alpha = alpha.max(value);
        } else {
            value = value.min(score);
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(Some(value))
}
