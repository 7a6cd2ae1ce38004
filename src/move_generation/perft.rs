//! Perft node counting for move-generator verification.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, SpecialMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn tally(&mut self, mv: &Move) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        match mv.special {
            SpecialMove::EnPassant => self.en_passant += 1,
            SpecialMove::Castle(_) => self.castles += 1,
            SpecialMove::Promotion(_) => self.promotions += 1,
            SpecialMove::None => {}
        }
    }
}

/// Count leaf moves `depth` plies below `board` with `side` to move. The
/// board is restored before returning.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &mut Board,
    side: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(generator, board, side, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &mut Board,
    side: Color,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let moves = generator.generate_legal_moves(board, side)?;
    if depth == 1 {
        moves.iter().for_each(|mv| counts.tally(mv));
        return Ok(());
    }
    for mv in &moves {
        let undo = make_move(board, mv)?;
        let result = perft_recurse(generator, board, side.opposite(), depth - 1, counts);
        unmake_move(board, undo);
        result?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::move_generator::LegalMoveGenerator;

    #[test]
    fn starting_position_node_counts() {
        let mut board = Board::new_game();
        let before = board.clone();
        let expected = [(0u8, 1usize), (1, 20), (2, 400), (3, 8902)];
        for (depth, nodes) in expected {
            let counts =
                perft(&LegalMoveGenerator, &mut board, Color::White, depth).expect("perft runs");
            assert_eq!(counts.nodes, nodes, "depth {depth}");
        }
        assert_eq!(board, before);
    }

    #[test]
    fn depth_three_capture_count() {
        let mut board = Board::new_game();
        let counts = perft(&LegalMoveGenerator, &mut board, Color::White, 3).expect("perft runs");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.en_passant, 0);
        assert_eq!(counts.castles, 0);
    }

    #[test]
    fn rook_endgame_with_en_passant_pins() {
        let mut board = Board::from_layout(
            "--------
             --P-----
             ---P----
             kp-----R
             -r---P-K
             --------
             ----p-p-
             --------",
        )
        .expect("layout parses");
        let expected = [(1u8, 14usize), (2, 191), (3, 2812)];
        for (depth, nodes) in expected {
            let counts =
                perft(&LegalMoveGenerator, &mut board, Color::White, depth).expect("perft runs");
            assert_eq!(counts.nodes, nodes, "depth {depth}");
        }
    }

    #[test]
    fn castles_are_tallied() {
        let mut board = Board::from_layout(
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
        let counts = perft(&LegalMoveGenerator, &mut board, Color::White, 1).expect("perft runs");
        assert_eq!(counts.castles, 2);
    }
}
