//! Crate root module declarations for the Rowan Chess engine.
//!
//! Exposes the board model, per-piece move generation, legality and
//! special-rule handling, the alpha-beta search, and layout helpers under
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod special_rules;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_generator;
    pub mod layout_parser;
}
