//! Crate root module declarations for the plum_moves move generator.
//!
//! Computes pseudo-legal destination moves for a single piece on an 8x8
//! board: sliding rays with blocking and capture, knight and king steps, and
//! the pawn's advance, capture and promotion rules. Self-check filtering,
//! castling, en passant and game flow are left to the caller's rules layer.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod move_generator;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_board;
    pub mod render_board;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::chess_board::{BoardQuery, ChessBoard};
pub use game_state::chess_types::{ChessMove, Color, MoveSet, Piece, PieceKind, Square};
pub use move_generation::move_generator::{color_moves, piece_moves};
