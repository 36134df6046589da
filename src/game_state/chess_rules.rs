//! Canonical chess-rule constants.
//!
//! Board geometry, per-color pawn ranks, ray-caster step caps and the
//! standard starting placement used to build boards for play and tests.

use crate::game_state::chess_types::{Color, PieceKind};

/// Squares per side of the board. Rows and columns run `1..=BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 8;

/// Step cap for bishops, rooks and queens (walks steps `1..SLIDER_MAX_STEPS`).
pub const SLIDER_MAX_STEPS: u8 = 8;

/// Step cap for kings and knights: exactly one step per direction.
pub const SINGLE_STEP_MAX_STEPS: u8 = 2;

/// Kinds a pawn may promote to, in emission order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Queen,
];

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Row a pawn of `color` double-steps from.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

/// Farthest row for `color`; pawns arriving here promote.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => BOARD_SIZE,
        Color::Black => 1,
    }
}

/// Row delta of one pawn step toward the promotion row.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
