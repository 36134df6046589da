//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned by board construction,
//! move generation and the text helpers. Move generation itself only fails on
//! precondition violations: asking for the moves of an empty square, or
//! building a square outside the board. Parsing variants are recoverable
//! input errors suitable for showing to a user.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Row or column outside `1..=8`.
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    SquareOutOfRange { row: u8, col: u8 },

    /// Moves were requested for a square with no piece on it.
    #[error("no piece on square ({}, {})", .0.row(), .0.col())]
    EmptySquare(Square),

    /// Attempted to place a piece on a square that already holds one.
    #[error("square ({}, {}) is already occupied", .0.row(), .0.col())]
    BoardLocationOccupied(Square),

    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// The placement field had the wrong shape (rank count or rank width).
    #[error("malformed FEN placement: {0}")]
    InvalidFenForm(String),

    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// Promotion to a kind a pawn can never become.
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),
}
