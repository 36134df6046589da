//! Long algebraic move text ("e2e4", "e7e8q").
//!
//! The format carries no piece or capture information, so parsing does not
//! need a board; whether the move is actually available is for the caller to
//! check against `piece_moves`.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{ChessMove, PieceKind};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", promotion_to_char(kind))?;
        }
        Ok(())
    }
}

pub fn move_to_long_algebraic(chess_move: &ChessMove) -> String {
    chess_move.to_string()
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<ChessMove> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    if from == to {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => {
            let kind = promotion_from_char(ch)
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()))?;
            if !kind.is_promotion_target() {
                return Err(ChessErrors::InvalidPromotion(kind));
            }
            Some(kind)
        }
    };

    Ok(ChessMove {
        from,
        to,
        promotion,
    })
}

fn promotion_to_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    }
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'p' => Some(PieceKind::Pawn),
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        'k' => Some(PieceKind::King),
        _ => None,
    }
}
