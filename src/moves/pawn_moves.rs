//! Pawn move generation.
//!
//! Pawns are the only piece whose movement depends on color and whose
//! capturing squares differ from their moving squares. The color dependence
//! is folded into a [`PawnRules`] value up front so that the advance, capture
//! and promotion logic below is written once for both sides. En passant is a
//! game-history rule and is not produced here.

use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::{
    pawn_forward, pawn_start_row, promotion_row, PROMOTION_KINDS,
};
use crate::game_state::chess_types::{ChessMove, Color, MoveSet, Square};

/// Capture columns relative to the pawn, in emission order.
pub const PAWN_CAPTURE_COLUMNS: [i8; 2] = [1, -1];

/// Color-dependent pawn geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnRules {
    pub color: Color,
    /// Row delta of one step forward.
    pub forward: i8,
    /// Row the double step is allowed from.
    pub start_row: u8,
    /// Row on which every arrival promotes.
    pub promotion_row: u8,
}

impl PawnRules {
    #[inline]
    pub const fn for_color(color: Color) -> Self {
        Self {
            color,
            forward: pawn_forward(color),
            start_row: pawn_start_row(color),
            promotion_row: promotion_row(color),
        }
    }
}

pub fn pawn_moves<B: BoardQuery + ?Sized>(board: &B, from: Square, color: Color) -> MoveSet {
    let rules = PawnRules::for_color(color);
    let mut moves = MoveSet::with_capacity(12);

    push_advances(board, from, &rules, &mut moves);
    push_captures(board, from, &rules, &mut moves);

    moves
}

/// Straight pushes: one square, or two from the start row. The first occupied
/// square ends the push, so a blocked single step also forbids the double.
fn push_advances<B: BoardQuery + ?Sized>(
    board: &B,
    from: Square,
    rules: &PawnRules,
    out: &mut MoveSet,
) {
    let max_steps: i8 = if from.row() == rules.start_row { 2 } else { 1 };

    for step in 1..=max_steps {
        let Some(to) = from.offset(step * rules.forward, 0) else {
            break;
        };
        if board.piece_at(to).is_some() {
            break;
        }
        push_with_promotion(from, to, rules, out);
    }
}

/// Forward diagonals holding an enemy piece.
fn push_captures<B: BoardQuery + ?Sized>(
    board: &B,
    from: Square,
    rules: &PawnRules,
    out: &mut MoveSet,
) {
    for d_col in PAWN_CAPTURE_COLUMNS {
        let Some(to) = from.offset(rules.forward, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != rules.color => {
                push_with_promotion(from, to, rules, out);
            }
            _ => {}
        }
    }
}

/// Emits `from -> to`, expanded into one move per promotion kind when `to`
/// is on the promotion row. The plain move is never emitted in that case.
fn push_with_promotion(from: Square, to: Square, rules: &PawnRules, out: &mut MoveSet) {
    if to.row() == rules.promotion_row {
        out.extend(
            PROMOTION_KINDS
                .iter()
                .map(|&kind| ChessMove::promoting(from, to, kind)),
        );
    } else {
        out.push(ChessMove::new(from, to));
    }
}
