//! Ray casting shared by every non-pawn piece.
//!
//! Bishops, rooks and queens walk their rays up to the board edge; kings and
//! knights use the same walk capped at a single step, so blocking and capture
//! rules live in exactly one place.

use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::SLIDER_MAX_STEPS;
use crate::game_state::chess_types::{ChessMove, Color, MoveSet, Square};

/// A `(d_row, d_col)` step.
pub type Direction = (i8, i8);

/// Walks each direction from `origin` for steps `1..max_steps`.
///
/// A ray ends at the board edge, just before a piece of `color`, or on an
/// enemy piece (which is included as a capture). Moves come out in
/// direction order, then step order.
pub fn slider_movements<B: BoardQuery + ?Sized>(
    board: &B,
    origin: Square,
    color: Color,
    directions: &[Direction],
    max_steps: u8,
) -> MoveSet {
    // No step of 8 or more lands on an 8x8 board.
    let max_steps = max_steps.min(SLIDER_MAX_STEPS);
    let mut moves = MoveSet::with_capacity(directions.len() * usize::from(max_steps));

    for &(d_row, d_col) in directions {
        for step in 1..max_steps as i8 {
            let (Some(dr), Some(dc)) = (step.checked_mul(d_row), step.checked_mul(d_col)) else {
                break;
            };
            let Some(to) = origin.offset(dr, dc) else {
                break;
            };

            match board.piece_at(to) {
                None => moves.push(ChessMove::new(origin, to)),
                Some(occupant) if occupant.color == color => break,
                Some(_) => {
                    moves.push(ChessMove::new(origin, to));
                    break;
                }
            }
        }
    }

    moves
}
