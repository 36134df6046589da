use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::SLIDER_MAX_STEPS;
use crate::game_state::chess_types::{Color, MoveSet, Square};
use crate::moves::slider_moves::{slider_movements, Direction};

/// Diagonals first, then orthogonals.
pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

#[inline]
pub fn queen_moves<B: BoardQuery + ?Sized>(board: &B, from: Square, color: Color) -> MoveSet {
    slider_movements(board, from, color, &QUEEN_DIRECTIONS, SLIDER_MAX_STEPS)
}
