use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::SLIDER_MAX_STEPS;
use crate::game_state::chess_types::{Color, MoveSet, Square};
use crate::moves::slider_moves::{slider_movements, Direction};

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_moves<B: BoardQuery + ?Sized>(board: &B, from: Square, color: Color) -> MoveSet {
    slider_movements(board, from, color, &BISHOP_DIRECTIONS, SLIDER_MAX_STEPS)
}
