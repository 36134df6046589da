use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::SINGLE_STEP_MAX_STEPS;
use crate::game_state::chess_types::{Color, MoveSet, Square};
use crate::moves::slider_moves::{slider_movements, Direction};

pub const KNIGHT_DIRECTIONS: [Direction; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// Knight jumps; intermediate squares are never inspected.
#[inline]
pub fn knight_moves<B: BoardQuery + ?Sized>(board: &B, from: Square, color: Color) -> MoveSet {
    slider_movements(board, from, color, &KNIGHT_DIRECTIONS, SINGLE_STEP_MAX_STEPS)
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::chess_board::ChessBoard;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let board = ChessBoard::new_empty();
        let moves = knight_moves(&board, sq(4, 4), Color::White);
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        assert_eq!(
            targets,
            vec![
                sq(6, 5),
                sq(6, 3),
                sq(2, 5),
                sq(2, 3),
                sq(5, 6),
                sq(3, 6),
                sq(5, 2),
                sq(3, 2),
            ]
        );
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let board = ChessBoard::new_empty();
        assert_eq!(knight_moves(&board, sq(1, 8), Color::Black).len(), 2);
    }

    #[test]
    fn knight_jumps_over_surrounding_pieces() {
        let mut board = ChessBoard::new_game().unwrap();
        let moves = knight_moves(&board, sq(1, 2), Color::White);
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![sq(3, 3), sq(3, 1)]);

        // Own piece on a target is skipped, enemy piece is a capture.
        board
            .add_piece(sq(3, 3), Piece::new(PieceKind::Pawn, Color::White))
            .unwrap();
        board
            .add_piece(sq(3, 1), Piece::new(PieceKind::Pawn, Color::Black))
            .unwrap();
        let targets: Vec<Square> = knight_moves(&board, sq(1, 2), Color::White)
            .iter()
            .map(|m| m.to)
            .collect();
        assert_eq!(targets, vec![sq(3, 1)]);
    }
}
