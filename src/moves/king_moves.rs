use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::SINGLE_STEP_MAX_STEPS;
use crate::game_state::chess_types::{Color, MoveSet, Square};
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::slider_moves::{slider_movements, Direction};

/// Same eight directions as the queen, one step each.
pub const KING_DIRECTIONS: [Direction; 8] = QUEEN_DIRECTIONS;

/// King steps without castling.
#[inline]
pub fn king_moves<B: BoardQuery + ?Sized>(board: &B, from: Square, color: Color) -> MoveSet {
    slider_movements(board, from, color, &KING_DIRECTIONS, SINGLE_STEP_MAX_STEPS)
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::chess_board::ChessBoard;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn king_in_center_has_eight_moves() {
        let board = ChessBoard::new_empty();
        assert_eq!(king_moves(&board, sq(5, 5), Color::White).len(), 8);
    }

    #[test]
    fn king_in_corner_has_three_moves() {
        let board = ChessBoard::new_empty();
        let moves = king_moves(&board, sq(8, 1), Color::Black);
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![sq(7, 2), sq(7, 1), sq(8, 2)]);
    }

    #[test]
    fn king_skips_friends_and_takes_enemies() {
        let mut board = ChessBoard::new_empty();
        board
            .add_piece(sq(2, 5), Piece::new(PieceKind::Pawn, Color::White))
            .unwrap();
        board
            .add_piece(sq(2, 4), Piece::new(PieceKind::Pawn, Color::Black))
            .unwrap();
        let moves = king_moves(&board, sq(1, 5), Color::White);
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();

        assert!(!targets.contains(&sq(2, 5)));
        assert!(targets.contains(&sq(2, 4)));
        assert_eq!(moves.len(), 4);
    }
}
