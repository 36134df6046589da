//! Random board generation for property tests and benchmarks.
//!
//! Boards are geometric scatters, not reachable game positions: kings may be
//! missing or adjacent and either side may be in check. Pawns are kept off
//! rows 1 and 8.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, ALL_PIECE_KINDS};

/// Scatters `piece_count` random pieces (capped at 64) over distinct squares.
pub fn random_board<R: Rng>(rng: &mut R, piece_count: usize) -> ChessBoard {
    let mut squares: Vec<Square> = Square::all().collect();
    squares.shuffle(rng);

    let mut board = ChessBoard::new_empty();
    for square in squares.into_iter().take(piece_count) {
        let color = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let mut kind = ALL_PIECE_KINDS[rng.random_range(0..ALL_PIECE_KINDS.len())];
        if kind == PieceKind::Pawn && (square.row() == 1 || square.row() == 8) {
            kind = PieceKind::Knight;
        }
        board.set_piece(square, Piece::new(kind, color));
    }

    board
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::random_board;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn places_requested_number_of_pieces() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 16, 64, 100] {
            let board = random_board(&mut rng, count);
            assert_eq!(board.piece_count(), count.min(64));
        }
    }

    #[test]
    fn pawns_stay_off_back_rows() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let board = random_board(&mut rng, 40);
            for (square, piece) in board.occupied_squares() {
                if piece.kind == PieceKind::Pawn {
                    assert!((2..=7).contains(&square.row()));
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_board() {
        let a = random_board(&mut StdRng::seed_from_u64(3), 24);
        let b = random_board(&mut StdRng::seed_from_u64(3), 24);
        assert_eq!(a, b);
    }
}
