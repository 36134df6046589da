//! Board occupancy and the read-only query seam used by move generation.
//!
//! `BoardQuery` is everything the rule modules need from a board. `ChessBoard`
//! is the crate's own 8x8 implementation; game layers with their own board
//! representation only have to implement the trait.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Piece, Square};
use crate::utils::fen_parser::parse_fen_placement;

/// Read-only square lookup.
pub trait BoardQuery {
    fn piece_at(&self, square: Square) -> Option<Piece>;
}

impl<B: BoardQuery + ?Sized> BoardQuery for &B {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        (**self).piece_at(square)
    }
}

/// Plain 8x8 mailbox board, indexed `[row - 1][col - 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChessBoard {
    squares: [[Option<Piece>; 8]; 8],
}

impl ChessBoard {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Board in the standard starting position.
    pub fn new_game() -> ChessResult<Self> {
        parse_fen_placement(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen_placement(fen)
    }

    #[inline]
    pub fn view(&self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square.row() - 1)][usize::from(square.col() - 1)]
    }

    #[inline]
    fn at(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[usize::from(square.row() - 1)][usize::from(square.col() - 1)]
    }

    /// Places `piece` on an empty square.
    pub fn add_piece(&mut self, square: Square, piece: Piece) -> ChessResult<()> {
        let slot = self.at(square);
        if slot.is_some() {
            return Err(ChessErrors::BoardLocationOccupied(square));
        }
        *slot = Some(piece);
        Ok(())
    }

    /// Places `piece`, replacing whatever was there.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.at(square).replace(piece)
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.at(square).take()
    }

    /// Occupied squares with their pieces, row-major from (1, 1).
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.view(sq).map(|piece| (sq, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|p| p.is_some()).count()
    }
}

impl BoardQuery for ChessBoard {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.view(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn add_remove_pieces() {
        let mut board = ChessBoard::new_empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        board.add_piece(sq(2, 1), pawn).unwrap();
        board.add_piece(sq(3, 1), pawn).unwrap();
        assert_eq!(board.piece_count(), 2);

        assert_eq!(
            board.add_piece(sq(2, 1), pawn),
            Err(ChessErrors::BoardLocationOccupied(sq(2, 1)))
        );

        assert_eq!(board.remove_piece(sq(2, 1)), Some(pawn));
        assert_eq!(board.remove_piece(sq(2, 1)), None);
        assert_eq!(board.piece_at(sq(3, 1)), Some(pawn));
    }

    #[test]
    fn set_piece_replaces_occupant() {
        let mut board = ChessBoard::new_empty();
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let queen = Piece::new(PieceKind::Queen, Color::White);
        assert_eq!(board.set_piece(sq(5, 5), rook), None);
        assert_eq!(board.set_piece(sq(5, 5), queen), Some(rook));
        assert_eq!(board.view(sq(5, 5)), Some(queen));
    }

    #[test]
    fn new_game_has_thirty_two_pieces() {
        let board = ChessBoard::new_game().expect("starting FEN should always parse");
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.piece_at(sq(1, 5)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(sq(8, 4)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        let first = board.occupied_squares().next();
        assert_eq!(
            first,
            Some((sq(1, 1), Piece::new(PieceKind::Rook, Color::White)))
        );
    }
}
