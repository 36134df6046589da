//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `(row, col)`
//! squares. Files `a..h` map to columns `1..8`, ranks `1..8` to rows `1..8`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Square::new(rank - b'0', file - b'a' + 1)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col() - 1);
    let rank_char = char::from(b'0' + square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn square_conversions() {
        let a1 = Square::new(1, 1).unwrap();
        let h8 = Square::new(8, 8).unwrap();
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), a1);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), h8);
        assert_eq!(
            algebraic_to_square("e4").expect("e4 should parse"),
            Square::new(4, 5).unwrap()
        );
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(square_to_algebraic(Square::new(7, 4).unwrap()), "d7");
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "e44", "i4", "e9", "E4", "e0"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_owned()))
            );
        }
    }
}
