//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and diagnostics
//! in text environments. Row 8 is printed first.

use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub fn render_board<B: BoardQuery + ?Sized>(board: &B) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (1..=BOARD_SIZE).rev() {
        let rank_char = char::from(b'0' + row);
        out.push(rank_char);
        out.push(' ');

        for col in 1..=BOARD_SIZE {
            let piece = Square::new(row, col).ok().and_then(|sq| board.piece_at(sq));
            match piece {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
