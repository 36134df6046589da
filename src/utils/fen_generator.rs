//! FEN placement writer, the inverse of `fen_parser`.

use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub fn generate_fen_placement<B: BoardQuery + ?Sized>(board: &B) -> String {
    let mut out = String::new();

    for row in (1..=BOARD_SIZE).rev() {
        let mut empty_count = 0u8;

        for col in 1..=BOARD_SIZE {
            let piece = Square::new(row, col).ok().and_then(|sq| board.piece_at(sq));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 1 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
