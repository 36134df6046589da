//! FEN placement parser.
//!
//! Builds a `ChessBoard` from the piece-placement field of a Forsyth-Edwards
//! Notation string. Side to move, castling, en passant and clocks belong to
//! the game layer, so any fields after the placement are ignored.

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub fn parse_fen_placement(fen: &str) -> ChessResult<ChessBoard> {
    let board_part = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenForm("missing board layout".to_owned()))?;

    let mut board = ChessBoard::new_empty();
    parse_board(board_part, &mut board).inspect_err(|err| {
        debug!(%err, fen, "rejected FEN placement");
    })?;
    Ok(board)
}

fn parse_board(board_part: &str, board: &mut ChessBoard) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != usize::from(BOARD_SIZE) {
        return Err(ChessErrors::InvalidFenForm(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    // FEN lists row 8 first.
    for (row, rank_str) in (1..=BOARD_SIZE).rev().zip(ranks) {
        let mut col = 1u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                col += empty_count as u8;
                if col > BOARD_SIZE + 1 {
                    return Err(too_wide(row));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if col > BOARD_SIZE {
                return Err(too_wide(row));
            }
            board.set_piece(Square::new(row, col)?, piece);
            col += 1;
        }

        if col != BOARD_SIZE + 1 {
            return Err(ChessErrors::InvalidFenForm(format!(
                "rank {row} does not sum to 8 files"
            )));
        }
    }

    Ok(())
}

fn too_wide(row: u8) -> ChessErrors {
    ChessErrors::InvalidFenForm(format!("rank {row} has too many files"))
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
