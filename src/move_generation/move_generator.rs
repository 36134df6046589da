//! Pseudo-legal move generation entry points.
//!
//! `piece_moves` dispatches on the kind of the piece standing on a square and
//! returns everything that piece can geometrically do. Nothing here checks
//! whether the mover's king is left in check; that filtering belongs to the
//! game layer consuming these moves.

use tracing::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_board::BoardQuery;
use crate::game_state::chess_types::{Color, MoveSet, PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// All pseudo-legal moves of the piece on `square`.
///
/// Fails with [`ChessErrors::EmptySquare`] when `square` holds no piece.
pub fn piece_moves<B: BoardQuery + ?Sized>(board: &B, square: Square) -> ChessResult<MoveSet> {
    let Some(piece) = board.piece_at(square) else {
        debug!(row = square.row(), col = square.col(), "move generation on empty square");
        return Err(ChessErrors::EmptySquare(square));
    };

    let moves = match piece.kind {
        PieceKind::Pawn => pawn_moves(board, square, piece.color),
        PieceKind::Knight => knight_moves(board, square, piece.color),
        PieceKind::Bishop => bishop_moves(board, square, piece.color),
        PieceKind::Rook => rook_moves(board, square, piece.color),
        PieceKind::Queen => queen_moves(board, square, piece.color),
        PieceKind::King => king_moves(board, square, piece.color),
    };

    trace!(
        row = square.row(),
        col = square.col(),
        kind = ?piece.kind,
        color = ?piece.color,
        count = moves.len(),
        "generated piece moves"
    );

    Ok(moves)
}

/// Pseudo-legal moves of every `color` piece, squares visited row-major from (1, 1).
pub fn color_moves<B: BoardQuery + ?Sized>(board: &B, color: Color) -> ChessResult<MoveSet> {
    let mut out = MoveSet::with_capacity(64);
    for square in Square::all() {
        match board.piece_at(square) {
            Some(piece) if piece.color == color => out.extend(piece_moves(board, square)?),
            _ => {}
        }
    }
    Ok(out)
}
