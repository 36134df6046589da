//! Core value types shared by the board, the rule modules and the text helpers.
//!
//! Squares are `(row, col)` pairs with both coordinates in `1..=8`; row 1 is
//! White's back rank and column 1 is the a-file.
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Whether a pawn may turn into this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board square. Always within `1..=8` on both axes once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> ChessResult<Self> {
        if Self::in_bounds(i16::from(row), i16::from(col)) {
            Ok(Self { row, col })
        } else {
            Err(ChessErrors::SquareOutOfRange { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `d_row` rows and `d_col` columns away, or `None` off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        if Self::in_bounds(row, col) {
            // Both values are in 1..=8 here.
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order, row 1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Square { row, col }))
    }

    #[inline]
    const fn in_bounds(row: i16, col: i16) -> bool {
        let size = BOARD_SIZE as i16;
        row >= 1 && row <= size && col >= 1 && col <= size
    }
}

/// One pseudo-legal move. Captures are implicit in the destination's occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

/// Moves produced for one piece, in direction order then step order.
pub type MoveSet = Vec<ChessMove>;
