//! Core value types shared across the rules engine.
//!
//! Colors, piece kinds, castling rights, game status, and the move-history
//! record. Coordinate helpers for the cylindrical board live here as well:
//! column arithmetic always wraps modulo 8, row arithmetic never does.

use chrono::{DateTime, Utc};

/// Board square as `(row, col)`, each in `0..=7`.
///
/// Row 0 is Black's back rank, row 7 is White's. Columns wrap: column 7 and
/// column 0 are adjacent for any movement that crosses files.
pub type Square = (i8, i8);

/// Reduces a column index onto the cylinder.
#[inline]
pub fn wrap_col(col: i8) -> i8 {
    ((col % 8) + 8) % 8
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color starts on.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Far rank whose reaching triggers promotion.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row the king and rooks start on.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board. Immutable once placed; moves replace pieces rather
/// than mutating them in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// Which wing the king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Canonical origin column of the rook for this side.
    #[inline]
    pub const fn rook_origin_col(self) -> i8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Destination column of the king after castling.
    #[inline]
    pub const fn king_destination_col(self) -> i8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Destination column of the rook after castling.
    #[inline]
    pub const fn rook_destination_col(self) -> i8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

/// Castling rights for one color. Rights are only ever lost, never regained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
    pub king_moved: bool,
}

impl SideRights {
    #[inline]
    pub const fn initial() -> Self {
        Self {
            kingside: true,
            queenside: true,
            king_moved: false,
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            kingside: false,
            queenside: false,
            king_moved: true,
        }
    }
}

/// Castling rights for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl CastlingRights {
    #[inline]
    pub const fn initial() -> Self {
        Self {
            white: SideRights::initial(),
            black: SideRights::initial(),
        }
    }

    #[inline]
    pub fn side(&self, color: Color) -> &SideRights {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    pub fn side_mut(&mut self, color: Color) -> &mut SideRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

/// Overall game status as seen by the side now to move.
///
/// `Timeout` is set only through the external clock's entry point; the engine
/// itself has no notion of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Timeout,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Timeout
        )
    }
}

/// Outstanding promotion choice: a pawn of `color` sits on `square` and the
/// turn is suspended until a piece is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionRequest {
    pub square: Square,
    pub color: Color,
}

/// Who controls a side. Legality is side-blind; the only behavioral
/// difference is that the automated side resolves promotion to a queen
/// without suspending the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Automated,
}

/// One entry of the append-only move history.
///
/// Kept for inspection and audit only; the engine never reads it back for
/// legality decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub is_castle: bool,
    pub castle_side: Option<CastleSide>,
    pub is_en_passant: bool,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::wrap_col;

    #[test]
    fn columns_wrap_in_both_directions() {
        assert_eq!(wrap_col(8), 0);
        assert_eq!(wrap_col(-1), 7);
        assert_eq!(wrap_col(-9), 7);
        assert_eq!(wrap_col(3), 3);
    }
}
