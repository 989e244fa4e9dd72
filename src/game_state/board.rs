//! Mailbox board model.
//!
//! An 8×8 grid of `Option<Piece>` owned exclusively by the game state
//! machine. Cloning produces a full deep copy, so simulation boards never
//! alias the live board.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The playing surface. At most one piece per square, at most one king per
/// color; a king is never captured under correct play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces, for scenario construction in tests and tools.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial setup: Black on rows 0/1, White on rows 6/7,
    /// back ranks R N B Q K B N R with the king on column 4.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_ROW.iter().enumerate() {
            let col = col as i8;
            board.set((0, col), Some(Piece::new(*kind, Color::Black)));
            board.set((1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set((6, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set((7, col), Some(Piece::new(*kind, Color::White)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize][square.1 as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.0 as usize][square.1 as usize] = piece;
    }

    /// Linear scan for the king of `color`.
    ///
    /// Returns `None` if absent; callers must treat a missing king as an
    /// internal-consistency fault, not a valid state.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// All pieces of `color` with their squares, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                self.squares[row as usize][col as usize]
                    .filter(|piece| piece.color == color)
                    .map(|piece| ((row, col), piece))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn initial_setup_places_kings_on_column_4() {
        let board = Board::initial();
        assert_eq!(board.find_king(Color::Black), Some((0, 4)));
        assert_eq!(board.find_king(Color::White), Some((7, 4)));
    }

    #[test]
    fn initial_setup_has_sixteen_pieces_per_side() {
        let board = Board::initial();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let board = Board::initial();
        let mut clone = board.clone();
        clone.set((6, 4), None);
        clone.set((4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(board.get((6, 4)).is_some());
        assert!(board.get((4, 4)).is_none());
    }

    #[test]
    fn find_king_reports_absence() {
        let board = Board::empty();
        assert_eq!(board.find_king(Color::White), None);
    }
}
