//! Move execution on a board, for both simulation and the live game.
//!
//! Castling and en passant run through their dedicated routines; everything
//! else is plain relocation. Simulation always works on an owned clone so a
//! candidate move can never leak into the authoritative board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Square};
use crate::rules::castling::execute_castle;

/// Applies a classified move to `board` in place.
pub fn execute_move(
    board: &mut Board,
    from: Square,
    to: Square,
    castle_side: Option<CastleSide>,
    is_en_passant: bool,
) {
    let Some(piece) = board.get(from) else {
        return;
    };

    if let Some(side) = castle_side {
        execute_castle(board, piece.color, side);
    } else if is_en_passant {
        execute_en_passant(board, from, to);
    } else {
        board.set(to, Some(piece));
        board.set(from, None);
    }
}

/// Moves the capturing pawn onto the (empty) target square and removes the
/// passed pawn, which sits on the mover's origin row in the destination
/// column.
pub fn execute_en_passant(board: &mut Board, from: Square, to: Square) {
    let pawn = board.get(from);
    board.set(to, pawn);
    board.set(from, None);
    board.set((from.0, to.1), None);
}

/// Clones `board` and applies the move to the clone.
pub fn simulate_move(
    board: &Board,
    from: Square,
    to: Square,
    castle_side: Option<CastleSide>,
    is_en_passant: bool,
) -> Board {
    let mut clone = board.clone();
    execute_move(&mut clone, from, to, castle_side, is_en_passant);
    clone
}

#[cfg(test)]
mod tests {
    use super::{execute_en_passant, execute_move, simulate_move};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastleSide, Color, Piece, PieceKind};

    fn put(board: &mut Board, square: (i8, i8), kind: PieceKind, color: Color) {
        board.set(square, Some(Piece::new(kind, color)));
    }

    #[test]
    fn plain_relocation_replaces_the_destination() {
        let mut board = Board::empty();
        put(&mut board, (4, 4), PieceKind::Rook, Color::White);
        put(&mut board, (4, 0), PieceKind::Knight, Color::Black);
        execute_move(&mut board, (4, 4), (4, 0), None, false);
        assert_eq!(
            board.get((4, 0)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(board.get((4, 4)).is_none());
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::empty();
        put(&mut board, (4, 3), PieceKind::Pawn, Color::Black);
        put(&mut board, (4, 4), PieceKind::Pawn, Color::White);
        execute_en_passant(&mut board, (4, 3), (5, 4));
        assert_eq!(
            board.get((5, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert!(board.get((4, 3)).is_none());
        assert!(board.get((4, 4)).is_none());
    }

    #[test]
    fn castle_execution_is_routed_through_the_castling_module() {
        let mut board = Board::empty();
        put(&mut board, (0, 4), PieceKind::King, Color::Black);
        put(&mut board, (0, 0), PieceKind::Rook, Color::Black);
        execute_move(&mut board, (0, 4), (0, 2), Some(CastleSide::Queenside), false);
        assert_eq!(
            board.get((0, 2)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.get((0, 3)),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
    }

    #[test]
    fn simulation_leaves_the_source_board_untouched() {
        let mut board = Board::empty();
        put(&mut board, (6, 2), PieceKind::Queen, Color::White);
        let after = simulate_move(&board, (6, 2), (1, 2), None, false);
        assert!(board.get((6, 2)).is_some());
        assert!(after.get((6, 2)).is_none());
        assert!(after.get((1, 2)).is_some());
    }
}
