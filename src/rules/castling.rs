//! Castling legality, execution, and rights bookkeeping.
//!
//! Castling is the one move the validator cannot judge from geometry alone:
//! it depends on rights history and on attack state along the king's path.
//! The king and rook travel inside the back rank between their canonical
//! columns, so castling never routes across the column seam.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastleSide, CastlingRights, Color, Piece, PieceKind, Square,
};
use crate::rules::attacks::is_square_attacked;

const KING_ORIGIN_COL: i8 = 4;

/// Whether `color` may castle to `side` right now.
///
/// Requires: rights still held and king unmoved; king and rook on their
/// canonical squares; every square strictly between them empty; and none of
/// the king's start, pass-through, and destination squares attacked by the
/// opponent (the start-square test covers "not currently in check").
pub fn can_castle(board: &Board, color: Color, side: CastleSide, rights: &CastlingRights) -> bool {
    let side_rights = rights.side(color);
    if side_rights.king_moved {
        return false;
    }
    let right_held = match side {
        CastleSide::Kingside => side_rights.kingside,
        CastleSide::Queenside => side_rights.queenside,
    };
    if !right_held {
        return false;
    }

    let row = color.back_rank();
    let rook_col = side.rook_origin_col();

    if !holds(board, (row, KING_ORIGIN_COL), PieceKind::King, color)
        || !holds(board, (row, rook_col), PieceKind::Rook, color)
    {
        return false;
    }

    let low = KING_ORIGIN_COL.min(rook_col);
    let high = KING_ORIGIN_COL.max(rook_col);
    for col in (low + 1)..high {
        if board.get((row, col)).is_some() {
            return false;
        }
    }

    let enemy = color.opposite();
    let step = match side {
        CastleSide::Kingside => 1,
        CastleSide::Queenside => -1,
    };
    for offset in 0..=2 {
        if is_square_attacked(board, (row, KING_ORIGIN_COL + offset * step), enemy) {
            return false;
        }
    }

    true
}

/// Relocates king and rook for a castle that has already been validated.
/// Both pieces move together; the caller aborts before calling this on any
/// legality failure.
pub fn execute_castle(board: &mut Board, color: Color, side: CastleSide) {
    let row = color.back_rank();
    let king_from = (row, KING_ORIGIN_COL);
    let rook_from = (row, side.rook_origin_col());

    let king = board.get(king_from);
    board.set((row, side.king_destination_col()), king);
    board.set(king_from, None);

    let rook = board.get(rook_from);
    board.set((row, side.rook_destination_col()), rook);
    board.set(rook_from, None);
}

/// Degrades castling rights after a move. Rights are monotonic: a king move
/// clears both sides, a rook move from its origin clears that side, and an
/// enemy rook captured on its origin clears that side for the victim.
/// `captured` is the occupant of `to` before the move was executed.
pub fn update_rights_after_move(
    rights: &mut CastlingRights,
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
) {
    if piece.kind == PieceKind::King {
        let side_rights = rights.side_mut(piece.color);
        side_rights.kingside = false;
        side_rights.queenside = false;
        side_rights.king_moved = true;
    }

    if piece.kind == PieceKind::Rook && from.0 == piece.color.back_rank() {
        let side_rights = rights.side_mut(piece.color);
        match from.1 {
            0 => side_rights.queenside = false,
            7 => side_rights.kingside = false,
            _ => {}
        }
    }

    if let Some(victim) = captured {
        if victim.kind == PieceKind::Rook && to.0 == victim.color.back_rank() {
            let side_rights = rights.side_mut(victim.color);
            match to.1 {
                0 => side_rights.queenside = false,
                7 => side_rights.kingside = false,
                _ => {}
            }
        }
    }
}

fn holds(board: &Board, square: Square, kind: PieceKind, color: Color) -> bool {
    matches!(board.get(square), Some(piece) if piece.kind == kind && piece.color == color)
}

#[cfg(test)]
mod tests {
    use super::{can_castle, execute_castle, update_rights_after_move};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{
        CastleSide, CastlingRights, Color, Piece, PieceKind,
    };

    fn put(board: &mut Board, square: (i8, i8), kind: PieceKind, color: Color) {
        board.set(square, Some(Piece::new(kind, color)));
    }

    fn bare_castle_board() -> Board {
        let mut board = Board::empty();
        put(&mut board, (7, 4), PieceKind::King, Color::White);
        put(&mut board, (7, 7), PieceKind::Rook, Color::White);
        put(&mut board, (7, 0), PieceKind::Rook, Color::White);
        put(&mut board, (0, 4), PieceKind::King, Color::Black);
        board
    }

    #[test]
    fn initial_position_blocks_castling_until_path_clears() {
        let board = Board::initial();
        let rights = CastlingRights::initial();
        assert!(!can_castle(&board, Color::White, CastleSide::Kingside, &rights));

        let mut board = board;
        board.set((7, 5), None);
        board.set((7, 6), None);
        assert!(can_castle(&board, Color::White, CastleSide::Kingside, &rights));
    }

    #[test]
    fn castling_requires_rights_and_unmoved_king() {
        let board = bare_castle_board();
        let mut rights = CastlingRights::initial();
        assert!(can_castle(&board, Color::White, CastleSide::Kingside, &rights));
        assert!(can_castle(&board, Color::White, CastleSide::Queenside, &rights));

        rights.white.kingside = false;
        assert!(!can_castle(&board, Color::White, CastleSide::Kingside, &rights));
        assert!(can_castle(&board, Color::White, CastleSide::Queenside, &rights));

        rights.white.king_moved = true;
        assert!(!can_castle(&board, Color::White, CastleSide::Queenside, &rights));
    }

    #[test]
    fn castling_rejected_through_or_into_attack() {
        let mut board = bare_castle_board();
        let rights = CastlingRights::initial();
        // Black rook eyeing (7,5), the king's pass-through square.
        put(&mut board, (3, 5), PieceKind::Rook, Color::Black);
        assert!(!can_castle(&board, Color::White, CastleSide::Kingside, &rights));
        assert!(can_castle(&board, Color::White, CastleSide::Queenside, &rights));

        // Attack on the king itself forbids both wings.
        board.set((3, 5), None);
        put(&mut board, (3, 4), PieceKind::Rook, Color::Black);
        assert!(!can_castle(&board, Color::White, CastleSide::Kingside, &rights));
        assert!(!can_castle(&board, Color::White, CastleSide::Queenside, &rights));
    }

    #[test]
    fn castling_rejected_when_rook_is_absent() {
        let mut board = bare_castle_board();
        let rights = CastlingRights::initial();
        board.set((7, 7), None);
        assert!(!can_castle(&board, Color::White, CastleSide::Kingside, &rights));
    }

    #[test]
    fn execute_castle_moves_both_pieces_atomically() {
        let mut board = bare_castle_board();
        execute_castle(&mut board, Color::White, CastleSide::Kingside);
        assert_eq!(
            board.get((7, 6)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get((7, 5)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(board.get((7, 4)).is_none());
        assert!(board.get((7, 7)).is_none());

        let mut board = bare_castle_board();
        execute_castle(&mut board, Color::White, CastleSide::Queenside);
        assert_eq!(
            board.get((7, 2)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get((7, 3)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
    }

    #[test]
    fn king_move_clears_both_rights() {
        let mut rights = CastlingRights::initial();
        update_rights_after_move(
            &mut rights,
            (7, 4),
            (6, 4),
            Piece::new(PieceKind::King, Color::White),
            None,
        );
        assert!(!rights.white.kingside);
        assert!(!rights.white.queenside);
        assert!(rights.white.king_moved);
        assert!(rights.black.kingside);
    }

    #[test]
    fn rook_move_from_origin_clears_one_side() {
        let mut rights = CastlingRights::initial();
        update_rights_after_move(
            &mut rights,
            (0, 7),
            (3, 7),
            Piece::new(PieceKind::Rook, Color::Black),
            None,
        );
        assert!(!rights.black.kingside);
        assert!(rights.black.queenside);
    }

    #[test]
    fn capturing_a_rook_on_its_origin_clears_the_victims_side() {
        let mut rights = CastlingRights::initial();
        update_rights_after_move(
            &mut rights,
            (2, 0),
            (0, 0),
            Piece::new(PieceKind::Rook, Color::White),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        // The white rook moved off its own back rank, so white keeps rights;
        // black loses queenside because its rook died at home.
        assert!(rights.white.kingside && rights.white.queenside);
        assert!(!rights.black.queenside);
        assert!(rights.black.kingside);
    }
}
