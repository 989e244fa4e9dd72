//! Check detection and game status classification.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, GameStatus, Square};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::rules::attacks::is_square_attacked;

/// Whether `color`'s king is currently attacked.
///
/// A missing king is a broken board invariant, surfaced as an error rather
/// than folded into a boolean.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = board
        .find_king(color)
        .ok_or(ChessErrors::KingNotFound(color))?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

/// Status of the game from the perspective of `color`, the side now to act.
pub fn evaluate_status(
    board: &Board,
    color: Color,
    rights: &CastlingRights,
    en_passant: Option<Square>,
) -> Result<GameStatus, ChessErrors> {
    let has_moves = !legal_moves(board, color, rights, en_passant)?.is_empty();
    let in_check = is_in_check(board, color)?;

    Ok(match (has_moves, in_check) {
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Playing,
    })
}

#[cfg(test)]
mod tests {
    use super::{evaluate_status, is_in_check};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{
        CastlingRights, Color, GameStatus, Piece, PieceKind,
    };

    fn put(board: &mut Board, square: (i8, i8), kind: PieceKind, color: Color) {
        board.set(square, Some(Piece::new(kind, color)));
    }

    fn no_rights() -> CastlingRights {
        let mut rights = CastlingRights::initial();
        rights.white.king_moved = true;
        rights.black.king_moved = true;
        rights
    }

    #[test]
    fn missing_king_is_a_fatal_fault() {
        let board = Board::empty();
        assert_eq!(
            is_in_check(&board, Color::White),
            Err(ChessErrors::KingNotFound(Color::White))
        );
    }

    #[test]
    fn check_through_the_seam_is_detected() {
        let mut board = Board::empty();
        put(&mut board, (3, 0), PieceKind::King, Color::White);
        put(&mut board, (7, 4), PieceKind::King, Color::Black);
        put(&mut board, (3, 5), PieceKind::Rook, Color::Black);
        // Direct route 4..1 is open, but so is the wrapped route 6,7.
        assert!(is_in_check(&board, Color::White).expect("king present"));

        // Plug both routes and the check disappears.
        put(&mut board, (3, 2), PieceKind::Pawn, Color::White);
        put(&mut board, (3, 7), PieceKind::Pawn, Color::White);
        assert!(!is_in_check(&board, Color::White).expect("king present"));
    }

    #[test]
    fn cylinder_checkmate_in_the_corner_that_is_not_a_corner() {
        // On a cylinder (0,0) has five king neighbors: (0,1), (0,7), (1,0),
        // (1,1), and (1,7). Queen plus king cover the near ones, the rook
        // sweeps row 1 around the seam.
        let mut board = Board::empty();
        put(&mut board, (0, 0), PieceKind::King, Color::Black);
        put(&mut board, (0, 1), PieceKind::Queen, Color::White);
        put(&mut board, (1, 2), PieceKind::King, Color::White);
        put(&mut board, (1, 5), PieceKind::Rook, Color::White);

        let status = evaluate_status(&board, Color::Black, &no_rights(), None)
            .expect("kings present");
        assert_eq!(status, GameStatus::Checkmate);
    }

    #[test]
    fn escape_through_the_seam_downgrades_mate_to_check() {
        // Same mating net minus the rook: (1,7) is reachable by wrapping,
        // so the king slips out.
        let mut board = Board::empty();
        put(&mut board, (0, 0), PieceKind::King, Color::Black);
        put(&mut board, (0, 1), PieceKind::Queen, Color::White);
        put(&mut board, (1, 2), PieceKind::King, Color::White);

        let status = evaluate_status(&board, Color::Black, &no_rights(), None)
            .expect("kings present");
        assert_eq!(status, GameStatus::Check);
    }

    #[test]
    fn confined_but_unattacked_king_is_stalemate() {
        let mut board = Board::empty();
        put(&mut board, (0, 0), PieceKind::King, Color::Black);
        put(&mut board, (2, 1), PieceKind::Queen, Color::White);
        put(&mut board, (2, 7), PieceKind::King, Color::White);

        let status = evaluate_status(&board, Color::Black, &no_rights(), None)
            .expect("kings present");
        assert_eq!(status, GameStatus::Stalemate);
    }

    #[test]
    fn open_position_is_playing() {
        let board = Board::initial();
        let status = evaluate_status(&board, Color::White, &CastlingRights::initial(), None)
            .expect("kings present");
        assert_eq!(status, GameStatus::Playing);
    }
}
