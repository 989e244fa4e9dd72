//! Canonical pseudo-legal move validator.
//!
//! One validator serves both legality checking and attack detection, with an
//! explicit mode: the basic mode ignores castling and en passant (the attack
//! detector must, to avoid mutual recursion through castling's own attack
//! checks), the extended mode applies the full rules. Whether the mover's
//! own king ends up in check is out of scope here; that filter belongs to
//! legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, CastlingRights, PieceKind, Square};
use crate::rules::castling::can_castle;
use crate::rules::paths::{clear_diagonal_path, clear_straight_path};

/// Castling and en passant state consulted only in extended mode.
#[derive(Clone, Copy)]
struct SpecialRules<'a> {
    rights: &'a CastlingRights,
    en_passant: Option<Square>,
}

/// Pseudo-legality without castling or en passant. This is the mode the
/// attack detector uses.
pub fn pseudo_legal_basic(board: &Board, from: Square, to: Square) -> bool {
    validate_move(board, from, to, None)
}

/// Full pseudo-legality, including castling and en passant capture.
pub fn pseudo_legal(
    board: &Board,
    from: Square,
    to: Square,
    rights: &CastlingRights,
    en_passant: Option<Square>,
) -> bool {
    validate_move(board, from, to, Some(SpecialRules { rights, en_passant }))
}

fn validate_move(board: &Board, from: Square, to: Square, special: Option<SpecialRules>) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if let Some(occupant) = board.get(to) {
        if occupant.color == piece.color {
            return false;
        }
    }

    let row_diff = (to.0 - from.0).abs();
    let direct_col_diff = (to.1 - from.1).abs();
    let wrapped_col_diff = 8 - direct_col_diff;
    let col_diff = direct_col_diff.min(wrapped_col_diff);

    match piece.kind {
        PieceKind::Pawn => {
            let direction = piece.color.pawn_direction();
            let start_row = piece.color.pawn_start_row();

            // Single forward step onto an empty square. Forward motion stays
            // in its column, so the seam never matters here.
            if to.1 == from.1 && to.0 == from.0 + direction && board.get(to).is_none() {
                return true;
            }

            // Double step from the start rank through two empty squares.
            if from.0 == start_row
                && to.1 == from.1
                && to.0 == from.0 + 2 * direction
                && board.get((from.0 + direction, from.1)).is_none()
                && board.get(to).is_none()
            {
                return true;
            }

            // Diagonal capture, including across the seam.
            if to.0 == from.0 + direction && col_diff == 1 && board.get(to).is_some() {
                return true;
            }

            // En passant: the target square is empty but capturable for one
            // reply after the double step that created it.
            if let Some(SpecialRules {
                en_passant: Some(target),
                ..
            }) = special
            {
                if to == target && to.0 == from.0 + direction && col_diff == 1 {
                    return true;
                }
            }

            false
        }

        PieceKind::Knight => {
            (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
        }

        PieceKind::Bishop => {
            if row_diff == 0 || row_diff > 7 {
                return false;
            }
            (row_diff == direct_col_diff || row_diff == wrapped_col_diff)
                && diagonal_reachable(board, from, to)
        }

        PieceKind::Rook => {
            (row_diff == 0 || direct_col_diff == 0) && clear_straight_path(board, from, to)
        }

        PieceKind::Queen => {
            if row_diff > 7 {
                return false;
            }
            if row_diff == 0 || direct_col_diff == 0 {
                return clear_straight_path(board, from, to);
            }
            (row_diff == direct_col_diff || row_diff == wrapped_col_diff)
                && diagonal_reachable(board, from, to)
        }

        PieceKind::King => {
            if row_diff <= 1 && col_diff <= 1 {
                return true;
            }
            // A two-square horizontal king move is castling; only the
            // extended mode knows about it.
            if let Some(SpecialRules { rights, .. }) = special {
                if row_diff == 0 && direct_col_diff == 2 {
                    let side = if to.1 > from.1 {
                        CastleSide::Kingside
                    } else {
                        CastleSide::Queenside
                    };
                    return can_castle(board, piece.color, side, rights);
                }
            }
            false
        }
    }
}

/// Tries the diagonal walk in both column directions; a diagonal can reach
/// its destination directly or by wrapping around the seam.
fn diagonal_reachable(board: &Board, from: Square, to: Square) -> bool {
    let row_step = if to.0 > from.0 { 1 } else { -1 };
    clear_diagonal_path(board, from, to, row_step, 1)
        || clear_diagonal_path(board, from, to, row_step, -1)
}
