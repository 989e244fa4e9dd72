//! Obstruction checks along straight and diagonal lines.
//!
//! Horizontal and diagonal travel may cross the 7↔0 column seam. For
//! horizontal movement both the direct route and the wrapped route are
//! scanned, and the line counts as clear if either one is; this
//! or-of-two-routes rule is the central cylindrical-topology behavior.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{wrap_col, Square};

/// Whether a rook-style line from `from` to `to` is unobstructed.
///
/// The two squares must share a row or a column; anything else is not a
/// straight line and reports `false`. The destination square itself is
/// excluded from the emptiness check.
pub fn clear_straight_path(board: &Board, from: Square, to: Square) -> bool {
    // Vertical travel never wraps; rows 0 and 7 are true edges.
    if from.1 == to.1 {
        let step = if from.0 < to.0 { 1 } else { -1 };
        let mut row = from.0 + step;
        while row != to.0 {
            if board.get((row, from.1)).is_some() {
                return false;
            }
            row += step;
        }
        return true;
    }

    if from.0 == to.0 {
        let direct_dist = (to.1 - from.1).abs();
        let wrapped_dist = 8 - direct_dist;
        let direct_step = if to.1 > from.1 { 1 } else { -1 };

        if route_is_clear(board, from, direct_step, direct_dist) {
            return true;
        }
        // The opposite step crosses the 7↔0 seam toward the same square.
        return route_is_clear(board, from, -direct_step, wrapped_dist);
    }

    false
}

fn route_is_clear(board: &Board, from: Square, step: i8, distance: i8) -> bool {
    let mut col = from.1;
    for _ in 1..distance {
        col = wrap_col(col + step);
        if board.get((from.0, col)).is_some() {
            return false;
        }
    }
    true
}

/// Walks a diagonal from `from` one row and one wrapped column per step and
/// reports whether it lands exactly on `to` with every intermediate square
/// empty.
///
/// A diagonal can also wrap, so callers try both column-step signs; whichever
/// walk reaches the destination decides.
pub fn clear_diagonal_path(
    board: &Board,
    from: Square,
    to: Square,
    row_step: i8,
    col_step: i8,
) -> bool {
    let steps = (to.0 - from.0).abs();
    let mut row = from.0;
    let mut col = from.1;

    for i in 0..steps {
        row += row_step;
        col = wrap_col(col + col_step);
        if i < steps - 1 && board.get((row, col)).is_some() {
            return false;
        }
    }

    row == to.0 && col == to.1
}
