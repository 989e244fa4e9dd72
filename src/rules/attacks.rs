//! Attack detection.
//!
//! A square is attacked by a color if any piece of that color has a basic
//! pseudo-legal move onto it. Basic mode is required: castling legality
//! itself asks whether squares are attacked, and en passant never threatens
//! a non-pawn square, so neither belongs in this probe.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::rules::validator::pseudo_legal_basic;

pub fn is_square_attacked(board: &Board, target: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(square, _)| pseudo_legal_basic(board, square, target))
}
