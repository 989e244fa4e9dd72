//! Conversions between algebraic coordinates and board squares.
//!
//! Converts human-readable coordinates (e.g. `e4`) and four-character move
//! strings (e.g. `e2e4`) to internal `(row, col)` squares. Rank 1 is the
//! bottom of the board from White's side, which is row 7 internally.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok((row, col))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !(0..=7).contains(&square.0) || !(0..=7).contains(&square.1) {
        return Err(ChessErrors::SquareOffBoard(square));
    }

    let file_char = char::from(b'a' + square.1 as u8);
    let rank_char = char::from(b'1' + (7 - square.0) as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Convert a four-character move string (for example: "e2e4") to its origin
/// and destination squares.
#[inline]
pub fn algebraic_to_move(text: &str) -> Result<(Square, Square), ChessErrors> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }
    let from = algebraic_to_square(&text[..2])?;
    let to = algebraic_to_square(&text[2..])?;
    Ok((from, to))
}
