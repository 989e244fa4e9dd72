//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! coordinate parsing, and status evaluation. The enum `ChessErrors` is used
//! as the single error type across the crate to simplify propagation and
//! matching.
//!
//! Usage guidelines:
//! - Rejected move submissions are ordinary `Err` values, never panics; the
//!   game state is left untouched so the caller can re-prompt.
//! - Variants that represent internal corruption (e.g. `KingNotFound`)
//!   indicate a broken board invariant and are not intended to be recovered
//!   from by normal library users.

use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};

/// Unified error type for the rules engine.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while submitting moves, completing promotions, or parsing algebraic
/// coordinates. Variants include contextual payloads where useful so that
/// callers can log or display precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A move was submitted after the game reached a terminal status.
    ///
    /// Payload: the terminal status that ended the game.
    GameOver(GameStatus),

    /// A move was submitted while a pawn promotion choice is outstanding.
    ///
    /// The turn is suspended until `complete_promotion` supplies a piece.
    PromotionPending,

    /// `complete_promotion` was called with no promotion outstanding.
    NoPromotionPending,

    /// The supplied promotion piece is not one of queen, rook, bishop, or
    /// knight. The request stays pending and no state changes.
    InvalidPromotionPiece(PieceKind),

    /// The origin square of a submitted move holds no piece.
    EmptySquare(Square),

    /// The origin square holds a piece of the side not currently to move.
    ///
    /// Payload: the color of the piece that was selected.
    OutOfTurn(Color),

    /// The submitted move violates the movement rules or would leave the
    /// mover's own king in check. No state changes.
    IllegalMove { from: Square, to: Square },

    /// No king of the given color is on the board during status evaluation.
    ///
    /// This represents a corrupted game state; callers should treat it as a
    /// fatal logic error in board construction or maintenance, not a normal
    /// game outcome.
    KingNotFound(Color),

    /// A single character used during algebraic parsing was invalid (a file
    /// outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square or move.
    InvalidAlgebraicString(String),

    /// A square with a row or column outside `0..=7` was passed where an
    /// on-board square is required.
    SquareOffBoard(Square),
}
