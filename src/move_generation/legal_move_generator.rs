//! Full legal move generation pipeline.
//!
//! Enumerates pseudo-legal candidates per piece, classifies specials,
//! applies each candidate to a cloned board, and filters out moves that
//! leave the mover's own king in check. Enumeration order is unspecified.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastleSide, CastlingRights, Color, Piece, PieceKind, Square,
};
use crate::move_generation::simulate::simulate_move;
use crate::rules::status::is_in_check;
use crate::rules::validator::pseudo_legal;

/// A fully vetted move, classified for execution and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
    pub castle_side: Option<CastleSide>,
    pub is_en_passant: bool,
}

impl GeneratedMove {
    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle_side.is_some()
    }
}

/// Every legal move for `color` in the given position.
pub fn legal_moves(
    board: &Board,
    color: Color,
    rights: &CastlingRights,
    en_passant: Option<Square>,
) -> Result<Vec<GeneratedMove>, ChessErrors> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        collect_from(board, from, piece, rights, en_passant, &mut moves)?;
    }
    Ok(moves)
}

/// Legal moves of the piece on `from`, for move-indicator queries. Empty if
/// the square is vacant.
pub fn legal_moves_from(
    board: &Board,
    from: Square,
    rights: &CastlingRights,
    en_passant: Option<Square>,
) -> Result<Vec<GeneratedMove>, ChessErrors> {
    let mut moves = Vec::new();
    if let Some(piece) = board.get(from) {
        collect_from(board, from, piece, rights, en_passant, &mut moves)?;
    }
    Ok(moves)
}

fn collect_from(
    board: &Board,
    from: Square,
    piece: Piece,
    rights: &CastlingRights,
    en_passant: Option<Square>,
    moves: &mut Vec<GeneratedMove>,
) -> Result<(), ChessErrors> {
    for to_row in 0..8i8 {
        for to_col in 0..8i8 {
            let to = (to_row, to_col);
            if let Some(candidate) = vet_candidate(board, from, piece, to, rights, en_passant)? {
                moves.push(candidate);
            }
        }
    }
    Ok(())
}

fn vet_candidate(
    board: &Board,
    from: Square,
    piece: Piece,
    to: Square,
    rights: &CastlingRights,
    en_passant: Option<Square>,
) -> Result<Option<GeneratedMove>, ChessErrors> {
    if !pseudo_legal(board, from, to, rights, en_passant) {
        return Ok(None);
    }

    // Kings are never capturable; the game ends at checkmate first. This
    // guard keeps the invariant even on hand-built positions.
    if matches!(board.get(to), Some(occupant) if occupant.kind == PieceKind::King) {
        return Ok(None);
    }

    let castle_side = classify_castle(piece, from, to);
    let is_en_passant = piece.kind == PieceKind::Pawn && en_passant == Some(to);

    let test_board = simulate_move(board, from, to, castle_side, is_en_passant);
    if is_in_check(&test_board, piece.color)? {
        return Ok(None);
    }

    Ok(Some(GeneratedMove {
        from,
        to,
        is_capture: board.get(to).is_some() || is_en_passant,
        castle_side,
        is_en_passant,
    }))
}

/// A king displacing two columns is castling; column deltas here are plain
/// (the king castles between columns 4 and 6/2, never across the seam).
pub fn classify_castle(piece: Piece, from: Square, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King || (to.1 - from.1).abs() != 2 {
        return None;
    }
    Some(if to.1 > from.1 {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    })
}
