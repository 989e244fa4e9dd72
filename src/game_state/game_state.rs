//! The authoritative game state machine.
//!
//! `CylinderGame` owns the board, turn, castling rights, en passant target,
//! status, and move history, and is the only place any of them mutate. Move
//! submission is atomic: it either completes fully or rejects with no state
//! change. The one deliberate two-phase sequence is human pawn promotion,
//! modeled as an explicit `TurnPhase` so the suspend/resume contract is
//! visible in the type.

use chrono::Utc;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastlingRights, Color, GameStatus, MoveRecord, Piece, PieceKind, PlayerKind,
    PromotionRequest, Square,
};
use crate::move_generation::legal_move_generator::{
    classify_castle, legal_moves, legal_moves_from, GeneratedMove,
};
use crate::move_generation::simulate::{execute_move, simulate_move};
use crate::rules::castling::update_rights_after_move;
use crate::rules::status::{evaluate_status, is_in_check};
use crate::rules::validator::pseudo_legal;

/// Where the state machine stands inside a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the current player's move.
    AwaitingMove,
    /// A pawn reached the far rank; the turn is suspended until a promotion
    /// piece is chosen.
    AwaitingPromotion(PromotionRequest),
}

/// Result of a successful move submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn completed; payload is the status now facing the opponent.
    Completed(GameStatus),
    /// The move landed but the turn is held open for a promotion choice on
    /// the given square.
    AwaitingPromotion(Square),
}

/// A cylinder chess game. Created once per game and replaced wholesale on
/// "new game"; mutated exclusively through `submit_move`,
/// `complete_promotion`, and `mark_timeout`.
#[derive(Debug, Clone)]
pub struct CylinderGame {
    board: Board,
    current_player: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    status: GameStatus,
    phase: TurnPhase,
    history: Vec<MoveRecord>,
    white_player: PlayerKind,
    black_player: PlayerKind,
}

impl CylinderGame {
    /// A fresh game with both sides human-controlled.
    pub fn new_game() -> Self {
        Self::with_players(PlayerKind::Human, PlayerKind::Human)
    }

    /// A fresh game where Black is the automated side (promotions for Black
    /// resolve to a queen without suspending the turn).
    pub fn new_game_vs_computer() -> Self {
        Self::with_players(PlayerKind::Human, PlayerKind::Automated)
    }

    pub fn with_players(white_player: PlayerKind, black_player: PlayerKind) -> Self {
        Self {
            board: Board::initial(),
            current_player: Color::White,
            castling_rights: CastlingRights::initial(),
            en_passant_target: None,
            status: GameStatus::Playing,
            phase: TurnPhase::AwaitingMove,
            history: Vec::new(),
            white_player,
            black_player,
        }
    }

    /// Submits a move for the side to move.
    ///
    /// Rejects without mutation when the game is over, a promotion choice is
    /// outstanding, the origin square is empty or foreign, or the move is
    /// illegal (movement rules or king safety). On success the move is
    /// executed, rights and the en passant target are updated, a history
    /// record is appended, and the turn completes unless a human promotion
    /// suspends it.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameOver(self.status));
        }
        if matches!(self.phase, TurnPhase::AwaitingPromotion(_)) {
            return Err(ChessErrors::PromotionPending);
        }

        let piece = self.board.get(from).ok_or(ChessErrors::EmptySquare(from))?;
        if piece.color != self.current_player {
            return Err(ChessErrors::OutOfTurn(piece.color));
        }

        if !pseudo_legal(
            &self.board,
            from,
            to,
            &self.castling_rights,
            self.en_passant_target,
        ) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        // Kings are never captured; the game ends at checkmate first.
        if matches!(self.board.get(to), Some(occupant) if occupant.kind == PieceKind::King) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let castle_side = classify_castle(piece, from, to);
        let is_en_passant =
            piece.kind == PieceKind::Pawn && self.en_passant_target == Some(to);

        let test_board = simulate_move(&self.board, from, to, castle_side, is_en_passant);
        if is_in_check(&test_board, self.current_player)? {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        // Point of no return: everything below must complete together.
        let captured = self.board.get(to);
        execute_move(&mut self.board, from, to, castle_side, is_en_passant);

        let mut promotion_square = None;
        if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row() {
            match self.player_kind(piece.color) {
                PlayerKind::Automated => {
                    self.board
                        .set(to, Some(Piece::new(PieceKind::Queen, piece.color)));
                }
                PlayerKind::Human => {
                    self.phase = TurnPhase::AwaitingPromotion(PromotionRequest {
                        square: to,
                        color: piece.color,
                    });
                    promotion_square = Some(to);
                }
            }
        }

        update_rights_after_move(&mut self.castling_rights, from, to, piece, captured);

        self.en_passant_target = if piece.kind == PieceKind::Pawn && (to.0 - from.0).abs() == 2 {
            Some(((from.0 + to.0) / 2, from.1))
        } else {
            None
        };

        self.history.push(MoveRecord {
            from,
            to,
            piece,
            is_castle: castle_side.is_some(),
            castle_side,
            is_en_passant,
            timestamp: Utc::now(),
        });

        match promotion_square {
            Some(square) => Ok(MoveOutcome::AwaitingPromotion(square)),
            None => Ok(MoveOutcome::Completed(self.finish_turn()?)),
        }
    }

    /// Resolves an outstanding promotion with the chosen piece and completes
    /// the suspended turn. Only queen, rook, bishop, and knight are valid;
    /// anything else is rejected without mutation.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<GameStatus, ChessErrors> {
        let TurnPhase::AwaitingPromotion(request) = self.phase else {
            return Err(ChessErrors::NoPromotionPending);
        };
        if !matches!(
            kind,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        ) {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }

        self.board
            .set(request.square, Some(Piece::new(kind, request.color)));
        self.phase = TurnPhase::AwaitingMove;
        self.finish_turn()
    }

    /// Entry point for the external clock: any non-terminal game becomes a
    /// timeout loss for the side whose flag fell. The engine itself never
    /// sets this.
    pub fn mark_timeout(&mut self) {
        if !self.status.is_terminal() {
            self.status = GameStatus::Timeout;
        }
    }

    fn finish_turn(&mut self) -> Result<GameStatus, ChessErrors> {
        self.current_player = self.current_player.opposite();
        self.status = evaluate_status(
            &self.board,
            self.current_player,
            &self.castling_rights,
            self.en_passant_target,
        )?;
        Ok(self.status)
    }

    fn player_kind(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }

    // --- Read-only surface for rendering and collaborators ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The outstanding promotion request, if the turn is suspended.
    pub fn promotion_request(&self) -> Option<PromotionRequest> {
        match self.phase {
            TurnPhase::AwaitingPromotion(request) => Some(request),
            TurnPhase::AwaitingMove => None,
        }
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling_rights
    }

    /// Append-only move history, for inspection and audit only.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Every legal move for the side to move; the automated opponent picks
    /// from this list.
    pub fn all_legal_moves(&self) -> Result<Vec<GeneratedMove>, ChessErrors> {
        legal_moves(
            &self.board,
            self.current_player,
            &self.castling_rights,
            self.en_passant_target,
        )
    }

    /// Legal moves of the piece on `from`, for move-indicator highlighting.
    /// Empty when the square is vacant or holds the opponent's piece.
    pub fn legal_moves_from(&self, from: Square) -> Result<Vec<GeneratedMove>, ChessErrors> {
        if !matches!(self.board.get(from), Some(piece) if piece.color == self.current_player) {
            return Ok(Vec::new());
        }
        legal_moves_from(
            &self.board,
            from,
            &self.castling_rights,
            self.en_passant_target,
        )
    }
}
