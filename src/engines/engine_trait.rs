//! Opponent abstraction layer.
//!
//! Defines common output payloads so different move-picking strategies can
//! be swapped behind a single trait interface. Engines see only the public
//! game-state surface; they have no access to board internals beyond what
//! any other collaborator gets.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::CylinderGame;
use crate::move_generation::legal_move_generator::GeneratedMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The picked move, or `None` when no legal move exists.
    pub chosen_move: Option<GeneratedMove>,
    /// Free-form diagnostics for the front end to surface or discard.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game: &CylinderGame) -> Result<EngineOutput, ChessErrors>;
}
