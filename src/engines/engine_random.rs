//! Random-move opponent.
//!
//! Selects uniformly from the legal moves and is primarily used for
//! diagnostics, integration testing, and low-strength gameplay. Contains no
//! rules logic of its own.

use rand::prelude::IndexedRandom;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::CylinderGame;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Cylinder Random"
    }

    fn choose_move(&mut self, game: &CylinderGame) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = game.all_legal_moves()?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        out.chosen_move = legal_moves.as_slice().choose(&mut rng).copied();
        Ok(out)
    }
}
