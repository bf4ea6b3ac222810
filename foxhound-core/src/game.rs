//! Game session: board, pieces, side to move and result
//!
//! This is what a front end drives. It checks every move against the
//! rules before applying it, runs the win check for whoever just moved,
//! and hands the turn over.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::board::{check_dimension, Coord};
use crate::error::EngineError;
use crate::record::{load_game, save_game, LoadError, SaveError};
use crate::roster::{check_roster, initial_placement, Role, Roster};
use crate::rules::{check_move, legal_moves, result_after, GameResult};

/// Error types for playing a move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Game is already over: {0:?}")]
    GameOver(GameResult),

    #[error("Invalid move for {role}: {origin} to {dest}")]
    Illegal { role: Role, origin: Coord, dest: Coord },

    #[error(transparent)]
    Structural(#[from] EngineError),
}

/// What happened on a successful move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub mover: Role,
    pub origin: Coord,
    pub dest: Coord,
    pub result: GameResult,
}

/// Game state (mutated in place by [`GameState::play`])
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    dim: i8,
    roster: Roster,
    turn: Role,
    result: GameResult,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game in the starting layout; the fox moves first
    pub fn new(dim: i8) -> Result<Self, EngineError> {
        let roster = initial_placement(dim)?;
        tracing::debug!("New {}x{} game", dim, dim);
        Ok(Self {
            dim,
            roster,
            turn: Role::Fox,
            result: GameResult::Ongoing,
        })
    }

    /// Resume from an existing position
    pub fn from_parts(dim: i8, roster: Roster, turn: Role) -> Result<Self, EngineError> {
        check_dimension(dim)?;
        check_roster(&roster, dim)?;
        Ok(Self {
            dim,
            roster,
            turn,
            result: GameResult::Ongoing,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn dim(&self) -> i8 {
        self.dim
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Side to move
    pub fn turn(&self) -> Role {
        self.turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// All legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<(Coord, Coord)> {
        if self.result.is_over() {
            return vec![];
        }
        legal_moves(self.dim, &self.roster, self.turn)
    }

    // ========================================================================
    // PLAYING
    // ========================================================================

    /// Check and apply a move for the side to move
    ///
    /// An illegal move leaves the state untouched.
    pub fn play(&mut self, origin: Coord, dest: Coord) -> Result<MoveOutcome, MoveError> {
        if self.result.is_over() {
            return Err(MoveError::GameOver(self.result));
        }

        let mover = self.turn;
        if !check_move(self.dim, &self.roster, mover, origin, dest)? {
            return Err(MoveError::Illegal { role: mover, origin, dest });
        }

        self.roster.move_piece(mover, origin, dest);
        self.result = result_after(mover, self.dim, &self.roster)?;
        self.turn = mover.opponent();

        tracing::debug!("{} moved {} to {} ({:?})", mover, origin, dest, self.result);
        Ok(MoveOutcome {
            mover,
            origin,
            dest,
            result: self.result,
        })
    }

    /// [`GameState::play`] with board labels
    pub fn play_labels(&mut self, origin: &str, dest: &str) -> Result<MoveOutcome, MoveError> {
        let origin = Coord::parse(origin, self.dim)?;
        let dest = Coord::parse(dest, self.dim)?;
        self.play(origin, dest)
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    /// Save to a new file; only 8x8 games can be saved
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        save_game(&self.roster, self.turn, path)
    }

    /// Replace pieces and side to move from a save file
    ///
    /// On failure the session is left as it was. Only 8x8 games can load.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        let mut roster = self.roster.clone();
        let turn = load_game(&mut roster, path)?;
        self.roster = roster;
        self.turn = turn;
        self.result = GameResult::Ongoing;
        Ok(())
    }
}
