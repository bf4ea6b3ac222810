//! Fox and Hounds Core - Rules engine
//!
//! This crate provides the game logic for Fox and Hounds:
//! - Board geometry (row/column coordinates and `A1`-style labels)
//! - Piece roster, validation and the starting layout
//! - Move legality and win conditions
//! - A game session driver for front ends
//! - Save file format (8x8 only)

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod record;
pub mod roster;
pub mod rules;

// Re-exports for convenient access
pub use board::{
    check_dimension, col_of, corners, is_well_formed, is_well_formed_loose, row_of, to_label,
    Coord, COLUMN_START, DEFAULT_DIM, FOX_WIN_ROW, MAX_DIM, MIN_DIM,
};
pub use config::GameConfig;
pub use error::EngineError;
pub use game::{GameState, MoveError, MoveOutcome};
pub use record::{decode, encode, load_game, save_game, LoadError, SaveError};
pub use roster::{check_roster, initial_placement, Role, Roster, FOX_SYMBOL, HOUND_SYMBOL};
pub use rules::{
    check_move, check_move_labels, is_fox_win, is_hound_win, is_legal_move, legal_moves,
    result_after, GameResult,
};
