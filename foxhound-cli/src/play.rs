//! Play command - interactive game on the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: game_loop()
//! - Level 3: handle_move(), handle_save(), handle_load()
//! - Level 4: rendering and prompts (ui module)

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use foxhound_core::{GameConfig, GameResult, GameState, MoveError};

use crate::ui::{self, MenuChoice};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board dimension (4 to 26); invalid values fall back to 8
    pub dimension: Option<String>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let config = GameConfig::from_arg(args.dimension.as_deref());
    let mut game = GameState::new(config.dim).context("Failed to set up the board")?;

    tracing::info!("Starting {}x{} game", config.dim, config.dim);

    let stdin = io::stdin();
    let stdout = io::stdout();
    game_loop(&mut game, &mut stdin.lock(), &mut stdout.lock())
}

// ============================================================================
// LEVEL 2 - MAIN LOOP
// ============================================================================

/// Process menu choices until someone wins, the player exits or input ends
pub fn game_loop<R: BufRead, W: Write>(game: &mut GameState, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        writeln!(out, "\n#################################")?;
        show_board(game, out)?;

        let Some(choice) = ui::menu_query(game.turn(), input, out)? else {
            return Ok(());
        };

        match choice {
            MenuChoice::Move => {
                if game.legal_moves().is_empty() {
                    writeln!(out, "{} cannot move. Game over.", game.turn())?;
                    return Ok(());
                }
                let Some(result) = handle_move(game, input, out)? else {
                    return Ok(());
                };
                if result.is_over() {
                    announce_winner(game, result, out)?;
                    return Ok(());
                }
            }
            MenuChoice::Save => handle_save(game, input, out)?,
            MenuChoice::Load => handle_load(game, input, out)?,
            MenuChoice::Exit => return Ok(()),
        }
    }
}

// ============================================================================
// LEVEL 3 - MENU ACTIONS
// ============================================================================

/// Ask for moves until a legal one is played
fn handle_move<R: BufRead, W: Write>(
    game: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> Result<Option<GameResult>> {
    loop {
        let Some((origin, dest)) = ui::position_query(game.dim(), input, out)? else {
            return Ok(None);
        };

        match game.play_labels(&origin, &dest) {
            Ok(outcome) => return Ok(Some(outcome.result)),
            Err(MoveError::Illegal { .. }) => writeln!(out, "ERROR: Invalid move. Try again!")?,
            Err(e) => return Err(e).context("Move could not be checked"),
        }
    }
}

fn handle_save<R: BufRead, W: Write>(game: &GameState, input: &mut R, out: &mut W) -> Result<()> {
    let Some(path) = ui::file_query(input, out)? else {
        return Ok(());
    };
    match game.save(&path) {
        Ok(()) => writeln!(out, "Board saved to {}", path.display())?,
        Err(e) => writeln!(out, "ERROR: Saving file failed: {}", e)?,
    }
    Ok(())
}

fn handle_load<R: BufRead, W: Write>(game: &mut GameState, input: &mut R, out: &mut W) -> Result<()> {
    let Some(path) = ui::file_query(input, out)? else {
        return Ok(());
    };
    if let Err(e) = game.load(&path) {
        if !e.is_recoverable() {
            tracing::warn!("Load refused for a {}x{} game: {}", game.dim(), game.dim(), e);
        }
        writeln!(out, "ERROR: Loading from file failed: {}", e)?;
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - OUTPUT
// ============================================================================

fn show_board<W: Write>(game: &GameState, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", ui::render_board(game.dim(), game.roster()))?;
    writeln!(out, "{}", ui::players_line(game.roster()))
}

fn announce_winner<W: Write>(game: &GameState, result: GameResult, out: &mut W) -> io::Result<()> {
    match result {
        GameResult::FoxWins => writeln!(out, "The Fox wins!")?,
        GameResult::HoundsWin => writeln!(out, "The Hounds win!")?,
        GameResult::Ongoing => return Ok(()),
    }
    writeln!(out, "{}", ui::render_board(game.dim(), game.roster()))
}
