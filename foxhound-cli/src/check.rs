//! Check command - inspect a saved game without playing it
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_saved(), build_report(), print_report()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use foxhound_core::{
    initial_placement, is_fox_win, is_hound_win, legal_moves, load_game, Role, Roster,
    DEFAULT_DIM,
};

use crate::ui;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct CheckArgs {
    /// Saved game file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Summary of a saved position
#[derive(Clone, Debug, Serialize)]
struct CheckReport {
    to_move: Role,
    hounds: Vec<String>,
    fox: String,
    fox_win: bool,
    hound_win: bool,
    legal_moves: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run check command
pub fn run(args: CheckArgs) -> Result<()> {
    let (turn, roster) = load_saved(&args)?;
    let report = build_report(turn, &roster)?;
    print_report(&report, &roster, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_saved(args: &CheckArgs) -> Result<(Role, Roster)> {
    let mut roster = initial_placement(DEFAULT_DIM)?;
    let turn = load_game(&mut roster, &args.file)
        .with_context(|| format!("Failed to load saved game: {}", args.file.display()))?;
    Ok((turn, roster))
}

fn build_report(turn: Role, roster: &Roster) -> Result<CheckReport> {
    Ok(CheckReport {
        to_move: turn,
        hounds: roster.hounds.iter().map(ToString::to_string).collect(),
        fox: roster.fox.to_string(),
        fox_win: is_fox_win(roster.fox),
        hound_win: is_hound_win(DEFAULT_DIM, roster)?,
        legal_moves: legal_moves(DEFAULT_DIM, roster, turn).len(),
    })
}

fn print_report(report: &CheckReport, roster: &Roster, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{}", ui::render_board(DEFAULT_DIM, roster));
    println!("{}", ui::players_line(roster));
    println!("{} to move, {} legal moves", report.to_move, report.legal_moves);
    if report.fox_win {
        println!("The fox has reached the top row.");
    }
    if report.hound_win {
        println!("The fox is trapped.");
    }
    Ok(())
}
