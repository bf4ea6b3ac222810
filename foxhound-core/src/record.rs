//! Save file format
//!
//! A save file is a single line of space separated tokens: the symbol of
//! the side to move, every hound position, then the fox position, e.g.
//!
//! ```text
//! F B1 D1 F1 H1 E8
//! ```
//!
//! Only the default 8x8 board can be saved and loaded.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::board::{is_well_formed, DEFAULT_DIM};
use crate::error::EngineError;
use crate::roster::{check_roster, Role, Roster};

/// Error types for loading a saved game
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid file name: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Reading file content failed: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid number of lines: {0}")]
    LineCount(usize),

    #[error("Invalid number of elements: {0}")]
    TokenCount(usize),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid figure symbol: {0}")]
    InvalidTurnSymbol(String),

    #[error(transparent)]
    Structural(#[from] EngineError),
}

impl LoadError {
    /// True for file and parse problems, false for a caller handing in
    /// an impossible game state
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LoadError::Structural(_))
    }
}

/// Error types for saving a game
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Subdirectory does not exist: {}", .0.display())]
    MissingParent(PathBuf),

    #[error("Writing to file failed: {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Structural(#[from] EngineError),
}

/// Number of tokens on a save line: turn symbol, hounds, fox
pub const TOKEN_COUNT: usize = (DEFAULT_DIM / 2) as usize + 2;

/// Render the save line for the given state
pub fn encode(turn: Role, roster: &Roster) -> Result<String, EngineError> {
    let mut tokens = vec![turn.symbol().to_string()];
    tokens.extend(roster.labels()?);
    Ok(tokens.join(" "))
}

/// Parse save file content into the side to move and the roster
pub fn decode(content: &str) -> Result<(Role, Roster), LoadError> {
    let lines = split_trailing(content, '\n');
    if lines.len() != 1 {
        return Err(LoadError::LineCount(lines.len()));
    }
    let line = lines[0].strip_suffix('\r').unwrap_or(lines[0]);

    let tokens = split_trailing(line, ' ');
    if tokens.len() != TOKEN_COUNT {
        return Err(LoadError::TokenCount(tokens.len()));
    }

    if let Some(bad) = tokens[1..].iter().find(|t| !is_well_formed(t, DEFAULT_DIM)) {
        return Err(LoadError::InvalidCoordinate(bad.to_string()));
    }

    let mut symbol = tokens[0].chars();
    let turn = match (symbol.next(), symbol.next()) {
        (Some(c), None) => Role::from_symbol(c).ok(),
        _ => None,
    }
    .ok_or_else(|| LoadError::InvalidTurnSymbol(tokens[0].to_string()))?;

    let roster = Roster::from_labels(&tokens[1..], DEFAULT_DIM)?;
    Ok((turn, roster))
}

/// Load a saved game from `path` into `roster`
///
/// The roster is only replaced when the whole file is valid. Returns the
/// side to move next.
pub fn load_game(roster: &mut Roster, path: &Path) -> Result<Role, LoadError> {
    check_roster(roster, DEFAULT_DIM)?;

    match read_game(path) {
        Ok((turn, loaded)) => {
            tracing::info!("Loaded game from {} ({} to move)", path.display(), turn);
            *roster = loaded;
            Ok(turn)
        }
        Err(e) => {
            tracing::warn!("Loading {} failed: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Save `roster` and the side to move to a new file at `path`
///
/// Existing files are never overwritten and missing directories are not
/// created.
pub fn save_game(roster: &Roster, turn: Role, path: &Path) -> Result<(), SaveError> {
    check_roster(roster, DEFAULT_DIM)?;

    if path.exists() {
        return Err(SaveError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            return Err(SaveError::MissingParent(parent.to_path_buf()));
        }
    }

    let content = encode(turn, roster)?;
    write_new(path, &content).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => SaveError::AlreadyExists(path.to_path_buf()),
        _ => SaveError::Write {
            path: path.to_path_buf(),
            source,
        },
    })?;

    tracing::info!("Board saved to {}", path.display());
    Ok(())
}

fn read_game(path: &Path) -> Result<(Role, Roster), LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&content)
}

fn write_new(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())
}

/// Split on `sep`, dropping empty pieces at the end
fn split_trailing(s: &str, sep: char) -> Vec<&str> {
    let mut parts: Vec<&str> = s.split(sep).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}
