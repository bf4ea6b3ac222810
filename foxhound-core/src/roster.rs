//! Piece roles, the piece roster and the canonical start layout

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{check_dimension, Coord};
use crate::error::{EngineError, Result};

/// Symbol of the fox, in save files and on the rendered board
pub const FOX_SYMBOL: char = 'F';
/// Symbol of a hound, in save files and on the rendered board
pub const HOUND_SYMBOL: char = 'H';

/// Piece role, also used as the turn indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Fox,
    Hound,
}

impl Role {
    pub fn opponent(self) -> Self {
        match self {
            Role::Fox => Role::Hound,
            Role::Hound => Role::Fox,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Role::Fox => FOX_SYMBOL,
            Role::Hound => HOUND_SYMBOL,
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            FOX_SYMBOL => Ok(Role::Fox),
            HOUND_SYMBOL => Ok(Role::Hound),
            other => Err(EngineError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Fox => f.write_str("Fox"),
            Role::Hound => f.write_str("Hounds"),
        }
    }
}

/// Positions of every piece: `dim / 2` hounds and one fox
///
/// Hound order is kept stable so a move only rewrites the slot it came
/// from. The flat form is always hounds first, fox last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub hounds: Vec<Coord>,
    pub fox: Coord,
}

impl Roster {
    pub fn new(hounds: Vec<Coord>, fox: Coord) -> Self {
        Self { hounds, fox }
    }

    /// Build from flat labels (hounds first, fox last), each well-formed for `dim`
    pub fn from_labels<S: AsRef<str>>(labels: &[S], dim: i8) -> Result<Self> {
        let (fox, hounds) = labels.split_last().ok_or_else(|| EngineError::InvalidRoster {
            dim,
            reason: "no pieces given".to_string(),
        })?;

        let hounds = hounds
            .iter()
            .map(|label| Coord::parse(label.as_ref(), dim))
            .collect::<Result<Vec<_>>>()?;
        let roster = Self::new(hounds, Coord::parse(fox.as_ref(), dim)?);
        check_roster(&roster, dim)?;
        Ok(roster)
    }

    /// Flat label view, hounds first, fox last
    pub fn labels(&self) -> Result<Vec<String>> {
        self.hounds
            .iter()
            .chain(std::iter::once(&self.fox))
            .map(Coord::label)
            .collect()
    }

    /// Number of entries in the flat form
    pub fn piece_count(&self) -> usize {
        self.hounds.len() + 1
    }

    pub fn is_fox_at(&self, pos: Coord) -> bool {
        self.fox == pos
    }

    pub fn is_hound_at(&self, pos: Coord) -> bool {
        self.hounds.contains(&pos)
    }

    /// Check if the piece at `pos` plays `role`
    pub fn holds(&self, role: Role, pos: Coord) -> bool {
        match role {
            Role::Fox => self.is_fox_at(pos),
            Role::Hound => self.is_hound_at(pos),
        }
    }

    /// Which role occupies `pos`, the fox taking precedence
    pub fn occupant(&self, pos: Coord) -> Option<Role> {
        if self.is_fox_at(pos) {
            Some(Role::Fox)
        } else if self.is_hound_at(pos) {
            Some(Role::Hound)
        } else {
            None
        }
    }

    pub fn is_occupied(&self, pos: Coord) -> bool {
        self.is_fox_at(pos) || self.is_hound_at(pos)
    }

    /// Overwrite the slot of the `role` piece standing on `origin` with `dest`
    ///
    /// Returns false (and changes nothing) when no such piece is found.
    /// No rule checking happens here.
    pub fn move_piece(&mut self, role: Role, origin: Coord, dest: Coord) -> bool {
        match role {
            Role::Fox if self.fox == origin => {
                self.fox = dest;
                true
            }
            Role::Fox => false,
            Role::Hound => match self.hounds.iter_mut().find(|h| **h == origin) {
                Some(slot) => {
                    *slot = dest;
                    true
                }
                None => false,
            },
        }
    }
}

/// Fail unless the roster holds `dim / 2` hounds plus the fox, all on the board
pub fn check_roster(roster: &Roster, dim: i8) -> Result<()> {
    check_dimension(dim)?;

    let expected = (dim / 2) as usize + 1;
    if roster.piece_count() != expected {
        return Err(EngineError::InvalidRoster {
            dim,
            reason: format!("expected {} pieces but got {}", expected, roster.piece_count()),
        });
    }

    let outside = roster
        .hounds
        .iter()
        .chain(std::iter::once(&roster.fox))
        .find(|pos| !pos.in_bounds(dim));
    if let Some(pos) = outside {
        return Err(EngineError::InvalidRoster {
            dim,
            reason: format!("{} is not on the board", pos),
        });
    }

    Ok(())
}

/// Starting layout for a board of dimension `dim`
///
/// Hounds fill every other column of the top row starting at column 1; the
/// fox starts on the bottom row.
pub fn initial_placement(dim: i8) -> Result<Roster> {
    check_dimension(dim)?;

    let hound_row = 0;
    let fox_row = dim - 1;
    // Depends on whether dim is even and whether dim / 2 is even, so that
    // the fox lands on the same field colour as the hounds.
    let fox_col = (dim / 2) + (dim % 2) - ((dim / 2) % 2);

    let hounds = (1..dim)
        .step_by(2)
        .map(|col| Coord::new(hound_row, col))
        .collect();
    Ok(Roster::new(hounds, Coord::new(fox_row, fox_col)))
}
