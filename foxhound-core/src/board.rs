//! Board geometry: coordinates, board labels and diagonal corners
//!
//! Rows count from 0 at the top, columns from 0 at the left. The
//! human-facing label of a cell is its column letter followed by its
//! 1-based row number, so `(0, 0)` is `A1`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Board dimension used when none is given, and the only one save files support
pub const DEFAULT_DIM: i8 = 8;
/// Smallest supported board dimension
pub const MIN_DIM: i8 = 4;
/// Largest supported board dimension (one letter per column)
pub const MAX_DIM: i8 = 26;

/// Letter of the leftmost column
pub const COLUMN_START: char = 'A';
/// Row the fox has to reach to win
pub const FOX_WIN_ROW: i8 = 0;

/// Diagonal step vectors (drow, dcol)
/// Index: 0=top-left, 1=bottom-left, 2=bottom-right, 3=top-right
pub const DIAGONALS: [(i8, i8); 4] = [
    (-1, -1), // top-left
    (1, -1),  // bottom-left
    (1, 1),   // bottom-right
    (-1, 1),  // top-right
];

/// Zero-based board coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Parse a board label that must be well-formed for `dim`
    pub fn parse(label: &str, dim: i8) -> Result<Self> {
        if !is_well_formed(label, dim) {
            return Err(EngineError::InvalidCoordinate(label.to_string()));
        }
        Ok(Self::new(row_of(label)?, col_of(label)?))
    }

    /// Check if this coordinate is on a board of the given dimension
    pub fn in_bounds(&self, dim: i8) -> bool {
        self.row >= 0 && self.row < dim && self.col >= 0 && self.col < dim
    }

    /// Board label of this coordinate
    pub fn label(&self) -> Result<String> {
        to_label(self.row, self.col)
    }

    /// Neighbor one diagonal step away in direction (0-3), if still on the board
    pub fn diagonal(&self, direction: usize, dim: i8) -> Option<Coord> {
        let (dr, dc) = DIAGONALS[direction % 4];
        let next = Coord::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        next.in_bounds(dim).then_some(next)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Ok(label) => f.write_str(&label),
            Err(_) => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Fail unless `MIN_DIM <= dim <= MAX_DIM`
pub fn check_dimension(dim: i8) -> Result<()> {
    if !(MIN_DIM..=MAX_DIM).contains(&dim) {
        return Err(EngineError::DimensionOutOfRange {
            dim: dim.into(),
            min: MIN_DIM,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// Translate a zero-based (row, column) pair into a board label
pub fn to_label(row: i8, col: i8) -> Result<String> {
    // Columns past the last letter have no label either.
    if row < 0 || col < 0 || col >= MAX_DIM {
        return Err(EngineError::InvalidCoordinate(format!("({}, {})", row, col)));
    }
    let letter = (COLUMN_START as u8 + col as u8) as char;
    Ok(format!("{}{}", letter, i32::from(row) + 1))
}

/// Zero-based row of a label, which must be well-formed for `MAX_DIM`
pub fn row_of(label: &str) -> Result<i8> {
    let number = parse_label(label, MAX_DIM)
        .ok_or_else(|| EngineError::InvalidCoordinate(label.to_string()))?
        .1;
    Ok(number as i8 - 1)
}

/// Zero-based column of a label, which must be well-formed for `MAX_DIM`
pub fn col_of(label: &str) -> Result<i8> {
    let letter = parse_label(label, MAX_DIM)
        .ok_or_else(|| EngineError::InvalidCoordinate(label.to_string()))?
        .0;
    Ok((letter as u8 - COLUMN_START as u8) as i8)
}

/// Check if `label` names a cell on a board of dimension `dim`
pub fn is_well_formed(label: &str, dim: i8) -> bool {
    parse_label(label, dim).is_some()
}

/// Structural label check against the largest board, for use before the
/// real dimension is known
pub fn is_well_formed_loose(label: &str) -> bool {
    is_well_formed(label, MAX_DIM)
}

/// Split a label into its column letter and 1-based row number
fn parse_label(label: &str, dim: i8) -> Option<(char, u32)> {
    let mut chars = label.chars();
    let letter = chars.next()?;
    let digits = chars.as_str();
    if digits.is_empty() {
        return None;
    }

    let first = COLUMN_START as u32;
    let last = first + dim.max(0) as u32;
    if (letter as u32) < first || (letter as u32) >= last {
        return None;
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // Leading zeros are accepted ("A01" is row 1); absurdly long numbers are not.
    let number: u32 = digits.parse().ok()?;
    if number < 1 || number > dim as u32 {
        return None;
    }

    Some((letter, number))
}

/// The up-to-4 diagonal neighbors of `pos`
///
/// Order is top-left, bottom-left, bottom-right, top-right. Corners that
/// would fall off the board are `None`.
pub fn corners(pos: Coord, dim: i8) -> [Option<Coord>; 4] {
    [
        pos.diagonal(0, dim),
        pos.diagonal(1, dim),
        pos.diagonal(2, dim),
        pos.diagonal(3, dim),
    ]
}
