//! Terminal rendering and prompts
//!
//! All readers return `Ok(None)` once input is exhausted so the game loop
//! can shut down cleanly.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use foxhound_core::{is_well_formed, Coord, Role, Roster, COLUMN_START};

/// Field not occupied by any piece
const EMPTY_FIELD: char = '.';
/// Row numbers below this get a leading zero on large boards
const LEADING_ZERO_THRESHOLD: i8 = 9;

const MAIN_MENU: &str = "\n1. Move\n2. Save Game\n3. Load Game\n4. Exit\n\nEnter 1 - 4:";

/// Main menu entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Move,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Move),
            2 => Some(MenuChoice::Save),
            3 => Some(MenuChoice::Load),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// ASCII board with letter headers above and below and row numbers on both sides
pub fn render_board(dim: i8, roster: &Roster) -> String {
    let header = column_header(dim);
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in 0..dim {
        let row_id = row_id(dim, row);
        out.push_str(&row_id);
        out.push(' ');
        for col in 0..dim {
            out.push(field_symbol(roster, Coord::new(row, col)));
        }
        out.push(' ');
        out.push_str(&row_id);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out
}

/// `Players: [B1, D1, F1, H1, E8]`
pub fn players_line(roster: &Roster) -> String {
    let labels: Vec<String> = roster
        .hounds
        .iter()
        .chain(std::iter::once(&roster.fox))
        .map(Coord::to_string)
        .collect();
    format!("Players: [{}]", labels.join(", "))
}

fn column_header(dim: i8) -> String {
    let padding = if dim <= LEADING_ZERO_THRESHOLD { "  " } else { "   " };
    let letters: String = (0..dim as u8)
        .map(|i| (COLUMN_START as u8 + i) as char)
        .collect();
    format!("{}{}{}\n", padding, letters, padding)
}

fn row_id(dim: i8, row: i8) -> String {
    if dim > LEADING_ZERO_THRESHOLD && row < LEADING_ZERO_THRESHOLD {
        format!("0{}", row + 1)
    } else {
        (row + 1).to_string()
    }
}

fn field_symbol(roster: &Roster, pos: Coord) -> char {
    roster.occupant(pos).map_or(EMPTY_FIELD, Role::symbol)
}

// ============================================================================
// PROMPTS
// ============================================================================

/// Show the main menu until a valid entry is picked
pub fn menu_query<R: BufRead, W: Write>(
    turn: Role,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<MenuChoice>> {
    loop {
        writeln!(out, "{} to move", turn)?;
        writeln!(out, "{}", MAIN_MENU)?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let choice = line
            .split_whitespace()
            .next()
            .and_then(|token| token.parse().ok())
            .and_then(MenuChoice::from_number);
        match choice {
            Some(choice) => return Ok(Some(choice)),
            None => writeln!(out, "Please enter valid number.")?,
        }
    }
}

/// Ask for an origin and destination label until both are on the board
pub fn position_query<R: BufRead, W: Write>(
    dim: i8,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(String, String)>> {
    let last = (COLUMN_START as u8 + dim as u8 - 1) as char;
    loop {
        writeln!(out, "\nProvide origin and destination coordinates.")?;
        writeln!(out, "Enter two positions between {}1-{}{}:", COLUMN_START, last, dim)?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let parts: Vec<&str> = line.split(' ').collect();
        if let [origin, dest] = parts[..] {
            if is_well_formed(origin, dim) && is_well_formed(dest, dim) {
                return Ok(Some((origin.to_string(), dest.to_string())));
            }
        }
        writeln!(out, "ERROR: Please enter valid coordinate pair separated by space.")?;
    }
}

/// Ask for a file path
pub fn file_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<PathBuf>> {
    loop {
        writeln!(out, "Enter file path:")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if !line.is_empty() {
            return Ok(Some(PathBuf::from(line)));
        }
        writeln!(out, "ERROR: Please provide valid path.")?;
    }
}

/// Next input line without its line ending, or None at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
