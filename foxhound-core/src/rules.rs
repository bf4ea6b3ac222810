//! Move legality and win conditions
//!
//! Every piece steps one field diagonally onto an empty field. Hounds only
//! move down the board (towards higher rows); the fox moves either way.
//! The fox wins on reaching the top row, the hounds win once every
//! diagonal neighbor of the fox that exists is taken by a hound.

use serde::{Deserialize, Serialize};

use crate::board::{check_dimension, corners, Coord, FOX_WIN_ROW};
use crate::error::{EngineError, Result};
use crate::roster::{check_roster, Role, Roster};

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    FoxWins,
    HoundsWin,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }
}

// ============================================================================
// MOVE LEGALITY
// ============================================================================

/// Check if moving the `role` piece from `origin` to `dest` is legal
///
/// Structurally malformed input (bad dimension, roster or coordinates)
/// simply yields false; use [`check_move`] to have it reported.
pub fn is_legal_move(dim: i8, roster: &Roster, role: Role, origin: Coord, dest: Coord) -> bool {
    check_move(dim, roster, role, origin, dest).unwrap_or(false)
}

/// Check a move, failing on malformed input instead of returning false
pub fn check_move(dim: i8, roster: &Roster, role: Role, origin: Coord, dest: Coord) -> Result<bool> {
    check_roster(roster, dim)?;
    for pos in [origin, dest] {
        if !pos.in_bounds(dim) {
            return Err(EngineError::InvalidCoordinate(pos.to_string()));
        }
    }
    Ok(move_allowed(dim, roster, role, origin, dest))
}

/// [`check_move`] over raw board labels and a role symbol
pub fn check_move_labels(
    dim: i8,
    roster: &Roster,
    symbol: char,
    origin: &str,
    dest: &str,
) -> Result<bool> {
    check_dimension(dim)?;
    let origin = Coord::parse(origin, dim)?;
    let dest = Coord::parse(dest, dim)?;
    let role = Role::from_symbol(symbol)?;
    check_move(dim, roster, role, origin, dest)
}

/// Rule checks proper, on already validated input
fn move_allowed(dim: i8, roster: &Roster, role: Role, origin: Coord, dest: Coord) -> bool {
    // No null moves
    if origin == dest {
        return false;
    }

    // The moving piece has to actually stand on the origin
    if !roster.holds(role, origin) {
        return false;
    }

    // Exactly one diagonal step
    if !corners(origin, dim).contains(&Some(dest)) {
        return false;
    }

    // No captures, no stacking
    if roster.is_occupied(dest) {
        return false;
    }

    match role {
        Role::Hound => dest.row > origin.row,
        Role::Fox => true,
    }
}

/// All legal (origin, destination) pairs for `role`
pub fn legal_moves(dim: i8, roster: &Roster, role: Role) -> Vec<(Coord, Coord)> {
    if check_roster(roster, dim).is_err() {
        return vec![];
    }

    let origins: Vec<Coord> = match role {
        Role::Fox => vec![roster.fox],
        Role::Hound => roster.hounds.clone(),
    };

    let mut moves = Vec::new();
    for origin in origins {
        for dest in corners(origin, dim).into_iter().flatten() {
            if move_allowed(dim, roster, role, origin, dest) && !moves.contains(&(origin, dest)) {
                moves.push((origin, dest));
            }
        }
    }
    moves
}

// ============================================================================
// WIN CONDITIONS
// ============================================================================

/// Check if the fox stands on its goal row
pub fn is_fox_win(fox: Coord) -> bool {
    fox.row == FOX_WIN_ROW
}

/// Check if the fox can no longer move
///
/// Only corners that exist count: a board edge neither blocks nor frees
/// the fox, it is simply left out. Every remaining corner must hold a hound.
pub fn is_hound_win(dim: i8, roster: &Roster) -> Result<bool> {
    check_roster(roster, dim)?;
    Ok(corners(roster.fox, dim)
        .into_iter()
        .flatten()
        .all(|corner| roster.is_hound_at(corner)))
}

/// Result after `mover` has moved; only the mover's win condition is checked
pub fn result_after(mover: Role, dim: i8, roster: &Roster) -> Result<GameResult> {
    let won = match mover {
        Role::Fox => is_fox_win(roster.fox),
        Role::Hound => is_hound_win(dim, roster)?,
    };
    Ok(match (won, mover) {
        (false, _) => GameResult::Ongoing,
        (true, Role::Fox) => GameResult::FoxWins,
        (true, Role::Hound) => GameResult::HoundsWin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(label: &str) -> Coord {
        Coord::parse(label, 8).unwrap()
    }

    fn roster(labels: &[&str]) -> Roster {
        Roster::from_labels(labels, 8).unwrap()
    }

    fn classic() -> Roster {
        roster(&["B1", "D1", "F1", "H1", "E8"])
    }

    #[test]
    fn test_fox_moves() {
        let r = classic();
        assert!(is_legal_move(8, &r, Role::Fox, c("E8"), c("D7")));
        assert!(is_legal_move(8, &r, Role::Fox, c("E8"), c("F7")));
        // Not diagonal / not a single step
        assert!(!is_legal_move(8, &r, Role::Fox, c("E8"), c("E7")));
        assert!(!is_legal_move(8, &r, Role::Fox, c("E8"), c("C6")));
        // Null move
        assert!(!is_legal_move(8, &r, Role::Fox, c("E8"), c("E8")));
    }

    #[test]
    fn test_fox_may_move_backwards() {
        let r = roster(&["B1", "D1", "F1", "H1", "D5"]);
        assert!(is_legal_move(8, &r, Role::Fox, c("D5"), c("C6")));
        assert!(is_legal_move(8, &r, Role::Fox, c("D5"), c("E6")));
    }

    #[test]
    fn test_hound_moves() {
        let r = classic();
        assert!(is_legal_move(8, &r, Role::Hound, c("B1"), c("A2")));
        assert!(is_legal_move(8, &r, Role::Hound, c("B1"), c("C2")));
        assert!(!is_legal_move(8, &r, Role::Hound, c("B1"), c("C1")));
        assert!(!is_legal_move(8, &r, Role::Hound, c("B1"), c("B2")));
    }

    #[test]
    fn test_hound_cannot_move_backwards() {
        let r = roster(&["B1", "D3", "F1", "H1", "E8"]);
        assert!(!is_legal_move(8, &r, Role::Hound, c("D3"), c("C2")));
        assert!(!is_legal_move(8, &r, Role::Hound, c("D3"), c("E2")));
        assert!(is_legal_move(8, &r, Role::Hound, c("D3"), c("C4")));
    }

    #[test]
    fn test_wrong_piece_on_origin() {
        let r = classic();
        // Fox is not on B1, hound is not on E8, nobody is on C3
        assert!(!is_legal_move(8, &r, Role::Fox, c("B1"), c("A2")));
        assert!(!is_legal_move(8, &r, Role::Hound, c("E8"), c("D7")));
        assert!(!is_legal_move(8, &r, Role::Hound, c("C3"), c("D4")));
    }

    #[test]
    fn test_no_captures() {
        // Hound on D5 next to fox on E6
        let r = roster(&["B1", "D5", "F1", "H1", "E6"]);
        assert!(!is_legal_move(8, &r, Role::Hound, c("D5"), c("E6")));
        assert!(!is_legal_move(8, &r, Role::Fox, c("E6"), c("D5")));
        // Hound onto hound
        let r = roster(&["B1", "C2", "F1", "H1", "E8"]);
        assert!(!is_legal_move(8, &r, Role::Hound, c("B1"), c("C2")));
    }

    #[test]
    fn test_check_move_reports_malformed_input() {
        let r = classic();
        assert!(matches!(
            check_move(8, &r, Role::Fox, Coord::new(8, 4), c("D7")),
            Err(EngineError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            check_move(10, &r, Role::Fox, c("E8"), c("D7")),
            Err(EngineError::InvalidRoster { .. })
        ));
        assert!(matches!(
            check_move(30, &r, Role::Fox, c("E8"), c("D7")),
            Err(EngineError::DimensionOutOfRange { .. })
        ));
        assert_eq!(check_move(8, &r, Role::Fox, c("E8"), c("D7")), Ok(true));
        assert_eq!(check_move(8, &r, Role::Fox, c("E8"), c("E7")), Ok(false));
        // The lenient form swallows the fault
        assert!(!is_legal_move(8, &r, Role::Fox, Coord::new(8, 4), c("D7")));
    }

    #[test]
    fn test_check_move_labels() {
        let r = classic();
        assert_eq!(check_move_labels(8, &r, 'F', "E8", "D7"), Ok(true));
        assert_eq!(check_move_labels(8, &r, 'H', "B1", "C1"), Ok(false));
        assert!(matches!(
            check_move_labels(8, &r, 'X', "E8", "D7"),
            Err(EngineError::InvalidRole(_))
        ));
        assert!(matches!(
            check_move_labels(8, &r, 'F', "E8", "D9"),
            Err(EngineError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_legal_moves() {
        let r = classic();
        let fox = legal_moves(8, &r, Role::Fox);
        assert_eq!(fox.len(), 2);
        assert!(fox.contains(&(c("E8"), c("D7"))));
        assert!(fox.contains(&(c("E8"), c("F7"))));

        // B1, D1, F1 have two forward steps each, H1 only G2
        let hounds = legal_moves(8, &r, Role::Hound);
        assert_eq!(hounds.len(), 7);
        assert!(hounds.iter().all(|(from, to)| to.row > from.row));
    }

    #[test]
    fn test_fox_win() {
        assert!(is_fox_win(c("A1")));
        assert!(is_fox_win(c("H1")));
        assert!(!is_fox_win(c("A2")));
        assert!(!is_fox_win(c("E8")));
    }

    #[test]
    fn test_hound_win_in_corner() {
        // Fox on A8 has a single corner, B7
        let r = roster(&["B7", "D1", "F1", "H1", "A8"]);
        assert_eq!(is_hound_win(8, &r), Ok(true));

        let r = roster(&["B1", "D1", "F1", "H1", "A8"]);
        assert_eq!(is_hound_win(8, &r), Ok(false));
    }

    #[test]
    fn test_hound_win_surrounded() {
        let r = roster(&["C4", "E4", "C6", "E6", "D5"]);
        assert_eq!(is_hound_win(8, &r), Ok(true));

        // One corner still open
        let r = roster(&["C4", "E4", "C6", "H1", "D5"]);
        assert_eq!(is_hound_win(8, &r), Ok(false));
    }

    #[test]
    fn test_hound_win_on_edge() {
        // Fox on left edge: corners B4 and B6 only
        let r = roster(&["B4", "B6", "F1", "H1", "A5"]);
        assert_eq!(is_hound_win(8, &r), Ok(true));
        let r = roster(&["B4", "D1", "F1", "H1", "A5"]);
        assert_eq!(is_hound_win(8, &r), Ok(false));
    }

    #[test]
    fn test_hound_win_rejects_bad_roster() {
        assert!(is_hound_win(10, &classic()).is_err());
    }

    #[test]
    fn test_result_after() {
        let r = roster(&["B3", "D1", "F1", "H1", "C1"]);
        assert_eq!(result_after(Role::Fox, 8, &r), Ok(GameResult::FoxWins));
        // Hound win check ignores the fox goal row
        assert_eq!(result_after(Role::Hound, 8, &r), Ok(GameResult::Ongoing));

        let r = roster(&["B7", "D1", "F1", "H1", "A8"]);
        assert_eq!(result_after(Role::Hound, 8, &r), Ok(GameResult::HoundsWin));
        assert_eq!(result_after(Role::Fox, 8, &r), Ok(GameResult::Ongoing));
    }
}
