//! Rules engine properties checked across every supported board size

use foxhound_core::{
    check_move, check_roster, col_of, corners, initial_placement, is_fox_win, is_hound_win,
    is_legal_move, row_of, to_label, Coord, GameResult, GameState, Role, Roster, MAX_DIM,
    MIN_DIM,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn all_dims() -> impl Iterator<Item = i8> {
    MIN_DIM..=MAX_DIM
}

fn all_cells(dim: i8) -> impl Iterator<Item = Coord> {
    (0..dim).flat_map(move |row| (0..dim).map(move |col| Coord::new(row, col)))
}

/// Roster with the given hound positions and fox, padded with hounds parked
/// on the top row far from the action
fn roster_with(dim: i8, hounds: &[Coord], fox: Coord) -> Roster {
    let mut all = hounds.to_vec();
    let mut col = dim - 1;
    while all.len() < (dim / 2) as usize {
        let parked = Coord::new(0, col);
        if parked != fox && !all.contains(&parked) {
            all.push(parked);
        }
        col -= 1;
    }
    Roster::new(all, fox)
}

// ============================================================================
// INITIAL PLACEMENT
// ============================================================================

#[test]
fn test_initial_placement_valid_for_every_dimension() {
    for dim in all_dims() {
        let roster = initial_placement(dim).unwrap();
        check_roster(&roster, dim).unwrap();

        assert_eq!(roster.hounds.len(), (dim / 2) as usize);
        assert!(roster.hounds.iter().all(|h| h.row == 0), "dim {}", dim);
        assert_eq!(roster.fox.row, dim - 1);

        // Fox and hounds share a field colour
        let parity = |c: &Coord| (c.row + c.col) % 2;
        assert!(
            roster.hounds.iter().all(|h| parity(h) == parity(&roster.fox)),
            "dim {}: fox at {}",
            dim,
            roster.fox
        );
    }
}

// ============================================================================
// LABELS
// ============================================================================

#[test]
fn test_label_round_trip() {
    for dim in all_dims() {
        for cell in all_cells(dim) {
            let label = to_label(cell.row, cell.col).unwrap();
            assert_eq!(row_of(&label).unwrap(), cell.row);
            assert_eq!(col_of(&label).unwrap(), cell.col);
            assert_eq!(Coord::parse(&label, dim).unwrap(), cell);
        }
    }
}

// ============================================================================
// MOVE LEGALITY
// ============================================================================

#[test]
fn test_classic_example_moves() {
    let roster = initial_placement(8).unwrap();
    let c = |l: &str| Coord::parse(l, 8).unwrap();

    assert!(is_legal_move(8, &roster, Role::Fox, c("E8"), c("D7")));
    assert!(is_legal_move(8, &roster, Role::Hound, c("B1"), c("A2")));
    assert!(!is_legal_move(8, &roster, Role::Hound, c("B1"), c("C1")));
}

#[test]
fn test_hound_never_moves_onto_a_piece() {
    for dim in all_dims() {
        // Hound in the middle of the board, fox on one of its forward corners
        let mid = dim / 2;
        let hound = Coord::new(mid - 1, mid);
        for dest in corners(hound, dim).into_iter().flatten() {
            let roster = roster_with(dim, &[hound], dest);
            assert!(
                !is_legal_move(dim, &roster, Role::Hound, hound, dest),
                "dim {}: hound {} onto fox {}",
                dim,
                hound,
                dest
            );
        }
    }
}

#[test]
fn test_hound_forward_only_everywhere() {
    for dim in all_dims() {
        // Skip the top row so parked hounds never collide with the mover
        for origin in all_cells(dim).filter(|c| c.row > 0) {
            let far_fox = Coord::new(if origin.row < dim / 2 { dim - 1 } else { 1 }, 0);
            if far_fox == origin || corners(origin, dim).contains(&Some(far_fox)) {
                continue;
            }
            let roster = roster_with(dim, &[origin], far_fox);

            let existing: Vec<Coord> = corners(origin, dim).into_iter().flatten().collect();
            let expected = if origin.col == 0 || origin.col == dim - 1 { 1 } else { 2 };
            let forward = existing.iter().filter(|d| d.row > origin.row).count();
            if origin.row < dim - 1 {
                assert_eq!(forward, expected, "dim {} origin {}", dim, origin);
            }

            for dest in existing {
                let legal = check_move(dim, &roster, Role::Hound, origin, dest).unwrap();
                assert_eq!(
                    legal,
                    dest.row > origin.row,
                    "dim {}: {} -> {}",
                    dim,
                    origin,
                    dest
                );
            }
        }
    }
}

// ============================================================================
// WIN CONDITIONS
// ============================================================================

#[test]
fn test_fox_win_is_row_zero_only() {
    for dim in all_dims() {
        for cell in all_cells(dim) {
            assert_eq!(is_fox_win(cell), cell.row == 0);
        }
    }
}

#[test]
fn test_hound_win_in_bottom_corners() {
    for dim in all_dims() {
        let left = Coord::new(dim - 1, 0);
        let blocker = Coord::new(dim - 2, 1);
        let trapped = roster_with(dim, &[blocker], left);
        assert!(is_hound_win(dim, &trapped).unwrap(), "dim {}", dim);

        let free = roster_with(dim, &[], left);
        assert!(!is_hound_win(dim, &free).unwrap(), "dim {}", dim);

        let right = Coord::new(dim - 1, dim - 1);
        let blocker = Coord::new(dim - 2, dim - 2);
        let trapped = roster_with(dim, &[blocker], right);
        assert!(is_hound_win(dim, &trapped).unwrap(), "dim {}", dim);
    }
}

#[test]
fn test_hound_win_needs_every_existing_corner() {
    for dim in all_dims().filter(|d| d / 2 >= 4) {
        let fox = Coord::new(3, 3);
        let ring: Vec<Coord> = corners(fox, dim).into_iter().flatten().collect();
        assert_eq!(ring.len(), 4);

        let trapped = roster_with(dim, &ring, fox);
        assert!(is_hound_win(dim, &trapped).unwrap());

        for open in 0..ring.len() {
            let mut partial = ring.clone();
            partial.remove(open);
            let roster = roster_with(dim, &partial, fox);
            assert!(!is_hound_win(dim, &roster).unwrap(), "dim {} open {}", dim, ring[open]);
        }
    }
}

// ============================================================================
// FULL GAME
// ============================================================================

#[test]
fn test_short_game_fox_blocked_below_goal() {
    let mut game = GameState::new(8).unwrap();
    let moves = [
        ("E8", "D7"),
        ("B1", "A2"),
        ("D7", "C6"),
        ("A2", "B3"),
        ("C6", "D5"),
        ("H1", "G2"),
        ("D5", "E4"),
        ("G2", "H3"),
        ("E4", "F3"),
        ("H3", "G4"),
        ("F3", "E2"),
        ("G4", "H5"),
    ];
    for (from, to) in moves {
        let outcome = game.play_labels(from, to).unwrap();
        assert_eq!(outcome.result, GameResult::Ongoing, "{} {}", from, to);
    }

    // D1 and F1 are both held by hounds, so the fox has to step back
    assert!(game.play_labels("E2", "D1").is_err());
    let outcome = game.play_labels("E2", "F3").unwrap();
    assert_eq!(outcome.result, GameResult::Ongoing);
}
