//! Occupancy grid tests.
//!
//! Tests cover: bounds, exclusive claims, release, degenerate bounds.

use rover_core::{Coordinate, GridBound, OccupancyGrid, SimError};

fn grid(x: i64, y: i64) -> OccupancyGrid {
    OccupancyGrid::new(GridBound { x, y }).expect("valid grid bound")
}

#[test]
fn new_grid_is_empty() {
    let g = grid(5, 5);
    assert_eq!(g.occupied_count(), 0);
    for x in 0..=5 {
        for y in 0..=5 {
            assert_eq!(g.occupant_at(Coordinate::new(x, y)), None);
        }
    }
}

#[test]
fn degenerate_bounds_are_rejected() {
    for (x, y) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
        let err = OccupancyGrid::new(GridBound { x, y }).unwrap_err();
        assert!(
            matches!(err, SimError::DegenerateGrid { .. }),
            "expected DegenerateGrid for ({x}, {y}), got {err:?}"
        );
    }
}

#[test]
fn bounds_are_inclusive() {
    let g = grid(5, 3);
    assert!(g.is_in_bounds(Coordinate::new(0, 0)));
    assert!(g.is_in_bounds(Coordinate::new(5, 3)));
    assert!(g.is_in_bounds(Coordinate::new(5, 0)));
    assert!(!g.is_in_bounds(Coordinate::new(6, 3)));
    assert!(!g.is_in_bounds(Coordinate::new(5, 4)));
    assert!(!g.is_in_bounds(Coordinate::new(-1, 0)));
    assert!(!g.is_in_bounds(Coordinate::new(0, -1)));
}

#[test]
fn claim_outside_grid_fails_out_of_bounds() {
    let mut g = grid(5, 5);
    for c in [
        Coordinate::new(-1, 2),
        Coordinate::new(6, 2),
        Coordinate::new(2, -1),
        Coordinate::new(2, 6),
    ] {
        let err = g.validate_and_claim(c, 0).unwrap_err();
        assert!(
            matches!(err, SimError::OutOfBounds { coordinate, rover: 0 } if coordinate == c),
            "expected OutOfBounds at {c}, got {err:?}"
        );
        assert_eq!(err.to_string(), "The coordination is outside of grid");
    }
    assert_eq!(g.occupied_count(), 0, "failed claims must not touch the grid");
}

#[test]
fn claimed_cell_belongs_to_claimant() {
    let mut g = grid(5, 5);
    let c = Coordinate::new(2, 3);
    g.validate_and_claim(c, 4).unwrap();
    assert_eq!(g.occupant_at(c), Some(4));
}

#[test]
fn other_rover_cannot_claim_until_released() {
    let mut g = grid(5, 5);
    let c = Coordinate::new(1, 1);
    g.validate_and_claim(c, 0).unwrap();

    let err = g.validate_and_claim(c, 1).unwrap_err();
    assert!(
        matches!(err, SimError::Occupied { rover: 1, occupant: 0, .. }),
        "got {err:?}"
    );
    assert_eq!(err.to_string(), "The coordination is already occupied");
    assert_eq!(g.occupant_at(c), Some(0), "owner must survive a rejected claim");

    g.release(c);
    assert_eq!(g.occupant_at(c), None);
    g.validate_and_claim(c, 1).unwrap();
    assert_eq!(g.occupant_at(c), Some(1));
}

#[test]
fn owner_may_reclaim_its_own_cell() {
    let mut g = grid(5, 5);
    let c = Coordinate::new(0, 0);
    g.validate_and_claim(c, 2).unwrap();
    g.validate_and_claim(c, 2).unwrap();
    assert_eq!(g.occupant_at(c), Some(2));
    assert_eq!(g.occupied_count(), 1);
}

#[test]
fn raw_occupy_and_release() {
    let mut g = grid(2, 2);
    g.occupy(Coordinate::new(1, 1), 7);
    g.occupy(Coordinate::new(2, 2), 7);
    let mut held = g.cells_held_by(7);
    held.sort_by_key(|c| (c.x, c.y));
    assert_eq!(held, vec![Coordinate::new(1, 1), Coordinate::new(2, 2)]);

    g.release(Coordinate::new(1, 1));
    assert_eq!(g.cells_held_by(7), vec![Coordinate::new(2, 2)]);

    // Releasing an empty cell is a no-op.
    g.release(Coordinate::new(0, 0));
    assert_eq!(g.occupied_count(), 1);
}

#[test]
fn huge_bound_does_not_allocate_cells() {
    let mut g = grid(1_000_000_000, 1_000_000_000);
    let far = Coordinate::new(999_999_999, 1_000_000_000);
    g.validate_and_claim(far, 0).unwrap();
    assert_eq!(g.occupied_count(), 1);
}
