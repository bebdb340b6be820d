//! Generation stepping with the self-inclusive B3/S34 rule.

use super::grid::{copy_grid, count_neighborhood, ensure_same_dimensions, population};
use crate::error::GridError;
use crate::state::{Cell, Grid};

/// Compute a cell's next state from its previous state and the live count
/// of its 3x3 block (itself included).
///
/// - Birth: a dead cell with a count of 3 becomes alive, age 0
/// - Survival: a live cell with a count of 3 or 4 stays alive, age + 1
/// - Anything else is dead, age 0
///
/// Since a live cell counts itself, survival means 2 or 3 live neighbors.
#[inline]
pub fn next_cell(previous: Cell, count: u8) -> Cell {
    match (previous.alive, count) {
        (false, 3) => Cell::BORN,
        (true, 3) | (true, 4) => Cell {
            alive: true,
            age: previous.age.saturating_add(1),
        },
        _ => Cell::DEAD,
    }
}

/// Step `current` forward one generation, reading only from `snapshot`.
///
/// `snapshot` must hold the state to step from; `current` is fully
/// overwritten. Nothing is written if the dimensions differ.
pub fn step(current: &mut Grid, snapshot: &Grid) -> Result<(), GridError> {
    ensure_same_dimensions(snapshot, current)?;

    for y in 0..snapshot.height {
        for x in 0..snapshot.width {
            let idx = snapshot.index(x, y);
            let count = count_neighborhood(snapshot, x, y);
            current.cells[idx] = next_cell(snapshot.cells[idx], count);
        }
    }

    Ok(())
}

/// Freeze `current` into `snapshot`, step it, and return the new population.
pub fn advance(current: &mut Grid, snapshot: &mut Grid) -> Result<usize, GridError> {
    copy_grid(snapshot, current)?;
    step(current, snapshot)?;
    Ok(population(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::create_grid;

    fn alive(age: u32) -> Cell {
        Cell { alive: true, age }
    }

    #[test]
    fn test_next_cell_birth() {
        assert_eq!(next_cell(Cell::DEAD, 3), Cell::BORN);
    }

    #[test]
    fn test_next_cell_stays_dead() {
        for count in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(next_cell(Cell::DEAD, count), Cell::DEAD, "count {}", count);
        }
    }

    #[test]
    fn test_next_cell_survival() {
        assert_eq!(next_cell(alive(0), 3), alive(1));
        assert_eq!(next_cell(alive(6), 4), alive(7));
    }

    #[test]
    fn test_next_cell_death() {
        for count in [1, 2, 5, 6, 7, 8, 9] {
            assert_eq!(next_cell(alive(3), count), Cell::DEAD, "count {}", count);
        }
    }

    #[test]
    fn test_next_cell_age_saturates() {
        assert_eq!(next_cell(alive(u32::MAX), 4), alive(u32::MAX));
    }

    #[test]
    fn test_step_birth_with_three_neighbors() {
        let mut snapshot = create_grid(3, 3).unwrap();
        snapshot.set_alive(0, 0, true);
        snapshot.set_alive(2, 0, true);
        snapshot.set_alive(1, 2, true);

        let mut current = snapshot.clone();
        step(&mut current, &snapshot).unwrap();

        assert_eq!(current.get(1, 1), Some(Cell::BORN));
    }

    #[test]
    fn test_step_no_birth_with_two_neighbors() {
        let mut snapshot = create_grid(3, 3).unwrap();
        snapshot.set_alive(0, 0, true);
        snapshot.set_alive(2, 2, true);

        let mut current = snapshot.clone();
        step(&mut current, &snapshot).unwrap();

        assert_eq!(current.get(1, 1), Some(Cell::DEAD));
    }

    #[test]
    fn test_step_survival_with_three_neighbors() {
        let mut snapshot = create_grid(3, 3).unwrap();
        snapshot.set_alive(1, 1, true);
        snapshot.cells[4].age = 2;
        snapshot.set_alive(0, 0, true);
        snapshot.set_alive(2, 0, true);
        snapshot.set_alive(0, 2, true);

        let mut current = snapshot.clone();
        step(&mut current, &snapshot).unwrap();

        // count is 4 with the center included
        assert_eq!(current.get(1, 1), Some(alive(3)));
    }

    #[test]
    fn test_step_overcrowding() {
        let mut snapshot = create_grid(3, 3).unwrap();
        for cell in snapshot.cells.iter_mut() {
            *cell = Cell::BORN;
        }

        let mut current = snapshot.clone();
        step(&mut current, &snapshot).unwrap();

        // Corners see 4 (survive), edges 6 and center 9 (die)
        assert_eq!(current.get(0, 0), Some(alive(1)));
        assert_eq!(current.get(2, 0), Some(alive(1)));
        assert_eq!(current.get(0, 2), Some(alive(1)));
        assert_eq!(current.get(2, 2), Some(alive(1)));
        assert_eq!(current.get(1, 0), Some(Cell::DEAD));
        assert_eq!(current.get(1, 1), Some(Cell::DEAD));
    }

    #[test]
    fn test_step_reads_only_snapshot() {
        let snapshot = create_grid(4, 4).unwrap();
        let mut current = create_grid(4, 4).unwrap();
        for cell in current.cells.iter_mut() {
            *cell = alive(9);
        }

        step(&mut current, &snapshot).unwrap();
        assert!(current.cells.iter().all(|&c| c == Cell::DEAD));
    }

    #[test]
    fn test_step_dimension_mismatch_writes_nothing() {
        let snapshot = create_grid(3, 3).unwrap();
        let mut current = create_grid(3, 4).unwrap();
        current.set_alive(0, 0, true);

        assert_eq!(
            step(&mut current, &snapshot),
            Err(GridError::DimensionMismatch {
                expected: (3, 3),
                found: (3, 4)
            })
        );
        assert_eq!(current.get(0, 0), Some(Cell::BORN));
    }

    #[test]
    fn test_step_empty_grid_stays_empty() {
        let snapshot = create_grid(6, 4).unwrap();
        let mut current = snapshot.clone();

        step(&mut current, &snapshot).unwrap();
        assert!(current.cells.iter().all(|&c| c == Cell::DEAD));
    }

    #[test]
    fn test_advance_block_is_still_life() {
        let mut current = create_grid(4, 4).unwrap();
        let mut snapshot = create_grid(4, 4).unwrap();
        current.set_alive(1, 1, true);
        current.set_alive(2, 1, true);
        current.set_alive(1, 2, true);
        current.set_alive(2, 2, true);

        for generation in 1..=3 {
            assert_eq!(advance(&mut current, &mut snapshot).unwrap(), 4);
            assert_eq!(current.get(1, 1), Some(alive(generation)));
            assert_eq!(current.get(2, 2), Some(alive(generation)));
        }
    }

    #[test]
    fn test_advance_dimension_mismatch() {
        let mut current = create_grid(4, 4).unwrap();
        let mut snapshot = create_grid(5, 4).unwrap();

        assert!(matches!(
            advance(&mut current, &mut snapshot),
            Err(GridError::DimensionMismatch { .. })
        ));
    }
}
