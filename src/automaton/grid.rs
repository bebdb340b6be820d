//! Grid lifecycle and neighborhood helpers.

use log::debug;
use rand::Rng;

use crate::error::GridError;
use crate::state::{Cell, Grid};

/// Allocate a grid with every cell dead.
///
/// The buffer is reserved fallibly so an impossible size surfaces as
/// `GridError::Allocation` instead of aborting the process.
pub fn create_grid(width: usize, height: usize) -> Result<Grid, GridError> {
    let alloc_error = GridError::Allocation { width, height };
    let size = width.checked_mul(height).ok_or(alloc_error.clone())?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(size).map_err(|_| alloc_error)?;
    cells.resize(size, Cell::DEAD);

    debug!("allocated {}x{} grid", width, height);
    Ok(Grid {
        width,
        height,
        cells,
    })
}

/// Release a grid. Ownership guarantees this happens at most once.
pub fn destroy_grid(grid: Grid) {
    debug!("releasing {}x{} grid", grid.width, grid.height);
    drop(grid);
}

/// Give every cell an independent 1/2 chance of being alive, with age 0.
pub fn randomize_grid<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for cell in grid.cells.iter_mut() {
        *cell = if rng.gen_bool(0.5) {
            Cell::BORN
        } else {
            Cell::DEAD
        };
    }
}

/// Fail unless both grids have the same dimensions.
pub fn ensure_same_dimensions(expected: &Grid, found: &Grid) -> Result<(), GridError> {
    if expected.dimensions() != found.dimensions() {
        return Err(GridError::DimensionMismatch {
            expected: expected.dimensions(),
            found: found.dimensions(),
        });
    }
    Ok(())
}

/// Overwrite every cell of `dest` with the matching cell of `src`.
pub fn copy_grid(dest: &mut Grid, src: &Grid) -> Result<(), GridError> {
    ensure_same_dimensions(src, dest)?;
    dest.cells.copy_from_slice(&src.cells);
    Ok(())
}

/// Count live cells.
pub fn population(grid: &Grid) -> usize {
    grid.cells.iter().filter(|c| c.alive).count()
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, x: isize, y: isize) -> bool {
    x >= 0 && (x as usize) < grid.width && y >= 0 && (y as usize) < grid.height
}

/// Count live cells in the 3x3 block centered on `(x, y)`, the center
/// included. Cells past the edge do not exist; there is no wrap-around.
pub fn count_neighborhood(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = x as isize + dx;
            let ny = y as isize + dy;

            if in_bounds(grid, nx, ny) && grid.cells[grid.index(nx as usize, ny as usize)].alive {
                count += 1;
            }
        }
    }

    count
}
