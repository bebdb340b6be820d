//! Core cell and grid types with index helpers.

/// A single cell of the automaton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub age: u32, // consecutive generations survived, 0 when dead
}

impl Cell {
    pub const DEAD: Cell = Cell {
        alive: false,
        age: 0,
    };

    /// A freshly born (or randomized) live cell.
    pub const BORN: Cell = Cell {
        alive: true,
        age: 0,
    };
}

/// A fixed-size 2D grid of cells, stored row-major in one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Get the linear index for a 2D coordinate
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Read a cell. Returns `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a cell alive or dead, resetting its age.
    /// Out-of-bounds coordinates are silently ignored.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = if alive { Cell::BORN } else { Cell::DEAD };
        }
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero; an empty grid has no rows anyway
        self.cells.chunks(self.width.max(1))
    }
}
