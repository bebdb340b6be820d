//! Core automaton logic and grid operations.
//!
//! This module contains the grid lifecycle, the generation step and the
//! stall bookkeeping. The terminal shell in `shell/` calls these functions.

pub mod grid;
pub mod stall;
pub mod stepping;

pub use grid::{
    copy_grid, count_neighborhood, create_grid, destroy_grid, in_bounds, population,
    randomize_grid,
};
pub use stall::{StallDecision, StallDetector, DEFAULT_STALL_THRESHOLD};
pub use stepping::{advance, next_cell, step};
