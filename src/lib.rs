//! ncgol - a Game of Life variant for the terminal
//!
//! The engine lives in `automaton`: a fixed-size grid with no wrap-around,
//! stepped from a frozen snapshot with a self-inclusive 3x3 count. A dead
//! cell with a count of 3 is born; a live cell with a count of 3 or 4
//! survives and ages. `shell` drives it from a crossterm control loop.

pub mod automaton;
pub mod config;
pub mod error;
pub mod shell;
pub mod state;


pub use error::{AppError, GridError};
pub use state::{Cell, Grid};
