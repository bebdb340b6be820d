//! Error types for the engine and the terminal shell.

use std::io;
use thiserror::Error;

/// Engine error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid buffer could not be allocated
    #[error("Failed to allocate a {width}x{height} grid")]
    Allocation { width: usize, height: usize },

    /// Two grids that must share dimensions do not
    #[error("Grid dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Engine error
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Terminal too small to hold a border and at least one cell
    #[error("Terminal too small: {cols}x{rows} (need at least 3x3)")]
    ViewportTooSmall { cols: u16, rows: u16 },
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, AppError>;
