//! Procedural maze generation with an animated terminal solve.
//!
//! A board is carved by one of three generators, then a distance-guided
//! depth-first solver walks it from entry to exit. Every cell transition is
//! streamed as a [`maze::GridEvent`], which is what the terminal renderer
//! (or any other consumer) draws.

pub mod app;
pub mod generators;
pub mod maze;
pub mod solvers;

use std::fmt;

/// Errors that abort a run before any maze is generated.
#[derive(Debug)]
pub enum SetupError {
    /// Maze dimensions must be odd and at least 5.
    InvalidDimensions { rows: u16, cols: u16 },
    /// The board does not fit in the detected terminal size.
    DisplayTooSmall {
        rows: u16,
        cols: u16,
        term_rows: u16,
        term_cols: u16,
    },
    /// The algorithm name on the command line is not one of ours.
    UnknownAlgorithm(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidDimensions { rows, cols } => write!(
                f,
                "maze dimensions must be odd numbers of at least 5, got {}x{}",
                rows, cols
            ),
            SetupError::DisplayTooSmall {
                rows,
                cols,
                term_rows,
                term_cols,
            } => write!(
                f,
                "terminal size ({}x{}) is too small for a {}x{} maze to display",
                term_cols, term_rows, rows, cols
            ),
            SetupError::UnknownAlgorithm(name) => write!(f, "unknown maze algorithm: {}", name),
        }
    }
}

impl std::error::Error for SetupError {}

/// Anything that can end a run: a setup rejection or a terminal I/O failure.
#[derive(Debug)]
pub enum RunError {
    Setup(SetupError),
    Io(std::io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Setup(err) => write!(f, "{}", err),
            RunError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Setup(err) => Some(err),
            RunError::Io(err) => Some(err),
        }
    }
}

impl From<SetupError> for RunError {
    fn from(err: SetupError) -> Self {
        RunError::Setup(err)
    }
}

impl From<std::io::Error> for RunError {
    fn from(err: std::io::Error) -> Self {
        RunError::Io(err)
    }
}
