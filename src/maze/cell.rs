use crossterm::style::{Attribute, Color, Stylize};

use std::fmt;

/// Represents the state of a single cell on the maze board.
///
/// `Border`, `Wall` and `Passage` are the structural states. `Entry` and
/// `Exit` mark the two openings on the border ring. The `Solver*` states are
/// written by the solver as it explores, so a renderer consuming grid events
/// can replay the whole search as cell transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellState {
    /// The outer ring of the board.
    Border,
    Wall,
    Passage,
    /// The border cell the maze is entered through.
    Entry,
    /// The border cell the maze is left through.
    Exit,
    /// The cell the solver currently stands on.
    SolverCurrent,
    /// A cell the solver has entered at least once.
    SolverVisited,
    /// A visited cell the solver gave up on.
    SolverBacktracked,
    /// A cell on the discovered entry-to-exit route.
    SolverPath,
}

impl CellState {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            CellState::Border | CellState::Wall => "  ".attribute(Attribute::Reverse),
            CellState::Passage => "  ".with(Color::Reset),
            CellState::Entry => "I ".with(Color::Green).attribute(Attribute::Reverse),
            CellState::Exit => "O ".with(Color::Green).attribute(Attribute::Reverse),
            CellState::SolverCurrent => "o ".with(Color::Red),
            CellState::SolverVisited => "* ".with(Color::Yellow),
            CellState::SolverBacktracked => "* ".with(Color::Magenta),
            CellState::SolverPath => "+ ".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellState::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_renders_cell_width_columns() {
        // The Display impl asserts the glyph width in debug builds, so
        // formatting every state exercises that check.
        let states = [
            CellState::Border,
            CellState::Wall,
            CellState::Passage,
            CellState::Entry,
            CellState::Exit,
            CellState::SolverCurrent,
            CellState::SolverVisited,
            CellState::SolverBacktracked,
            CellState::SolverPath,
        ];
        for state in states {
            let _ = format!("{}", state);
        }
    }
}
