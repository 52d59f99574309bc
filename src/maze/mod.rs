pub mod cell;
pub mod grid;

use std::sync::mpsc::SyncSender;

use rand::{Rng, rngs::StdRng};

pub use cell::CellState;
use grid::Grid;
pub use grid::GridEvent;

use crate::SetupError;

/// The four cardinal directions, in the fixed order used whenever all of
/// them are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Step `distance` cells from `coord` in this direction.
    pub fn step(self, coord: (u16, u16), distance: u16) -> (u16, u16) {
        // NOTE: This way of handling underflow/overflow is overflow-safe.
        // Stepping above row 0 (or left of column 0) wraps to the top of the
        // u16 range, and stepping past u16::MAX saturates; both results land
        // outside any board and are rejected by the callers' bounds checks.
        let (row, col) = coord;
        match self {
            Direction::Up => (row.wrapping_sub(distance), col),
            Direction::Down => (row.saturating_add(distance), col),
            Direction::Left => (row, col.wrapping_sub(distance)),
            Direction::Right => (row, col.saturating_add(distance)),
        }
    }
}

/// Check that maze dimensions are odd and at least 5, the smallest board
/// with a border ring and a carveable interior.
pub fn validate_dimensions(rows: u16, cols: u16) -> Result<(), SetupError> {
    if rows < 5 || cols < 5 || rows % 2 == 0 || cols % 2 == 0 {
        return Err(SetupError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// A rectangular maze board: a border ring around a carveable interior,
/// with an entry and an exit anchor on two inner edges.
///
/// Anchors live in the interior; each one is drawn on the border as a
/// projection (`I `/`O `) through the ring. All mutation goes through
/// [`Maze::set`], so every state change can be observed as a [`GridEvent`]
/// once a sender is attached.
pub struct Maze {
    grid: Grid,
    rows: u16,
    cols: u16,
    entry: (u16, u16),
    exit: (u16, u16),
}

impl Maze {
    /// Creates a maze with a border ring, a walled interior, and anchors
    /// drawn at random odd offsets on the inner edges.
    pub fn new(rows: u16, cols: u16, rng: &mut StdRng) -> Result<Self, SetupError> {
        validate_dimensions(rows, cols)?;
        let entry = random_anchor(rows, cols, rng);
        // Redraw until the two anchors differ
        let exit = loop {
            let exit = random_anchor(rows, cols, rng);
            if exit != entry {
                break exit;
            }
        };
        Ok(Maze::build(rows, cols, entry, exit))
    }

    /// Creates a maze with the anchors pinned instead of drawn at random.
    /// Anchors must be distinct cells at odd offsets on the inner edges.
    pub fn with_anchors(
        rows: u16,
        cols: u16,
        entry: (u16, u16),
        exit: (u16, u16),
    ) -> Result<Self, SetupError> {
        validate_dimensions(rows, cols)?;
        Ok(Maze::build(rows, cols, entry, exit))
    }

    fn build(rows: u16, cols: u16, entry: (u16, u16), exit: (u16, u16)) -> Self {
        debug_assert_ne!(entry, exit);
        let mut grid = Grid::new(rows, cols, CellState::Wall);
        (0..rows).for_each(|row| {
            (0..cols).for_each(|col| {
                if grid.is_boundary(row, col) {
                    grid.set((row, col), CellState::Border);
                }
            });
        });
        grid.set(project_to_border(entry, rows, cols), CellState::Entry);
        grid.set(project_to_border(exit, rows, cols), CellState::Exit);
        Maze {
            grid,
            rows,
            cols,
            entry,
            exit,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// The interior cell the maze is entered through.
    pub fn entry(&self) -> (u16, u16) {
        self.entry
    }

    /// The interior cell the maze is left through.
    pub fn exit(&self) -> (u16, u16) {
        self.exit
    }

    /// Checks if the given coordinate lies in the interior, inside the
    /// border ring.
    pub fn is_inside(&self, coord: (u16, u16)) -> bool {
        coord.0 >= 1 && coord.0 < self.rows - 1 && coord.1 >= 1 && coord.1 < self.cols - 1
    }

    /// Whether the cell is an interior passage. Out-of-board coordinates
    /// are simply not passages, so callers can probe without bounds checks.
    pub fn is_passage(&self, coord: (u16, u16)) -> bool {
        self.is_inside(coord) && self.grid[coord] == CellState::Passage
    }

    /// Whether the cell is an interior wall, with the same out-of-board
    /// tolerance as [`Maze::is_passage`].
    pub fn is_wall(&self, coord: (u16, u16)) -> bool {
        self.is_inside(coord) && self.grid[coord] == CellState::Wall
    }

    pub fn is_entry(&self, coord: (u16, u16)) -> bool {
        coord == self.entry
    }

    pub fn is_exit(&self, coord: (u16, u16)) -> bool {
        coord == self.exit
    }

    /// Sets the state of one cell, emitting a grid event if it changed.
    pub fn set(&mut self, coord: (u16, u16), state: CellState) {
        self.grid.set(coord, state);
    }

    pub fn set_passage(&mut self, coord: (u16, u16)) {
        self.grid.set(coord, CellState::Passage);
    }

    pub fn set_wall(&mut self, coord: (u16, u16)) {
        self.grid.set(coord, CellState::Wall);
    }

    /// Clears the whole interior to passages. The border ring is preserved.
    pub fn clear_interior(&mut self) {
        (0..self.rows).for_each(|row| {
            (0..self.cols).for_each(|col| {
                // Leave the border ring alone
                if self.grid.is_boundary(row, col) {
                    return;
                }
                self.grid.set((row, col), CellState::Passage);
            });
        });
    }

    /// Attach the sender used to stream cell transitions. A snapshot of the
    /// whole board is emitted before any further updates.
    pub fn attach_events(&mut self, sender: SyncSender<GridEvent>) {
        self.grid.attach_sender(sender);
    }

    #[cfg(test)]
    /// Returns the internal board data for testing purposes.
    pub fn cells(&self) -> &[CellState] {
        self.grid.cells()
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = CellState;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}

/// Draw one anchor on a random inner edge, at an odd offset along it.
fn random_anchor(rows: u16, cols: u16, rng: &mut StdRng) -> (u16, u16) {
    let side = rng.random_range(0..4);
    // An odd offset in [1, upper - 2], so anchors stay on the carveable lattice
    let mut odd_offset = |upper: u16| rng.random_range(1..upper - 1) / 2 * 2 + 1;
    match side {
        0 => (1, odd_offset(cols)),
        1 => (rows - 2, odd_offset(cols)),
        2 => (odd_offset(rows), 1),
        _ => (odd_offset(rows), cols - 2),
    }
}

/// Project an interior edge anchor onto the border cell it opens through.
/// Columns are checked first, so an anchor next to a corner opens sideways.
fn project_to_border(anchor: (u16, u16), rows: u16, cols: u16) -> (u16, u16) {
    let (row, col) = anchor;
    if col == 1 {
        (row, 0)
    } else if col == cols - 2 {
        (row, cols - 1)
    } else if row == 1 {
        (0, col)
    } else {
        (rows - 1, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_dimensions_must_be_odd_and_at_least_five() {
        assert!(matches!(
            Maze::new(20, 21, &mut rng(0)),
            Err(SetupError::InvalidDimensions { rows: 20, cols: 21 })
        ));
        assert!(matches!(
            Maze::new(4, 5, &mut rng(0)),
            Err(SetupError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Maze::new(0, 0, &mut rng(0)),
            Err(SetupError::InvalidDimensions { .. })
        ));
        assert!(Maze::new(5, 5, &mut rng(0)).is_ok());
    }

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::with_anchors(5, 5, (1, 1), (3, 3)).unwrap();
        maze.set((2, 3), CellState::Passage);
        assert_eq!(maze[(2, 3)], CellState::Passage);
    }

    #[test]
    fn test_border_ring_has_exactly_two_openings() {
        let maze = Maze::new(21, 31, &mut rng(7)).unwrap();
        let mut openings = Vec::new();
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                let on_ring =
                    row == 0 || col == 0 || row == maze.rows() - 1 || col == maze.cols() - 1;
                match maze[(row, col)] {
                    CellState::Entry | CellState::Exit => {
                        assert!(on_ring, "openings must sit on the ring");
                        openings.push((row, col));
                    }
                    CellState::Border => assert!(on_ring, "border only on the ring"),
                    _ => assert!(!on_ring, "the ring holds nothing but border and openings"),
                }
            }
        }
        assert_eq!(openings.len(), 2);
    }

    #[test]
    fn test_anchors_sit_on_inner_edges_at_odd_offsets() {
        let mut rng = rng(99);
        for _ in 0..200 {
            let maze = Maze::new(11, 15, &mut rng).unwrap();
            for anchor in [maze.entry(), maze.exit()] {
                let (row, col) = anchor;
                assert!(maze.is_inside(anchor));
                assert!(row % 2 == 1 && col % 2 == 1);
                assert!(
                    row == 1 || row == maze.rows() - 2 || col == 1 || col == maze.cols() - 2,
                    "anchor {:?} is not on an inner edge",
                    anchor
                );
            }
        }
    }

    #[test]
    fn test_anchors_never_coincide() {
        // Collisions are most likely on the smallest board
        let mut rng = rng(42);
        for _ in 0..10_000 {
            let maze = Maze::new(5, 5, &mut rng).unwrap();
            assert_ne!(maze.entry(), maze.exit());
        }
    }

    #[test]
    fn test_direction_step_is_bounds_safe() {
        assert_eq!(Direction::Up.step((0, 3), 1), (u16::MAX, 3));
        assert_eq!(Direction::Left.step((3, 1), 2), (3, u16::MAX));
        assert_eq!(Direction::Down.step((3, 3), 2), (5, 3));

        let maze = Maze::with_anchors(5, 5, (1, 1), (3, 3)).unwrap();
        assert!(!maze.is_passage(Direction::Up.step((0, 3), 1)));
        assert!(!maze.is_wall(Direction::Up.step((0, 3), 1)));
    }

    #[test]
    fn test_event_stream_reports_changes_once() {
        let (tx, rx) = std::sync::mpsc::sync_channel(64);
        let mut maze = Maze::with_anchors(5, 5, (1, 1), (3, 3)).unwrap();
        maze.attach_events(tx);

        match rx.try_recv() {
            Ok(GridEvent::Initial { rows: 5, cols: 5, cells }) => assert_eq!(cells.len(), 25),
            _ => panic!("expected an initial snapshot"),
        }

        maze.set_passage((1, 1));
        maze.set_passage((1, 1)); // unchanged, must not emit
        maze.set_wall((1, 1));

        let mut updates = Vec::new();
        while let Ok(event) = rx.try_recv() {
            match event {
                GridEvent::Update { coord, new } => updates.push((coord, new)),
                GridEvent::Initial { .. } => panic!("snapshot may only be sent on attach"),
            }
        }
        assert_eq!(
            updates,
            vec![((1, 1), CellState::Passage), ((1, 1), CellState::Wall)]
        );
    }

    #[test]
    fn test_anchor_projections_open_through_the_nearest_edge() {
        let maze = Maze::with_anchors(7, 7, (1, 3), (5, 3)).unwrap();
        assert_eq!(maze[(0, 3)], CellState::Entry);
        assert_eq!(maze[(6, 3)], CellState::Exit);

        // Column edges win over row edges for corner-adjacent anchors
        let maze = Maze::with_anchors(7, 7, (1, 1), (5, 5)).unwrap();
        assert_eq!(maze[(1, 0)], CellState::Entry);
        assert_eq!(maze[(5, 6)], CellState::Exit);
    }
}
