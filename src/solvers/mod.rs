use crate::maze::{CellState, Direction, Maze};

/// Animated depth-first search from the entry anchor to the exit anchor.
///
/// Directions are tried nearest-to-exit first, by the Manhattan distance of
/// the would-be neighbor, so the walk leans toward the exit but still
/// backtracks out of dead ends. Greedy ordering only; the discovered route
/// is not necessarily the shortest one. Returns whether the exit was
/// reached.
pub fn solve_maze(maze: &mut Maze) -> bool {
    let entry = maze.entry();
    travel(maze, entry)
}

fn travel(maze: &mut Maze, coord: (u16, u16)) -> bool {
    maze.set(coord, CellState::SolverCurrent);
    if maze.is_exit(coord) {
        // The exit keeps its marker; the route sweep below stops short of it
        return true;
    }
    maze.set(coord, CellState::SolverVisited);

    for direction in ordered_directions(coord, maze.exit()) {
        let neighbor = direction.step(coord, 1);
        if !maze.is_passage(neighbor) {
            continue;
        }
        if travel(maze, neighbor) {
            // Success sweeps backward, painting the route exit-to-entry
            maze.set(coord, CellState::SolverPath);
            return true;
        }
        maze.set(neighbor, CellState::SolverBacktracked);
    }
    false
}

/// The four directions ordered by how close each one-step neighbor would be
/// to the exit. The sort is stable, so ties keep the fixed up, down, left,
/// right order.
fn ordered_directions(from: (u16, u16), exit: (u16, u16)) -> [Direction; 4] {
    let mut directions = Direction::ALL;
    directions.sort_by_key(|direction| manhattan(direction.step(from, 1), exit));
    directions
}

fn manhattan(a: (u16, u16), b: (u16, u16)) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}
