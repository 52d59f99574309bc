use rand::{Rng, rngs::StdRng};

use crate::maze::{Direction, Maze};

/// Prim-style frontier expansion. Grows the maze outward from the entry in
/// random directions, which leaves many short dead ends.
///
/// The frontier holds wall cells adjacent to carved ground, each paired with
/// the direction it was reached by. Consuming an entry probes one cell
/// further in that direction: if that far cell is still solid, both cells
/// are carved and the far cell's wall neighbors join the frontier. Stale
/// entries whose far cell was carved in the meantime are simply discarded.
pub fn frontier_expand(maze: &mut Maze, rng: &mut StdRng) {
    let seed = maze.entry();
    maze.set_passage(seed);

    let mut frontier = Vec::new();
    push_wall_neighbors(&mut frontier, maze, seed);

    while !frontier.is_empty() {
        let (coord, direction) = frontier.swap_remove(rng.random_range(0..frontier.len()));
        let target = direction.step(coord, 1);
        if maze.is_wall(target) {
            maze.set_passage(coord);
            maze.set_passage(target);
            push_wall_neighbors(&mut frontier, maze, target);
        }
    }
}

fn push_wall_neighbors(
    frontier: &mut Vec<((u16, u16), Direction)>,
    maze: &Maze,
    from: (u16, u16),
) {
    for direction in Direction::ALL {
        let neighbor = direction.step(from, 1);
        if maze.is_wall(neighbor) {
            frontier.push((neighbor, direction));
        }
    }
}
