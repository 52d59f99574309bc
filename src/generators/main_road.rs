use rand::{Rng, rngs::StdRng};

use crate::maze::{Direction, Maze};

/// Depth-first carver. Digs one long winding corridor with few, short side
/// branches.
///
/// The stack holds carved cells. Popping a cell re-evaluates it: if any
/// direction still leads two cells into solid wall, one is picked at random
/// and carved, and the cell goes back on the stack, since deeper carving can
/// leave it with other directions still open.
pub fn carve_backtrack(maze: &mut Maze, rng: &mut StdRng) {
    let start = maze.entry();
    maze.set_passage(start);

    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let open = Direction::ALL
            .into_iter()
            .filter(|direction| maze.is_wall(direction.step(cell, 2)))
            .collect::<Vec<_>>();

        if !open.is_empty() {
            let direction = open[rng.random_range(0..open.len())];
            let target = direction.step(cell, 2);
            maze.set_passage(direction.step(cell, 1));
            maze.set_passage(target);
            // Put the cell back first so its remaining directions get another look
            stack.push(cell);
            // Carve onward from the target
            stack.push(target);
        }
    }
}
