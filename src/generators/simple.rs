use rand::{Rng, rngs::StdRng};

use crate::maze::Maze;

/// Recursive division. Starts from an open field and repeatedly walls it
/// into quadrants, which yields long straight corridors.
///
/// Each division draws a full cross through the region, punctures three of
/// the four wall segments at random odd offsets, and leaves the fourth
/// solid so the quadrants stay connected without closing a loop.
pub fn recursive_division(maze: &mut Maze, rng: &mut StdRng) {
    maze.clear_interior();

    let (bottom, right) = (maze.rows() - 2, maze.cols() - 2);
    divide(maze, 1, bottom, 1, right, rng);

    fn divide(maze: &mut Maze, top: u16, bottom: u16, left: u16, right: u16, rng: &mut StdRng) {
        // A single row or column cannot be divided further
        if top == bottom || left == right {
            return;
        }

        // Region bounds are odd, so the cross lands on even connector lines
        let cross_row = top + rng.random_range(0..(bottom - top) / 2) * 2 + 1;
        let cross_col = left + rng.random_range(0..(right - left) / 2) * 2 + 1;

        for col in left..=right {
            maze.set_wall((cross_row, col));
        }
        for row in top..=bottom {
            maze.set_wall((row, cross_col));
        }

        // One candidate opening per segment, at an odd offset along it
        let openings = [
            (top + rng.random_range(0..cross_row - top) / 2 * 2, cross_col),
            (
                bottom - rng.random_range(0..bottom - cross_row) / 2 * 2,
                cross_col,
            ),
            (
                cross_row,
                left + rng.random_range(0..cross_col - left) / 2 * 2,
            ),
            (
                cross_row,
                right - rng.random_range(0..right - cross_col) / 2 * 2,
            ),
        ];
        // One segment stays solid; the other three are punctured
        let solid = rng.random_range(0..4);
        for (i, opening) in openings.into_iter().enumerate() {
            if i != solid {
                maze.set_passage(opening);
            }
        }

        divide(maze, top, cross_row - 1, left, cross_col - 1, rng);
        divide(maze, cross_row + 1, bottom, left, cross_col - 1, rng);
        divide(maze, cross_row + 1, bottom, cross_col + 1, right, rng);
        divide(maze, top, cross_row - 1, cross_col + 1, right, rng);
    }
}
