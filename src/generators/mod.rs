use rand::{SeedableRng, rngs::StdRng};

mod main_road;
mod natural;
mod simple;

use main_road::carve_backtrack;
use natural::frontier_expand;
use simple::recursive_division;

use crate::{SetupError, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The maze carving algorithms, named after the shapes they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// One long winding corridor with few branches.
    MainRoad,
    /// Organic growth with many short dead ends.
    Natural,
    /// Straight walls from recursive division.
    Simple,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::Natural
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::MainRoad => write!(f, "mainroad"),
            Generator::Natural => write!(f, "natual"),
            Generator::Simple => write!(f, "simple"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainroad" => Ok(Generator::MainRoad),
            // "natual" is the long-standing spelling on the command line
            "natual" => Ok(Generator::Natural),
            "simple" => Ok(Generator::Simple),
            _ => Err(SetupError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Carve a maze in place with the selected algorithm. The interior must
/// still be in its freshly constructed all-wall state.
pub fn generate_maze(maze: &mut Maze, generator: Generator, rng: &mut StdRng) {
    match generator {
        Generator::MainRoad => carve_backtrack(maze, rng),
        Generator::Natural => frontier_expand(maze, rng),
        Generator::Simple => recursive_division(maze, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{CellState, Direction};
    use std::collections::{HashSet, VecDeque};

    const VARIANTS: [Generator; 3] = [Generator::MainRoad, Generator::Natural, Generator::Simple];
    const SIZES: [(u16, u16); 4] = [(5, 5), (11, 11), (21, 21), (21, 31)];

    fn generated(generator: Generator, rows: u16, cols: u16, seed: u64) -> Maze {
        let mut rng = get_rng(Some(seed));
        let mut maze = Maze::new(rows, cols, &mut rng).unwrap();
        generate_maze(&mut maze, generator, &mut rng);
        maze
    }

    /// Flood fill over passages, starting from the entry anchor.
    fn reachable_from_entry(maze: &Maze) -> HashSet<(u16, u16)> {
        let mut seen = HashSet::from([maze.entry()]);
        let mut queue = VecDeque::from([maze.entry()]);
        while let Some(coord) = queue.pop_front() {
            for direction in Direction::ALL {
                let next = direction.step(coord, 1);
                if maze.is_passage(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn test_every_variant_produces_connected_mazes() {
        for generator in VARIANTS {
            for (rows, cols) in SIZES {
                let maze = generated(generator, rows, cols, 2024);
                let passages = maze
                    .cells()
                    .iter()
                    .filter(|&&state| state == CellState::Passage)
                    .count();
                let reached = reachable_from_entry(&maze);
                assert_eq!(
                    reached.len(),
                    passages,
                    "{} left unreachable passages on {}x{}",
                    generator,
                    rows,
                    cols
                );
                assert!(reached.contains(&maze.exit()), "exit must be reachable");
            }
        }
    }

    #[test]
    fn test_no_variant_carves_connector_crossings() {
        // Cells with two even coordinates sit between lattice rows and
        // columns and must never open up.
        for generator in VARIANTS {
            for (rows, cols) in SIZES {
                let maze = generated(generator, rows, cols, 7);
                for row in 0..maze.rows() {
                    for col in 0..maze.cols() {
                        if row % 2 == 0 && col % 2 == 0 {
                            assert_ne!(
                                maze[(row, col)],
                                CellState::Passage,
                                "{} carved ({}, {})",
                                generator,
                                row,
                                col
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_generators_leave_the_ring_alone() {
        for generator in VARIANTS {
            let maze = generated(generator, 11, 11, 13);
            for row in 0..maze.rows() {
                for col in 0..maze.cols() {
                    if row == 0 || col == 0 || row == maze.rows() - 1 || col == maze.cols() - 1 {
                        assert!(matches!(
                            maze[(row, col)],
                            CellState::Border | CellState::Entry | CellState::Exit
                        ));
                    }
                }
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_board() {
        for generator in VARIANTS {
            let first = generated(generator, 11, 11, 5);
            let second = generated(generator, 11, 11, 5);
            assert_eq!(first.entry(), second.entry());
            assert_eq!(first.exit(), second.exit());
            assert_eq!(first.cells(), second.cells());
        }
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for generator in VARIANTS {
            assert_eq!(generator.to_string().parse::<Generator>().unwrap(), generator);
        }
        assert!(matches!(
            "spiral".parse::<Generator>(),
            Err(SetupError::UnknownAlgorithm(name)) if name == "spiral"
        ));
    }
}
