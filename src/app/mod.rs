mod renderer;

pub use renderer::Renderer;

use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    QueueableCommand, cursor, execute, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    RunError, SetupError,
    generators::{Generator, generate_maze, get_rng},
    maze::{self, CellState, GridEvent, Maze},
    solvers::solve_maze,
};

/// Everything one animation run needs: the algorithm, the board size, and
/// an optional seed for reproducing a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub generator: Generator,
    pub rows: u16,
    pub cols: u16,
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Board dimension used when the command line leaves one out.
    pub const DEFAULT_DIM: u16 = 21;

    /// Parse a run configuration from command-line arguments, with the
    /// program name already consumed.
    ///
    /// The accepted shapes are `[algorithm] [rows [cols]]`; a single number
    /// sets both dimensions. Unparseable numbers fall through to dimension
    /// validation as 0.
    pub fn from_args<I>(mut args: I) -> Result<Self, SetupError>
    where
        I: Iterator<Item = String>,
    {
        let generator = match args.next() {
            Some(name) => name.parse()?,
            None => Generator::default(),
        };
        let rows = match args.next() {
            Some(number) => number.parse().unwrap_or(0),
            None => RunConfig::DEFAULT_DIM,
        };
        let cols = match args.next() {
            Some(number) => number.parse().unwrap_or(0),
            None => rows,
        };
        Ok(RunConfig {
            generator,
            rows,
            cols,
            seed: None,
        })
    }
}

#[derive(Default)]
pub struct App {
    /// Per-event animation delay; calibrated from the board size when unset
    render_refresh_time: Option<Duration>,
}

impl App {
    /// An app with a fixed per-event delay instead of the calibrated one.
    pub fn with_refresh_time(render_refresh_time: Duration) -> Self {
        Self {
            render_refresh_time: Some(render_refresh_time),
        }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the cursor is shown again even if the panic
    /// occurs in a different thread
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Clear the screen and park the hidden cursor at the top left corner
    /// Also sets a panic hook to restore the terminal on panic
    fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        execute!(stdout, cursor::Show)?;
        Ok(())
    }

    /// Check that the board fits in the terminal, leaving room for the
    /// status rows below it. When the terminal size cannot be determined,
    /// e.g. because output is piped, any board is accepted.
    fn check_display_size(rows: u16, cols: u16) -> Result<(), SetupError> {
        let Ok((term_cols, term_rows)) = terminal::size() else {
            return Ok(());
        };
        let too_tall = rows.saturating_add(Renderer::NUM_LOG_ROWS) > term_rows;
        let too_wide = cols as u32 * CellState::CELL_WIDTH as u32 > term_cols as u32;
        if too_tall || too_wide {
            return Err(SetupError::DisplayTooSmall {
                rows,
                cols,
                term_rows,
                term_cols,
            });
        }
        Ok(())
    }

    /// Generate a maze, then animate solving it in the terminal. Returns
    /// whether the exit was reached.
    pub fn run(&self, config: &RunConfig) -> Result<bool, RunError> {
        maze::validate_dimensions(config.rows, config.cols)?;
        App::check_display_size(config.rows, config.cols)?;
        tracing::info!(
            "Running {} on a {}x{} board",
            config.generator,
            config.rows,
            config.cols
        );

        let mut stdout = std::io::stdout();
        App::setup_terminal(&mut stdout)?;

        let mut rng = get_rng(config.seed);
        let mut maze = Maze::new(config.rows, config.cols, &mut rng)?;
        // Generation runs silently; the finished board reaches the renderer
        // as one snapshot when the sender is attached below
        generate_maze(&mut maze, config.generator, &mut rng);

        // A rendezvous channel: the solver blocks on every event until the
        // renderer has taken it, so the animation pace is set by the render
        // thread alone
        let (grid_event_tx, grid_event_rx) = std::sync::mpsc::sync_channel::<GridEvent>(0);

        let render_refresh_time = self
            .render_refresh_time
            .unwrap_or_else(|| Renderer::calibrated_refresh_time(config.rows, config.cols));
        let render_thread_handle = std::thread::spawn(move || {
            let mut renderer = Renderer::new(render_refresh_time);
            renderer.render(grid_event_rx)
        });

        maze.attach_events(grid_event_tx);
        let goal_reached = solve_maze(&mut maze);
        drop(maze); // closes the event channel so the render thread exits

        render_thread_handle
            .join()
            .expect("Render thread panicked")?;

        let msg = if goal_reached {
            "Path found!".with(Color::Green).attribute(Attribute::Bold)
        } else {
            "No path found.".with(Color::Red).attribute(Attribute::Bold)
        };
        log_terminal(&mut stdout, config.rows, Some(msg))?;
        stdout.queue(cursor::MoveTo(0, config.rows.saturating_add(1)))?;
        App::restore_terminal(&mut stdout)?;
        Ok(goal_reached)
    }

    /// Profiling mode: run the full generate-and-solve pipeline with the
    /// events drained by a sink thread instead of the terminal.
    pub fn profile(&self, config: &RunConfig, iterations: usize) -> Result<(), RunError> {
        let render_refresh_time = self
            .render_refresh_time
            .unwrap_or_else(|| Renderer::calibrated_refresh_time(config.rows, config.cols));

        let mut rng = get_rng(config.seed);
        for iteration in 0..iterations {
            let (grid_event_tx, grid_event_rx) = std::sync::mpsc::sync_channel::<GridEvent>(0);
            let sink_thread_handle = std::thread::spawn(move || {
                while grid_event_rx.recv().is_ok() {
                    std::thread::sleep(render_refresh_time);
                }
            });

            let mut maze = Maze::new(config.rows, config.cols, &mut rng)?;
            generate_maze(&mut maze, config.generator, &mut rng);
            maze.attach_events(grid_event_tx);
            let goal_reached = solve_maze(&mut maze);
            drop(maze); // closes the event channel so the sink thread exits
            sink_thread_handle.join().expect("Sink thread panicked");
            tracing::info!("Iteration {}: goal reached = {}", iteration, goal_reached);
        }
        Ok(())
    }
}

/// Print a one-line status message on the row right below the maze,
/// truncated to the terminal width. `None` just clears the row.
fn log_terminal<D: std::fmt::Display>(
    stdout: &mut Stdout,
    below_row: u16,
    message: Option<StyledContent<D>>,
) -> std::io::Result<()> {
    queue!(
        stdout,
        cursor::MoveTo(0, below_row),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    if let Some(message) = message {
        let content = message.content().to_string();
        let width = terminal::size().map_or(usize::MAX, |(cols, _)| cols as usize);
        let (truncated, _) = content.unicode_truncate(width);
        stdout.queue(style::PrintStyledContent(StyledContent::new(
            *message.style(),
            truncated.to_string(),
        )))?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> impl Iterator<Item = String> {
        words
            .iter()
            .map(|word| word.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_args_default_to_natural_21() {
        let config = RunConfig::from_args(args(&[])).unwrap();
        assert_eq!(
            config,
            RunConfig {
                generator: Generator::Natural,
                rows: 21,
                cols: 21,
                seed: None,
            }
        );
    }

    #[test]
    fn test_single_number_sets_both_dimensions() {
        let config = RunConfig::from_args(args(&["mainroad", "15"])).unwrap();
        assert_eq!(config.generator, Generator::MainRoad);
        assert_eq!((config.rows, config.cols), (15, 15));
    }

    #[test]
    fn test_two_numbers_set_rows_and_cols() {
        let config = RunConfig::from_args(args(&["simple", "11", "31"])).unwrap();
        assert_eq!(config.generator, Generator::Simple);
        assert_eq!((config.rows, config.cols), (11, 31));
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        assert!(matches!(
            RunConfig::from_args(args(&["spiral"])),
            Err(SetupError::UnknownAlgorithm(name)) if name == "spiral"
        ));
    }

    #[test]
    fn test_unparseable_dimensions_fail_validation() {
        let config = RunConfig::from_args(args(&["natual", "lots"])).unwrap();
        assert_eq!((config.rows, config.cols), (0, 0));
        assert!(maze::validate_dimensions(config.rows, config.cols).is_err());
    }
}
