use std::{
    io::{Stdout, Write},
    sync::mpsc::Receiver,
    time::Duration,
};

use crossterm::{QueueableCommand, cursor, queue, style};

use crate::maze::{CellState, GridEvent};

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
    /// Current grid dimensions (rows, cols), known once the snapshot arrives
    grid_dims: Option<(u16, u16)>,
    /// Time to wait between rendering events to simulate refresh time
    render_refresh_time: Duration,
}

impl Renderer {
    /// Terminal rows reserved below the maze for status messages.
    pub const NUM_LOG_ROWS: u16 = 2;

    pub fn new(render_refresh_time: Duration) -> Self {
        Self {
            stdout: std::io::stdout(),
            grid_dims: None,
            render_refresh_time,
        }
    }

    /// Pick a per-event delay for a maze of the given size. Small mazes
    /// animate at a leisurely pace; larger ones speed up so the total
    /// animation time stays roughly flat.
    pub fn calibrated_refresh_time(rows: u16, cols: u16) -> Duration {
        const BASE_MILLIS: u64 = 50;
        const BASE_AREA: u64 = 21 * 21;
        let area = (rows as u64 * cols as u64).max(1);
        Duration::from_millis((BASE_MILLIS * BASE_AREA / area).clamp(10, BASE_MILLIS))
    }

    /// Render a single grid event to the terminal
    fn render_grid_event(&mut self, event: &GridEvent) -> std::io::Result<()> {
        match event {
            GridEvent::Initial { rows, cols, cells } => {
                self.grid_dims = Some((*rows, *cols));

                self.stdout.queue(cursor::MoveTo(0, 0))?;
                for row in 0..*rows {
                    for col in 0..*cols {
                        let cell = cells[row as usize * *cols as usize + col as usize];
                        self.stdout.queue(style::Print(cell))?;
                    }
                    self.stdout.queue(style::Print("\r\n"))?;
                }
                self.stdout.flush()?;
            }
            GridEvent::Update { coord, new } => match self.grid_dims {
                Some(_) => {
                    // Terminal columns run along the grid's second axis
                    queue!(
                        self.stdout,
                        cursor::MoveTo(coord.1 * CellState::CELL_WIDTH, coord.0),
                        style::Print(new)
                    )?;
                    self.stdout.flush()?;
                }
                // Skip updates that arrive before the snapshot
                None => {}
            },
        }
        Ok(())
    }

    /// Render loop that processes events from the grid event channel until
    /// the sending side hangs up.
    pub fn render(&mut self, grid_event_rx: Receiver<GridEvent>) -> std::io::Result<()> {
        loop {
            match grid_event_rx.recv() {
                Err(_e) => {
                    // Channel disconnected, exit the thread
                    tracing::debug!("[render] grid event channel closed, exiting");
                    break;
                }
                Ok(event) => {
                    self.render_grid_event(&event)?;
                    // Sleep a bit to simulate rendering time
                    std::thread::sleep(self.render_refresh_time);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_time_scales_down_with_area() {
        assert_eq!(
            Renderer::calibrated_refresh_time(5, 5),
            Duration::from_millis(50)
        );
        assert_eq!(
            Renderer::calibrated_refresh_time(21, 21),
            Duration::from_millis(50)
        );
        assert_eq!(
            Renderer::calibrated_refresh_time(99, 181),
            Duration::from_millis(10)
        );
    }
}
