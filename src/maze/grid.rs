use std::sync::mpsc::SyncSender;

use super::cell::CellState;

/// A change on the board, streamed to whoever holds the receiving end.
#[derive(Debug)]
pub enum GridEvent {
    /// Snapshot of the whole board, sent once when a sender is attached so
    /// the consumer can draw everything before streaming updates.
    Initial {
        rows: u16,
        cols: u16,
        cells: Box<[CellState]>,
    },
    /// A single cell changed state.
    Update { coord: (u16, u16), new: CellState },
}

/// Flat row-major storage for the board, addressed as `(row, col)`.
pub struct Grid {
    data: Box<[CellState]>,
    rows: u16,
    cols: u16,
    sender: Option<SyncSender<GridEvent>>,
}

impl Grid {
    pub fn new(rows: u16, cols: u16, cell: CellState) -> Self {
        let data = vec![cell; rows as usize * cols as usize].into_boxed_slice();
        Grid {
            data,
            rows,
            cols,
            sender: None,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn cells(&self) -> &[CellState] {
        &self.data
    }

    pub fn is_boundary(&self, row: u16, col: u16) -> bool {
        row == 0 || col == 0 || row == self.rows - 1 || col == self.cols - 1
    }

    fn ravel_index(&self, row: u16, col: u16) -> usize {
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        row as usize * self.cols as usize + col as usize
    }

    /// Attach the sender used for grid events, emitting a snapshot of the
    /// whole board first so the receiving side starts from the current state.
    pub fn attach_sender(&mut self, sender: SyncSender<GridEvent>) {
        let _ = sender.send(GridEvent::Initial {
            rows: self.rows,
            cols: self.cols,
            cells: self.data.clone(),
        });
        self.sender = Some(sender);
    }

    /// Store a new state for one cell. An event is emitted only when the
    /// stored state actually changes.
    pub fn set(&mut self, coord: (u16, u16), cell: CellState) {
        let idx = self.ravel_index(coord.0, coord.1);
        let old = self.data[idx];
        if old != cell {
            self.data[idx] = cell;
            if let Some(sender) = &self.sender {
                let _ = sender.send(GridEvent::Update { coord, new: cell });
            }
        }
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = CellState;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
