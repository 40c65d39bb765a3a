//! Board: cell storage plus a single movable block.

use log::{debug, trace};
use thiserror::Error;

use crate::core::SimulationEngine;
use crate::types::{index, CellState, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: u16, height: u16 },
}

#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    cells: Vec<CellState>,
    /// `(row, column)` of the occupied block, once a round has started.
    block: Option<(u16, u16)>,
    rounds: u32,
}

impl Board {
    /// Create an empty board. Note the argument order: height first.
    pub fn new_board(height: u16, width: u16) -> Result<Self, BoardError> {
        let grid = Grid::new(width, height).ok_or(BoardError::EmptyGrid { width, height })?;
        debug!("board created: {}x{}", width, height);
        Ok(Self {
            grid,
            cells: vec![CellState::Empty; grid.len()],
            block: None,
            rounds: 0,
        })
    }

    pub fn width(&self) -> u16 {
        self.grid.width
    }

    pub fn height(&self) -> u16 {
        self.grid.height
    }

    pub fn get_index(&self, row: u16, column: u16) -> usize {
        index(row, column, self.grid.width)
    }

    pub fn get_cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn get(&self, row: u16, column: u16) -> Option<CellState> {
        if !self.grid.contains(row, column) {
            return None;
        }
        Some(self.cells[self.get_index(row, column)])
    }

    pub fn block(&self) -> Option<(u16, u16)> {
        self.block
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    fn place(&mut self, row: u16, column: u16) {
        if let Some((r, c)) = self.block {
            let i = self.get_index(r, c);
            self.cells[i] = CellState::Empty;
        }
        let i = self.get_index(row, column);
        self.cells[i] = CellState::Occupied;
        self.block = Some((row, column));
    }

    fn shift(&mut self, dr: i32, dc: i32) {
        let Some((row, column)) = self.block else {
            return;
        };
        let r = (row as i32 + dr).clamp(0, self.grid.height as i32 - 1) as u16;
        let c = (column as i32 + dc).clamp(0, self.grid.width as i32 - 1) as u16;
        if (r, c) != (row, column) {
            trace!("block ({row},{column}) -> ({r},{c})");
            self.place(r, c);
        }
    }
}

impl SimulationEngine for Board {
    fn grid(&self) -> Grid {
        self.grid
    }

    fn new_round(&mut self) {
        self.rounds += 1;
        let column = self.grid.width / 2;
        self.place(0, column);
        debug!("round {} started, block at (0,{})", self.rounds, column);
    }

    fn up(&mut self) {
        self.shift(-1, 0);
    }

    fn down(&mut self) {
        self.shift(1, 0);
    }

    fn left(&mut self) {
        self.shift(0, -1);
    }

    fn right(&mut self) {
        self.shift(0, 1);
    }

    fn cells(&self) -> &[CellState] {
        &self.cells
    }
}
