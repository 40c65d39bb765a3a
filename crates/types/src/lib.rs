//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types shared by the engine, the
//! renderer and the input layer. All types are pure data with no external
//! dependencies.
//!
//! # Layout
//!
//! Cells are stored row-major. [`index`] is the one place a `(row, column)`
//! coordinate becomes a flat buffer offset; the engine and the renderer both
//! go through it so they always agree on layout.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 9 | Columns |
//! | `DEFAULT_BOARD_HEIGHT` | 9 | Rows |
//! | `CELL_SIZE` | 5 | Pixels per cell edge (plus a 1 px border) |
//! | `FRAME_MS` | 16 | Frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_board_types::{index, Grid, MovementCommand};
//!
//! let grid = Grid::new(9, 9).unwrap();
//! assert_eq!(grid.len(), 81);
//! assert_eq!(index(2, 3, grid.width), 21);
//!
//! let cmd = MovementCommand::from_str("up").unwrap();
//! assert_eq!(cmd, MovementCommand::Up);
//! ```

/// Board width in cells.
pub const DEFAULT_BOARD_WIDTH: u16 = 9;

/// Board height in cells.
pub const DEFAULT_BOARD_HEIGHT: u16 = 9;

/// Edge length of one painted cell, in pixels.
pub const CELL_SIZE: u16 = 5;

/// Frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Map `(row, column)` to a row-major buffer offset.
///
/// No bounds checking: callers keep `row < height` and `column < width`.
#[inline(always)]
pub const fn index(row: u16, column: u16, width: u16) -> usize {
    (row as usize) * (width as usize) + (column as usize)
}

/// Board dimensions, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
}

impl Grid {
    /// Returns `None` if either dimension is zero.
    pub const fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub const fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn contains(&self, row: u16, column: u16) -> bool {
        row < self.height && column < self.width
    }

    #[inline]
    pub const fn index(&self, row: u16, column: u16) -> usize {
        index(row, column, self.width)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// State of a single cell.
///
/// The engine owns the meaning of non-empty states; the renderer only asks
/// [`CellState::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Occupied = 1,
}

impl CellState {
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }
}

/// A directional command forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementCommand {
    Up,
    Down,
    Left,
    Right,
}

impl MovementCommand {
    pub const ALL: [MovementCommand; 4] = [
        MovementCommand::Up,
        MovementCommand::Down,
        MovementCommand::Left,
        MovementCommand::Right,
    ];

    /// Parse from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Some(MovementCommand::Up),
            "down" => Some(MovementCommand::Down),
            "left" => Some(MovementCommand::Left),
            "right" => Some(MovementCommand::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementCommand::Up => "up",
            MovementCommand::Down => "down",
            MovementCommand::Left => "left",
            MovementCommand::Right => "right",
        }
    }
}
