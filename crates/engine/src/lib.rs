//! Reference simulation engine.
//!
//! [`Board`] owns the cell buffer and implements
//! [`tui_board_core::SimulationEngine`] so the terminal front end has
//! something to drive. It keeps exactly one occupied block that movement
//! commands shift around the grid.

pub mod board;

pub use tui_board_core as core;
pub use tui_board_types as types;

pub use board::{Board, BoardError};
