//! Render/input synchronization core - pure, host-independent, testable
//!
//! This crate sits between a simulation engine that owns the board and a
//! host that owns the screen and the keyboard. It has no dependency on any
//! terminal or drawing backend.
//!
//! # Module Structure
//!
//! - [`engine`]: the [`SimulationEngine`] contract (board size, round
//!   advancement, movement entry points, cell storage)
//! - [`view`]: [`CellBufferView`], a zero-copy borrowed window over the
//!   engine's cells, re-acquired every frame
//! - [`scheduler`]: [`FrameScheduler`], the frame-paced loop with an explicit
//!   [`CancelHandle`]
//!
//! # Example
//!
//! ```
//! use tui_board_core::{CellBufferView, ViewError};
//! use tui_board_types::CellState;
//!
//! let cells = vec![CellState::Empty; 8];
//! let view = CellBufferView::acquire(&cells, 8).unwrap();
//! assert_eq!(view[0], CellState::Empty);
//!
//! let err = CellBufferView::acquire(&cells, 9).unwrap_err();
//! assert!(matches!(err, ViewError::OutOfBounds { requested: 9, available: 8 }));
//! ```

pub mod engine;
pub mod scheduler;
pub mod view;

pub use tui_board_types as types;

pub use engine::SimulationEngine;
pub use scheduler::{
    CancelHandle, FramePacer, FrameScheduler, FrameState, FrameStateHandle, FrameTask,
};
pub use view::{CellBufferView, ViewError};
