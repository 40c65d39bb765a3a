//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any renderer. It maps
//! `crossterm` key events into [`crate::types::MovementCommand`] and forwards
//! each one to a [`tui_board_core::SimulationEngine`]. It keeps no state:
//! repeat behaviour is whatever the terminal sends.

pub mod dispatch;
pub mod map;

pub use tui_board_core as core;
pub use tui_board_types as types;

pub use dispatch::{HostEvents, InputDispatcher};
pub use map::{command_for_char, command_for_key, should_quit};
