//! TUI Board (workspace facade crate).
//!
//! Re-exports the member crates under `tui_board::{core,engine,input,term,types}`
//! and adds the pieces that tie them to a real terminal: configuration, the
//! session that owns engine and surface, and the frame pacer.

pub use tui_board_core as core;
pub use tui_board_engine as engine;
pub use tui_board_input as input;
pub use tui_board_term as term;
pub use tui_board_types as types;

pub mod config;
pub mod host;
pub mod session;

pub use config::{Config, ConfigError};
pub use host::TerminalPacer;
pub use session::Session;
