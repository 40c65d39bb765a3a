//! Terminal "grid renderer" module.
//!
//! This is a small rendering layer for a board owned by a simulation engine.
//! It paints cells into a pixel [`Surface`] and flushes that surface to the
//! terminal with half-block characters, two pixel rows per terminal row.
//!
//! Goals:
//! - Keep painting pure so it can be tested without a terminal
//! - Size the surface once from the grid and never resize it
//! - Only re-emit terminal cells that changed since the last frame

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use tui_board_core as core;
pub use tui_board_types as types;

pub use fb::{Rgb, Surface};
pub use grid_view::{surface_extent, GridRenderer, Palette, RenderConfig, MAX_SURFACE_EXTENT};
pub use renderer::{
    encode_diff_into, encode_full_into, install_panic_hook, SurfaceSink, TerminalMode,
    TerminalRenderer,
};
