//! Terminal board runner (default binary).
//!
//! Builds the reference board, draws it with half-block pixels and forwards
//! `w`/`a`/`s`/`d` to the engine. Esc or Ctrl-C quits.

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info};

use tui_board::core::{CancelHandle, FrameScheduler};
use tui_board::engine::Board;
use tui_board::term::{install_panic_hook, TerminalRenderer};
use tui_board::{Config, Session, TerminalPacer};

fn main() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_logging(&config)?;
    info!("configuration: {:?}", config);

    // A board that cannot be built must stop us before the terminal is touched.
    let board = Board::new_board(config.height, config.width).context("failed to create board")?;

    let cancel = CancelHandle::new();
    let mut session = Session::start(
        board,
        config.render_config()?,
        TerminalRenderer::new(),
        cancel.clone(),
    )?;

    install_panic_hook();
    let mut scheduler = FrameScheduler::new(cancel);
    let mut pacer = TerminalPacer::new(config.frame_interval());
    let result = session.run_in_terminal(&mut scheduler, &mut pacer);

    if let Err(e) = &result {
        error!("render loop failed: {e:#}");
    }
    info!("skipped frames: {}", session.skipped_frames());
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let default_filter = if config.log_path.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    builder.format_timestamp_micros();

    if let Some(path) = &config.log_path {
        let file = File::create(path).with_context(|| format!("failed to open log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
