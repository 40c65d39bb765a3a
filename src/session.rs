//! Session: one engine, one surface, one render/input loop.
//!
//! The session is the [`FrameTask`] the scheduler drives and the
//! [`HostEvents`] sink the host feeds keys into. Both run on the same thread,
//! so a key is never applied while a frame is being painted.

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::{debug, info, warn};

use crate::core::{
    CancelHandle, CellBufferView, FramePacer, FrameScheduler, FrameTask, SimulationEngine,
};
use crate::input::{should_quit, HostEvents, InputDispatcher};
use crate::term::{GridRenderer, RenderConfig, Surface, SurfaceSink, TerminalMode};
use crate::types::Grid;

pub struct Session<E, S> {
    engine: E,
    grid: Grid,
    renderer: GridRenderer,
    surface: Surface,
    sink: S,
    dispatcher: InputDispatcher,
    cancel: CancelHandle,
    skipped_frames: u64,
}

impl<E: SimulationEngine, S: SurfaceSink> Session<E, S> {
    /// Start a session: advance the engine once, size the surface from the
    /// grid and draw the gridline mesh.
    pub fn start(mut engine: E, config: RenderConfig, sink: S, cancel: CancelHandle) -> Result<Self> {
        engine.new_round();
        let grid = engine.grid();
        let renderer = GridRenderer::new(config);
        let mut surface = renderer.new_surface(grid)?;
        renderer.draw_gridlines(grid, &mut surface);
        info!(
            "session started: {}x{} board, {}x{} px surface",
            grid.width,
            grid.height,
            surface.width(),
            surface.height()
        );

        Ok(Self {
            engine,
            grid,
            renderer,
            surface,
            sink,
            dispatcher: InputDispatcher::new(),
            cancel,
            skipped_frames: 0,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Frames whose cell view could not be acquired.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    /// Re-acquire the cell view and paint it. Returns `false` if the frame
    /// was skipped; the surface then keeps its previous contents.
    pub fn paint(&mut self) -> bool {
        let painted = CellBufferView::acquire(self.engine.cells(), self.grid.len())
            .and_then(|view| self.renderer.frame(&view, self.grid, &mut self.surface));
        match painted {
            Ok(()) => true,
            Err(e) => {
                self.skipped_frames += 1;
                warn!("skipping frame: {e}");
                false
            }
        }
    }
}

impl<E: SimulationEngine, S: SurfaceSink + TerminalMode> Session<E, S> {
    /// Enter the terminal, drive `scheduler` until it stops, then leave the
    /// terminal again. The terminal is restored on every path, including an
    /// `enter` that failed halfway.
    pub fn run_in_terminal<P>(&mut self, scheduler: &mut FrameScheduler, pacer: &mut P) -> Result<()>
    where
        P: FramePacer<Self> + ?Sized,
    {
        if let Err(e) = self.sink.enter() {
            self.leave_terminal();
            return Err(e.context("failed to set up terminal"));
        }
        let result = scheduler.run(self, pacer);
        self.leave_terminal();
        result
    }

    fn leave_terminal(&mut self) {
        if let Err(e) = self.sink.exit() {
            warn!("failed to restore terminal: {e:#}");
        }
    }
}

impl<E: SimulationEngine, S: SurfaceSink> FrameTask for Session<E, S> {
    fn render_frame(&mut self) -> Result<()> {
        if self.paint() {
            self.sink.present(&self.surface)?;
        }
        Ok(())
    }
}

impl<E: SimulationEngine, S: SurfaceSink> HostEvents for Session<E, S> {
    fn on_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            info!("quit requested");
            self.cancel.cancel();
            return;
        }
        if let Some(cmd) = self.dispatcher.on_key(&mut self.engine, key) {
            debug!("forwarded {}", cmd.as_str());
        }
    }

    fn on_resize(&mut self, columns: u16, rows: u16) {
        debug!("terminal resized to {columns}x{rows}");
        self.sink.invalidate();
    }
}
