//! Forwards mapped key events to the engine.

use crossterm::event::KeyEvent;
use log::trace;

use crate::core::SimulationEngine;
use crate::map::command_for_key;
use crate::types::MovementCommand;

/// Stateless key-to-engine forwarder.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDispatcher;

impl InputDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Issue exactly one engine call for a recognised key.
    ///
    /// Returns the command that was forwarded, or `None` if the key is not
    /// bound. Unbound keys are not an error.
    pub fn on_key<E>(&self, engine: &mut E, key: KeyEvent) -> Option<MovementCommand>
    where
        E: SimulationEngine + ?Sized,
    {
        let cmd = command_for_key(key)?;
        trace!("key {:?} -> {}", key.code, cmd.as_str());
        engine.apply(cmd);
        Some(cmd)
    }
}

/// Events a host delivers between frames.
pub trait HostEvents {
    fn on_key(&mut self, key: KeyEvent);

    /// The host's screen changed size.
    fn on_resize(&mut self, _columns: u16, _rows: u16) {}
}
