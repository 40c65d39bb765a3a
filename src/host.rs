//! Terminal frame pacing.
//!
//! The terminal has no vsync callback, so the pacer waits for a fixed frame
//! deadline with `event::poll`, handing any key or resize event that arrives
//! in the meantime to the task.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::core::FramePacer;
use crate::input::HostEvents;

pub struct TerminalPacer {
    interval: Duration,
    next_frame: Option<Instant>,
}

impl TerminalPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: None,
        }
    }
}

impl<T: HostEvents + ?Sized> FramePacer<T> for TerminalPacer {
    fn wait_for_frame(&mut self, task: &mut T) -> Result<()> {
        let now = Instant::now();
        let deadline = match self.next_frame {
            // Late frames re-anchor instead of bursting to catch up.
            Some(at) if at > now => at,
            _ => now + self.interval,
        };

        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => task.on_key(key),
                Event::Resize(columns, rows) => task.on_resize(columns, rows),
                _ => {}
            }
        }

        self.next_frame = Some(deadline + self.interval);
        Ok(())
    }
}
