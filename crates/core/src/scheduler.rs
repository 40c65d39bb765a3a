//! Frame-paced render loop.
//!
//! The host decides when the next frame fires ([`FramePacer`]); the
//! scheduler only renders, re-arms, and stops when its [`CancelHandle`] is
//! tripped. Exactly one pass is in flight at a time.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};

/// Scheduler lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameState {
    Idle = 0,
    Scheduled = 1,
    Rendering = 2,
}

impl FrameState {
    const fn from_u8(v: u8) -> Self {
        match v {
            1 => FrameState::Scheduled,
            2 => FrameState::Rendering,
            _ => FrameState::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameState::Idle => "idle",
            FrameState::Scheduled => "scheduled",
            FrameState::Rendering => "rendering",
        }
    }
}

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Read side of the scheduler's state, usable while `run` holds the
/// scheduler. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct FrameStateHandle {
    state: Arc<AtomicU8>,
}

impl FrameStateHandle {
    fn new() -> Self {
        Self {
            state: Arc::new(AtomicU8::new(FrameState::Idle as u8)),
        }
    }

    pub fn get(&self) -> FrameState {
        FrameState::from_u8(self.state.load(Ordering::Relaxed))
    }

    fn set(&self, state: FrameState) {
        self.state.store(state as u8, Ordering::Relaxed);
    }
}

/// One frame pass.
pub trait FrameTask {
    fn render_frame(&mut self) -> Result<()>;
}

/// Host frame-pacing primitive.
///
/// `wait_for_frame` returns when the next frame should render. Host events
/// arriving before then are delivered to `task`, never during a pass.
pub trait FramePacer<T: ?Sized> {
    fn wait_for_frame(&mut self, task: &mut T) -> Result<()>;
}

#[derive(Debug)]
pub struct FrameScheduler {
    state: FrameStateHandle,
    cancel: CancelHandle,
    frames: u64,
}

impl FrameScheduler {
    pub fn new(cancel: CancelHandle) -> Self {
        Self {
            state: FrameStateHandle::new(),
            cancel,
            frames: 0,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state.get()
    }

    /// A handle that tasks and pacers can hold to see `Rendering` and
    /// `Scheduled` during a run.
    pub fn state_handle(&self) -> FrameStateHandle {
        self.state.clone()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Render, re-arm, repeat until cancelled.
    ///
    /// Returns `Ok(())` on cancellation, with the scheduler back in `Idle`.
    /// Errors from the task or the pacer stop the loop and are returned.
    pub fn run<T, P>(&mut self, task: &mut T, pacer: &mut P) -> Result<()>
    where
        T: FrameTask + ?Sized,
        P: FramePacer<T> + ?Sized,
    {
        info!("frame scheduler started");

        let result = self.drive(task, pacer);
        self.state.set(FrameState::Idle);

        info!("frame scheduler stopped after {} frames", self.frames);
        result
    }

    fn drive<T, P>(&mut self, task: &mut T, pacer: &mut P) -> Result<()>
    where
        T: FrameTask + ?Sized,
        P: FramePacer<T> + ?Sized,
    {
        while !self.cancel.is_cancelled() {
            self.state.set(FrameState::Rendering);
            task.render_frame()?;
            self.frames += 1;

            self.state.set(FrameState::Scheduled);
            pacer.wait_for_frame(task)?;
        }
        debug!("cancellation observed in {} state", self.state.get().as_str());
        Ok(())
    }
}
