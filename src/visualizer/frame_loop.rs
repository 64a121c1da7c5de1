//! Cancellable per-frame scheduling.
//!
//! The host calls [`FrameLoop::run_frame`] once per display refresh. A frame
//! body only runs while a frame is armed; after it runs the loop re-arms
//! itself unless the cancellation token fired in the meantime. Once stopped,
//! no further frame ever runs.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct FrameLoop {
    armed: bool,
    cancel: CancellationToken,
    frames_run: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the first frame. Has no effect after [`stop`](Self::stop).
    pub fn start(&mut self) {
        if !self.cancel.is_cancelled() {
            self.armed = true;
        }
    }

    /// Runs `frame` if a frame is armed. Returns whether it ran.
    pub fn run_frame<F: FnOnce()>(&mut self, frame: F) -> bool {
        if self.cancel.is_cancelled() {
            self.armed = false;
            return false;
        }
        if !self.armed {
            return false;
        }

        self.armed = false;
        frame();
        self.frames_run += 1;

        if !self.cancel.is_cancelled() {
            self.armed = true;
        }
        true
    }

    /// Cancels the loop. Safe to call more than once.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.armed = false;
    }

    pub fn is_running(&self) -> bool {
        self.armed && !self.cancel.is_cancelled()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// A handle that stops this loop when cancelled from elsewhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
