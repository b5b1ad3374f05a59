//! Renderers that observe the grid world after each step.
//!
//! Provides:
//! - `Renderer` trait injected into `GridWorld`
//! - `NullRenderer` for headless training
//! - `AsciiRenderer` for terminal output with frame pacing
//! - `CloseHandle` to request shutdown from outside the step loop

mod ascii;
mod pacer;

pub use ascii::{draw_frame, AsciiRenderer};
pub use pacer::Pacer;

use crate::grid::Snapshot;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Presentation collaborator for an environment.
///
/// The environment polls `poll_close` once per step and calls `present`
/// after every non-terminal step. Neither call affects rewards or state.
pub trait Renderer: Send {
    /// Drain any pending close request
    fn poll_close(&mut self) -> bool {
        false
    }

    /// Draw the latest state; may block for pacing
    fn present(&mut self, snapshot: &Snapshot);

    /// Release presentation resources
    fn close(&mut self) {}
}

/// A renderer that draws nothing and never asks to close.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

/// Shared flag used to ask a renderer to close.
#[derive(Debug, Default, Clone)]
pub struct CloseHandle {
    requested: Arc<AtomicBool>,
}

impl CloseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the environment loop to stop
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Check without clearing
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Check and clear the request
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}
