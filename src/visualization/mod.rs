//! Rendering side of the simulator.
//!
//! The engine only ever talks to a [`Renderer`]: it is drained for input at
//! the start of a frame, cleared, handed every live body, then presented.
//! The renderer is touched only from the tick thread.

pub mod recording;
#[cfg(feature = "viewer")]
pub mod gravsim_vis2d;

use crate::simulation::states::{Body, NVec2};

/// Input collected by the window between two frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    /// Left click at window coordinates (origin top-left, y down)
    Pick(NVec2),
}

pub trait Renderer {
    /// Drain everything that happened since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;
    fn clear(&mut self);
    fn draw_body(&mut self, body: &Body);
    fn present(&mut self);
}
