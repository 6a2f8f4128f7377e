//! A renderer that keeps draw calls instead of pixels.
//!
//! Used for headless runs, for tests, and as the frame buffer the bevy viewer
//! mirrors into meshes.

use std::collections::VecDeque;

use crate::simulation::color::Rgb24;
use crate::simulation::states::{Body, BodyId, NVec2};
use crate::visualization::{InputEvent, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub id: BodyId,
    pub center: NVec2,
    pub radius: f64,
    pub color: Rgb24,
}

impl From<&Body> for DrawCall {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            center: body.x,
            radius: body.radius,
            color: body.color,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    max_frames: Option<u64>, // report Quit once this many frames were presented
    presented: u64,
    current: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    pending: VecDeque<InputEvent>,
}

impl RecordingRenderer {
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            max_frames,
            ..Self::default()
        }
    }

    /// Queue an event for the next `poll_events`
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Draw calls of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Renderer for RecordingRenderer {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = self.pending.drain(..).collect();
        if self.max_frames.is_some_and(|max| self.presented >= max) {
            events.push(InputEvent::Quit);
        }
        events
    }

    fn clear(&mut self) {
        self.current.clear();
    }

    fn draw_body(&mut self, body: &Body) {
        self.current.push(DrawCall::from(body));
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.current, &mut self.last_frame);
        self.current.clear();
        self.presented += 1;
    }
}
