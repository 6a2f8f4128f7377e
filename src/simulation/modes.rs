//! Mode register: independent switches read by every step.
//!
//! The register lives inside the engine lock; a change made by a command is
//! seen by the next step, never by one already running.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// In a scenario file the flags are written as text,
    /// e.g. `modes: "ENABLE_GRAVITY | BOUNDING_BOX"`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modes: u32 {
        /// Bounce on contact; when clear, bodies merge
        const ELASTIC_COLLISION = 1;
        const ENABLE_GRAVITY = 1 << 1;
        /// Randomly spawned bodies start with a random velocity
        const SPAWN_MOVING = 1 << 2;
        /// Reflect off the window edges instead of reaping bodies that leave
        const BOUNDING_BOX = 1 << 3;
        const LOGGING = 1 << 4;
        const PAUSED = 1 << 5;
        /// Start the command shell on its own thread
        const ENABLE_INPUT = 1 << 6;
    }
}

/// Collision response selected by `ELASTIC_COLLISION`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    Elastic,
    Inelastic,
}

impl Modes {
    pub fn collision_policy(self) -> CollisionPolicy {
        if self.contains(Modes::ELASTIC_COLLISION) {
            CollisionPolicy::Elastic
        } else {
            CollisionPolicy::Inelastic
        }
    }
}
