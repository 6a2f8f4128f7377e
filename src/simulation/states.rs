//! Core state types for the 2D circle simulation.
//!
//! - `NVec2`     : nalgebra vector in pixel units
//! - `PhysState` : the (mass, position, velocity) triple handed to the engine
//! - `Body`      : one circular rigid body as stored by the engine

use nalgebra::Vector2;

use crate::simulation::color::Rgb24;

pub type NVec2 = Vector2<f64>;

/// Unit vector along `v`, or the zero vector when `v` has no length
pub fn normalised(v: &NVec2) -> NVec2 {
    v.try_normalize(0.0).unwrap_or_else(NVec2::zeros)
}

/// Stable identifier of a body, assigned once by the engine and never reused
pub type BodyId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysState {
    pub m: f64, // mass
    pub x: NVec2, // position (px)
    pub v: NVec2, // velocity (px/s)
}

impl PhysState {
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Self {
        Self { m, x, v }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub alive: bool, // false -> reaped by the next compaction
    pub color: Rgb24,
    pub radius: f64, // px
    pub m: f64, // mass
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl Body {
    pub fn new(id: BodyId, color: Rgb24, radius: f64, phys: PhysState) -> Self {
        Self {
            id,
            alive: true,
            color,
            radius,
            m: phys.m,
            x: phys.x,
            v: phys.v,
        }
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    /// Whether `point` lies on or inside the disc
    pub fn contains(&self, point: &NVec2) -> bool {
        (point - self.x).norm_squared() <= self.radius * self.radius
    }
}
