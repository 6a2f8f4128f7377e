//! Numerical and physical parameters for the simulation
//!
//! Design-fixed constants (window geometry, density, gravitational constant
//! in pixel units) plus the runtime `Parameters` derived from a scenario:
//! - frame rate and step size `h0 = 1/fps`,
//! - gravitational constant `G` already scaled to pixels,
//! - which elastic collision model to apply

use std::f64::consts::PI;
use std::time::Duration;

use serde::Deserialize;

pub const WINDOW_WIDTH: f64 = 1280.0;
pub const WINDOW_HEIGHT: f64 = 720.0;
pub const FRAMES_PER_SEC: u32 = 30;
pub const PIXELS_PER_METER: f64 = 1024.0;
pub const MIN_RADIUS: f64 = 8.0;
pub const MAX_RADIUS: f64 = 16.0;
pub const DENSITY: f64 = 768.0;
pub const LOG_INTERVAL_SECS: u64 = 1;
pub const DEFAULT_LOG_FILE: &str = "log.txt"; // LOGGING without a `log_file`
pub const BUFFER_ZONE: f64 = 128.0;
pub const STARTUP_FRAMES: u64 = 5;
pub const DEFAULT_SPEED: f64 = 196.0; // px/s, upper bound for spawned velocity components

pub const G_BASE: f64 = 6.6743e-11;
pub const G_EFFECTIVE: f64 = G_BASE * PIXELS_PER_METER * PIXELS_PER_METER * PIXELS_PER_METER;

/// Mass of a disc of radius `radius` at the fixed 2D density
pub fn disc_mass(radius: f64) -> f64 {
    PI * radius * radius * DENSITY
}

/// Radius of a disc of mass `mass` at the fixed 2D density
pub fn disc_radius(mass: f64) -> f64 {
    (mass / (PI * DENSITY)).sqrt()
}

/// How ELASTIC collisions exchange velocity
/// elastic_model: "componentwise" or elastic_model: "line_of_centres"
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElasticModel {
    #[default]
    #[serde(rename = "componentwise")] // 1D formula on each axis independently
    Componentwise,

    #[serde(rename = "line_of_centres")] // exchange only the velocity components along the contact normal
    LineOfCentres,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub fps: u32, // frames per second
    pub h0: f64, // step size, 1 / fps
    pub G: f64, // gravitational constant in pixel units
    pub width: f64, // world width (px)
    pub height: f64, // world height (px)
    pub buffer_zone: f64, // slack outside the window before reaping
    pub elastic_model: ElasticModel,
}

impl Parameters {
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            fps,
            h0: 1.0 / f64::from(fps),
            G: G_EFFECTIVE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            buffer_zone: BUFFER_ZONE,
            elastic_model: ElasticModel::default(),
        }
    }

    pub fn with_elastic_model(mut self, model: ElasticModel) -> Self {
        self.elastic_model = model;
        self
    }

    /// Wall-clock budget of one frame
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(self.h0)
    }

    /// Number of frames between two snapshot log entries
    pub fn log_interval_frames(&self) -> u64 {
        (LOG_INTERVAL_SECS * u64::from(self.fps)).max(1)
    }

    pub fn centre(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(FRAMES_PER_SEC)
    }
}
