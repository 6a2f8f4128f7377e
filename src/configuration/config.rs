//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – frame rate, initial modes, elastic model, log file
//! - [`SpawnConfig`]    – optional random spawner
//! - [`BodyConfig`]     – initial state for each hand-placed body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The default orbit scenario:
//!
//! ```yaml
//! engine:
//!   fps: 30
//!   modes: "ENABLE_GRAVITY | ELASTIC_COLLISION | ENABLE_INPUT"
//!   elastic_model: "componentwise"   # or "line_of_centres"
//!   log_file: "orbit_log.txt"        # written only with LOGGING, default "log.txt"
//!
//! spawn:
//!   count: 0
//!   seed: 42
//!
//! bodies:
//!   - x: [640.0, 360.0]
//!     m: 1.0e8
//!     radius: 40.0
//!     color: "y"
//!   - x: [890.0, 360.0]
//!     m: 1000.0
//!     radius: 20.0
//!     color: "c"
//!     orbit_of: 0        # circular orbit around body 0, overrides `v`
//! ```
//!
//! The engine then maps this configuration into its runtime `Scenario`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::simulation::modes::Modes;
use crate::simulation::params::{ElasticModel, FRAMES_PER_SEC};

fn default_fps() -> u32 {
    FRAMES_PER_SEC
}

/// Engine-level configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    #[serde(default = "default_fps")]
    pub fps: u32, // frames (and steps) per second
    #[serde(default = "Modes::empty")]
    pub modes: Modes, // initial mode register
    #[serde(default)]
    pub elastic_model: ElasticModel, // how ELASTIC collisions exchange velocity
    pub log_file: Option<PathBuf>, // snapshot log destination, used with LOGGING (default "log.txt")
}

/// Random spawner applied after the hand-placed bodies
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub count: usize, // number of bodies to scatter over the window
    #[serde(default)]
    pub seed: u64, // deterministic seed to make runs reproducible
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position [x, y] in pixels
    pub v: Option<Vec<f64>>, // velocity [vx, vy] in pixels per second, default at rest
    pub m: Option<f64>, // mass, default from radius and density
    pub radius: f64, // radius in pixels
    pub color: Option<char>, // palette letter, default white
    pub orbit_of: Option<usize>, // index of an earlier body to circle around
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub spawn: Option<SpawnConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
