pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod shell;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, BodyId, NVec2, PhysState};
pub use simulation::color::Rgb24;
pub use simulation::modes::Modes;
pub use simulation::params::{ElasticModel, Parameters};
pub use simulation::engine::{Engine, World};
pub use simulation::driver::{FrameOutcome, FrameStats, TickDriver};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, ScenarioConfig, SpawnConfig};

pub use visualization::{InputEvent, Renderer};
pub use visualization::recording::RecordingRenderer;
#[cfg(feature = "viewer")]
pub use visualization::gravsim_vis2d::run_2d;

pub use shell::Shell;

pub use benchmark::benchmark::bench_step;
