//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`:
//! - numerical parameters (`Parameters`)
//! - the initial mode register (`Modes`)
//! - hand-placed bodies with every default resolved (`BodySeed`)
//! - optional random spawner settings
//!
//! `Scenario::build_engine` then turns it into a populated `Engine`.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig, SpawnConfig};
use crate::error::{Result, SimError};
use crate::simulation::color::Rgb24;
use crate::simulation::engine::Engine;
use crate::simulation::logbook::SnapshotLog;
use crate::simulation::modes::Modes;
use crate::simulation::params::{disc_mass, Parameters, DEFAULT_LOG_FILE};
use crate::simulation::spawner::spawn_random;
use crate::simulation::states::{NVec2, PhysState};

/// A body ready to be handed to `Engine::create_body`
#[derive(Debug, Clone, PartialEq)]
pub struct BodySeed {
    pub color: Rgb24,
    pub radius: f64,
    pub phys: PhysState,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub modes: Modes,
    pub bodies: Vec<BodySeed>,
    pub spawn: Option<SpawnConfig>,
    pub log_file: Option<PathBuf>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let e_cfg = cfg.engine;
        let parameters = Parameters::new(e_cfg.fps).with_elastic_model(e_cfg.elastic_model);

        // Bodies: map `BodyConfig` -> `BodySeed`, resolving orbits against
        // the bodies already placed
        let mut bodies: Vec<BodySeed> = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let seed = seed_from_config(i, bc, &bodies, &parameters)?;
            bodies.push(seed);
        }

        let log_file = match e_cfg.log_file {
            Some(path) => Some(path),
            None if e_cfg.modes.contains(Modes::LOGGING) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
            None => None,
        };

        Ok(Self {
            parameters,
            modes: e_cfg.modes,
            bodies,
            spawn: cfg.spawn,
            log_file,
        })
    }

    /// Create the engine and populate it with the placed and spawned bodies
    pub fn build_engine(&self) -> Result<Engine> {
        let log = match (&self.log_file, self.modes.contains(Modes::LOGGING)) {
            (Some(path), true) => {
                info!(path = %path.display(), "writing snapshot log");
                Some(SnapshotLog::create(path)?)
            }
            _ => None,
        };

        let engine = Engine::new(self.parameters.clone(), self.modes, log);
        for seed in &self.bodies {
            engine.create_body(seed.color, seed.radius, seed.phys)?;
        }

        if let Some(spawn) = &self.spawn {
            let mut rng = StdRng::seed_from_u64(spawn.seed);
            let stored = engine.with_world(|world| spawn_random(world, spawn.count, &self.parameters, &mut rng));
            info!(requested = spawn.count, stored, "spawned random bodies");
        }

        Ok(engine)
    }
}

fn vec2(field: &str, index: usize, values: &[f64]) -> Result<NVec2> {
    match values {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::config(format!(
            "body {index}: `{field}` needs exactly 2 components, got {}",
            values.len()
        ))),
    }
}

fn seed_from_config(index: usize, bc: &BodyConfig, placed: &[BodySeed], params: &Parameters) -> Result<BodySeed> {
    let x = vec2("x", index, &bc.x)?;
    let m = bc.m.unwrap_or_else(|| disc_mass(bc.radius));

    let v = match bc.orbit_of {
        Some(k) => {
            let centre = placed.get(k).ok_or_else(|| {
                SimError::config(format!("body {index}: orbit_of {k} must name an earlier body"))
            })?;
            circular_orbit_velocity(&centre.phys, &x, params.G)
                .ok_or_else(|| SimError::config(format!("body {index}: cannot orbit a body at the same position")))?
        }
        None => match &bc.v {
            Some(v) => vec2("v", index, v)?,
            None => NVec2::zeros(),
        },
    };

    let color = match bc.color {
        Some(letter) => Rgb24::from_letter(letter)
            .ok_or_else(|| SimError::config(format!("body {index}: unknown colour '{letter}'")))?,
        None => Rgb24::WHITE,
    };

    Ok(BodySeed {
        color,
        radius: bc.radius,
        phys: PhysState::new(m, x, v),
    })
}

/// Velocity for a circular orbit at `x` around `centre`: magnitude
/// sqrt(G·M/d), perpendicular to the radius (clockwise on screen), on top of
/// the centre's own velocity
#[allow(non_snake_case)]
pub fn circular_orbit_velocity(centre: &PhysState, x: &NVec2, G: f64) -> Option<NVec2> {
    let offset = x - centre.x;
    let d = offset.norm();
    if d == 0.0 {
        return None;
    }
    let speed = (G * centre.m / d).sqrt();
    let tangent = NVec2::new(offset.y, -offset.x) / d;
    Some(centre.v + tangent * speed)
}
