//! Random body spawner
//!
//! Scatters `count` discs over the window: radius in [MIN_RADIUS, MAX_RADIUS),
//! mass from the fixed density, a vivid colour, and, with `SPAWN_MOVING`, a
//! random velocity of up to `DEFAULT_SPEED` per axis.

use rand::Rng;
use tracing::warn;

use crate::simulation::color::Rgb24;
use crate::simulation::engine::World;
use crate::simulation::modes::Modes;
use crate::simulation::params::{disc_mass, Parameters, DEFAULT_SPEED, MAX_RADIUS, MIN_RADIUS};
use crate::simulation::states::{NVec2, PhysState};

/// Spawn into `world`, returning how many bodies were stored
pub fn spawn_random<R: Rng + ?Sized>(world: &mut World, count: usize, params: &Parameters, rng: &mut R) -> usize {
    let moving = world.modes().contains(Modes::SPAWN_MOVING);
    let mut stored = 0;

    for _ in 0..count {
        let radius = rng.gen_range(MIN_RADIUS..MAX_RADIUS);
        let x = NVec2::new(rng.gen_range(0.0..params.width), rng.gen_range(0.0..params.height));
        let v = if moving {
            NVec2::new(random_speed(rng), random_speed(rng))
        } else {
            NVec2::zeros()
        };

        match world.spawn(Rgb24::vivid(rng), radius, PhysState::new(disc_mass(radius), x, v)) {
            Ok(_) => stored += 1,
            Err(err) => warn!(error = %err, "dropped spawned body"),
        }
    }

    stored
}

fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    rng.gen::<f64>() * sign * DEFAULT_SPEED
}
