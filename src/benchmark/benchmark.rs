use std::time::Instant;

use crate::simulation::color::Rgb24;
use crate::simulation::forces::interact_pairs;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::modes::Modes;
use crate::simulation::params::{disc_mass, Parameters, FRAMES_PER_SEC};
use crate::simulation::states::{Body, NVec2, PhysState};

/// Helper to build `n` small bodies spread over the window without overlaps
/// dominating the pass
fn make_bodies(n: usize, params: &Parameters) -> Vec<Body> {
    let (cx, cy) = params.centre();
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new(
                cx + (i_f * 0.37).sin() * cx * 0.9,
                cy + (i_f * 0.13).cos() * cy * 0.9,
            );
            let radius = 1.0;
            Body::new(i as u32 + 1, Rgb24::WHITE, radius, PhysState::new(disc_mass(radius), x, NVec2::zeros()))
        })
        .collect()
}

/// Time one pair pass and one full step (pairs + integrator) for growing N
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 5;
    let params = Parameters::new(FRAMES_PER_SEC);
    let modes = Modes::ENABLE_GRAVITY | Modes::ELASTIC_COLLISION | Modes::BOUNDING_BOX;

    println!("N,pairs_ms,step_ms");

    for n in ns {
        let template = make_bodies(n, &params);

        // Warm up
        let mut bodies = template.clone();
        interact_pairs(&mut bodies, modes, &params);

        let mut bodies = template.clone();
        let t0 = Instant::now();
        for _ in 0..steps {
            interact_pairs(&mut bodies, modes, &params);
        }
        let pairs_ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut bodies = template.clone();
        let t1 = Instant::now();
        for _ in 0..steps {
            interact_pairs(&mut bodies, modes, &params);
            euler_integrator(&mut bodies, modes, &params);
        }
        let step_ms = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, pairs_ms, step_ms);
    }
}
