//! Fused gravity + collision pass over all body pairs
//!
//! One O(N²) sweep over unordered pairs (i, j), i < j. Each pair is either
//! resolved as a collision (discs overlap) or, with gravity enabled, receives
//! a symplectic velocity kick. Positions are not touched here beyond the
//! collision response; the integrator drifts them afterwards.

use crate::simulation::collision::resolve_collision;
use crate::simulation::modes::{CollisionPolicy, Modes};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

pub fn interact_pairs(bodies: &mut [Body], modes: Modes, params: &Parameters) {
    let n = bodies.len();
    if n < 2 { // nothing to pair up
        return;
    }

    let policy = modes.collision_policy();
    let gravity = modes.contains(Modes::ENABLE_GRAVITY);

    for i in 0..n {
        for j in (i + 1)..n {
            // bi is the left side of the pair, bj the right side
            let (head, tail) = bodies.split_at_mut(j);
            let bi = &mut head[i];
            let bj = &mut tail[0];

            // a merge earlier in this sweep may have killed either endpoint
            if !bi.alive || !bj.alive {
                continue;
            }

            // r points from i to j
            let mut r = bj.x - bi.x;
            let mut dist = r.norm();

            if dist < bi.radius + bj.radius {
                resolve_collision(bi, bj, policy, params.elastic_model);
                if policy == CollisionPolicy::Inelastic {
                    // bj was merged into bi
                    continue;
                }
                // separated: recompute the geometry for the kick
                r = bj.x - bi.x;
                dist = r.norm();
            }

            if gravity && dist > 0.0 {
                gravity_kick(bi, bj, r, dist, params);
            }
        }
    }
}

/// Newtonian attraction between one pair, applied as an impulse over h0.
/// i is pulled along +r, j along -r.
fn gravity_kick(bi: &mut Body, bj: &mut Body, r: NVec2, dist: f64, params: &Parameters) {
    let magnitude = params.G * bi.m * bj.m / (dist * dist);
    let force = r * (magnitude / dist);

    bi.v += force * (params.h0 / bi.m);
    bj.v -= force * (params.h0 / bj.m);
}
