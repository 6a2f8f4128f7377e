//! Collision response between two overlapping discs.
//!
//! ## Policies
//!
//! - **Elastic**: both bodies survive. Velocities are exchanged with the 1D
//!   elastic formula
//!
//!   ```text
//!   v1' = ((m1 - m2)·u1 + 2·m2·u2) / (m1 + m2)
//!   v2' = ((m2 - m1)·u2 + 2·m1·u1) / (m1 + m2)
//!   ```
//!
//!   applied either to each axis independently ([`ElasticModel::Componentwise`])
//!   or only to the components along the line of centres
//!   ([`ElasticModel::LineOfCentres`]). Afterwards `c1` is pushed out along
//!   `x1 - x2` until the discs just touch.
//!
//! - **Inelastic**: `c2` is merged into `c1`. Momentum and centre of mass are
//!   conserved, masses add, and the radius is recomputed from the fixed 2D
//!   density. `c2` is marked dead and reaped by the next compaction.
//!
//! Resolution is total: any pair of live overlapping bodies is accepted.

use crate::simulation::modes::CollisionPolicy;
use crate::simulation::params::{disc_radius, ElasticModel};
use crate::simulation::states::{normalised, Body, NVec2};

pub fn resolve_collision(c1: &mut Body, c2: &mut Body, policy: CollisionPolicy, model: ElasticModel) {
    match policy {
        CollisionPolicy::Elastic => {
            match model {
                ElasticModel::Componentwise => bounce_componentwise(c1, c2),
                ElasticModel::LineOfCentres => bounce_along_normal(c1, c2),
            }
            separate(c1, c2);
        }
        CollisionPolicy::Inelastic => merge(c1, c2),
    }
}

/// 1D elastic exchange for a pair of scalars (or vectors, componentwise)
fn elastic_exchange<T>(m1: f64, m2: f64, u1: T, u2: T) -> (T, T)
where
    T: Copy + std::ops::Mul<f64, Output = T> + std::ops::Add<Output = T>,
{
    let total = m1 + m2;
    let v1 = (u1 * (m1 - m2) + u2 * (2.0 * m2)) * (1.0 / total);
    let v2 = (u2 * (m2 - m1) + u1 * (2.0 * m1)) * (1.0 / total);
    (v1, v2)
}

fn bounce_componentwise(c1: &mut Body, c2: &mut Body) {
    let (v1, v2) = elastic_exchange(c1.m, c2.m, c1.v, c2.v);
    c1.v = v1;
    c2.v = v2;
}

fn bounce_along_normal(c1: &mut Body, c2: &mut Body) {
    let n = normalised(&(c2.x - c1.x));
    if n == NVec2::zeros() {
        // coincident centres: no contact normal to speak of
        bounce_componentwise(c1, c2);
        return;
    }

    let u1n = c1.v.dot(&n);
    let u2n = c2.v.dot(&n);
    let (v1n, v2n) = elastic_exchange(c1.m, c2.m, u1n, u2n);

    c1.v += n * (v1n - u1n);
    c2.v += n * (v2n - u2n);
}

/// Push c1 outward along x1 - x2 so the discs are just touching
fn separate(c1: &mut Body, c2: &Body) {
    let displacement = c1.x - c2.x;
    let overlap = c1.radius + c2.radius - displacement.norm();
    c1.x += normalised(&displacement) * overlap;
}

fn merge(c1: &mut Body, c2: &mut Body) {
    let (m1, m2) = (c1.m, c2.m);
    let total = m1 + m2;

    c1.color = c1.color.mix(c2.color);
    // conservation of linear momentum
    c1.v = (c1.v * m1 + c2.v * m2) * (1.0 / total);
    // conservation of centre of mass
    c1.x = (c1.x * m1 + c2.x * m2) * (1.0 / total);

    c1.m = total;
    c1.radius = disc_radius(total);

    c2.alive = false;
}
