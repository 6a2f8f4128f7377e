//! Position update and bounds policy
//!
//! Velocities have already been kicked by the pair pass, so the drift below
//! makes the step as a whole semi-implicit (kick, then drift).

use crate::simulation::modes::Modes;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;

/// Advance every live body by one step of `params.h0` and apply the bounds
/// policy: reflect off the window edges with `BOUNDING_BOX`, otherwise mark
/// bodies that drifted past the buffer zone as dead.
pub fn euler_integrator(bodies: &mut [Body], modes: Modes, params: &Parameters) {
    let dt = params.h0;
    let walled = modes.contains(Modes::BOUNDING_BOX);

    for b in bodies.iter_mut().filter(|b| b.alive) {
        // x_n+1 = x_n + dt v_n+1
        b.x += b.v * dt;

        if walled {
            reflect_off_walls(b, params);
        } else if is_out_of_bounds(b, params) {
            b.alive = false;
        }
    }
}

/// Negate the offending velocity component and clamp the centre back inside
/// [radius, extent - radius]
fn reflect_off_walls(b: &mut Body, params: &Parameters) {
    let r = b.radius;

    if b.x.x < r || b.x.x > params.width - r {
        b.v.x = -b.v.x;
        b.x.x = b.x.x.min(params.width - r).max(r);
    }

    if b.x.y < r || b.x.y > params.height - r {
        b.v.y = -b.v.y;
        b.x.y = b.x.y.min(params.height - r).max(r);
    }
}

pub fn is_out_of_bounds(b: &Body, params: &Parameters) -> bool {
    let r = b.radius;
    let zone = params.buffer_zone;

    b.x.x + r < -zone
        || b.x.y + r < -zone
        || b.x.x - r >= params.width + zone
        || b.x.y - r >= params.height + zone
}
