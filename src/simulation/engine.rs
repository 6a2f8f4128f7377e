//! The simulation engine: body store and mode register behind one lock
//!
//! `World` is the state the tick thread and the shell thread share. `Engine`
//! owns it inside a single `Mutex` (the engine lock) together with the
//! immutable `Parameters`. Every read or write of the store or the modes
//! goes through that lock, and one step runs entirely under it.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::error::{Result, SimError};
use crate::simulation::color::Rgb24;
use crate::simulation::forces::interact_pairs;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::logbook::SnapshotLog;
use crate::simulation::modes::Modes;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, NVec2, PhysState};
use crate::simulation::store::BodyStore;
use crate::visualization::Renderer;

#[derive(Debug)]
pub struct World {
    store: BodyStore,
    modes: Modes,
    next_id: BodyId,
    log: Option<SnapshotLog>,
}

impl World {
    pub fn new(modes: Modes, log: Option<SnapshotLog>) -> Self {
        Self {
            store: BodyStore::new(),
            modes,
            next_id: 1,
            log,
        }
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn bodies(&self) -> &[Body] {
        self.store.bodies()
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    pub fn set_mode(&mut self, mode: Modes, on: bool) {
        self.modes.set(mode, on);
    }

    /// Insert a new body at the tail of the store and hand out its id.
    /// Ids are only consumed by bodies that were actually stored.
    pub fn spawn(&mut self, color: Rgb24, radius: f64, phys: PhysState) -> Result<BodyId> {
        validate(radius, &phys)?;

        let id = self.next_id;
        self.store.append(Body::new(id, color, radius, phys))?;
        self.next_id += 1;
        Ok(id)
    }

    /// Mark body `id` for removal at the next compaction
    pub fn kill(&mut self, id: BodyId) -> bool {
        match self.store.find_mut(id) {
            Some(body) => {
                body.alive = false;
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.store.clear_all();
    }

    /// First live body, in store order, whose disc contains `point`
    pub fn pick(&self, point: &NVec2) -> Option<BodyId> {
        self.store.live().find(|b| b.contains(point)).map(|b| b.id)
    }

    /// Compact, interact all pairs, then integrate and apply the bounds policy
    pub fn step(&mut self, params: &Parameters) {
        self.store.compact();
        interact_pairs(self.store.bodies_mut(), self.modes, params);
        euler_integrator(self.store.bodies_mut(), self.modes, params);
    }

    /// Append one snapshot entry if logging is on and a sink is attached
    pub fn log_snapshot(&mut self) -> io::Result<bool> {
        if !self.modes.contains(Modes::LOGGING) {
            return Ok(false);
        }
        match self.log.as_mut() {
            Some(log) => {
                log.record(self.store.bodies())?;
                debug!(entry = log.entries(), bodies = self.store.len(), "logged snapshot");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn validate(radius: f64, phys: &PhysState) -> Result<()> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(SimError::invalid_body(format!("radius must be positive, got {radius}")));
    }
    if !(phys.m.is_finite() && phys.m > 0.0) {
        return Err(SimError::invalid_body(format!("mass must be positive, got {}", phys.m)));
    }
    if !(phys.x.iter().all(|c| c.is_finite()) && phys.v.iter().all(|c| c.is_finite())) {
        return Err(SimError::invalid_body("position and velocity must be finite"));
    }
    Ok(())
}

#[derive(Debug)]
pub struct Engine {
    world: Mutex<World>,
    params: Parameters,
}

impl Engine {
    pub fn new(params: Parameters, modes: Modes, log: Option<SnapshotLog>) -> Self {
        info!(fps = params.fps, modes = ?modes, "engine initialised");
        Self {
            world: Mutex::new(World::new(modes, log)),
            params,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Take the engine lock. A panic on the other side must not wedge the
    /// simulation, so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, World> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_world<T>(&self, f: impl FnOnce(&mut World) -> T) -> T {
        f(&mut *self.lock())
    }

    pub fn create_body(&self, color: Rgb24, radius: f64, phys: PhysState) -> Result<BodyId> {
        let id = self.lock().spawn(color, radius, phys)?;
        debug!(id, radius, mass = phys.m, "created body");
        Ok(id)
    }

    /// One full step under the lock, then every live body goes to the renderer
    pub fn run_one_step<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let mut world = self.lock();
        world.step(&self.params);
        for body in world.store.live() {
            renderer.draw_body(body);
        }
    }

    pub fn modes(&self) -> Modes {
        self.lock().modes()
    }

    pub fn set_mode(&self, mode: Modes, on: bool) {
        self.lock().set_mode(mode, on);
    }

    pub fn is_paused(&self) -> bool {
        self.modes().contains(Modes::PAUSED)
    }

    pub fn pick(&self, point: &NVec2) -> Option<BodyId> {
        self.lock().pick(point)
    }

    /// Pick and report the hit on stdout, written while the lock is held so
    /// it stays ordered with shell output
    pub fn report_pick(&self, point: &NVec2) -> Option<BodyId> {
        let world = self.lock();
        let hit = world.pick(point);
        if let Some(id) = hit {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "ID: {id}");
            let _ = stdout.flush();
            info!(id, x = point.x, y = point.y, "picked body");
        }
        hit
    }

    pub fn log_snapshot(&self) -> io::Result<bool> {
        self.lock().log_snapshot()
    }

    /// Copy of the whole store, live and dead entries alike
    pub fn snapshot(&self) -> Vec<Body> {
        self.lock().bodies().to_vec()
    }

    pub fn live_count(&self) -> usize {
        self.lock().store().live().count()
    }
}
