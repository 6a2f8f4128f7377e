//! Compact, growable store of bodies.
//!
//! The store keeps its own logical capacity next to the `Vec` so growth and
//! shrink follow a fixed geometric schedule:
//! - grow by [`GROWTH_FACTOR`] when an append finds the store full,
//! - halve (never below [`DEFAULT_CAPACITY`]) when a compaction leaves the
//!   store less than 1/8 full,
//! - reset to [`DEFAULT_CAPACITY`] on `clear_all`.

use tracing::debug;

use crate::error::{Result, SimError};
use crate::simulation::states::{Body, BodyId};

pub const DEFAULT_CAPACITY: usize = 128;
pub const GROWTH_FACTOR: usize = 4;

#[derive(Debug, Clone)]
pub struct BodyStore {
    data: Vec<Body>,
    cap: usize,
}

impl BodyStore {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            cap: DEFAULT_CAPACITY,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn bodies(&self) -> &[Body] {
        &self.data
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.data
    }

    pub fn live(&self) -> impl Iterator<Item = &Body> {
        self.data.iter().filter(|b| b.alive)
    }

    /// Append at the tail. When full, capacity grows geometrically; if that
    /// allocation fails the store is left untouched and the body is returned
    /// to nobody.
    pub fn append(&mut self, body: Body) -> Result<()> {
        if self.data.len() >= self.cap {
            let requested = self.cap * GROWTH_FACTOR;
            self.data
                .try_reserve_exact(requested - self.data.len())
                .map_err(|source| SimError::Allocation { requested, source })?;
            debug!(from = self.cap, to = requested, "grew body store");
            self.cap = requested;
        }
        self.data.push(body);
        Ok(())
    }

    pub fn find(&self, id: BodyId) -> Option<&Body> {
        self.data.iter().find(|b| b.id == id)
    }

    pub fn find_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.data.iter_mut().find(|b| b.id == id)
    }

    /// Drop every dead body in place.
    ///
    /// `i` walks forward over live entries, `j` shrinks from the tail; a dead
    /// entry at `i` is replaced by the entry at `j - 1`. When they meet,
    /// everything before `i` is alive. Relative order is not preserved.
    pub fn compact(&mut self) {
        let mut i = 0;
        let mut j = self.data.len();
        while i < j {
            if self.data[i].alive {
                i += 1;
            } else {
                j -= 1;
                self.data.swap(i, j);
            }
        }
        self.data.truncate(i);

        if self.data.len() < self.cap / 8 {
            let halved = (self.cap / 2).max(DEFAULT_CAPACITY);
            if halved < self.cap {
                self.data.shrink_to(halved);
                debug!(from = self.cap, to = halved, "shrank body store");
                self.cap = halved;
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.data.clear();
        self.data.shrink_to(DEFAULT_CAPACITY);
        self.cap = DEFAULT_CAPACITY;
    }
}

impl Default for BodyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::color::Rgb24;
    use crate::simulation::states::{NVec2, PhysState};

    fn body(id: BodyId) -> Body {
        Body::new(id, Rgb24::WHITE, 8.0, PhysState::new(1.0, NVec2::new(id as f64, 0.0), NVec2::zeros()))
    }

    fn filled(n: u32) -> BodyStore {
        let mut store = BodyStore::new();
        for id in 1..=n {
            store.append(body(id)).unwrap();
        }
        store
    }

    #[test]
    fn append_grows_by_factor_when_full() {
        let store = filled(DEFAULT_CAPACITY as u32 + 1);
        assert_eq!(store.len(), DEFAULT_CAPACITY + 1);
        assert_eq!(store.capacity(), DEFAULT_CAPACITY * GROWTH_FACTOR);
    }

    #[test]
    fn compact_keeps_exactly_the_live_bodies() {
        let mut store = filled(10);
        for id in [1, 4, 5, 10] {
            store.find_mut(id).unwrap().alive = false;
        }
        store.compact();

        assert_eq!(store.len(), 6);
        assert!(store.bodies().iter().all(|b| b.alive));
        let mut ids: Vec<_> = store.bodies().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 3, 6, 7, 8, 9]);
    }

    #[test]
    fn compact_on_compact_store_is_noop() {
        let mut store = filled(20);
        store.compact();
        let before = store.bodies().to_vec();
        store.compact();
        assert_eq!(store.bodies(), &before[..]);
    }

    #[test]
    fn compact_halves_capacity_when_sparse() {
        let mut store = filled(DEFAULT_CAPACITY as u32 * 2);
        assert_eq!(store.capacity(), DEFAULT_CAPACITY * GROWTH_FACTOR);
        for b in store.bodies_mut().iter_mut().skip(10) {
            b.alive = false;
        }
        store.compact();
        assert_eq!(store.len(), 10);
        assert_eq!(store.capacity(), DEFAULT_CAPACITY * GROWTH_FACTOR / 2);

        // never below the default
        store.compact();
        store.compact();
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn clear_all_resets_capacity() {
        let mut store = filled(600);
        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn find_misses_unknown_id() {
        let store = filled(3);
        assert!(store.find(2).is_some());
        assert!(store.find(42).is_none());
    }
}
