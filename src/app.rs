//! Tick orchestration: growth scheduling plus layout, one frame at a time.
//!
//! An external driver calls [`Simulation::tick`] once per rendering
//! frame. Within a tick the phases run strictly in order with no
//! suspension: at most one frontier admission, then one layout step.
//! The renderer reads positions only after `tick` returns, so it never
//! observes partial-tick state.

use std::time::Instant;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::collatz;
use crate::config::{MAX_NODES, P_EXPAND};
use crate::graph::{AdmitError, Frontier, GraphStore, Link, Node};
use crate::physics::{self, SpatialGrid};

/// Owns all mutable simulation state and drives it forward tick by tick.
pub struct Simulation {
    store: GraphStore,
    frontier: Frontier,
    grid: SpatialGrid,
    rng: ThreadRng,
    /// Set once admission hits the capacity bound; growth never resumes.
    saturated: bool,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_capacity(MAX_NODES)
    }

    /// Same engine with a smaller node cap; the frontier starts with the
    /// root seed `1`, which has no admitting parent.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(1, None);
        Self {
            store: GraphStore::new(capacity),
            frontier,
            grid: SpatialGrid::new(),
            rng: rand::thread_rng(),
            saturated: false,
        }
    }

    /// Advance one frame: maybe admit one node, then run the layout.
    /// Returns the value admitted this tick, if any; the renderer uses
    /// this to create its marker for the node exactly once.
    pub fn tick(&mut self) -> Option<u64> {
        let admitted = if !self.saturated && self.rng.gen::<f64>() < P_EXPAND {
            self.expand()
        } else {
            None
        };
        physics::step(&mut self.store, &mut self.grid);
        admitted
    }

    /// One draw-and-admit cycle. Stale duplicates are discarded here;
    /// a successful admission pushes the value's not-yet-admitted
    /// predecessors back onto the frontier.
    fn expand(&mut self) -> Option<u64> {
        let entry = self.frontier.draw_biased(&mut self.rng)?;
        if self.store.contains(entry.value) {
            log::debug!("discarding stale frontier entry {}", entry.value);
            return None;
        }

        let position = self.store.spawn_position(entry.parent, &mut self.rng);
        match self.store.admit(entry.value, entry.parent, position) {
            Ok(()) => {
                for p in collatz::predecessors(entry.value) {
                    if !self.store.contains(p) {
                        self.frontier.push(p, Some(entry.value));
                    }
                }
                log::debug!(
                    "admitted {} ({} nodes, {} pending)",
                    entry.value,
                    self.store.len(),
                    self.frontier.len()
                );
                Some(entry.value)
            }
            Err(AdmitError::AlreadyPresent) => None,
            Err(AdmitError::CapacityExceeded) => {
                log::info!("capacity reached at {} nodes, growth halted", self.store.len());
                self.saturated = true;
                None
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    pub fn pending_count(&self) -> usize {
        self.frontier.len()
    }

    pub fn saturated(&self) -> bool {
        self.saturated
    }

    /// Read view for the renderer: every live node with its position.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.store.nodes()
    }

    pub fn links(&self) -> &[Link] {
        self.store.links()
    }

    /// Record the renderer's marker handle for an admitted node.
    pub fn set_marker(&mut self, value: u64, marker: u32) {
        if let Some(node) = self.store.node_mut(value) {
            node.marker = Some(marker);
        }
    }

    /// Collatz trajectory for the selection panel; pure, needs no node.
    pub fn path_to_one(&self, value: u64) -> Vec<u64> {
        collatz::path_to_one(value)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Ticks-per-second counter for the driver's log line.
pub struct TickCounter {
    last_update: Instant,
    tick_count: u32,
}

impl TickCounter {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            tick_count: 0,
        }
    }

    /// Count one tick; returns Some(rate) once per second.
    pub fn tick(&mut self) -> Option<f64> {
        self.tick_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let rate = self.tick_count as f64 / elapsed.as_secs_f64();
            self.tick_count = 0;
            self.last_update = Instant::now();
            Some(rate)
        } else {
            None
        }
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_saturated(sim: &mut Simulation, max_ticks: u64) {
        for _ in 0..max_ticks {
            sim.tick();
            if sim.saturated() {
                return;
            }
        }
        panic!("simulation never saturated within {} ticks", max_ticks);
    }

    #[test]
    fn test_grows_to_capacity_and_halts() {
        let mut sim = Simulation::with_capacity(5);
        run_until_saturated(&mut sim, 100_000);

        assert_eq!(sim.node_count(), 5);
        assert!(sim.saturated());

        // Every admitted value must reach 1 by iterating the forward
        // step, i.e. be genuinely part of the Collatz tree.
        for node in sim.nodes() {
            let path = sim.path_to_one(node.value);
            assert_eq!(*path.last().unwrap(), 1);
        }

        // Growth stays halted: ticking on never adds a node.
        for _ in 0..200 {
            assert_eq!(sim.tick(), None);
        }
        assert_eq!(sim.node_count(), 5);
    }

    #[test]
    fn test_link_set_is_a_tree_rooted_at_one() {
        let mut sim = Simulation::with_capacity(30);
        run_until_saturated(&mut sim, 100_000);

        assert_eq!(sim.links().len(), sim.node_count() - 1);

        // Walk parent links upward from every node; each walk must end
        // at the root without revisiting a value.
        for node in sim.nodes() {
            let mut current = node.value;
            let mut hops = 0;
            while current != 1 {
                let link = sim
                    .links()
                    .iter()
                    .find(|l| l.child == current)
                    .unwrap_or_else(|| panic!("{} has no parent link", current));
                current = link.parent;
                hops += 1;
                assert!(hops <= sim.node_count(), "cycle through {}", node.value);
            }
        }
    }

    #[test]
    fn test_at_most_one_admission_per_tick() {
        let mut sim = Simulation::with_capacity(50);
        let mut before = sim.node_count();
        for _ in 0..5000 {
            sim.tick();
            let after = sim.node_count();
            assert!(after - before <= 1, "tick admitted more than one node");
            before = after;
        }
    }

    #[test]
    fn test_layout_keeps_running_after_saturation() {
        let mut sim = Simulation::with_capacity(5);
        run_until_saturated(&mut sim, 100_000);

        for _ in 0..50 {
            sim.tick();
        }
        for node in sim.nodes() {
            assert!(node.x.is_finite() && node.y.is_finite());
        }
    }

    #[test]
    fn test_marker_round_trip() {
        let mut sim = Simulation::with_capacity(5);
        let root = loop {
            if let Some(value) = sim.tick() {
                break value;
            }
        };
        assert_eq!(root, 1, "first admission must be the root seed");

        sim.set_marker(root, 17);
        let node = sim.nodes().find(|n| n.value == root).unwrap();
        assert_eq!(node.marker, Some(17));
    }

    #[test]
    fn test_path_query_needs_no_node() {
        let sim = Simulation::with_capacity(5);
        let path = sim.path_to_one(27);
        assert_eq!(path[0], 27);
        assert_eq!(*path.last().unwrap(), 1);
    }
}
