//! Force-directed layout: one integration step per tick.
//!
//! Repulsion uses the spatial hash so per-tick cost stays near-linear in
//! node count. All force passes read positions snapshotted before the
//! tick (repulsion through the grid's rebuild snapshot, springs before
//! touching either endpoint), so accumulation order cannot introduce
//! asymmetry; positions only move in the final integration pass.

use crate::config::{ATTRACTION, FRICTION, REPULSION};
use crate::graph::GraphStore;
use crate::physics::SpatialGrid;

/// Advance every node's velocity and position by one tick.
pub fn step(store: &mut GraphStore, grid: &mut SpatialGrid) {
    grid.rebuild(store.nodes());

    // Inverse-square repulsion from everything in the 3x3 cell block.
    // d2 is floored at 1 so coincident nodes get a strong finite kick
    // instead of a division blow-up.
    for n in store.nodes_mut() {
        let (x, y) = (n.x, n.y);
        for m in grid.neighbors_of(n.value, x, y) {
            let dx = x - m.x;
            let dy = y - m.y;
            let d2 = (dx * dx + dy * dy).max(1.0);
            let f = REPULSION / d2;
            n.vx += dx * f;
            n.vy += dy * f;
        }
    }

    // Zero-rest-length springs along the tree links.
    let links = store.links().to_vec();
    for link in links {
        let (ax, ay, bx, by) = match (store.node(link.parent), store.node(link.child)) {
            (Some(a), Some(b)) => (a.x, a.y, b.x, b.y),
            _ => continue,
        };
        let dx = bx - ax;
        let dy = by - ay;
        if let Some(a) = store.node_mut(link.parent) {
            a.vx += dx * ATTRACTION;
            a.vy += dy * ATTRACTION;
        }
        if let Some(b) = store.node_mut(link.child) {
            b.vx -= dx * ATTRACTION;
            b.vy -= dy * ATTRACTION;
        }
    }

    // Damp, then integrate (semi-implicit Euler, unit time step).
    for n in store.nodes_mut() {
        n.vx *= FRICTION;
        n.vy *= FRICTION;
        n.x += n.vx;
        n.y += n.vy;
    }
}
