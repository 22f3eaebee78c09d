mod app;
mod collatz;
mod config;
mod graph;
mod physics;

use app::{Simulation, TickCounter};
use config::{DRIVER_TICKS, MAX_NODES, P_EXPAND};

/// Headless driver standing in for the external render loop: runs the
/// tick handler at full speed and logs growth and layout progress.
fn main() {
    env_logger::init();

    log::info!("Collatz garden starting");
    log::info!("Capacity: {} nodes, expand probability {}", MAX_NODES, P_EXPAND);

    let mut sim = Simulation::new();
    let mut counter = TickCounter::new();

    for tick in 0..DRIVER_TICKS {
        if let Some(value) = sim.tick() {
            // A renderer would create its marker here; the driver just
            // tags the node with its admission order.
            sim.set_marker(value, sim.node_count() as u32 - 1);
        }

        if let Some(rate) = counter.tick() {
            log::info!(
                "tick {}: {} nodes, {} pending, {:.0} ticks/s",
                tick,
                sim.node_count(),
                sim.pending_count(),
                rate
            );
        }
    }

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for node in sim.nodes() {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
        max_x = max_x.max(node.x);
        max_y = max_y.max(node.y);
    }

    log::info!(
        "done: {} nodes, {} links, saturated: {}",
        sim.node_count(),
        sim.links().len(),
        sim.saturated()
    );
    log::info!(
        "layout bounds: x [{:.0}, {:.0}], y [{:.0}, {:.0}]",
        min_x,
        max_x,
        min_y,
        max_y
    );

    // What the detail panel would show for the largest admitted value.
    if let Some(largest) = sim.nodes().map(|n| n.value).max() {
        let path = sim.path_to_one(largest);
        log::info!("longest label {}: {} steps to 1", largest, path.len() - 1);
    }
}
