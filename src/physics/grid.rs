//! Uniform spatial hash over node positions.
//!
//! Rebuilt from scratch every tick; per-tick movement is small relative
//! to the cell size, so a full rebuild stays cheap and avoids any
//! incremental bookkeeping. Entries are position snapshots valid only
//! until the next rebuild.

use std::collections::HashMap;

use crate::config::CELL_SIZE;
use crate::graph::Node;

/// Snapshot of one node taken at rebuild time.
#[derive(Debug, Clone, Copy)]
pub struct GridEntry {
    pub value: u64,
    pub x: f64,
    pub y: f64,
}

/// Maps integer cell coordinates to the nodes currently inside them.
#[derive(Default)]
pub struct SpatialGrid {
    cells: HashMap<(i64, i64), Vec<GridEntry>>,
}

fn cell_of(x: f64, y: f64) -> (i64, i64) {
    ((x / CELL_SIZE).floor() as i64, (y / CELL_SIZE).floor() as i64)
}

impl SpatialGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and re-bucket every node.
    pub fn rebuild<'a>(&mut self, nodes: impl Iterator<Item = &'a Node>) {
        self.cells.clear();
        for n in nodes {
            self.cells.entry(cell_of(n.x, n.y)).or_default().push(GridEntry {
                value: n.value,
                x: n.x,
                y: n.y,
            });
        }
    }

    /// Every snapshot in the 3x3 cell block around `(x, y)`, excluding
    /// `value` itself. Pairs further than one cell apart are treated as
    /// out of repulsion range; CELL_SIZE is sized for that cutoff.
    pub fn neighbors_of(
        &self,
        value: u64,
        x: f64,
        y: f64,
    ) -> impl Iterator<Item = &GridEntry> {
        let (cx, cy) = cell_of(x, y);
        (-1..=1)
            .flat_map(move |dx| (-1..=1).map(move |dy| (cx + dx, cy + dy)))
            .filter_map(move |key| self.cells.get(&key))
            .flatten()
            .filter(move |e| e.value != value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: u64, x: f64, y: f64) -> Node {
        Node {
            value,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            marker: None,
        }
    }

    #[test]
    fn test_empty_grid_has_no_neighbors() {
        let grid = SpatialGrid::new();
        assert_eq!(grid.neighbors_of(1, 0.0, 0.0).count(), 0);
    }

    #[test]
    fn test_excludes_self() {
        let mut grid = SpatialGrid::new();
        grid.rebuild([node(1, 10.0, 10.0)].iter());
        assert_eq!(grid.neighbors_of(1, 10.0, 10.0).count(), 0);
    }

    #[test]
    fn test_negative_coordinates_use_floor() {
        // Truncation would put -10 and +10 in the same cell 0; floor
        // keeps them in adjacent cells -1 and 0, still neighbors.
        let mut grid = SpatialGrid::new();
        grid.rebuild([node(1, -10.0, 0.0), node(2, 10.0, 0.0)].iter());
        let found: Vec<u64> = grid.neighbors_of(1, -10.0, 0.0).map(|e| e.value).collect();
        assert_eq!(found, vec![2]);
    }

    #[test]
    fn test_matches_brute_force_cell_block() {
        // Five nodes at known positions; the lazy query must return
        // exactly the nodes whose cell differs by at most one on each
        // axis, nothing more, nothing less.
        let nodes = vec![
            node(1, 0.0, 0.0),
            node(2, 150.0, 0.0),    // adjacent cell
            node(3, 199.0, 199.0),  // diagonal-adjacent cell
            node(4, 450.0, 0.0),    // two cells away
            node(5, -250.0, 0.0),   // two cells away (negative side)
        ];
        let mut grid = SpatialGrid::new();
        grid.rebuild(nodes.iter());

        for n in &nodes {
            let mut expected: Vec<u64> = nodes
                .iter()
                .filter(|m| m.value != n.value)
                .filter(|m| {
                    let (ax, ay) = cell_of(n.x, n.y);
                    let (bx, by) = cell_of(m.x, m.y);
                    (ax - bx).abs() <= 1 && (ay - by).abs() <= 1
                })
                .map(|m| m.value)
                .collect();
            expected.sort_unstable();

            let mut found: Vec<u64> =
                grid.neighbors_of(n.value, n.x, n.y).map(|e| e.value).collect();
            found.sort_unstable();

            assert_eq!(found, expected, "neighborhood of node {}", n.value);
        }
    }

    #[test]
    fn test_rebuild_drops_stale_entries() {
        let mut grid = SpatialGrid::new();
        grid.rebuild([node(1, 0.0, 0.0), node(2, 50.0, 0.0)].iter());
        assert_eq!(grid.neighbors_of(1, 0.0, 0.0).count(), 1);

        grid.rebuild([node(1, 0.0, 0.0)].iter());
        assert_eq!(grid.neighbors_of(1, 0.0, 0.0).count(), 0);
    }
}
