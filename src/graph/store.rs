//! Authoritative storage for admitted nodes and their links.
//!
//! The store is the only owner of node state. Growth writes during
//! admission, the layout engine writes during integration, and nothing
//! else mutates it; within a tick those two phases never overlap.

use std::collections::HashMap;
use std::f64::consts::TAU;

use rand::Rng;

use crate::config::{SPAWN_EXTENT, SPAWN_RADIUS};

/// An admitted Collatz value with its layout state.
#[derive(Debug)]
pub struct Node {
    /// The integer this node represents; unique across the store.
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Renderer-owned marker handle. The core stores it verbatim and
    /// never interprets it.
    pub marker: Option<u32>,
}

/// Parent/child edge created at the child's admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub parent: u64,
    pub child: u64,
}

/// Admission outcomes that are not new nodes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AdmitError {
    /// The value already has a node; frequent and harmless, the frontier
    /// reached it through more than one parent.
    #[error("value already admitted")]
    AlreadyPresent,

    /// The node cap is reached; terminal for growth, never retried.
    #[error("node capacity exhausted")]
    CapacityExceeded,
}

/// Admitted nodes plus the tree of links, bounded by a fixed capacity.
pub struct GraphStore {
    nodes: HashMap<u64, Node>,
    links: Vec<Link>,
    capacity: usize,
}

impl GraphStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: HashMap::new(),
            links: Vec::new(),
            capacity,
        }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.nodes.contains_key(&value)
    }

    pub fn node(&self, value: u64) -> Option<&Node> {
        self.nodes.get(&value)
    }

    pub fn node_mut(&mut self, value: u64) -> Option<&mut Node> {
        self.nodes.get_mut(&value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Insert a node at rest at `position`, linking it to `parent` when
    /// one is given. Presence is checked before capacity so a duplicate
    /// draw at full capacity still reports `AlreadyPresent`.
    pub fn admit(
        &mut self,
        value: u64,
        parent: Option<u64>,
        position: (f64, f64),
    ) -> Result<(), AdmitError> {
        if self.nodes.contains_key(&value) {
            return Err(AdmitError::AlreadyPresent);
        }
        if self.nodes.len() >= self.capacity {
            return Err(AdmitError::CapacityExceeded);
        }

        self.nodes.insert(
            value,
            Node {
                value,
                x: position.0,
                y: position.1,
                vx: 0.0,
                vy: 0.0,
                marker: None,
            },
        );
        if let Some(parent) = parent {
            self.links.push(Link {
                parent,
                child: value,
            });
        }
        Ok(())
    }

    /// Where a new node should appear: a fixed radius at a random angle
    /// from its parent when the parent is already admitted, otherwise a
    /// uniform point in the origin-centered spawn square.
    pub fn spawn_position(&self, parent: Option<u64>, rng: &mut impl Rng) -> (f64, f64) {
        if let Some(p) = parent.and_then(|p| self.nodes.get(&p)) {
            let angle = rng.gen_range(0.0..TAU);
            return (
                p.x + SPAWN_RADIUS * angle.cos(),
                p.y + SPAWN_RADIUS * angle.sin(),
            );
        }
        (
            (rng.gen::<f64>() - 0.5) * SPAWN_EXTENT,
            (rng.gen::<f64>() - 0.5) * SPAWN_EXTENT,
        )
    }
}
