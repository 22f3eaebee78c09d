// ============================================
// Growth
// ============================================

/// Hard cap on admitted nodes; growth halts permanently once reached
pub const MAX_NODES: usize = 1200;

/// Per-tick probability of attempting one frontier admission
pub const P_EXPAND: f64 = 0.5;

/// Exponent on the logarithmic weight in the biased frontier draw.
/// Higher values favor small Collatz values more aggressively.
pub const BIAS: f64 = 1.2;

// ============================================
// Physics
// ============================================

/// Inverse-square repulsion strength between nearby nodes
pub const REPULSION: f64 = 900.0;

/// Zero-rest-length spring constant along parent/child links
pub const ATTRACTION: f64 = 0.02;

/// Velocity damping factor applied each tick (must stay below 1.0)
pub const FRICTION: f64 = 0.85;

/// Side length of a spatial-hash cell. Must not be smaller than the
/// distance at which repulsion becomes negligible, or the 3x3 cell
/// neighborhood will drop pairs that still exert meaningful force.
pub const CELL_SIZE: f64 = 200.0;

// ============================================
// Spawn placement
// ============================================

/// Radial distance from an admitted parent at which its child appears
pub const SPAWN_RADIUS: f64 = 80.0;

/// Width of the origin-centered square used when a node has no parent
pub const SPAWN_EXTENT: f64 = 600.0;

// ============================================
// Driver
// ============================================

/// Number of ticks the headless driver runs before reporting
pub const DRIVER_TICKS: u64 = 20_000;
