mod engine;
mod grid;

pub use engine::step;
pub use grid::{GridEntry, SpatialGrid};
