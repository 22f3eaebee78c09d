mod frontier;
mod store;

pub use frontier::{Frontier, FrontierEntry};
pub use store::{AdmitError, GraphStore, Link, Node};
