//! Shortest path search over the whole network.

pub mod finder;
pub mod graph;

pub use finder::{DijkstraPathFinder, PathFinder};
pub use graph::SectionGraph;
