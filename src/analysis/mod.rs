//! Static dependency-graph analysis

pub mod graph;
pub mod node;

pub use graph::DependencyGraph;
pub use node::Node;
