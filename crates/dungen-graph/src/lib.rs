//! dungen-graph: index-stable undirected graphs for level generation.
//!
//! One dense index-addressed engine ([`Graph`]), a key-addressed
//! overlay ([`KeyedGraph`]), a binary-heap priority queue with
//! decrease-key ([`MinPriorityQueue`]), and the spanning-tree and
//! shortest-path algorithms the level generators are built on.

mod algorithms;
mod error;
mod graph;
mod keyed;
mod queue;

pub use algorithms::{minimum_spanning_tree, random_spanning_tree, shortest_path};
pub use error::GraphError;
pub use graph::Graph;
pub use keyed::KeyedGraph;
pub use queue::MinPriorityQueue;
