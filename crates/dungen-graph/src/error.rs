//! Error types shared by the graph structures and the priority queue.

use thiserror::Error;

/// Failures raised by graph and priority-queue primitives.
///
/// Everything here is a local, immediately recognizable precondition
/// failure; none of these are retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a vertex index that does not exist.
    #[error("vertex {0} does not exist")]
    VertexNotFound(usize),

    /// An operation referenced an edge that does not exist.
    #[error("edge {0} -- {1} does not exist")]
    EdgeNotFound(usize, usize),

    /// A keyed operation referenced an unknown vertex key.
    #[error("no vertex with the given key")]
    KeyNotFound,

    /// A vertex with the same key is already registered.
    #[error("a vertex with the given key already exists")]
    DuplicateKey,

    /// Extraction or peek on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Decrease-key was called with a key that does not decrease.
    #[error("new key {new} is not less than current key {current}")]
    NonDecreasingKey { current: u32, new: u32 },

    /// Decrease-key could not locate the element in the queue.
    #[error("element not found in priority queue")]
    QueueElementNotFound,
}
