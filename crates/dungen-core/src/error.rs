//! Generation error types.

use thiserror::Error;

use dungen_graph::GraphError;

use crate::vec2::Vec2i;

/// Fatal failures that abort a generation run.
///
/// Degenerate configurations — non-positive dimensions, fewer than
/// two rooms placed — are not errors; those runs short-circuit with a
/// minimal level by design. When a run does fail, the tile map is not
/// guaranteed usable; callers should regenerate with a different seed
/// rather than salvage partial state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A placed room contained no floor tile to contract onto.
    #[error("room {0} has no floor tile to use as a leader")]
    MissingLeader(usize),

    /// Two room leaders had no route through the cell graph.
    #[error("no route between room leaders {from} and {to}")]
    UnreachableLeader { from: Vec2i, to: Vec2i },

    /// A graph precondition was violated.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
