//! Inter-room corridor routing.
//!
//! Connects every room through the minimum spanning tree of the
//! pairwise shortest paths between room leaders — a cheap stand-in
//! for true Steiner-tree minimization.

use log::debug;

use dungen_graph::{KeyedGraph, minimum_spanning_tree, shortest_path};

use crate::error::GenerationError;
use crate::level::LevelBuilder;
use crate::vec2::Vec2i;

use super::plan::LevelPlan;

/// Carve the corridors connecting every room.
///
/// Builds a complete weighted graph over the room leaders — edge
/// weight is the shortest-path tile count, edge payload the path
/// itself — takes its minimum spanning tree rooted at the first
/// leader, and carves each tree edge's stored path as floor.
///
/// Rooms are reachable from each other through the contracted grid by
/// construction, so an empty path between leaders is a fatal error.
pub(crate) fn route_hallways(
    plan: &mut LevelPlan,
    builder: &mut LevelBuilder,
) -> Result<(), GenerationError> {
    let mut routes: KeyedGraph<Vec2i, Vec<Vec2i>> = KeyedGraph::new();
    let mut costs: KeyedGraph<Vec2i, u32> = KeyedGraph::new();

    for &leader in &plan.leaders {
        routes.add_vertex(leader)?;
        costs.add_vertex(leader)?;
    }

    for (i, &from) in plan.leaders.iter().enumerate() {
        for &to in &plan.leaders[i + 1..] {
            let path = shortest_path(&plan.cells, &from, &to)?;
            if path.is_empty() {
                return Err(GenerationError::UnreachableLeader { from, to });
            }
            costs.add_edge(&from, &to, path.len() as u32)?;
            routes.add_edge(&from, &to, path)?;
        }
    }

    let tree = minimum_spanning_tree(&costs, &plan.leaders[0])?;
    debug!(
        "corridor tree: {} edges over {} rooms",
        tree.edge_count(),
        plan.leaders.len()
    );

    for (from, to, _cost) in tree.edges() {
        for &tile in routes.edge_data(from, to)? {
            builder.place_floor(tile);
            plan.hall_tiles.insert(tile);
        }
    }

    Ok(())
}
