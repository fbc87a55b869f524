//! Maze carving over a 2-cell-pitch lattice.
//!
//! The alternative to corridor routing: every pocket of the grid not
//! claimed by a room is filled with a randomized spanning-tree maze.
//! Tree vertices sit two tiles apart and only the connecting midpoint
//! is carved between them, so corridors stay one tile wide.

use log::debug;

use dungen_graph::{KeyedGraph, random_spanning_tree};

use crate::error::GenerationError;
use crate::level::LevelBuilder;
use crate::params::LevelParameters;
use crate::region::Region;
use crate::rng::GenRng;
use crate::vec2::Vec2i;

use super::plan::LevelPlan;

/// Build the odd-coordinate lattice over tiles outside every room.
///
/// Two lattice vertices are connected when they are two tiles apart
/// and the tile between them is also outside every room, so mazes
/// never tunnel through a room.
fn build_lattice(
    plan: &LevelPlan,
    params: &LevelParameters,
) -> Result<KeyedGraph<Vec2i>, GenerationError> {
    let mut lattice: KeyedGraph<Vec2i> = KeyedGraph::new();

    for y in (1..=params.height).step_by(2) {
        for x in (1..=params.width).step_by(2) {
            let tile = Vec2i::new(x, y);
            if !plan.cells.contains_vertex(&tile) || plan.room_tiles.contains(tile) {
                continue;
            }
            lattice.add_vertex(tile)?;

            let left = Vec2i::new(x - 2, y);
            if lattice.contains_vertex(&left) && !plan.room_tiles.contains(Vec2i::new(x - 1, y)) {
                lattice.add_edge(&tile, &left, ())?;
            }
            let up = Vec2i::new(x, y - 2);
            if lattice.contains_vertex(&up) && !plan.room_tiles.contains(Vec2i::new(x, y - 1)) {
                lattice.add_edge(&tile, &up, ())?;
            }
        }
    }

    Ok(lattice)
}

/// Carve randomized mazes until no eligible start tile remains.
///
/// A lattice vertex can start a maze when it belongs to no room or
/// hallway region and still has at least one lattice neighbor. Each
/// spanning tree covers its whole component, so every component is
/// carved exactly once and becomes one hallway fragment.
pub(crate) fn carve_mazes(
    plan: &mut LevelPlan,
    builder: &mut LevelBuilder,
    params: &LevelParameters,
    rng: &mut GenRng,
) -> Result<(), GenerationError> {
    let lattice = build_lattice(plan, params)?;

    loop {
        let start = lattice.vertices().copied().find(|&tile| {
            !plan.room_tiles.contains(tile)
                && !plan.hall_tiles.contains(tile)
                && lattice
                    .neighbors(&tile)
                    .map(|mut n| n.next().is_some())
                    .unwrap_or(false)
        });

        let Some(start) = start else { break };

        let span = random_spanning_tree(&lattice, &start, rng)?;
        let mut hall = Region::new();

        for (from, to) in &span {
            let mid = (*from + *to) / 2;
            for tile in [*from, mid, *to] {
                builder.place_floor(tile);
                hall.insert(tile);
            }
        }

        debug!("carved maze fragment of {} tiles from {}", hall.len(), start);
        plan.hall_tiles.add_region(&hall);
        plan.halls.push(hall);
    }

    Ok(())
}
