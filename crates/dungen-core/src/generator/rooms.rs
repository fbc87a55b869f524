//! Room placement and contraction.
//!
//! Rooms are solid-walled rectangles carved into a wall-filled field.
//! After placement each room is contracted to a single routing vertex
//! (its leader) plus the wall tiles a corridor could enter through.

use log::debug;

use crate::error::GenerationError;
use crate::level::LevelBuilder;
use crate::params::LevelParameters;
use crate::region::Region;
use crate::rng::GenRng;
use crate::vec2::Vec2i;

use super::plan::LevelPlan;

/// Placement attempts per room before giving up on it.
const PLACEMENT_ATTEMPTS: u32 = 50;
/// Minimum room span, walls included.
const MIN_ROOM_SPAN: i32 = 7;
/// Maximum room span, walls included.
const MAX_ROOM_SPAN: i32 = 12;

/// Fill the whole bounding rectangle, perimeter ring included, with
/// wall.
pub(crate) fn fill_walls(builder: &mut LevelBuilder, params: &LevelParameters) {
    for y in 0..=params.height + 1 {
        for x in 0..=params.width + 1 {
            builder.place_wall(Vec2i::new(x, y));
        }
    }
}

/// Place up to `params.num_rooms` rectangular rooms.
///
/// Each room gets [`PLACEMENT_ATTEMPTS`] random placements; a
/// placement is accepted when the whole rectangle fits the playable
/// area and covers nothing but wall. A room whose attempts all
/// collide is skipped, so fewer rooms than requested is a normal
/// outcome.
pub(crate) fn place_rooms(
    plan: &mut LevelPlan,
    builder: &mut LevelBuilder,
    params: &LevelParameters,
    rng: &mut GenRng,
) {
    let span_range = (MAX_ROOM_SPAN - MIN_ROOM_SPAN + 1) as u32;

    for _ in 0..params.num_rooms {
        for _attempt in 0..PLACEMENT_ATTEMPTS {
            let w = MIN_ROOM_SPAN + rng.rn2(span_range) as i32;
            let h = MIN_ROOM_SPAN + rng.rn2(span_range) as i32;
            let x = 1 + rng.rn2(params.width as u32) as i32;
            let y = 1 + rng.rn2(params.height as u32) as i32;

            if x + w > params.width || y + h > params.height {
                continue;
            }
            if overlaps(builder, Vec2i::new(x, y), w, h) {
                continue;
            }

            let room = carve_room(builder, Vec2i::new(x, y), w, h);
            plan.room_tiles.add_region(&room);
            plan.hall_tiles.remove_region(&room);
            plan.rooms.push(room);
            break;
        }
    }

    debug!(
        "placed {} of {} requested rooms",
        plan.rooms.len(),
        params.num_rooms
    );
}

/// Does the rectangle cover any non-wall tile?
///
/// Other rooms' wall rings do not count as collisions, only their
/// floorspace does, so adjacent rooms may share wall bands.
fn overlaps(builder: &LevelBuilder, pos: Vec2i, w: i32, h: i32) -> bool {
    for x in pos.x..pos.x + w {
        for y in pos.y..pos.y + h {
            if !builder.has_wall(Vec2i::new(x, y)) {
                return true;
            }
        }
    }
    false
}

/// Carve a room: wall border, floor interior. Returns its region.
fn carve_room(builder: &mut LevelBuilder, pos: Vec2i, w: i32, h: i32) -> Region {
    let mut room = Region::new();
    for i in 0..w {
        for j in 0..h {
            let tile = Vec2i::new(pos.x + i, pos.y + j);
            if i == 0 || i == w - 1 || j == 0 || j == h - 1 {
                builder.place_wall(tile);
            } else {
                builder.place_floor(tile);
            }
            room.insert(tile);
        }
    }
    room
}

/// Contract every placed room to a single routing vertex.
///
/// The leader is the first floor tile of the room in scan order. Wall
/// tiles a corridor could pass through keep their outward edges and
/// gain an edge to the leader; everything else inside the room leaves
/// the cell graph.
pub(crate) fn contract_rooms(
    plan: &mut LevelPlan,
    builder: &LevelBuilder,
) -> Result<(), GenerationError> {
    let LevelPlan {
        cells,
        rooms,
        leaders,
        ..
    } = plan;

    for (room_idx, room) in rooms.iter().enumerate() {
        let leader = room
            .iter()
            .find(|&tile| !builder.has_wall(tile))
            .ok_or(GenerationError::MissingLeader(room_idx))?;
        leaders.push(leader);

        // Cut the leader loose from its own interior.
        let leader_neighbors: Vec<Vec2i> = cells.neighbors(&leader)?.copied().collect();
        for n in leader_neighbors {
            cells.remove_edge(&leader, &n)?;
        }

        for tile in room.iter() {
            if tile == leader || !cells.contains_vertex(&tile) {
                continue;
            }

            if builder.has_wall(tile) {
                let neighbors: Vec<Vec2i> = cells.neighbors(&tile)?.copied().collect();
                let has_adjacent_floor = neighbors
                    .iter()
                    .any(|&n| !builder.has_wall(n) && room.contains(n));

                if !has_adjacent_floor {
                    // Interior wall no corridor can reach.
                    for n in neighbors {
                        cells.remove_edge(&tile, &n)?;
                    }
                    continue;
                }

                for n in neighbors {
                    if !room.contains(n) {
                        // The edge out of the room stays.
                    } else if !builder.has_wall(n) {
                        // Edge to interior floor: collapse it onto the
                        // leader.
                        cells.remove_vertex(&n)?;
                        cells.add_edge(&tile, &leader, ())?;
                    } else {
                        cells.remove_edge(&tile, &n)?;
                    }
                }
            } else {
                let adjacent_to_wall =
                    cells.neighbors(&tile)?.any(|&n| builder.has_wall(n));

                if !adjacent_to_wall {
                    // Pure interior floor is irrelevant to routing.
                    cells.remove_vertex(&tile)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_plan(params: &LevelParameters, seed: u32) -> (LevelPlan, LevelBuilder) {
        let mut plan = LevelPlan::default();
        let mut builder = LevelBuilder::new();
        let mut rng = GenRng::new(seed);
        plan.build_cell_graph(params).unwrap();
        fill_walls(&mut builder, params);
        place_rooms(&mut plan, &mut builder, params, &mut rng);
        (plan, builder)
    }

    #[test]
    fn test_fill_covers_bounding_rectangle() {
        let params = LevelParameters::new(4, 3, 0);
        let mut builder = LevelBuilder::new();
        fill_walls(&mut builder, &params);

        for x in 0..=5 {
            for y in 0..=4 {
                assert!(builder.has_wall(Vec2i::new(x, y)));
            }
        }
        assert!(builder.is_empty(Vec2i::new(6, 0)));
    }

    #[test]
    fn test_rooms_fit_playable_area_and_do_not_share_floor() {
        let params = LevelParameters::new(40, 40, 8);
        let (plan, builder) = placed_plan(&params, 99);

        assert!(!plan.rooms.is_empty());
        for room in &plan.rooms {
            for tile in room.iter() {
                assert!(tile.x >= 1 && tile.x <= params.width);
                assert!(tile.y >= 1 && tile.y <= params.height);
            }
        }

        // Floorspace belongs to exactly one room; only wall bands may
        // be shared.
        for (i, room) in plan.rooms.iter().enumerate() {
            for (j, other) in plan.rooms.iter().enumerate() {
                if i == j {
                    continue;
                }
                for tile in room.iter() {
                    if builder.has_floor(tile) {
                        assert!(!other.contains(tile));
                    }
                }
            }
        }
    }

    #[test]
    fn test_room_borders_are_walls() {
        let params = LevelParameters::new(30, 30, 4);
        let (plan, builder) = placed_plan(&params, 5);

        for room in &plan.rooms {
            let min_x = room.iter().map(|t| t.x).min().unwrap();
            let max_x = room.iter().map(|t| t.x).max().unwrap();
            let min_y = room.iter().map(|t| t.y).min().unwrap();
            let max_y = room.iter().map(|t| t.y).max().unwrap();

            for tile in room.iter() {
                let on_border = tile.x == min_x
                    || tile.x == max_x
                    || tile.y == min_y
                    || tile.y == max_y;
                if on_border {
                    assert!(builder.has_wall(tile));
                } else {
                    assert!(builder.has_floor(tile));
                }
            }
        }
    }

    #[test]
    fn test_contraction_collapses_rooms() {
        let params = LevelParameters::new(30, 30, 4);
        let (mut plan, builder) = placed_plan(&params, 11);
        assert!(plan.rooms.len() >= 2, "seed must place at least two rooms");

        contract_rooms(&mut plan, &builder).unwrap();
        assert_eq!(plan.leaders.len(), plan.rooms.len());

        for (room, &leader) in plan.rooms.iter().zip(&plan.leaders) {
            assert!(builder.has_floor(leader));
            assert!(plan.cells.contains_vertex(&leader));

            // Interior floors other than the leader have left the
            // graph.
            for tile in room.iter() {
                if tile != leader && builder.has_floor(tile) {
                    let interior = Vec2i::ORTHOGONAL
                        .iter()
                        .all(|&d| !builder.has_wall(tile + d));
                    if interior {
                        assert!(!plan.cells.contains_vertex(&tile));
                    }
                }
            }

            // The leader's surviving edges all lead to wall tiles of
            // its own room.
            for n in plan.cells.neighbors(&leader).unwrap() {
                assert!(builder.has_wall(*n));
                assert!(room.contains(*n));
            }
        }
    }

    #[test]
    fn test_missing_leader_is_fatal() {
        let params = LevelParameters::new(20, 20, 0);
        let mut plan = LevelPlan::default();
        let mut builder = LevelBuilder::new();
        plan.build_cell_graph(&params).unwrap();
        fill_walls(&mut builder, &params);

        // A fabricated all-wall "room" has no leader candidate.
        let mut solid = Region::new();
        for x in 5..10 {
            for y in 5..10 {
                solid.insert(Vec2i::new(x, y));
            }
        }
        plan.rooms.push(solid);

        assert_eq!(
            contract_rooms(&mut plan, &builder),
            Err(GenerationError::MissingLeader(0))
        );
    }
}
