//! Door placement between rooms and the regions around them.
//!
//! Maze fragments and rooms are not joined by carving, so every room
//! needs doors cut through its wall ring: one connection attempt per
//! adjacent region, chosen in random order.

use log::debug;

use crate::level::LevelBuilder;
use crate::rng::GenRng;
use crate::vec2::Vec2i;

use super::plan::LevelPlan;

/// The region on the far side of a prospective door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Index into the room list.
    Room(usize),
    /// Index into the hallway fragment list.
    Hall(usize),
}

/// One recorded connection attempt between a room and a neighboring
/// region.
///
/// `carved` is false when the 50% room-to-room skip suppressed the
/// physical opening. The connection is recorded anyway, so the
/// bookkeeping can claim an adjacency the tile map does not show;
/// that asymmetry is part of the contract and tests assert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorConnection {
    /// Index of the room the door belongs to.
    pub room: usize,
    /// Region on the other side.
    pub target: RegionKind,
    /// The wall tile that holds the door.
    pub door: Vec2i,
    /// The tile just beyond the door, on the target's side.
    pub threshold: Vec2i,
    /// Whether the opening was physically carved.
    pub carved: bool,
}

/// A door candidate: the room floor tile beside the wall, the wall
/// tile the door would occupy, and the region beyond it.
#[derive(Debug, Clone, Copy)]
struct DoorCandidate {
    room_tile: Vec2i,
    door_tile: Vec2i,
    target: RegionKind,
}

/// Place doors for every room; discard rooms that cannot get one.
///
/// Hall connections always carve; room-to-room connections carve half
/// the time but are recorded either way, and each room-region pair is
/// attempted at most once. A room with no candidates at all is
/// refilled solid and dropped from play.
pub(crate) fn place_doors(
    plan: &mut LevelPlan,
    builder: &mut LevelBuilder,
    rng: &mut GenRng,
) -> Vec<DoorConnection> {
    let mut connections: Vec<DoorConnection> = Vec::new();
    let mut discarded = vec![false; plan.rooms.len()];

    for room_idx in 0..plan.rooms.len() {
        let mut candidates = door_candidates(plan, builder, room_idx, &discarded);

        if candidates.is_empty() {
            discard_room(plan, builder, room_idx);
            discarded[room_idx] = true;
            continue;
        }

        // One attempt per target region, in either direction.
        candidates.retain(|c| {
            !connections.iter().any(|conn| {
                (conn.room == room_idx && conn.target == c.target)
                    || (RegionKind::Room(conn.room) == c.target
                        && conn.target == RegionKind::Room(room_idx))
            })
        });

        while !candidates.is_empty() {
            let pick = rng.rn2(candidates.len() as u32) as usize;
            let candidate = candidates[pick];

            let carved = match candidate.target {
                RegionKind::Room(_) => !rng.percent(50),
                RegionKind::Hall(_) => true,
            };

            let dir = candidate.door_tile - candidate.room_tile;
            let threshold = candidate.door_tile + dir;
            if carved {
                builder.place_floor(candidate.door_tile);
                builder.place_floor(threshold);
            }

            connections.push(DoorConnection {
                room: room_idx,
                target: candidate.target,
                door: candidate.door_tile,
                threshold,
                carved,
            });

            candidates.retain(|c| c.target != candidate.target);
        }
    }

    debug!(
        "door pass: {} connections, {} rooms discarded",
        connections.len(),
        discarded.iter().filter(|&&d| d).count()
    );
    connections
}

/// Collect a room's door candidates: floor tiles whose wall neighbor
/// hides a hall or another room one or two tiles beyond it.
fn door_candidates(
    plan: &LevelPlan,
    builder: &LevelBuilder,
    room_idx: usize,
    discarded: &[bool],
) -> Vec<DoorCandidate> {
    let room = &plan.rooms[room_idx];
    let mut candidates = Vec::new();

    for tile in room.iter() {
        if builder.has_wall(tile) {
            continue;
        }
        for dir in Vec2i::ORTHOGONAL {
            let door_tile = tile + dir;
            if !builder.has_wall(door_tile) {
                continue;
            }
            let threshold = door_tile + dir;
            let beyond = threshold + dir;

            let target = if plan.hall_tiles.contains(threshold)
                || plan.hall_tiles.contains(beyond)
            {
                plan.halls
                    .iter()
                    .position(|hall| hall.contains(threshold) || hall.contains(beyond))
                    .map(RegionKind::Hall)
            } else if plan.room_tiles.contains(threshold) || plan.room_tiles.contains(beyond) {
                plan.rooms
                    .iter()
                    .enumerate()
                    .find(|&(other_idx, other)| {
                        other_idx != room_idx
                            && !discarded[other_idx]
                            && (other.contains(threshold) || other.contains(beyond))
                    })
                    .map(|(other_idx, _)| RegionKind::Room(other_idx))
            } else {
                None
            };

            if let Some(target) = target {
                candidates.push(DoorCandidate {
                    room_tile: tile,
                    door_tile,
                    target,
                });
            }
        }
    }

    candidates
}

/// Refill a doorless room to solid wall and drop it from play.
fn discard_room(plan: &mut LevelPlan, builder: &mut LevelBuilder, room_idx: usize) {
    debug!("discarding doorless room {room_idx}");
    let tiles: Vec<Vec2i> = plan.rooms[room_idx].iter().collect();
    for tile in tiles {
        builder.place_wall(tile);
        plan.room_tiles.remove(tile);
    }
    plan.rooms[room_idx].clear();
}

#[cfg(test)]
mod tests {
    use crate::region::Region;

    use super::*;

    /// A 5x5 walled room whose interior floor is the 3x3 block one
    /// tile in from `origin`.
    fn fixture_room(builder: &mut LevelBuilder, origin: Vec2i) -> Region {
        let mut room = Region::new();
        for i in 0..5 {
            for j in 0..5 {
                let tile = origin + Vec2i::new(i, j);
                if i == 0 || i == 4 || j == 0 || j == 4 {
                    builder.place_wall(tile);
                } else {
                    builder.place_floor(tile);
                }
                room.insert(tile);
            }
        }
        room
    }

    fn walled_field(builder: &mut LevelBuilder, w: i32, h: i32) {
        for x in 0..=w + 1 {
            for y in 0..=h + 1 {
                builder.place_wall(Vec2i::new(x, y));
            }
        }
    }

    #[test]
    fn test_room_beside_hall_gets_exactly_one_door() {
        let mut plan = LevelPlan::default();
        let mut builder = LevelBuilder::new();
        let mut rng = GenRng::new(9);
        walled_field(&mut builder, 20, 20);

        let room = fixture_room(&mut builder, Vec2i::new(1, 1));
        plan.room_tiles.add_region(&room);
        plan.rooms.push(room);

        // A vertical hallway two tiles right of the room's wall.
        let mut hall = Region::new();
        for y in 1..=9 {
            let tile = Vec2i::new(7, y);
            builder.place_floor(tile);
            hall.insert(tile);
        }
        plan.hall_tiles.add_region(&hall);
        plan.halls.push(hall);

        let connections = place_doors(&mut plan, &mut builder, &mut rng);

        assert_eq!(connections.len(), 1);
        let conn = connections[0];
        assert_eq!(conn.room, 0);
        assert_eq!(conn.target, RegionKind::Hall(0));
        assert!(conn.carved);
        assert!(builder.has_floor(conn.door));
        assert!(builder.has_floor(conn.threshold));
    }

    #[test]
    fn test_doorless_room_is_refilled() {
        let mut plan = LevelPlan::default();
        let mut builder = LevelBuilder::new();
        let mut rng = GenRng::new(9);
        walled_field(&mut builder, 20, 20);

        // No halls, no other rooms: nothing to connect to.
        let room = fixture_room(&mut builder, Vec2i::new(3, 3));
        let tiles: Vec<Vec2i> = room.iter().collect();
        plan.room_tiles.add_region(&room);
        plan.rooms.push(room);

        let connections = place_doors(&mut plan, &mut builder, &mut rng);

        assert!(connections.is_empty());
        assert!(plan.rooms[0].is_empty());
        for tile in tiles {
            assert!(builder.has_wall(tile));
            assert!(!plan.room_tiles.contains(tile));
        }
    }

    #[test]
    fn test_adjacent_rooms_record_one_connection() {
        let mut plan = LevelPlan::default();
        let mut builder = LevelBuilder::new();
        let mut rng = GenRng::new(5);
        walled_field(&mut builder, 20, 20);

        // Two rooms sharing a wall band: floors are 2 tiles apart.
        let left = fixture_room(&mut builder, Vec2i::new(1, 1));
        let right = fixture_room(&mut builder, Vec2i::new(5, 1));
        plan.room_tiles.add_region(&left);
        plan.room_tiles.add_region(&right);
        plan.rooms.push(left);
        plan.rooms.push(right);

        let connections = place_doors(&mut plan, &mut builder, &mut rng);

        // One attempt between the pair, regardless of which side
        // scanned first or whether the coin flip carved it.
        assert_eq!(connections.len(), 1);
        let conn = connections[0];
        assert!(matches!(conn.target, RegionKind::Room(_)));
        if conn.carved {
            assert!(builder.has_floor(conn.door));
            assert!(builder.has_floor(conn.threshold));
        } else {
            assert!(builder.has_wall(conn.door));
        }
    }
}
