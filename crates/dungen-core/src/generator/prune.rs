//! Dead-end pruning.

use log::debug;

use crate::level::LevelBuilder;
use crate::vec2::Vec2i;

use super::plan::LevelPlan;

/// Convert hallway dead ends back to wall until none remain.
///
/// A hallway floor tile with three or more orthogonal wall neighbors
/// is a stub; walling it can expose the next tile of the branch, so
/// whole dead ends unwind over successive passes. Through-corridors
/// and doorway openings have at most two wall neighbors and survive.
/// Returns the number of tiles pruned; a call after convergence
/// returns 0.
pub(crate) fn prune_dead_ends(plan: &mut LevelPlan, builder: &mut LevelBuilder) -> usize {
    let mut pruned = 0;

    loop {
        let mut changed = false;

        for tile in plan.hall_tiles.iter().collect::<Vec<_>>() {
            if !builder.has_floor(tile) {
                continue;
            }
            let walls = Vec2i::ORTHOGONAL
                .iter()
                .filter(|&&dir| builder.has_wall(tile + dir))
                .count();

            if walls >= 3 {
                builder.place_wall(tile);
                plan.hall_tiles.remove(tile);
                pruned += 1;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    if pruned > 0 {
        debug!("pruned {pruned} dead-end tiles");
    }
    pruned
}
