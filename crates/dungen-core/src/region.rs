//! Named sets of tile coordinates: rooms and hallway fragments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::vec2::Vec2i;

/// A set of tiles forming one room or one hallway fragment.
///
/// Tiles iterate in scan order (see [`Vec2i`]'s ordering), which keeps
/// leader selection and door scans deterministic for a given seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    tiles: BTreeSet<Vec2i>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile: Vec2i) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn insert(&mut self, tile: Vec2i) {
        self.tiles.insert(tile);
    }

    pub fn remove(&mut self, tile: Vec2i) {
        self.tiles.remove(&tile);
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Union `other`'s tiles into this region.
    pub fn add_region(&mut self, other: &Region) {
        self.tiles.extend(other.tiles.iter().copied());
    }

    /// Drop `other`'s tiles from this region.
    pub fn remove_region(&mut self, other: &Region) {
        for tile in &other.tiles {
            self.tiles.remove(tile);
        }
    }

    /// Union `other` into this region, leaving `other` empty.
    pub fn subsume(&mut self, other: &mut Region) {
        self.tiles.append(&mut other.tiles);
    }

    /// Tiles in scan order.
    pub fn iter(&self) -> impl Iterator<Item = Vec2i> {
        self.tiles.iter().copied()
    }
}
