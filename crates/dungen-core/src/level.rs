//! Sparse tile map and the builder interface the generators write
//! through.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::vec2::Vec2i;

/// State of a single tile. Unmapped coordinates read as `Empty`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
pub enum TileType {
    #[default]
    Empty,
    Wall,
    Floor,
}

/// Sparse coordinate-to-state tile map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    tiles: HashMap<Vec2i, TileType>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tile(&mut self, pos: Vec2i, tile: TileType) {
        self.tiles.insert(pos, tile);
    }

    /// State at `pos`; `Empty` when unset.
    pub fn tile(&self, pos: Vec2i) -> TileType {
        self.tiles.get(&pos).copied().unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Every explicitly set tile, in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = (Vec2i, TileType)> {
        self.tiles.iter().map(|(&pos, &tile)| (pos, tile))
    }

    /// Number of explicitly set tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Write/query facade over a [`Level`] — the contract the generators
/// consume and a renderer reads.
///
/// Coordinates are unchecked; nothing here enforces bounds beyond the
/// generator's own usage.
#[derive(Debug, Clone, Default)]
pub struct LevelBuilder {
    level: Level,
}

impl LevelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn into_level(self) -> Level {
        self.level
    }

    pub fn clear(&mut self) {
        self.level.clear();
    }

    pub fn place_wall(&mut self, pos: Vec2i) {
        self.level.set_tile(pos, TileType::Wall);
    }

    pub fn place_floor(&mut self, pos: Vec2i) {
        self.level.set_tile(pos, TileType::Floor);
    }

    /// Reset `pos` to `Empty`.
    pub fn remove(&mut self, pos: Vec2i) {
        self.level.set_tile(pos, TileType::Empty);
    }

    pub fn has_wall(&self, pos: Vec2i) -> bool {
        self.level.tile(pos) == TileType::Wall
    }

    pub fn has_floor(&self, pos: Vec2i) -> bool {
        self.level.tile(pos) == TileType::Floor
    }

    pub fn is_empty(&self, pos: Vec2i) -> bool {
        self.level.tile(pos) == TileType::Empty
    }
}
