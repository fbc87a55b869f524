//! dungen-core: procedural tile dungeon generation.
//!
//! Levels are sparse wall/floor tile maps generated from a seed and
//! size/room-count parameters. The pipeline places walled rooms,
//! contracts each room to a single routing vertex, and then either
//! routes corridors along a spanning tree of pairwise shortest paths
//! or floods the space between rooms with spanning-tree mazes joined
//! to the rooms by doors.
//!
//! Generation is synchronous, single-threaded and purely CPU-bound;
//! given a pinned seed and fixed parameters the resulting tile map is
//! identical on every run.

pub mod generator;

mod error;
mod level;
mod params;
mod region;
mod rng;
mod vec2;

pub use error::GenerationError;
pub use level::{Level, LevelBuilder, TileType};
pub use params::LevelParameters;
pub use region::Region;
pub use rng::GenRng;
pub use vec2::Vec2i;
