//! Level generators.
//!
//! [`LevelGenerator`] is the entry point a front end drives. The two
//! pipeline generators share the room scaffold (cell graph, placement,
//! contraction) and differ in how they route hallways:
//! [`RandomLevelGenerator`] connects rooms with near-minimal
//! corridors, [`RstLevelGenerator`] floods the remaining space with
//! mazes and cuts doors. [`FixedLevelGenerator`] emits a constant
//! level for exercising a front end.

mod doors;
mod fixed;
mod maze;
mod plan;
mod prune;
mod random;
mod rooms;
mod routing;
mod rst;

pub use doors::{DoorConnection, RegionKind};
pub use fixed::FixedLevelGenerator;
pub use random::RandomLevelGenerator;
pub use rst::RstLevelGenerator;

use crate::error::GenerationError;
use crate::params::LevelParameters;

/// A level generator driven through the builder it owns.
///
/// A generator instance is single-owner state: concurrent calls on
/// the same instance are not supported and must be serialized by the
/// caller. A run either completes fully or fails with no usable tile
/// map.
pub trait LevelGenerator {
    /// Run a full generation pass, replacing the previous level.
    fn generate(&mut self) -> Result<(), GenerationError>;

    /// Set the parameters used by subsequent runs.
    fn set_parameters(&mut self, params: LevelParameters);

    /// Parameters currently in effect.
    fn parameters(&self) -> LevelParameters;
}
