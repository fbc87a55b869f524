//! The maze-carving level generator.

use log::debug;

use crate::error::GenerationError;
use crate::level::{Level, LevelBuilder};
use crate::params::LevelParameters;
use crate::rng::SeedChain;

use super::doors::DoorConnection;
use super::plan::LevelPlan;
use super::{LevelGenerator, doors, maze, prune, rooms};

/// Generates a level whose rooms sit inside randomized spanning-tree
/// mazes.
///
/// Carved maze fragments and rooms are not joined by the carving
/// itself, so a door pass cuts one opening per room/region adjacency
/// and a pruning pass then unwinds the maze's dead ends.
pub struct RstLevelGenerator {
    builder: LevelBuilder,
    params: LevelParameters,
    plan: LevelPlan,
    seeds: SeedChain,
    connections: Vec<DoorConnection>,
}

impl RstLevelGenerator {
    pub fn new(builder: LevelBuilder) -> Self {
        Self {
            builder,
            params: LevelParameters::default(),
            plan: LevelPlan::default(),
            seeds: SeedChain::default(),
            connections: Vec::new(),
        }
    }

    /// The most recently generated level.
    pub fn level(&self) -> &Level {
        self.builder.level()
    }

    pub fn builder(&self) -> &LevelBuilder {
        &self.builder
    }

    /// Seed used by the most recent run.
    pub fn seed(&self) -> u32 {
        self.seeds.seed()
    }

    /// Seed the next run will use, if already determined.
    pub fn next_seed(&self) -> Option<u32> {
        self.seeds.next()
    }

    /// Pin the next run's seed; `None` reverts to entropy.
    pub fn set_next_seed(&mut self, seed: Option<u32>) {
        self.seeds.set_next(seed);
    }

    /// Door connection attempts recorded by the most recent run,
    /// including the room-to-room attempts whose opening was skipped.
    pub fn connections(&self) -> &[DoorConnection] {
        &self.connections
    }
}

impl Default for RstLevelGenerator {
    fn default() -> Self {
        Self::new(LevelBuilder::new())
    }
}

impl LevelGenerator for RstLevelGenerator {
    fn generate(&mut self) -> Result<(), GenerationError> {
        let mut rng = self.seeds.begin_run();
        debug!("generating maze level, seed {}", self.seeds.seed());

        self.builder.clear();
        self.plan.clear();
        self.connections.clear();

        if self.params.width <= 0 || self.params.height <= 0 {
            return Ok(());
        }

        self.plan.build_cell_graph(&self.params)?;
        rooms::fill_walls(&mut self.builder, &self.params);
        rooms::place_rooms(&mut self.plan, &mut self.builder, &self.params, &mut rng);

        if self.plan.rooms.len() <= 1 {
            return Ok(());
        }

        rooms::contract_rooms(&mut self.plan, &self.builder)?;
        maze::carve_mazes(&mut self.plan, &mut self.builder, &self.params, &mut rng)?;
        self.connections = doors::place_doors(&mut self.plan, &mut self.builder, &mut rng);
        prune::prune_dead_ends(&mut self.plan, &mut self.builder);

        Ok(())
    }

    fn set_parameters(&mut self, params: LevelParameters) {
        self.params = params;
    }

    fn parameters(&self) -> LevelParameters {
        self.params
    }
}
