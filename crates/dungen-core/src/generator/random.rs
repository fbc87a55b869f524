//! The corridor-routed level generator.

use log::debug;

use crate::error::GenerationError;
use crate::level::{Level, LevelBuilder};
use crate::params::LevelParameters;
use crate::rng::SeedChain;

use super::plan::LevelPlan;
use super::{LevelGenerator, prune, rooms, routing};

/// Generates a level of walled rooms joined by corridors routed along
/// the minimum spanning tree of their pairwise shortest paths.
///
/// Corridors carve straight through the wall ring of the rooms they
/// connect, so no separate door pass is needed.
pub struct RandomLevelGenerator {
    builder: LevelBuilder,
    params: LevelParameters,
    plan: LevelPlan,
    seeds: SeedChain,
}

impl RandomLevelGenerator {
    pub fn new(builder: LevelBuilder) -> Self {
        Self {
            builder,
            params: LevelParameters::default(),
            plan: LevelPlan::default(),
            seeds: SeedChain::default(),
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
}

impl Default for RandomLevelGenerator {
    fn default() -> Self {
        Self::new(LevelBuilder::new())
    }
}

impl LevelGenerator for RandomLevelGenerator {
    fn generate(&mut self) -> Result<(), GenerationError> {
        let mut rng = self.seeds.begin_run();
        debug!("generating level, seed {}", self.seeds.seed());

        self.builder.clear();
        self.plan.clear();

        if self.params.width <= 0 || self.params.height <= 0 {
            return Ok(());
        }

        self.plan.build_cell_graph(&self.params)?;
        rooms::fill_walls(&mut self.builder, &self.params);
        rooms::place_rooms(&mut self.plan, &mut self.builder, &self.params, &mut rng);

        // With one room or none there is nothing to route; the carved
        // field is the result.
        if self.plan.rooms.len() <= 1 {
            return Ok(());
        }

        rooms::contract_rooms(&mut self.plan, &self.builder)?;
        routing::route_hallways(&mut self.plan, &mut self.builder)?;
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
