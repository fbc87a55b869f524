//! A fixed smoke-test level.

use crate::error::GenerationError;
use crate::level::{Level, LevelBuilder};
use crate::params::LevelParameters;
use crate::vec2::Vec2i;

use super::LevelGenerator;

/// Emits the same 10x10 walled box on every run.
///
/// Useful for exercising a renderer or the builder contract without
/// involving the random pipeline.
pub struct FixedLevelGenerator {
    builder: LevelBuilder,
    params: LevelParameters,
}

impl FixedLevelGenerator {
    pub fn new(builder: LevelBuilder) -> Self {
        Self {
            builder,
            params: LevelParameters::new(8, 8, 0),
        }
    }

    pub fn level(&self) -> &Level {
        self.builder.level()
    }

    pub fn builder(&self) -> &LevelBuilder {
        &self.builder
    }
}

impl Default for FixedLevelGenerator {
    fn default() -> Self {
        Self::new(LevelBuilder::new())
    }
}

impl LevelGenerator for FixedLevelGenerator {
    fn generate(&mut self) -> Result<(), GenerationError> {
        self.builder.clear();
        for i in 0..10 {
            for j in 0..10 {
                let tile = Vec2i::new(i, j);
                if i == 0 || i == 9 || j == 0 || j == 9 {
                    self.builder.place_wall(tile);
                } else {
                    self.builder.place_floor(tile);
                }
            }
        }
        Ok(())
    }

    fn set_parameters(&mut self, params: LevelParameters) {
        self.params = params;
    }

    fn parameters(&self) -> LevelParameters {
        self.params
    }
}
