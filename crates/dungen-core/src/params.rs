//! Generation parameters.

use serde::{Deserialize, Serialize};

/// Size and room-count configuration for a generation run.
///
/// `width` and `height` describe the playable interior in tiles, not
/// counting the perimeter wall ring around it. Non-positive
/// dimensions are not an error; a run just produces an empty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelParameters {
    pub width: i32,
    pub height: i32,
    pub num_rooms: i32,
}

impl LevelParameters {
    pub const fn new(width: i32, height: i32, num_rooms: i32) -> Self {
        Self {
            width,
            height,
            num_rooms,
        }
    }
}

impl Default for LevelParameters {
    fn default() -> Self {
        Self::new(50, 50, 12)
    }
}
