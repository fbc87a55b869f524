//! Per-run working state shared by the pipeline generators.

use dungen_graph::KeyedGraph;

use crate::error::GenerationError;
use crate::params::LevelParameters;
use crate::region::Region;
use crate::vec2::Vec2i;

/// Working state for one generation run: the routing cell graph, the
/// room and hallway regions, and the room leader vertices.
///
/// Cleared, not reallocated, at the start of every run.
#[derive(Debug, Default)]
pub(crate) struct LevelPlan {
    /// 4-connected graph over the interior tiles, progressively
    /// contracted as rooms are placed.
    pub cells: KeyedGraph<Vec2i>,
    /// One region per placed room, in placement order.
    pub rooms: Vec<Region>,
    /// One region per carved hallway fragment.
    pub halls: Vec<Region>,
    /// Aggregate of all room tiles.
    pub room_tiles: Region,
    /// Aggregate of all hallway tiles.
    pub hall_tiles: Region,
    /// Leader vertex of each room, in placement order.
    pub leaders: Vec<Vec2i>,
}

impl LevelPlan {
    pub fn clear(&mut self) {
        self.cells.clear();
        self.rooms.clear();
        self.halls.clear();
        self.room_tiles.clear();
        self.hall_tiles.clear();
        self.leaders.clear();
    }

    /// Build the 4-connected cell graph over every interior tile of
    /// the playable area, row by row. Edges run only to the immediate
    /// horizontal and vertical neighbors.
    pub fn build_cell_graph(&mut self, params: &LevelParameters) -> Result<(), GenerationError> {
        for row in 1..=params.height {
            for col in 1..=params.width {
                let tile = Vec2i::new(col, row);
                self.cells.add_vertex(tile)?;
                if col > 1 {
                    self.cells.add_edge(&tile, &Vec2i::new(col - 1, row), ())?;
                }
                if row > 1 {
                    self.cells.add_edge(&tile, &Vec2i::new(col, row - 1), ())?;
                }
            }
        }
        Ok(())
    }
}
