//! Built-in maps.
//!
//! Each map is a lattice from [`grid`] joined by a fixed set of neighbour
//! offsets. Rim edges along walled offsets start out used, which closes the
//! board except for the diagonal approaches to the exits.

pub mod grid;

use serde::{Deserialize, Serialize};

use crate::core::{BuildError, NodeId};
use crate::graph::GraphModel;

pub use grid::{Cell, Grid, Offset, SCALE};

/// A validated map with the token's starting node.
#[derive(Clone, Debug)]
pub struct MapLayout {
    pub graph: GraphModel,
    pub start: NodeId,
}

/// The built-in maps, in menu order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapKind {
    #[default]
    Original,
    Horse,
    Hexagon,
    HexagonDense,
}

impl MapKind {
    pub const ALL: [MapKind; 4] = [MapKind::Original, MapKind::Horse, MapKind::Hexagon, MapKind::HexagonDense];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MapKind::Original => "Original",
            MapKind::Horse => "Horse",
            MapKind::Hexagon => "Hexagon",
            MapKind::HexagonDense => "Hexagon dense",
        }
    }

    /// The unconnected lattice and its neighbour offsets.
    fn blueprint(self) -> (Grid, &'static [Offset]) {
        const ORIGINAL: [Offset; 4] = [
            Offset::open(1, -1),
            Offset::walled(1, 0),
            Offset::open(1, 1),
            Offset::walled(0, 1),
        ];
        // Knight moves.
        const HORSE: [Offset; 4] = [Offset::open(-2, 1), Offset::open(2, 1), Offset::open(-1, 2), Offset::open(1, 2)];
        const HEXAGON: [Offset; 3] = [Offset::walled(0, 1), Offset::walled(1, 0), Offset::walled(1, 1)];
        const HEXAGON_DENSE: [Offset; 6] = [
            Offset::walled(0, 1),
            Offset::walled(1, 0),
            Offset::walled(1, 1),
            Offset::open(2, 1),
            Offset::open(1, 2),
            Offset::open(1, -1),
        ];

        match self {
            MapKind::Original => (Grid::rectangular(5), &ORIGINAL),
            MapKind::Horse => (Grid::rectangular(5), &HORSE),
            MapKind::Hexagon => (Grid::hexagonal(6), &HEXAGON),
            MapKind::HexagonDense => (Grid::hexagonal(5), &HEXAGON_DENSE),
        }
    }

    /// Generate the map.
    pub fn layout(self) -> Result<MapLayout, BuildError> {
        let (mut grid, offsets) = self.blueprint();
        grid.connect(offsets);
        let start = grid.start();
        let graph = grid.into_builder().build()?;
        log::debug!(
            "built map {}: {} nodes, {} edges",
            self,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(MapLayout { graph, start })
    }
}

impl std::fmt::Display for MapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
