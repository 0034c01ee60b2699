//! Lattice generators shared by the built-in maps.

use rustc_hash::FxHashMap;

use crate::core::{NodeId, Player};
use crate::graph::{GraphBuilder, Node, Position};

/// Display units per unit of grid space.
pub const SCALE: f64 = 1000.0;

/// Lattice coordinate.
pub type Cell = (i32, i32);

/// Neighbour offset used by [`Grid::connect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
    /// Edges along this offset form the outer wall where both ends lie on
    /// the rim.
    pub walled: bool,
}

impl Offset {
    #[must_use]
    pub const fn open(dx: i32, dy: i32) -> Self {
        Self { dx, dy, walled: false }
    }

    #[must_use]
    pub const fn walled(dx: i32, dy: i32) -> Self {
        Self { dx, dy, walled: true }
    }
}

/// A lattice of nodes being assembled into a graph.
#[derive(Clone, Debug)]
pub struct Grid {
    builder: GraphBuilder,
    /// Cells in insertion order, indexed by `NodeId`.
    cells: Vec<Cell>,
    lookup: FxHashMap<Cell, NodeId>,
    start: NodeId,
}

impl Grid {
    fn empty() -> Self {
        Self {
            builder: GraphBuilder::new(),
            cells: Vec::new(),
            lookup: FxHashMap::default(),
            start: NodeId(0),
        }
    }

    fn insert(&mut self, cell: Cell, position: Position, boundary: bool) {
        let mut node = Node::new(position);
        if boundary {
            node = node.on_boundary();
        }
        let id = self.builder.add_node(node);
        self.cells.push(cell);
        self.lookup.insert(cell, id);
    }

    fn set_exit(&mut self, cell: Cell, player: Player) {
        if let Some(node) = self.lookup.get(&cell).and_then(|&id| self.builder.node_mut(id)) {
            node.exit = Some(player);
        }
    }

    fn finish_layout(&mut self, p1_exit: Cell, p2_exit: Cell) {
        self.set_exit(p1_exit, Player::P1);
        self.set_exit(p2_exit, Player::P2);
        if let Some(&center) = self.lookup.get(&(0, 0)) {
            self.start = center;
        }
    }

    /// Square lattice over `-size..=size` in both axes.
    ///
    /// Exits sit at the middle of the left (P1) and right (P2) sides; the
    /// token starts in the centre.
    #[must_use]
    pub fn rectangular(size: i32) -> Self {
        let mut grid = Self::empty();
        let spacing = 0.8 / f64::from(size.max(1));

        for y in -size..=size {
            for x in -size..=size {
                let boundary = x == -size || x == size || y == -size || y == size;
                let position = Position::new(f64::from(x) * spacing * SCALE, f64::from(y) * spacing * SCALE);
                grid.insert((x, y), position, boundary);
            }
        }

        grid.finish_layout((-size, 0), (size, 0));
        grid
    }

    /// Hexagon in axial coordinates: the square `-size..=size` with cells
    /// where `|x - y| > size` cut off.
    ///
    /// Exits sit at opposite corners, `(-size, -size)` for P1 and
    /// `(size, size)` for P2.
    #[must_use]
    pub fn hexagonal(size: i32) -> Self {
        let mut grid = Self::empty();
        let spacing = 0.9 / f64::from(size.max(1));
        let up = 0.75_f64.sqrt();

        for y in -size..=size {
            for x in -size..=size {
                let skew = x - y;
                if skew < -size || skew > size {
                    continue;
                }
                let boundary = x == -size || x == size || y == -size || y == size || skew == -size || skew == size;
                let position = Position::new(
                    f64::from(x + y) * 0.5 * spacing * SCALE,
                    f64::from(skew) * up * spacing * SCALE,
                );
                grid.insert((x, y), position, boundary);
            }
        }

        grid.finish_layout((-size, -size), (size, size));
        grid
    }

    /// Add an edge from every cell `p` to `p - offset`, for each offset.
    ///
    /// Walled offsets never join a rim cell to an exit, and edges between
    /// two rim cells start out used.
    pub fn connect(&mut self, offsets: &[Offset]) {
        for index in 0..self.cells.len() {
            let (x, y) = self.cells[index];
            let here = NodeId(index as u32);

            for offset in offsets {
                let Some(&there) = self.lookup.get(&(x - offset.dx, y - offset.dy)) else {
                    continue;
                };

                let (here_boundary, here_exit) = self.flags(here);
                let (there_boundary, there_exit) = self.flags(there);
                if offset.walled && ((here_boundary && there_exit) || (there_boundary && here_exit)) {
                    continue;
                }

                let used = offset.walled && here_boundary && there_boundary;
                self.builder.add_edge(here, there, used);
            }
        }
    }

    fn flags(&self, node: NodeId) -> (bool, bool) {
        self.builder
            .node(node)
            .map_or((false, false), |node| (node.boundary, node.is_exit()))
    }

    /// The node at a lattice cell.
    #[must_use]
    pub fn node_at(&self, cell: Cell) -> Option<NodeId> {
        self.lookup.get(&cell).copied()
    }

    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.cells.len()
    }

    /// Hand the assembled lists over for validation.
    #[must_use]
    pub fn into_builder(self) -> GraphBuilder {
        self.builder
    }
}
