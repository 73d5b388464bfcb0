//! The node graph laid over a maze grid.
//!
//! Maze generation does not carve into arbitrary cells: graph nodes sit at
//! odd/odd grid coordinates spaced two cells apart (node (r, c) occupies
//! grid cell (2r+1, 2c+1)), and the cell midway between two adjacent nodes
//! is the wall that opens when their edge enters the spanning tree.

use warren_core::{Coord, Direction, Maze};

/// Node-space dimensions of the graph carved into a grid.
///
/// `rows = (height-1)/2`, `cols = (width-1)/2`. A grid too small for even
/// one node yields an empty node graph; generation then degenerates to an
/// all-passage fill.
#[derive(Copy, Clone, Debug)]
pub(crate) struct NodeGrid {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl NodeGrid {
    pub(crate) fn of<C>(maze: &Maze<C>) -> Self {
        Self {
            rows: (maze.height() - 1) / 2,
            cols: (maze.width() - 1) / 2,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Total node count.
    pub(crate) fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat node-space index.
    #[inline]
    pub(crate) fn index(&self, node: Coord) -> usize {
        node.row * self.cols + node.col
    }

    /// Grid cell occupied by a node.
    #[inline]
    pub(crate) fn cell(&self, node: Coord) -> Coord {
        Coord::new(2 * node.row + 1, 2 * node.col + 1)
    }

    /// Grid cell of the wall between two adjacent nodes.
    #[inline]
    pub(crate) fn wall_between(&self, a: Coord, b: Coord) -> Coord {
        let ca = self.cell(a);
        let cb = self.cell(b);
        Coord::new((ca.row + cb.row) / 2, (ca.col + cb.col) / 2)
    }

    /// Collect the in-bounds node-space neighbors of `node` into `buf`.
    ///
    /// `buf` is cleared first; callers reuse one buffer across the whole
    /// generation run.
    pub(crate) fn neighbors(&self, node: Coord, buf: &mut Vec<Coord>) {
        buf.clear();
        for dir in Direction::ALL {
            if node.has_dir(dir, self.cols, self.rows) {
                buf.push(node.toward(dir));
            }
        }
    }
}
