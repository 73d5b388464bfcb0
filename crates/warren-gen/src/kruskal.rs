use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use warren_core::{Coord, GridCell, Maze};

use crate::MazeGen;
use crate::nodes::NodeGrid;
use crate::unionfind::DisjointSets;

impl<R: Rng> MazeGen<R> {
    /// Carve a maze with randomized Kruskal edge sampling.
    ///
    /// Enumerates every node-to-node edge once (east and south neighbors
    /// only), shuffles the list, then scans it: an edge whose endpoints lie
    /// in different union-find sets is accepted and its wall opened, any
    /// other edge would close a cycle and is skipped. Produces the most
    /// uniform maze texture of the three algorithms.
    pub fn kruskal<C>(&mut self, maze: &mut Maze<C>, wall: C, passage: C)
    where
        C: GridCell + Clone,
    {
        let ng = NodeGrid::of(maze);
        if ng.is_empty() {
            maze.fill(passage);
            return;
        }
        maze.fill(wall);

        // Every node ends up in the tree, so all node cells are passages.
        let mut edges = Vec::with_capacity(2 * ng.len());
        for row in 0..ng.rows {
            for col in 0..ng.cols {
                let node = Coord::new(row, col);
                *maze.get_unchecked_mut(ng.cell(node)) = passage.clone();
                if col + 1 < ng.cols {
                    edges.push((node, Coord::new(row, col + 1)));
                }
                if row + 1 < ng.rows {
                    edges.push((node, Coord::new(row + 1, col)));
                }
            }
        }
        edges.shuffle(&mut self.rng);

        let mut sets = DisjointSets::new(ng.len());
        let mut opened = 0usize;
        for (a, b) in edges {
            if sets.union(ng.index(a), ng.index(b)) {
                *maze.get_unchecked_mut(ng.wall_between(a, b)) = passage.clone();
                opened += 1;
            }
        }

        debug!(
            "kruskal: {}x{} nodes, {} passages opened",
            ng.rows, ng.cols, opened
        );
    }
}
