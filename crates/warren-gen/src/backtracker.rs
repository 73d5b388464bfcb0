use log::debug;
use rand::Rng;
use rand::RngExt;

use warren_core::{Coord, GridCell, Maze};

use crate::MazeGen;
use crate::nodes::NodeGrid;

impl<R: Rng> MazeGen<R> {
    /// Carve a maze with the recursive backtracker (iterative form).
    ///
    /// Depth-first carving with an explicit backtracking stack: from the
    /// current node, pick a random unvisited neighbor, open the wall
    /// between, and descend; pop when no unvisited neighbor remains.
    /// Produces long winding corridors.
    pub fn backtracker<C>(&mut self, maze: &mut Maze<C>, wall: C, passage: C)
    where
        C: GridCell + Clone,
    {
        let ng = NodeGrid::of(maze);
        if ng.is_empty() {
            maze.fill(passage);
            return;
        }
        maze.fill(wall);

        let start = Coord::new(
            self.rng.random_range(0..ng.rows),
            self.rng.random_range(0..ng.cols),
        );
        let mut visited = vec![false; ng.len()];
        visited[ng.index(start)] = true;
        *maze.get_unchecked_mut(ng.cell(start)) = passage.clone();

        let mut stack = vec![start];
        let mut nbuf = Vec::with_capacity(4);
        let mut opened = 0usize;

        while let Some(&current) = stack.last() {
            ng.neighbors(current, &mut nbuf);
            nbuf.retain(|n| !visited[ng.index(*n)]);
            if nbuf.is_empty() {
                stack.pop();
                continue;
            }
            let next = nbuf[self.rng.random_range(0..nbuf.len())];
            *maze.get_unchecked_mut(ng.wall_between(current, next)) = passage.clone();
            *maze.get_unchecked_mut(ng.cell(next)) = passage.clone();
            visited[ng.index(next)] = true;
            stack.push(next);
            opened += 1;
        }

        debug!(
            "backtracker: {}x{} nodes, {} passages opened",
            ng.rows, ng.cols, opened
        );
    }
}
