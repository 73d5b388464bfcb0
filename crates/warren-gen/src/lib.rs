//! **warren-gen** — maze generation for the warren grid engine.
//!
//! Three classical carving algorithms over the node graph of a
//! [`Maze`](warren_core::Maze), plus a weighted random terrain fill:
//!
//! | Algorithm | Texture |
//! |---|---|
//! | [`MazeGen::backtracker`] | long winding corridors |
//! | [`MazeGen::prim`] | short uniform branching |
//! | [`MazeGen::kruskal`] | least-biased, most uniform |
//!
//! Every carving algorithm produces a spanning tree over the node graph:
//! all nodes connected, no cycles, exactly `nodes - 1` opened passages.
//!
//! Randomness is injectable: [`MazeGen::new`] seeds from thread-local
//! entropy, [`MazeGen::with_rng`] accepts any [`Rng`] for reproducible
//! generation. A generator is not meant to be shared across concurrent
//! calls; give each worker its own.

mod backtracker;
mod kruskal;
mod nodes;
mod prim;
mod terrain;
mod unionfind;

pub use terrain::TerrainError;
pub use unionfind::DisjointSets;

use rand::Rng;
use rand::rngs::ThreadRng;

use warren_core::{GridCell, Maze};

/// Selects a maze carving algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationAlgorithm {
    RecursiveBacktracker,
    Prim,
    Kruskal,
}

/// Maze generator owning its randomness source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<ThreadRng> {
    /// A generator seeded from thread-local entropy.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for MazeGen<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MazeGen<R> {
    /// A generator using the supplied randomness source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze in place with the chosen algorithm.
    ///
    /// The grid is first filled with `wall`, then passages are opened with
    /// `passage` so that every passage cell is reachable from every other.
    /// A grid too small to hold any maze node is filled entirely with
    /// `passage` instead.
    pub fn generate<C>(
        &mut self,
        maze: &mut Maze<C>,
        algorithm: GenerationAlgorithm,
        wall: C,
        passage: C,
    ) where
        C: GridCell + Clone,
    {
        match algorithm {
            GenerationAlgorithm::RecursiveBacktracker => self.backtracker(maze, wall, passage),
            GenerationAlgorithm::Prim => self.prim(maze, wall, passage),
            GenerationAlgorithm::Kruskal => self.kruskal(maze, wall, passage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use warren_core::{Color, Coord, Direction, Tile};

    fn wall() -> Tile {
        Tile::wall('#', Color::Red)
    }

    fn passage() -> Tile {
        Tile::passage(' ', Color::White)
    }

    fn count_passages(maze: &Maze<Tile>) -> usize {
        maze.iter().filter(|(_, c)| !c.is_wall()).count()
    }

    /// Flood fill from the first passage cell, counting reachable passages.
    fn count_reachable_passages(maze: &Maze<Tile>) -> usize {
        let Some((start, _)) = maze.iter().find(|(_, c)| !c.is_wall()) else {
            return 0;
        };
        let (w, h) = (maze.width(), maze.height());
        let mut seen = vec![false; w * h];
        seen[start.row * w + start.col] = true;
        let mut queue = VecDeque::from([start]);
        let mut count = 0;
        while let Some(current) = queue.pop_front() {
            count += 1;
            for dir in Direction::ALL {
                if !current.has_dir(dir, w, h) {
                    continue;
                }
                let next = current.toward(dir);
                if seen[next.row * w + next.col] || maze.get_unchecked(next).is_wall() {
                    continue;
                }
                seen[next.row * w + next.col] = true;
                queue.push_back(next);
            }
        }
        count
    }

    fn check_spanning_generation(algorithm: GenerationAlgorithm, seed: u64) {
        let mut maze = Maze::<Tile>::new(21, 21).unwrap();
        let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(seed));
        mg.generate(&mut maze, algorithm, wall(), passage());

        let total = count_passages(&maze);
        // 10x10 nodes plus the 99 spanning-tree openings between them.
        assert_eq!(total, 2 * 10 * 10 - 1);
        assert_eq!(count_reachable_passages(&maze), total);
    }

    #[test]
    fn backtracker_carves_a_spanning_tree() {
        for seed in 0..4 {
            check_spanning_generation(GenerationAlgorithm::RecursiveBacktracker, seed);
        }
    }

    #[test]
    fn prim_carves_a_spanning_tree() {
        for seed in 0..4 {
            check_spanning_generation(GenerationAlgorithm::Prim, seed);
        }
    }

    #[test]
    fn kruskal_carves_a_spanning_tree() {
        for seed in 0..4 {
            check_spanning_generation(GenerationAlgorithm::Kruskal, seed);
        }
    }

    #[test]
    fn grid_too_small_for_nodes_becomes_all_passage() {
        for algorithm in [
            GenerationAlgorithm::RecursiveBacktracker,
            GenerationAlgorithm::Prim,
            GenerationAlgorithm::Kruskal,
        ] {
            let mut maze = Maze::<Tile>::new(2, 2).unwrap();
            let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(7));
            mg.generate(&mut maze, algorithm, wall(), passage());
            assert_eq!(count_passages(&maze), 4);
        }
    }

    #[test]
    fn one_node_grid_carves_a_single_cell() {
        let mut maze = Maze::<Tile>::new(3, 3).unwrap();
        let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(7));
        mg.generate(
            &mut maze,
            GenerationAlgorithm::RecursiveBacktracker,
            wall(),
            passage(),
        );
        assert_eq!(count_passages(&maze), 1);
        assert!(!maze.get_unchecked(Coord::new(1, 1)).is_wall());
    }

    #[test]
    fn same_seed_reproduces_the_same_maze() {
        let mut a = Maze::<Tile>::new(15, 15).unwrap();
        let mut b = Maze::<Tile>::new(15, 15).unwrap();
        MazeGen::with_rng(StdRng::seed_from_u64(42)).generate(
            &mut a,
            GenerationAlgorithm::Prim,
            wall(),
            passage(),
        );
        MazeGen::with_rng(StdRng::seed_from_u64(42)).generate(
            &mut b,
            GenerationAlgorithm::Prim,
            wall(),
            passage(),
        );
        let cells_a: Vec<bool> = a.iter().map(|(_, c)| c.is_wall()).collect();
        let cells_b: Vec<bool> = b.iter().map(|(_, c)| c.is_wall()).collect();
        assert_eq!(cells_a, cells_b);
    }
}
