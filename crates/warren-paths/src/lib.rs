//! **warren-paths** — pathfinding for the warren grid engine.
//!
//! Five classical search algorithms over a [`Maze`](warren_core::Maze),
//! each streaming live exploration state to an optional observer:
//!
//! | Algorithm | Queue | Optimal |
//! |---|---|---|
//! | [`bfs`] | FIFO | steps (unweighted) |
//! | [`dfs`] | LIFO | no |
//! | [`dijkstra`] | min-heap on cost | total weight |
//! | [`astar`] | min-heap on cost + heuristic | total weight |
//! | [`greedy`] | min-heap on heuristic | no |
//!
//! All searches share one contract: 4-directional movement, a neighbor is
//! traversable iff its cell is not a wall, and the result is a sequence of
//! [`Direction`](warren_core::Direction)s leading from start to
//! destination. The empty path covers both "start equals destination" and
//! "destination unreachable"; callers compare the endpoints themselves
//! when they need to tell the two apart.
//!
//! The engine is synchronous and single-threaded: the only suspension
//! point is the observer call, which also serves as the cooperative
//! cancellation hook for animated consumers (see [`ExploreState`]).

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod dirmap;
mod explore;
mod frontier;
mod greedy;
mod heuristic;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use dirmap::DirectionMap;
pub use explore::{ExploreObserver, ExploreState};
pub use greedy::greedy;
pub use heuristic::{euclidean, manhattan};

use warren_core::{Coord, GridCell, Maze, Path};

/// Selects a pathfinding algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    GreedyBestFirst,
}

/// Search the maze with the chosen algorithm.
///
/// The informed algorithms use the [`manhattan`] heuristic; call
/// [`astar`]/[`greedy`] directly to supply another (e.g. [`euclidean`]).
/// Out-of-bounds endpoints yield the empty path.
pub fn find_path<C: GridCell>(
    maze: &Maze<C>,
    algorithm: Algorithm,
    start: Coord,
    dest: Coord,
    observer: Option<ExploreObserver<'_>>,
) -> Path {
    match algorithm {
        Algorithm::Bfs => bfs(maze, start, dest, observer),
        Algorithm::Dfs => dfs(maze, start, dest, observer),
        Algorithm::Dijkstra => dijkstra(maze, start, dest, observer),
        Algorithm::AStar => astar(maze, start, dest, manhattan, observer),
        Algorithm::GreedyBestFirst => greedy(maze, start, dest, manhattan, observer),
    }
}

/// All five algorithms, handy for exhaustive tests and UI menus.
pub const ALGORITHMS: [Algorithm; 5] = [
    Algorithm::Bfs,
    Algorithm::Dfs,
    Algorithm::Dijkstra,
    Algorithm::AStar,
    Algorithm::GreedyBestFirst,
];
