use std::collections::{BinaryHeap, HashSet};

use warren_core::{Coord, Direction, GridCell, Maze, Path};

use crate::dirmap::DirectionMap;
use crate::explore::{ExploreObserver, notify};
use crate::frontier::Entry;

/// A* search: Dijkstra's relaxation over cost-so-far, ordered by
/// `g + heuristic(cell, dest)`.
///
/// With an admissible, consistent heuristic (the default
/// [`manhattan`](crate::manhattan) for 4-directional movement with
/// non-negative weights) the returned path has minimal total weight.
/// A popped entry whose priority exceeds the best known `g + h` for its
/// coordinate is stale and discarded.
pub fn astar<C, H>(
    maze: &Maze<C>,
    start: Coord,
    dest: Coord,
    heuristic: H,
    mut observer: Option<ExploreObserver<'_>>,
) -> Path
where
    C: GridCell,
    H: Fn(Coord, Coord) -> f32,
{
    if start == dest || !maze.contains(start) || !maze.contains(dest) {
        return Path::new();
    }
    let (w, h) = (maze.width(), maze.height());
    let mut dirmap = DirectionMap::new(w, h);
    let mut g = vec![f32::INFINITY; w * h];
    g[start.row * w + start.col] = 0.0;

    let mut open = BinaryHeap::from([Entry {
        priority: heuristic(start, dest),
        seq: 0,
        coord: start,
    }]);
    let mut seq = 1u64;
    let mut visited = HashSet::new();
    let mut scratch = Vec::new();

    while let Some(entry) = open.pop() {
        let current = entry.coord;
        // Stale entry: a cheaper route to this coordinate is already known.
        if entry.priority > g[current.row * w + current.col] + heuristic(current, dest) {
            continue;
        }
        if !visited.insert(current) {
            continue;
        }
        if observer.is_some() {
            scratch.clear();
            scratch.extend(open.iter().map(|e| e.coord));
            notify(&mut observer, current, &scratch, &visited);
        }
        if current == dest {
            return dirmap.rebuild(start, dest);
        }

        let base = g[current.row * w + current.col];
        for dir in Direction::ALL {
            if !current.has_dir(dir, w, h) {
                continue;
            }
            let next = current.toward(dir);
            let cell = maze.get_unchecked(next);
            if cell.is_wall() {
                continue;
            }
            let tentative = base + cell.weight();
            let slot = &mut g[next.row * w + next.col];
            if tentative < *slot {
                *slot = tentative;
                dirmap.set(next, dir);
                open.push(Entry {
                    priority: tentative + heuristic(next, dest),
                    seq,
                    coord: next,
                });
                seq += 1;
            }
        }
    }
    Path::new()
}
