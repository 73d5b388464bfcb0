use std::collections::{BinaryHeap, HashSet};

use warren_core::{Coord, Direction, GridCell, Maze, Path};

use crate::dirmap::DirectionMap;
use crate::explore::{ExploreObserver, notify};
use crate::frontier::Entry;

/// Greedy best-first search.
///
/// Orders the frontier by heuristic distance to the destination alone,
/// ignoring accumulated cost: typically fast to converge, with no
/// optimality guarantee. Coordinates are marked visited at first enqueue
/// rather than first pop, so no coordinate enters the frontier twice and
/// no stale entries arise.
pub fn greedy<C, H>(
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
    let mut visited = HashSet::from([start]);
    let mut open = BinaryHeap::from([Entry {
        priority: heuristic(start, dest),
        seq: 0,
        coord: start,
    }]);
    let mut seq = 1u64;
    let mut scratch = Vec::new();

    while let Some(entry) = open.pop() {
        let current = entry.coord;
        if observer.is_some() {
            scratch.clear();
            scratch.extend(open.iter().map(|e| e.coord));
            notify(&mut observer, current, &scratch, &visited);
        }
        if current == dest {
            return dirmap.rebuild(start, dest);
        }
        for dir in Direction::ALL {
            if !current.has_dir(dir, w, h) {
                continue;
            }
            let next = current.toward(dir);
            if maze.get_unchecked(next).is_wall() || !visited.insert(next) {
                continue;
            }
            dirmap.set(next, dir);
            open.push(Entry {
                priority: heuristic(next, dest),
                seq,
                coord: next,
            });
            seq += 1;
        }
    }
    Path::new()
}
