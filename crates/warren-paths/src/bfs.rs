use std::collections::{HashSet, VecDeque};

use log::trace;

use warren_core::{Coord, Direction, GridCell, Maze, Path};

use crate::dirmap::DirectionMap;
use crate::explore::{ExploreObserver, notify};

/// Breadth-first search.
///
/// Level-synchronous FIFO expansion; ties break in discovery order.
/// Optimal in number of steps for an unweighted maze. Returns the empty
/// path when `start == dest` or the destination is unreachable.
pub fn bfs<C: GridCell>(
    maze: &Maze<C>,
    start: Coord,
    dest: Coord,
    mut observer: Option<ExploreObserver<'_>>,
) -> Path {
    if start == dest || !maze.contains(start) || !maze.contains(dest) {
        return Path::new();
    }
    let (w, h) = (maze.width(), maze.height());
    let mut dirmap = DirectionMap::new(w, h);
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut scratch = Vec::new();

    // Remaining-in-level counters give the exact depth of each dequeue.
    let mut in_level = 1usize;
    let mut next_level = 0usize;
    let mut depth = 0usize;

    while let Some(current) = queue.pop_front() {
        if observer.is_some() {
            scratch.clear();
            scratch.extend(queue.iter().copied());
            notify(&mut observer, current, &scratch, &visited);
        }
        if current == dest {
            trace!("bfs: destination reached at depth {depth}");
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
            queue.push_back(next);
            next_level += 1;
        }
        in_level -= 1;
        if in_level == 0 {
            in_level = next_level;
            next_level = 0;
            depth += 1;
        }
    }
    trace!("bfs: destination {dest} unreachable from {start}");
    Path::new()
}
