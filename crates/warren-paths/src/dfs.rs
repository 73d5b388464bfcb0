use std::collections::HashSet;

use warren_core::{Coord, Direction, GridCell, Maze, Path};

use crate::dirmap::DirectionMap;
use crate::explore::{ExploreObserver, notify};

/// Depth-first search.
///
/// LIFO expansion; returns the first path discovered, not necessarily the
/// shortest. A search where `start == dest` returns the empty
/// "already there" path immediately, which the path alone cannot
/// distinguish from an unreachable destination.
pub fn dfs<C: GridCell>(
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
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        notify(&mut observer, current, &stack, &visited);
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
            stack.push(next);
        }
    }
    Path::new()
}
