use std::collections::{BinaryHeap, HashSet};

use log::trace;

use warren_core::{Coord, Direction, GridCell, Maze, Path};

use crate::dirmap::DirectionMap;
use crate::explore::{ExploreObserver, notify};
use crate::frontier::Entry;

/// Dijkstra's shortest-path search over accumulated cell weights.
///
/// The queue is keyed by distance-so-far with insertion-order tie-breaks.
/// A coordinate may sit in the queue at several distances; a popped entry
/// beaten by a later relaxation is discarded rather than removed in place.
/// A neighbor is relaxed to `distance[current] + neighbor.weight()` only
/// when that is strictly smaller than its recorded distance, in which case
/// its arrival direction is overwritten.
pub fn dijkstra<C: GridCell>(
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
    let mut dist = vec![f32::INFINITY; w * h];
    dist[start.row * w + start.col] = 0.0;

    let mut open = BinaryHeap::from([Entry {
        priority: 0.0,
        seq: 0,
        coord: start,
    }]);
    let mut seq = 1u64;
    let mut visited = HashSet::new();
    let mut scratch = Vec::new();

    while let Some(entry) = open.pop() {
        let current = entry.coord;
        // Stale entry: a cheaper distance was recorded after this push.
        if entry.priority > dist[current.row * w + current.col] {
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
            trace!(
                "dijkstra: destination reached at cost {}",
                dist[current.row * w + current.col]
            );
            return dirmap.rebuild(start, dest);
        }

        let base = dist[current.row * w + current.col];
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
            let slot = &mut dist[next.row * w + next.col];
            if tentative < *slot {
                *slot = tentative;
                dirmap.set(next, dir);
                open.push(Entry {
                    priority: tentative,
                    seq,
                    coord: next,
                });
                seq += 1;
            }
        }
    }
    Path::new()
}
