//! The exploration-observer protocol.
//!
//! Every search accepts an optional observer invoked once per examined
//! node. The call is synchronous and blocking: the search does not move on
//! until the observer returns, which makes the observer the natural
//! cooperative suspension (and cancellation) point for animated consumers.

use std::collections::HashSet;

use warren_core::Coord;

/// A borrowed snapshot of search progress.
///
/// `frontier` holds the coordinates still pending examination (for the
/// priority-queue searches this may include stale duplicates); `visited`
/// is the set of coordinates discovered so far. Both borrows end when the
/// observer returns.
pub struct ExploreState<'a> {
    pub current: Coord,
    pub frontier: &'a [Coord],
    pub visited: &'a HashSet<Coord>,
}

/// Observer callback passed into a search call.
pub type ExploreObserver<'a> = &'a mut dyn FnMut(ExploreState<'_>);

/// Invoke the observer, if any.
#[inline]
pub(crate) fn notify(
    observer: &mut Option<ExploreObserver<'_>>,
    current: Coord,
    frontier: &[Coord],
    visited: &HashSet<Coord>,
) {
    if let Some(cb) = observer.as_deref_mut() {
        cb(ExploreState {
            current,
            frontier,
            visited,
        });
    }
}
