//! Priority-queue plumbing shared by the weighted searches.

use std::cmp::Ordering;

use warren_core::Coord;

/// A heap entry: a coordinate keyed by an `f32` priority.
///
/// Ordering is reversed so `BinaryHeap` (a max-heap) pops the smallest
/// priority first; the monotonically increasing sequence number breaks
/// priority ties in insertion order. Entries are never removed in place:
/// a popped entry whose value is worse than the best recorded one is
/// discarded by the caller (lazy deletion).
#[derive(Copy, Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: f32,
    pub(crate) seq: u64,
    pub(crate) coord: Coord,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_smallest_priority_first() {
        let mut heap = BinaryHeap::new();
        for (i, p) in [3.0, 1.0, 2.0].into_iter().enumerate() {
            heap.push(Entry {
                priority: p,
                seq: i as u64,
                coord: Coord::new(0, i),
            });
        }
        let order: Vec<f32> = std::iter::from_fn(|| heap.pop().map(|e| e.priority)).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut heap = BinaryHeap::new();
        for seq in 0..4u64 {
            heap.push(Entry {
                priority: 1.0,
                seq,
                coord: Coord::new(seq as usize, 0),
            });
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|e| e.seq)).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}
