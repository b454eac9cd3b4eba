//! Priority frontier shared by Dijkstra and A*.
//!
//! Entries are stored in a min-heap keyed by `(rank, tie, insertion_order)`.
//! Lower ranks are popped first; equal ranks fall back to the secondary key
//! and then to insertion order (FIFO), which keeps runs reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pathviz_core::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) rank: i32,
    pub(crate) tie: i32,
    /// Monotonically increasing counter. Lower = inserted earlier.
    pub(crate) seq: u64,
    pub(crate) pos: Position,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.rank
            .cmp(&other.rank)
            .then(self.tie.cmp(&other.tie))
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, pos: Position, rank: i32, tie: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            rank,
            tie,
            seq,
            pos,
        }));
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(e)| e)
    }
}
