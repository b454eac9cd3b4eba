use std::collections::{HashSet, VecDeque};

use pathviz_core::Position;

use crate::event::StepEvent;
use crate::search::{Progress, StepSequence};
use crate::snapshot::GridSnapshot;
use crate::traits::Pather;

/// Breadth-first search as a step sequence.
///
/// Every edge counts 1, so the first time the end is dequeued the came-from
/// chain is a shortest path in edge count.
#[derive(Debug, Clone)]
pub struct Bfs<P = GridSnapshot> {
    pather: P,
    progress: Progress,
    queue: VecDeque<Position>,
    /// Positions already enqueued; each is queued at most once.
    seen: HashSet<Position>,
    nbuf: Vec<Position>,
}

impl<P: Pather> Bfs<P> {
    /// Prepare a search from `start` to `end`. No work happens until the
    /// first [`advance`](StepSequence::advance).
    pub fn new(pather: P, start: Position, end: Position) -> Self {
        Self {
            pather,
            progress: Progress::new(start, end),
            queue: VecDeque::from([start]),
            seen: HashSet::from([start]),
            nbuf: Vec::with_capacity(4),
        }
    }
}

impl<P: Pather> StepSequence for Bfs<P> {
    fn advance(&mut self) -> Option<StepEvent> {
        if self.progress.done {
            return None;
        }

        while let Some(current) = self.queue.pop_front() {
            if current == self.progress.end {
                return Some(self.progress.found());
            }

            self.nbuf.clear();
            self.pather.neighbors(current, &mut self.nbuf);
            for &np in &self.nbuf {
                if self.seen.insert(np) {
                    self.progress.came_from.insert(np, current);
                    self.queue.push_back(np);
                }
            }

            // The start keeps its own state; expanding it is silent.
            if current != self.progress.start {
                return Some(self.progress.visit(current));
            }
        }

        Some(self.progress.exhausted())
    }

    fn visited(&self) -> u32 {
        self.progress.visited
    }

    fn is_done(&self) -> bool {
        self.progress.done
    }
}
