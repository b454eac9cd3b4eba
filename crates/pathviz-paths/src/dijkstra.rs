use std::collections::{HashMap, HashSet};

use pathviz_core::Position;

use crate::event::StepEvent;
use crate::frontier::Frontier;
use crate::search::{Progress, StepSequence};
use crate::snapshot::GridSnapshot;
use crate::traits::WeightedPather;

/// Dijkstra's algorithm as a step sequence.
///
/// Edge costs come from [`WeightedPather::cost`]. Equal distances pop in
/// insertion order. Stale heap entries are skipped lazily once their
/// position is closed.
#[derive(Debug, Clone)]
pub struct Dijkstra<P = GridSnapshot> {
    pather: P,
    progress: Progress,
    frontier: Frontier,
    dist: HashMap<Position, i32>,
    closed: HashSet<Position>,
    nbuf: Vec<Position>,
}

impl<P: WeightedPather> Dijkstra<P> {
    pub fn new(pather: P, start: Position, end: Position) -> Self {
        let mut frontier = Frontier::default();
        frontier.push(start, 0, 0);
        Self {
            pather,
            progress: Progress::new(start, end),
            frontier,
            dist: HashMap::from([(start, 0)]),
            closed: HashSet::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Best known distance to `p` so far.
    pub fn distance(&self, p: Position) -> Option<i32> {
        self.dist.get(&p).copied()
    }
}

impl<P: WeightedPather> StepSequence for Dijkstra<P> {
    fn advance(&mut self) -> Option<StepEvent> {
        if self.progress.done {
            return None;
        }

        while let Some(entry) = self.frontier.pop() {
            let current = entry.pos;
            if !self.closed.insert(current) {
                continue;
            }
            if current == self.progress.end {
                return Some(self.progress.found());
            }

            let current_dist = entry.rank;
            self.nbuf.clear();
            self.pather.neighbors(current, &mut self.nbuf);
            for &np in &self.nbuf {
                if self.closed.contains(&np) {
                    continue;
                }
                let tentative = current_dist + self.pather.cost(current, np);
                if self.dist.get(&np).is_some_and(|&d| tentative >= d) {
                    continue;
                }
                self.dist.insert(np, tentative);
                self.progress.came_from.insert(np, current);
                self.frontier.push(np, tentative, 0);
            }

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
