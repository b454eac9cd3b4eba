use std::collections::HashSet;

use pathviz_core::Position;

use crate::event::StepEvent;
use crate::search::{Progress, StepSequence};
use crate::snapshot::GridSnapshot;
use crate::traits::Pather;

/// Depth-first search as a step sequence.
///
/// The stack holds `(position, discovered_from)` pairs. A position may be
/// pushed several times; its came-from link is fixed only the first time it
/// is popped. Finds *a* path, not necessarily a short one.
#[derive(Debug, Clone)]
pub struct Dfs<P = GridSnapshot> {
    pather: P,
    progress: Progress,
    stack: Vec<(Position, Option<Position>)>,
    finalized: HashSet<Position>,
    nbuf: Vec<Position>,
}

impl<P: Pather> Dfs<P> {
    pub fn new(pather: P, start: Position, end: Position) -> Self {
        Self {
            pather,
            progress: Progress::new(start, end),
            stack: vec![(start, None)],
            finalized: HashSet::new(),
            nbuf: Vec::with_capacity(4),
        }
    }
}

impl<P: Pather> StepSequence for Dfs<P> {
    fn advance(&mut self) -> Option<StepEvent> {
        if self.progress.done {
            return None;
        }

        while let Some((current, from)) = self.stack.pop() {
            if !self.finalized.insert(current) {
                continue;
            }
            if let Some(from) = from {
                self.progress.came_from.insert(current, from);
            }
            if current == self.progress.end {
                return Some(self.progress.found());
            }

            self.nbuf.clear();
            self.pather.neighbors(current, &mut self.nbuf);
            // Pushed in neighbour order, so the last neighbour is explored
            // first.
            for &np in &self.nbuf {
                if !self.finalized.contains(&np) {
                    self.stack.push((np, Some(current)));
                }
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
