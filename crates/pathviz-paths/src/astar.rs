use std::collections::{HashMap, HashSet};

use pathviz_core::Position;

use crate::event::StepEvent;
use crate::frontier::Frontier;
use crate::search::{Progress, StepSequence};
use crate::snapshot::GridSnapshot;
use crate::traits::AstarPather;

/// A* as a step sequence.
///
/// The frontier is ordered by `f = g + h`, ties broken by lower `h` and then
/// by insertion order. With a consistent estimate (Manhattan distance on a
/// 4-connected grid with costs >= 1) a position's `g` is final the first time
/// it is popped, so closed positions are never reopened.
#[derive(Debug, Clone)]
pub struct AStar<P = GridSnapshot> {
    pather: P,
    progress: Progress,
    frontier: Frontier,
    g: HashMap<Position, i32>,
    closed: HashSet<Position>,
    nbuf: Vec<Position>,
}

impl<P: AstarPather> AStar<P> {
    pub fn new(pather: P, start: Position, end: Position) -> Self {
        let h = pather.estimate(start, end);
        let mut frontier = Frontier::default();
        frontier.push(start, h, h);
        Self {
            pather,
            progress: Progress::new(start, end),
            frontier,
            g: HashMap::from([(start, 0)]),
            closed: HashSet::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Cost of the best known route from the start to `p`.
    pub fn g_score(&self, p: Position) -> Option<i32> {
        self.g.get(&p).copied()
    }
}

impl<P: AstarPather> StepSequence for AStar<P> {
    fn advance(&mut self) -> Option<StepEvent> {
        if self.progress.done {
            return None;
        }
        let end = self.progress.end;

        while let Some(entry) = self.frontier.pop() {
            let current = entry.pos;
            if !self.closed.insert(current) {
                continue;
            }
            if current == end {
                return Some(self.progress.found());
            }

            let current_g = entry.rank - entry.tie;
            self.nbuf.clear();
            self.pather.neighbors(current, &mut self.nbuf);
            for &np in &self.nbuf {
                if self.closed.contains(&np) {
                    continue;
                }
                let tentative = current_g + self.pather.cost(current, np);
                if self.g.get(&np).is_some_and(|&g| tentative >= g) {
                    continue;
                }
                let h = self.pather.estimate(np, end);
                self.g.insert(np, tentative);
                self.progress.came_from.insert(np, current);
                self.frontier.push(np, tentative + h, h);
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

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Grid;

    #[test]
    fn open_grid_walks_straight_to_goal() {
        // With the lower-h tie-break A* never strays off a shortest route
        // on an empty grid.
        let grid = Grid::new(6, 6);
        let start = Position::new(0, 0);
        let end = Position::new(5, 5);
        let mut astar = AStar::new(GridSnapshot::from_grid(&grid), start, end);
        let mut visits = 0;
        let path = loop {
            match astar.advance() {
                Some(StepEvent::Visiting { pos, .. }) => {
                    visits += 1;
                    assert_eq!(pos.manhattan(start) + pos.manhattan(end), 10);
                }
                Some(StepEvent::Found(path)) => break path,
                other => panic!("unexpected {other:?}"),
            }
        };
        assert_eq!(path.len(), 11);
        assert_eq!(visits, 9);
        assert_eq!(astar.g_score(end), Some(10));
    }

    #[test]
    fn detours_around_a_wall() {
        let grid = Grid::from_ascii(
            "
            .....
            .###.
            .#...
            .###.
            .....
            ",
        )
        .unwrap();
        let start = Position::new(2, 2);
        let end = Position::new(4, 2);
        let mut astar = AStar::new(GridSnapshot::from_grid(&grid), start, end);
        let event = std::iter::from_fn(|| astar.advance()).last();
        let Some(StepEvent::Found(path)) = event else {
            panic!("no path: {event:?}");
        };
        assert_eq!(
            path,
            vec![
                start,
                Position::new(2, 3),
                Position::new(2, 4),
                Position::new(3, 4),
                Position::new(4, 4),
                Position::new(4, 3),
                end,
            ]
        );
    }
}
