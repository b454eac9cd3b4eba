//! A frozen copy of grid connectivity.

use pathviz_core::{Grid, Position, Range};

use crate::traits::{AstarPather, Pather, WeightedPather};

/// Edge cost function signature.
pub type CostFn = fn(Position, Position) -> i32;

/// Every step costs 1.
pub fn unit_cost(_from: Position, _to: Position) -> i32 {
    1
}

/// Which positions of a [`Grid`] were traversable when the snapshot was taken.
///
/// A running search owns one of these instead of borrowing the grid, so the
/// host stays free to paint Visited/Path marks between steps. Those marks
/// never change traversability, so the snapshot cannot go stale during a run
/// as long as barriers are left alone.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    bounds: Range,
    open: Vec<bool>,
    cost: CostFn,
}

impl GridSnapshot {
    /// Capture the traversability of every node in `grid`.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            bounds: grid.bounds(),
            open: grid.iter().map(|n| n.is_traversable()).collect(),
            cost: unit_cost,
        }
    }

    /// Replace the edge cost function. Costs must stay >= 1 for the
    /// Manhattan estimate used by A* to remain admissible.
    pub fn with_cost(mut self, cost: CostFn) -> Self {
        self.cost = cost;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` is inside the snapshot and was traversable.
    #[inline]
    pub fn is_open(&self, p: Position) -> bool {
        self.bounds.index(p).is_some_and(|i| self.open[i])
    }
}

impl Pather for GridSnapshot {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        if !self.bounds.contains(p) {
            return;
        }
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for GridSnapshot {
    #[inline]
    fn cost(&self, from: Position, to: Position) -> i32 {
        (self.cost)(from, to)
    }
}

impl AstarPather for GridSnapshot {
    #[inline]
    fn estimate(&self, from: Position, to: Position) -> i32 {
        from.manhattan(to)
    }
}
