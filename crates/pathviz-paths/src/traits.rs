use pathviz_core::Position;

/// Neighbour enumeration, the least a search needs.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before
    /// calling. The order must be deterministic: it decides tie-breaks in
    /// every search.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// A pather whose edges carry a positive cost.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` onto the adjacent `to`; at least 1.
    fn cost(&self, from: Position, to: Position) -> i32;
}

/// A weighted pather that can also estimate remaining distance.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cost of reaching `to` from `from`. Overestimating
    /// breaks A*'s shortest-path guarantee.
    fn estimate(&self, from: Position, to: Position) -> i32;
}
