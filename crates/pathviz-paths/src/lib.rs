//! Grid search algorithms as resumable step sequences.
//!
//! Each algorithm is an explicit state machine holding its own frontier,
//! came-from links and distance map. A host drives it one
//! [`StepEvent`] at a time, painting the grid between calls:
//!
//! - **BFS** ([`Bfs`]): FIFO frontier, shortest path in edge count
//! - **DFS** ([`Dfs`]): LIFO frontier, any path
//! - **Dijkstra** ([`Dijkstra`]): cumulative-cost priority frontier
//! - **A\*** ([`AStar`]): `g + h` priority frontier with Manhattan `h`
//!
//! [`Search`] wraps the four in one closed enum selected by [`Algorithm`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, flood fill |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`GridSnapshot`] implements all three over a frozen copy of a grid's
//! barriers.

mod astar;
mod bfs;
mod cc;
mod dfs;
mod dijkstra;
mod event;
mod frontier;
mod search;
mod snapshot;
mod traits;

pub use astar::AStar;
pub use bfs::Bfs;
pub use cc::flood_fill;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use event::StepEvent;
pub use search::{Algorithm, ParseAlgorithmError, Search, StepSequence};
pub use snapshot::{CostFn, GridSnapshot, unit_cost};
pub use traits::{AstarPather, Pather, WeightedPather};
