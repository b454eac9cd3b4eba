//! The step-sequence capability and the closed set of algorithms.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use log::{debug, trace, warn};
use pathviz_core::{CameFrom, Error, Grid, Position, Result, reconstruct_path};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::event::StepEvent;
use crate::snapshot::GridSnapshot;

// ---------------------------------------------------------------------------
// StepSequence
// ---------------------------------------------------------------------------

/// A search that can be suspended between events.
///
/// Each call to [`advance`](Self::advance) does just enough work to produce
/// one [`StepEvent`]. After the terminal event ([`StepEvent::Found`] or
/// [`StepEvent::Exhausted`]) every further call returns `None`; a finished
/// run cannot be restarted, only replaced by a fresh one.
pub trait StepSequence {
    /// Produce the next event, or `None` once the run has finished.
    fn advance(&mut self) -> Option<StepEvent>;

    /// Number of `Visiting` events emitted so far.
    fn visited(&self) -> u32;

    /// Whether the terminal event has been emitted.
    fn is_done(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Bookkeeping every algorithm carries: endpoints, came-from links, the
/// visit counter and the finished flag.
#[derive(Debug, Clone)]
pub(crate) struct Progress {
    pub(crate) start: Position,
    pub(crate) end: Position,
    pub(crate) came_from: CameFrom,
    pub(crate) visited: u32,
    pub(crate) done: bool,
}

impl Progress {
    pub(crate) fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            came_from: CameFrom::new(),
            visited: 0,
            done: false,
        }
    }

    pub(crate) fn visit(&mut self, pos: Position) -> StepEvent {
        self.visited += 1;
        trace!("visiting {pos} (#{})", self.visited);
        StepEvent::Visiting {
            pos,
            order: self.visited,
        }
    }

    pub(crate) fn found(&mut self) -> StepEvent {
        self.done = true;
        match reconstruct_path(&self.came_from, self.start, self.end) {
            Ok(path) => {
                debug!(
                    "path found: {} nodes after {} visits",
                    path.len(),
                    self.visited
                );
                StepEvent::Found(path)
            }
            Err(e) => {
                warn!("end reached but path reconstruction failed: {e}");
                StepEvent::Exhausted
            }
        }
    }

    pub(crate) fn exhausted(&mut self) -> StepEvent {
        self.done = true;
        debug!("frontier exhausted after {} visits", self.visited);
        StepEvent::Exhausted
    }
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The four supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    #[default]
    AStar,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// Whether the algorithm always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A running search of any of the four kinds, over a [`GridSnapshot`].
#[derive(Debug, Clone)]
pub enum Search {
    Bfs(Bfs),
    Dfs(Dfs),
    Dijkstra(Dijkstra),
    AStar(AStar),
}

impl Search {
    /// Start a search over `grid` from its current Start to its current End.
    ///
    /// Fails with [`Error::InvalidEndpoints`] if either is unset.
    pub fn from_grid(algorithm: Algorithm, grid: &Grid) -> Result<Self> {
        let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
            return Err(Error::InvalidEndpoints);
        };
        Self::new(algorithm, grid, start, end)
    }

    /// Start a search over `grid` between two explicit positions.
    pub fn new(algorithm: Algorithm, grid: &Grid, start: Position, end: Position) -> Result<Self> {
        Self::from_snapshot(algorithm, GridSnapshot::from_grid(grid), start, end)
    }

    /// Start a search over an existing snapshot, e.g. one carrying a custom
    /// cost function.
    ///
    /// Both endpoints must lie inside the snapshot on traversable positions.
    pub fn from_snapshot(
        algorithm: Algorithm,
        snapshot: GridSnapshot,
        start: Position,
        end: Position,
    ) -> Result<Self> {
        if !snapshot.is_open(start) || !snapshot.is_open(end) {
            return Err(Error::InvalidEndpoints);
        }
        debug!("{algorithm} search from {start} to {end}");
        Ok(match algorithm {
            Algorithm::Bfs => Self::Bfs(Bfs::new(snapshot, start, end)),
            Algorithm::Dfs => Self::Dfs(Dfs::new(snapshot, start, end)),
            Algorithm::Dijkstra => Self::Dijkstra(Dijkstra::new(snapshot, start, end)),
            Algorithm::AStar => Self::AStar(AStar::new(snapshot, start, end)),
        })
    }

    /// Which algorithm is running.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bfs(_) => Algorithm::Bfs,
            Self::Dfs(_) => Algorithm::Dfs,
            Self::Dijkstra(_) => Algorithm::Dijkstra,
            Self::AStar(_) => Algorithm::AStar,
        }
    }
}

impl StepSequence for Search {
    fn advance(&mut self) -> Option<StepEvent> {
        match self {
            Self::Bfs(s) => s.advance(),
            Self::Dfs(s) => s.advance(),
            Self::Dijkstra(s) => s.advance(),
            Self::AStar(s) => s.advance(),
        }
    }

    fn visited(&self) -> u32 {
        match self {
            Self::Bfs(s) => s.visited(),
            Self::Dfs(s) => s.visited(),
            Self::Dijkstra(s) => s.visited(),
            Self::AStar(s) => s.visited(),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Self::Bfs(s) => s.is_done(),
            Self::Dfs(s) => s.is_done(),
            Self::Dijkstra(s) => s.is_done(),
            Self::AStar(s) => s.is_done(),
        }
    }
}

impl Iterator for Search {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        self.advance()
    }
}

impl FusedIterator for Search {}
