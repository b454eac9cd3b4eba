//! Host-side driver: owns the grid, runs at most one search at a time and
//! applies its events.

use std::fmt;

use log::{debug, warn};
use pathviz_core::{Grid, Result};
use pathviz_maze::{MazeGen, place_endpoints};
use pathviz_paths::{Algorithm, Search, StepEvent, StepSequence};
use rand::Rng;

use crate::config::{AnimationConfig, SessionConfig};

/// What the session is doing, or last did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Searching,
    PathFound,
    NoPath,
    Cancelled,
    MazeGenerated,
    Cleared,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "Ready",
            Self::Searching => "Searching...",
            Self::PathFound => "Path found",
            Self::NoPath => "No path found",
            Self::Cancelled => "Cancelled",
            Self::MazeGenerated => "Maze generated",
            Self::Cleared => "Board cleared",
        })
    }
}

/// Statistics for the current or last run, derived from event counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of `Visiting` events applied.
    pub visited: u32,
    /// Number of nodes in the found path, endpoints included.
    pub path_length: usize,
    /// Number of `advance` calls made.
    pub ticks: u32,
    pub status: Status,
}

/// A grid plus the single search allowed to run against it.
pub struct Session {
    grid: Grid,
    algorithm: Algorithm,
    search: Option<Search>,
    stats: Stats,
    animation: AnimationConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            grid: Grid::new(config.rows, config.cols),
            algorithm: Algorithm::default(),
            search: None,
            stats: Stats::default(),
            animation: config.animation,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for user edits. `None` while a search runs, since
    /// the running search would not see new barriers.
    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        if self.search.is_some() {
            return None;
        }
        Some(&mut self.grid)
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Choose the algorithm for the next [`start`](Self::start).
    pub fn select(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[inline]
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    #[inline]
    pub fn animation_mut(&mut self) -> &mut AnimationConfig {
        &mut self.animation
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Begin a run of the selected algorithm from the grid's Start to its
    /// End. Clears Visited/Path marks from the previous run and resets the
    /// statistics. Any run already in progress is replaced.
    pub fn start(&mut self) -> Result<()> {
        let search = Search::from_grid(self.algorithm, &self.grid)?;
        self.grid.clear(true);
        self.stats = Stats {
            status: Status::Searching,
            ..Stats::default()
        };
        self.search = Some(search);
        Ok(())
    }

    /// Advance the active search by one event and apply it to the grid.
    ///
    /// Returns the event, or `None` when no search is active. A terminal
    /// event ends the run.
    pub fn tick(&mut self) -> Option<StepEvent> {
        let search = self.search.as_mut()?;
        let event = search.advance();
        self.stats.ticks += 1;

        match &event {
            Some(StepEvent::Visiting { pos, order }) => {
                if let Err(e) = self.grid.mark_visited(*pos, *order) {
                    warn!("dropping visit: {e}");
                }
                self.stats.visited = *order;
            }
            Some(StepEvent::Found(path)) => {
                for &p in path {
                    if let Err(e) = self.grid.mark_path(p) {
                        warn!("dropping path node: {e}");
                    }
                }
                self.stats.path_length = path.len();
                self.finish(Status::PathFound);
            }
            Some(StepEvent::Exhausted) => self.finish(Status::NoPath),
            None => self.search = None,
        }
        event
    }

    fn finish(&mut self, status: Status) {
        self.search = None;
        self.stats.status = status;
        debug!(
            "{} finished: {status}, {} visited, path {} in {} ticks",
            self.algorithm, self.stats.visited, self.stats.path_length, self.stats.ticks
        );
    }

    /// Tick until the active search ends, returning its terminal event.
    pub fn run_to_end(&mut self) -> Option<StepEvent> {
        while let Some(event) = self.tick() {
            if event.is_terminal() {
                return Some(event);
            }
        }
        None
    }

    /// Drop the active search. Marks already painted stay on the grid.
    pub fn cancel(&mut self) -> bool {
        if self.search.take().is_none() {
            return false;
        }
        self.stats.status = Status::Cancelled;
        true
    }

    /// Remove Visited/Path marks, keeping Start, End and barriers.
    pub fn clear_path(&mut self) {
        self.cancel();
        self.grid.clear(true);
    }

    /// Hard-clear the grid and the statistics.
    pub fn clear_board(&mut self) {
        self.cancel();
        self.grid.reset();
        self.stats = Stats {
            status: Status::Cleared,
            ..Stats::default()
        };
    }

    /// Replace the grid contents with a maze and place Start/End in opposite
    /// corners. Returns the number of carved nodes.
    pub fn generate_maze<R: Rng>(&mut self, maze: &mut MazeGen<R>) -> Result<usize> {
        self.cancel();
        let carved = maze.generate(&mut self.grid)?;
        if place_endpoints(&mut self.grid).is_none() {
            warn!("maze has no room for start and end");
        }
        self.stats = Stats {
            status: Status::MazeGenerated,
            ..Stats::default()
        };
        Ok(carved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{Error, NodeState, Position};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn session(src: &str) -> Session {
        let mut s = Session::default();
        s.grid = Grid::from_ascii(src).unwrap();
        s
    }

    #[test]
    fn start_requires_endpoints() {
        let mut s = Session::new(SessionConfig {
            rows: 4,
            cols: 4,
            ..SessionConfig::default()
        });
        assert_eq!(s.start(), Err(Error::InvalidEndpoints));
        assert!(!s.is_searching());
        assert_eq!(s.stats().status, Status::Idle);
    }

    #[test]
    fn run_paints_grid_and_counts() {
        let mut s = session(
            "
            S...
            .##.
            ...E
            ",
        );
        s.select(Algorithm::Bfs);
        s.start().unwrap();
        assert!(s.grid_mut().is_none());

        let last = s.run_to_end();
        let Some(StepEvent::Found(path)) = last else {
            panic!("no path");
        };
        assert_eq!(path.len(), 6);
        assert!(!s.is_searching());

        let stats = s.stats();
        assert_eq!(stats.status, Status::PathFound);
        assert_eq!(stats.path_length, 6);
        assert_eq!(stats.ticks, stats.visited + 1);

        let g = s.grid();
        assert_eq!(g.state_at(p(0, 0)), Ok(NodeState::Start));
        assert_eq!(g.state_at(p(2, 3)), Ok(NodeState::End));
        let path_nodes = g.count_fn(|n| n.state() == NodeState::Path);
        assert_eq!(path_nodes, 4);
        let visited_nodes = g.count_fn(|n| n.visited_order().is_some());
        assert_eq!(visited_nodes as u32 + 4, stats.visited);
    }

    #[test]
    fn no_path_ends_the_run() {
        let mut s = session("S#E");
        s.start().unwrap();
        assert_eq!(s.tick(), Some(StepEvent::Exhausted));
        assert_eq!(s.stats().status, Status::NoPath);
        assert_eq!(s.tick(), None);
        assert!(s.grid_mut().is_some());
    }

    #[test]
    fn cancel_keeps_marks_and_restart_clears_them() {
        let mut s = session(
            "
            S.....
            ......
            .....E
            ",
        );
        s.start().unwrap();
        s.tick();
        s.tick();
        assert!(s.cancel());
        assert!(!s.cancel());
        assert_eq!(s.stats().status, Status::Cancelled);
        assert_eq!(s.grid().count_fn(|n| n.visited_order().is_some()), 2);

        s.start().unwrap();
        assert_eq!(s.grid().count_fn(|n| n.visited_order().is_some()), 0);
        assert_eq!(s.stats().visited, 0);
    }

    #[test]
    fn clear_board_resets_everything() {
        let mut s = session("S.#E");
        s.start().unwrap();
        s.run_to_end();
        s.clear_board();
        assert_eq!(s.grid().to_string(), "....");
        assert_eq!(s.stats(), &Stats {
            status: Status::Cleared,
            ..Stats::default()
        });
    }

    #[test]
    fn maze_then_every_algorithm_finds_a_path() {
        let mut s = Session::new(SessionConfig {
            rows: 15,
            cols: 21,
            ..SessionConfig::default()
        });
        let mut maze = MazeGen::with_rng(StdRng::seed_from_u64(11));
        let carved = s.generate_maze(&mut maze).unwrap();
        assert!(carved > 0);
        assert_eq!(s.stats().status, Status::MazeGenerated);
        assert!(s.grid().has_start_and_end());

        let mut lengths = Vec::new();
        for algo in Algorithm::ALL {
            s.select(algo);
            s.start().unwrap();
            assert!(matches!(s.run_to_end(), Some(StepEvent::Found(_))), "{algo}");
            lengths.push(s.stats().path_length);
        }
        // A perfect maze has exactly one route, so even DFS agrees.
        assert!(lengths.windows(2).all(|w| w[0] == w[1]), "{lengths:?}");
    }

    #[test]
    fn status_text() {
        assert_eq!(Status::default().to_string(), "Ready");
        assert_eq!(Status::NoPath.to_string(), "No path found");
    }
}
