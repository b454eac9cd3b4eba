//! Recursive-backtracker maze generation.
//!
//! The grid is read as a lattice of *cells* at odd `(row, col)` positions
//! strictly inside the border, separated by *wall* nodes. Carving starts
//! from a random cell and performs a randomized depth-first walk, knocking
//! down the wall between the current cell and an unvisited neighbour cell.
//! The result is a perfect maze: every cell is reachable from every other
//! through exactly one route.

use std::collections::HashSet;

use log::{debug, warn};
use pathviz_core::{Grid, Position, Result};
use rand::Rng;
use rand::seq::SliceRandom;

/// Offsets to the four neighbour cells, two nodes away.
const CELL_STEPS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Maze generator owning its random source.
///
/// Seed it with a [`SeedableRng`](rand::SeedableRng) for reproducible
/// mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Replace the contents of `grid` with a freshly carved maze.
    ///
    /// The grid is hard-cleared and filled with barriers first, so any
    /// Start/End is dropped. Returns the number of nodes carved open. Grids
    /// with fewer than three rows or columns have no room for a cell and
    /// are left entirely blocked.
    pub fn generate(&mut self, grid: &mut Grid) -> Result<usize> {
        grid.fill_barriers();

        let cells = cell_positions(grid.rows(), grid.cols());
        if cells.is_empty() {
            warn!(
                "{}x{} grid is too small to hold a maze cell",
                grid.rows(),
                grid.cols()
            );
            return Ok(0);
        }

        let first = cells[self.rng.random_range(0..cells.len())];
        grid.carve(first)?;
        let mut carved = 1;
        let mut visited = HashSet::from([first]);
        let mut stack = vec![first];

        while let Some(&current) = stack.last() {
            let mut steps = CELL_STEPS;
            steps.shuffle(&mut self.rng);

            let next = steps.iter().find_map(|&(dr, dc)| {
                let cell = current.shift(dr, dc);
                let open = is_cell(grid, cell) && !visited.contains(&cell);
                open.then(|| (cell, current.shift(dr / 2, dc / 2)))
            });

            match next {
                Some((cell, wall)) => {
                    grid.carve(wall)?;
                    grid.carve(cell)?;
                    carved += 2;
                    visited.insert(cell);
                    stack.push(cell);
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            "maze generated from {first}: {} cells, {carved} nodes carved",
            cells.len()
        );
        Ok(carved)
    }
}

/// Whether `p` is a cell of the maze lattice (odd coordinates, inside the
/// border).
fn is_cell(grid: &Grid, p: Position) -> bool {
    p.row % 2 == 1 && p.col % 2 == 1 && p.row < grid.rows() - 1 && p.col < grid.cols() - 1
}

/// All lattice cells of a `rows × cols` grid, row-major.
fn cell_positions(rows: i32, cols: i32) -> Vec<Position> {
    (1..rows - 1)
        .step_by(2)
        .flat_map(|r| (1..cols - 1).step_by(2).map(move |c| Position::new(r, c)))
        .collect()
}

/// Place Start at the first open node scanning from the top-left and End at
/// the first open node scanning from the bottom-right.
///
/// Any previous Start/End is cleared first. Returns `None` (leaving the grid
/// without endpoints) when fewer than two open nodes exist.
pub fn place_endpoints(grid: &mut Grid) -> Option<(Position, Position)> {
    for old in [grid.start(), grid.end()].into_iter().flatten() {
        grid.clear_node(old).ok()?;
    }

    let bounds = grid.bounds();
    let start = bounds.iter().find(|&p| grid.is_traversable(p))?;
    let end = (0..bounds.len())
        .rev()
        .map(|i| bounds.position(i))
        .find(|&p| p != start && grid.is_traversable(p))?;

    grid.set_start(start).ok()?;
    grid.set_end(end).ok()?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::NodeState;
    use pathviz_paths::{Algorithm, GridSnapshot, Search, StepEvent, flood_fill};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MazeGen<StdRng> {
        MazeGen::with_rng(StdRng::seed_from_u64(seed))
    }

    fn open_positions(grid: &Grid) -> Vec<Position> {
        grid.iter()
            .filter(|n| n.is_traversable())
            .map(|n| n.pos())
            .collect()
    }

    #[test]
    fn every_open_node_is_connected() {
        for (rows, cols) in [(21, 21), (20, 30), (5, 5), (3, 3), (9, 4)] {
            for seed in 0..8 {
                let mut grid = Grid::new(rows, cols);
                let carved = seeded(seed).generate(&mut grid).unwrap();
                let open = open_positions(&grid);
                assert_eq!(open.len(), carved);
                assert!(!open.is_empty(), "{rows}x{cols}");

                let snap = GridSnapshot::from_grid(&grid);
                let reached = flood_fill(&snap, open[0]);
                assert_eq!(reached.len(), open.len(), "{rows}x{cols} seed {seed}\n{grid}");
            }
        }
    }

    #[test]
    fn carves_a_perfect_maze() {
        let mut grid = Grid::new(15, 25);
        let carved = seeded(7).generate(&mut grid).unwrap();
        let cells = cell_positions(15, 25);
        assert_eq!(cells.len(), 7 * 12);
        // A spanning tree over the cells: one wall knocked down per edge.
        assert_eq!(carved, 2 * cells.len() - 1);
        for c in cells {
            assert!(grid.is_traversable(c), "cell {c} not carved");
        }
        // The border stays solid.
        for p in grid.bounds() {
            let on_border = p.row == 0 || p.col == 0 || p.row == 14 || p.col == 24;
            if on_border {
                assert_eq!(grid.state_at(p), Ok(NodeState::Barrier));
            }
        }
    }

    #[test]
    fn too_small_grid_is_all_barriers() {
        let mut grid = Grid::new(2, 8);
        grid.set_start(Position::new(0, 0)).unwrap();
        assert_eq!(seeded(1).generate(&mut grid), Ok(0));
        assert_eq!(grid.barrier_count(), 16);
        assert_eq!(grid.start(), None);
        assert_eq!(place_endpoints(&mut grid), None);
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::new(17, 17);
        let mut b = Grid::new(17, 17);
        seeded(42).generate(&mut a).unwrap();
        seeded(42).generate(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn endpoints_land_in_opposite_corners_and_connect() {
        let mut grid = Grid::new(21, 31);
        seeded(3).generate(&mut grid).unwrap();
        let (s, e) = place_endpoints(&mut grid).unwrap();
        assert_eq!(s, Position::new(1, 1));
        assert_eq!(e, Position::new(19, 29));
        assert_eq!(grid.start(), Some(s));
        assert_eq!(grid.end(), Some(e));

        let search = Search::from_grid(Algorithm::Bfs, &grid).unwrap();
        assert!(matches!(search.last(), Some(StepEvent::Found(_))));
    }

    #[test]
    fn place_endpoints_replaces_existing() {
        let mut grid = Grid::from_ascii(
            "
            #..
            .E.
            ..S
            ",
        )
        .unwrap();
        let placed = place_endpoints(&mut grid);
        assert_eq!(placed, Some((Position::new(0, 1), Position::new(2, 2))));
        assert_eq!(grid.to_string(), "#S.\n...\n..E");
    }
}
