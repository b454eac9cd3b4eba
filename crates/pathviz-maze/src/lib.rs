//! Maze generation for the pathfinding visualizer.

pub mod mapgen;

pub use mapgen::{MazeGen, place_endpoints};
