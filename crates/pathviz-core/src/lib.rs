//! **pathviz-core**: Grid and node state model for the pathfinding
//! visualizer.
//!
//! This crate provides the types every other *pathviz* crate builds on:
//! geometry primitives, the per-cell [`NodeState`] machine, the [`Grid`]
//! that enforces the single-Start/single-End invariant, and the error
//! taxonomy shared by grid edits and search construction.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::{Error, ParseError, Result};
pub use geom::{Position, Range};
pub use grid::{CameFrom, Grid, reconstruct_path};
pub use node::{Node, NodeState};
