//! Host-side glue for the pathviz crates: a [`Session`] that owns a grid
//! and drives one search at a time, plus its configuration.

pub mod config;
pub mod session;

pub use config::{AnimationConfig, SessionConfig};
pub use session::{Session, Stats, Status};
