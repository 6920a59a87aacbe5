//! Bush Game: hide from patrolling enemies inside bushes and collect fruit.
//!
//! The library holds the whole simulation. Rendering and keyboard handling
//! live in the binary and only talk to it through `compute::tick` and the
//! read-only `GameState`.

pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod level;
