//! **warren-core** — core types for the warren maze engine.
//!
//! This crate provides the foundational pieces shared by the generation
//! and pathfinding crates: the [`Coord`]/[`Direction`] coordinate model,
//! the [`GridCell`] capability contract with the concrete [`Tile`] cell,
//! the [`Color`] palette, and the owned [`Maze`] grid container.

pub mod cell;
pub mod coord;
pub mod maze;
pub mod palette;

pub use cell::{GridCell, Tile};
pub use coord::{Coord, Direction, Path};
pub use maze::{GridError, Maze};
pub use palette::Color;
