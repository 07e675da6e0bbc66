//! **tilepath-core** — square obstacle grids for A* pathfinding (core types).
//!
//! This crate provides the data model shared by the search engine and its
//! front-ends: coordinates, cells with explicit role and observation tags, the
//! grid with its authoring setters and 4-way adjacency, layout persistence,
//! and a cooperative cancellation token.

pub mod cancel;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cancel::CancelToken;
pub use cell::{Cell, CellKind, Mark};
pub use geom::Coord;
pub use grid::{Grid, GridError};
pub use layout::{GridLayout, LayoutError};
