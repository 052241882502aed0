#![warn(missing_docs)]

//! # `ductwork`
//!
//! An exact counter for the routes a cooling duct can take through a building, after the Quora datacenter cooling
//! challenge.
//! The building is a rectangular grid of rooms. The duct must start in one room, end in another, and pass through
//! every room we own exactly once, moving orthogonally; rooms we do not own are never entered.
//! In graph terms this counts the Hamiltonian paths between two fixed vertices of a grid graph with holes.
//!
//! Begin by building a grid using [`GridBuilder`] or by parsing the challenge text format with
//! [`parse_grid`](input::parse_grid). Then call [`count_paths()`](Grid::count_paths), or hand the grid to a
//! [`PathSolver`], which borrows it for the search and leaves it as it found it.
//!
//! # Internals
//! The search is a plain backtracking walk over a grid padded with a border ring, so no step ever needs a bounds check.
//! What keeps it tractable are two local pruning tests run at every step (see [`prune`]) which recognise when the last
//! step cut the remaining rooms into two regions that one duct can no longer both cover.
//!
//! Those tests reason about walls, and are only sound when every wall they see is joined to the duct or to the outside.
//! There are two ways to get that guarantee:
//! 1. Assume it. If every room we do not own is joined to the outside through other such rooms, and the start room
//! touches the outside or one of them, all of them are walls from the start.
//! See [`GridBuilder::assume_contiguity`] and [`check_contiguity`].
//! 2. Maintain it. Rooms we do not own start out pending and are folded into the walls only once the duct reaches them,
//! then released when the search backs off.

pub use builder::GridBuilder;
pub use cell::Cell;
pub use connectivity::{check_contiguity, ContiguityReport};
pub use grid::Grid;
pub use input::{parse_grid, read_grid, ParseError};
pub use location::{Dimension, Location};
pub use solver::{PathSolver, SearchOptions, Solution};

pub(crate) mod cell;
pub(crate) mod connectivity;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod solver;
pub mod builder;
pub mod input;
pub mod prune;
pub mod shape;
mod tests;
#[cfg(feature = "wasm")]
mod wasm;
