//! # grid_pathtrace
//!
//! Single-source shortest paths on a uniform N×N grid with observable
//! progress. Two interchangeable frontier policies are provided: a
//! best-first search guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! and a uniform-cost search. After every frontier expansion and every
//! reconstruction step the engine hands the caller a read-only snapshot
//! of the grid through a synchronous callback, so search progress can
//! be rendered incrementally. Note that this assumes a uniform-cost
//! 4-connected grid: every step between orthogonally adjacent cells
//! costs one, and there is no diagonal movement.

pub mod cell;
pub mod error;
pub mod solver;
pub mod trace_grid;

pub use cell::CellState;
pub use error::{GridError, SearchError};
pub use solver::{manhattan_distance, search, search_marked, SearchOutcome, SearchVariant};
pub use trace_grid::TraceGrid;
