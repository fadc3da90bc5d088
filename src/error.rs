//! Error types for grid construction and search entry.

use grid_util::point::Point;
use thiserror::Error;

/// Rejected grid construction parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row")]
    ZeroRows,
    #[error("grid pixel width must be positive")]
    ZeroPixelWidth,
}

/// Precondition violations, rejected before any search state is
/// allocated. Running out of frontier or being cancelled are not
/// errors; see [SearchOutcome](crate::SearchOutcome).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("no start cell has been designated")]
    MissingStart,
    #[error("no end cell has been designated")]
    MissingEnd,
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("cell {0} is a barrier")]
    Blocked(Point),
}
