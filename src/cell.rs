/// Classification of a single grid cell.
///
/// Rendering color is a pure function of this state and is owned by
/// whatever front end draws the grid; [glyph](Self::glyph) is the
/// reference mapping used by the ASCII rendering of
/// [TraceGrid](crate::TraceGrid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    /// Walkable and untouched by the search.
    #[default]
    Empty,
    /// Enqueued in the frontier, not yet expanded.
    Open,
    /// Expanded and removed from the frontier.
    Closed,
    /// Impassable; excluded from neighbour computation.
    Barrier,
    /// The designated source of the search.
    Start,
    /// The designated goal of the search.
    End,
    /// Part of the reconstructed solution.
    Path,
}

impl CellState {
    pub fn is_barrier(self) -> bool {
        self == CellState::Barrier
    }

    /// Glyph used when printing a grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Barrier => '#',
            CellState::Start => 'S',
            CellState::End => 'G',
            CellState::Path => '*',
        }
    }
}
