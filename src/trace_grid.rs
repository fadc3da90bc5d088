//! The grid model: an N×N matrix of classified cells.

use core::fmt;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

use crate::cell::CellState;
use crate::error::GridError;

/// An N×N grid of [CellState] values whose outer ring of cells is
/// pre-marked as barrier, so the effective search space is the
/// interior. Cells are addressed by [Point]; the grid also records
/// which cells currently hold the start and end roles.
///
/// The per-cell pixel size derived at construction is served through
/// [cell_size](Self::cell_size) for rendering front ends and is never
/// read by the search itself.
#[derive(Clone, Debug)]
pub struct TraceGrid {
    states: SimpleGrid<CellState>,
    cell_size: usize,
    start: Option<Point>,
    end: Option<Point>,
}

impl TraceGrid {
    /// Builds a grid of `rows` × `rows` cells scaled to a drawing
    /// surface of `pixel_width` pixels, with the boundary wall in
    /// place.
    pub fn new(rows: usize, pixel_width: usize) -> Result<TraceGrid, GridError> {
        if rows == 0 {
            return Err(GridError::ZeroRows);
        }
        if pixel_width == 0 {
            return Err(GridError::ZeroPixelWidth);
        }
        let mut states = SimpleGrid::new(rows, rows, CellState::Empty);
        for i in 0..rows {
            states.set(i, 0, CellState::Barrier);
            states.set(i, rows - 1, CellState::Barrier);
            states.set(0, i, CellState::Barrier);
            states.set(rows - 1, i, CellState::Barrier);
        }
        Ok(TraceGrid {
            states,
            cell_size: pixel_width / rows,
            start: None,
            end: None,
        })
    }

    pub fn rows(&self) -> usize {
        self.states.width()
    }

    /// Pixel edge length of a single cell.
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// The cell currently designated as start, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The cell currently designated as end, if any.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.states.index_in_bounds(x as usize, y as usize)
    }

    /// Current classification of the cell at `p`.
    pub fn state(&self, p: Point) -> CellState {
        self.states.get_point(p)
    }

    /// Whether `p` is inside the grid and not a barrier.
    pub fn can_move_to(&self, p: Point) -> bool {
        self.contains(p) && !self.state(p).is_barrier()
    }

    /// In-bounds, non-barrier orthogonal neighbours of `p`, in a fixed
    /// down, up, left, right order.
    pub fn open_neighbours(&self, p: Point) -> Vec<Point> {
        [
            Point::new(p.x, p.y + 1),
            Point::new(p.x, p.y - 1),
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
        ]
        .into_iter()
        .filter(|&n| self.can_move_to(n))
        .collect()
    }

    /// Marks a walkable cell as impassable. Open and closed search
    /// markings may be overwritten; start, end and path cells are left
    /// untouched. Returns whether the classification changed.
    pub fn mark_barrier(&mut self, p: Point) -> bool {
        match self.state(p) {
            CellState::Empty | CellState::Open | CellState::Closed => {
                self.states.set_point(p, CellState::Barrier);
                true
            }
            _ => false,
        }
    }

    /// Designates `p` as the start cell. Only an empty cell can take
    /// the role; any previously designated start reverts to empty, so
    /// at most one start exists at a time. Returns whether the
    /// designation took place.
    pub fn mark_start(&mut self, p: Point) -> bool {
        if self.state(p) != CellState::Empty {
            return false;
        }
        if let Some(previous) = self.start.take() {
            self.states.set_point(previous, CellState::Empty);
        }
        self.states.set_point(p, CellState::Start);
        self.start = Some(p);
        true
    }

    /// Designates `p` as the end cell. Same rules as
    /// [mark_start](Self::mark_start).
    pub fn mark_end(&mut self, p: Point) -> bool {
        if self.state(p) != CellState::Empty {
            return false;
        }
        if let Some(previous) = self.end.take() {
            self.states.set_point(previous, CellState::Empty);
        }
        self.states.set_point(p, CellState::End);
        self.end = Some(p);
        true
    }

    /// Returns a cell to the default walkable state, whatever it held
    /// before. Resetting the designated start or end also clears the
    /// designation. Resetting an empty cell is a no-op.
    pub fn reset(&mut self, p: Point) {
        self.states.set_point(p, CellState::Empty);
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
    }

    pub(crate) fn set_state(&mut self, p: Point, state: CellState) {
        self.states.set_point(p, state);
    }

    /// Frontier admission marking. Only an untouched cell takes the
    /// open state; barrier, start and end cells keep their
    /// classification while being scored like any other frontier
    /// member.
    pub(crate) fn open_cell(&mut self, p: Point) {
        if self.state(p) == CellState::Empty {
            self.states.set_point(p, CellState::Open);
        }
    }

    /// Expansion marking, the open to closed transition.
    pub(crate) fn close_cell(&mut self, p: Point) {
        if self.state(p) == CellState::Open {
            self.states.set_point(p, CellState::Closed);
        }
    }
}

impl fmt::Display for TraceGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() {
            for x in 0..self.rows() {
                write!(f, "{}", self.states.get(x, y).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
