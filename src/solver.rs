//! The priority-queue search engine and its two frontier policies.
//!
//! Both policies share one skeleton and differ only in the priority a
//! newly discovered cell is enqueued with. Ties are broken by a
//! monotonically increasing insertion sequence, so equal priorities pop
//! in strict FIFO order; cells themselves are never compared.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::IndexMap;
use log::{info, warn};

use crate::cell::CellState;
use crate::error::SearchError;
use crate::trace_grid::TraceGrid;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Manhattan distance between two grid coordinates. Admissible and
/// consistent on a 4-connected grid with unit edge costs, which is
/// what makes the heuristic-guided policy return shortest paths.
pub fn manhattan_distance(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Which frontier policy drives the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchVariant {
    /// Best-first search guided by the Manhattan distance to the goal.
    Heuristic,
    /// Uniform-cost search. Every entry past the seed carries priority
    /// 0, so under FIFO tie-breaking the frontier expands in insertion
    /// order, which is breadth-first and still optimal when every edge
    /// costs one.
    UniformCost,
}

impl SearchVariant {
    fn priority(self, g: i32, cell: Point, goal: Point) -> i32 {
        match self {
            SearchVariant::Heuristic => g + manhattan_distance(cell, goal),
            SearchVariant::UniformCost => 0,
        }
    }
}

/// Terminal result of a completed search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path was found; holds every cell from start to end inclusive.
    Success(Vec<Point>),
    /// The frontier emptied without reaching the end cell.
    NoPathFound,
    /// The progress callback requested termination.
    Cancelled,
}

impl SearchOutcome {
    /// The found path, if this outcome carries one.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::Success(path) => Some(path),
            _ => None,
        }
    }
}

struct FrontierEntry {
    priority: i32,
    seq: usize,
    cell: Point,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Orders by priority first, then by insertion sequence. Both are
    // reversed since BinaryHeap is a max-heap: the smallest priority
    // wins and ties pop oldest first.
    fn cmp(&self, other: &Self) -> Ordering {
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ordering => ordering,
        }
    }
}

/// Runs a search from `start` to `end` over the given grid.
///
/// `on_progress` is invoked synchronously with a read-only snapshot of
/// the grid after every frontier expansion and after every
/// reconstruction step; returning [ControlFlow::Break] aborts the run
/// with [SearchOutcome::Cancelled]. Both endpoints must lie inside the
/// grid and must not be barriers; violations are rejected before any
/// search state is allocated.
pub fn search<F>(
    grid: &mut TraceGrid,
    start: Point,
    end: Point,
    variant: SearchVariant,
    mut on_progress: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&TraceGrid) -> ControlFlow<()>,
{
    for endpoint in [start, end] {
        if !grid.contains(endpoint) {
            return Err(SearchError::OutOfBounds(endpoint));
        }
        if grid.state(endpoint).is_barrier() {
            return Err(SearchError::Blocked(endpoint));
        }
    }
    info!("{variant:?} search from {start} to {end}");

    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut in_frontier: FxHashSet<Point> = FxHashSet::default();
    let mut g_score: FxIndexMap<Point, i32> = FxIndexMap::default();
    let mut came_from: FxIndexMap<Point, Point> = FxIndexMap::default();
    let mut sequence: usize = 0;

    g_score.insert(start, 0);
    frontier.push(FrontierEntry {
        priority: 0,
        seq: sequence,
        cell: start,
    });
    in_frontier.insert(start);

    while let Some(FrontierEntry { cell: current, .. }) = frontier.pop() {
        in_frontier.remove(&current);

        if current == end {
            return match reconstruct_path(grid, &came_from, end, &mut on_progress) {
                ControlFlow::Continue(path) => {
                    if grid.state(end) != CellState::Start {
                        grid.set_state(end, CellState::End);
                    }
                    info!("found a path of {} steps", path.len() - 1);
                    Ok(SearchOutcome::Success(path))
                }
                ControlFlow::Break(()) => Ok(SearchOutcome::Cancelled),
            };
        }

        let current_g = g_score[&current];
        for neighbour in grid.open_neighbours(current) {
            let tentative = current_g + 1;
            if tentative < g_score.get(&neighbour).copied().unwrap_or(i32::MAX) {
                came_from.insert(neighbour, current);
                g_score.insert(neighbour, tentative);
                // An improved cell that already sits in the frontier
                // keeps its original priority; only newcomers are
                // enqueued.
                if in_frontier.insert(neighbour) {
                    sequence += 1;
                    frontier.push(FrontierEntry {
                        priority: variant.priority(tentative, neighbour, end),
                        seq: sequence,
                        cell: neighbour,
                    });
                    grid.open_cell(neighbour);
                }
            }
        }

        if on_progress(grid).is_break() {
            return Ok(SearchOutcome::Cancelled);
        }
        if current != start {
            grid.close_cell(current);
        }
    }
    warn!("frontier exhausted without reaching {end}");
    Ok(SearchOutcome::NoPathFound)
}

/// Like [search], but runs between the grid's designated start and end
/// cells. Rejects the call if either designation is missing.
pub fn search_marked<F>(
    grid: &mut TraceGrid,
    variant: SearchVariant,
    on_progress: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&TraceGrid) -> ControlFlow<()>,
{
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let end = grid.end().ok_or(SearchError::MissingEnd)?;
    search(grid, start, end, variant, on_progress)
}

/// Walks the predecessor map backwards from `end`, classifying every
/// predecessor as part of the path unless it holds the start role, and
/// reporting one progress step per visited cell, goal-adjacent first.
/// Returns the forward path including both endpoints, or breaks if the
/// callback cancels.
fn reconstruct_path<F>(
    grid: &mut TraceGrid,
    came_from: &FxIndexMap<Point, Point>,
    end: Point,
    on_progress: &mut F,
) -> ControlFlow<(), Vec<Point>>
where
    F: FnMut(&TraceGrid) -> ControlFlow<()>,
{
    let trail: Vec<Point> = itertools::unfold(end, |current| {
        came_from.get(current).map(|&previous| {
            *current = previous;
            previous
        })
    })
    .collect();
    for &cell in &trail {
        if grid.state(cell) != CellState::Start {
            grid.set_state(cell, CellState::Path);
        }
        if on_progress(grid).is_break() {
            return ControlFlow::Break(());
        }
    }
    let mut path = trail;
    path.reverse();
    path.push(end);
    ControlFlow::Continue(path)
}
