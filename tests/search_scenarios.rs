//! End-to-end scenarios for both search variants.

use std::ops::ControlFlow;

use grid_pathtrace::{
    search, search_marked, CellState, SearchError, SearchOutcome, SearchVariant, TraceGrid,
};
use grid_util::point::Point;

const VARIANTS: [SearchVariant; 2] = [SearchVariant::Heuristic, SearchVariant::UniformCost];

fn keep_going(_: &TraceGrid) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// On an obstacle-free grid the found path has Manhattan length.
#[test]
fn open_grid_path_has_manhattan_length() {
    for variant in VARIANTS {
        let mut grid = TraceGrid::new(5, 500).unwrap();
        let start = Point::new(1, 1);
        let end = Point::new(3, 3);
        let outcome = search(&mut grid, start, end, variant, keep_going).unwrap();
        match outcome {
            SearchOutcome::Success(path) => {
                assert_eq!(path.len() - 1, 4);
                assert_eq!(path[0], start);
                assert_eq!(*path.last().unwrap(), end);
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }
}

/// A wall spanning the whole interior separates start from end.
#[test]
fn full_wall_blocks_all_paths() {
    for variant in VARIANTS {
        let mut grid = TraceGrid::new(5, 500).unwrap();
        for y in 1..=3 {
            grid.mark_barrier(Point::new(2, y));
        }
        let outcome = search(
            &mut grid,
            Point::new(1, 1),
            Point::new(3, 3),
            variant,
            keep_going,
        )
        .unwrap();
        assert_eq!(outcome, SearchOutcome::NoPathFound);
    }
}

/// Coincident endpoints succeed with a zero-length path and no
/// reconstruction steps.
#[test]
fn coincident_start_and_end_succeed_immediately() {
    for variant in VARIANTS {
        let mut grid = TraceGrid::new(5, 500).unwrap();
        let p = Point::new(2, 2);
        let mut calls = 0;
        let outcome = search(&mut grid, p, p, variant, |_| {
            calls += 1;
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(outcome, SearchOutcome::Success(vec![p]));
        assert_eq!(calls, 0);
        assert_eq!(grid.state(p), CellState::End);
    }
}

/// Cancelling on the third progress report terminates the run.
#[test]
fn cancellation_stops_the_search() {
    for variant in VARIANTS {
        let mut grid = TraceGrid::new(12, 600).unwrap();
        let mut calls = 0;
        let outcome = search(
            &mut grid,
            Point::new(1, 1),
            Point::new(10, 10),
            variant,
            |_| {
                calls += 1;
                if calls == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        )
        .unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(calls, 3);
    }
}

/// The smallest grid with an interior holds exactly one walkable cell.
#[test]
fn minimal_interior_grid() {
    for variant in VARIANTS {
        let mut grid = TraceGrid::new(3, 300).unwrap();
        let only = Point::new(1, 1);
        let outcome = search(&mut grid, only, only, variant, keep_going).unwrap();
        assert_eq!(outcome, SearchOutcome::Success(vec![only]));
    }
}

/// Adjacent endpoints reduce the search to a single relaxation.
#[test]
fn adjacent_start_and_end() {
    for variant in VARIANTS {
        let mut grid = TraceGrid::new(4, 400).unwrap();
        let start = Point::new(1, 1);
        let end = Point::new(1, 2);
        let outcome = search(&mut grid, start, end, variant, keep_going).unwrap();
        match outcome {
            SearchOutcome::Success(path) => assert_eq!(path, vec![start, end]),
            other => panic!("expected a path, got {other:?}"),
        }
    }
}

#[test]
fn preconditions_are_rejected_before_searching() {
    let mut grid = TraceGrid::new(5, 500).unwrap();
    let inside = Point::new(1, 1);
    let outside = Point::new(9, 9);
    let wall = Point::new(0, 0);
    assert_eq!(
        search(&mut grid, inside, outside, SearchVariant::Heuristic, keep_going).unwrap_err(),
        SearchError::OutOfBounds(outside)
    );
    assert_eq!(
        search(&mut grid, wall, inside, SearchVariant::Heuristic, keep_going).unwrap_err(),
        SearchError::Blocked(wall)
    );
    assert_eq!(
        search_marked(&mut grid, SearchVariant::Heuristic, keep_going).unwrap_err(),
        SearchError::MissingStart
    );
    grid.mark_start(inside);
    assert_eq!(
        search_marked(&mut grid, SearchVariant::Heuristic, keep_going).unwrap_err(),
        SearchError::MissingEnd
    );
}

/// Searching between designated cells leaves the expected
/// classifications behind: roles preserved, path traced, detour taken.
#[test]
fn marked_search_traces_cell_states() {
    let mut grid = TraceGrid::new(5, 500).unwrap();
    grid.mark_start(Point::new(1, 1));
    grid.mark_end(Point::new(3, 1));
    grid.mark_barrier(Point::new(2, 1));
    let outcome = search_marked(&mut grid, SearchVariant::Heuristic, keep_going).unwrap();
    let path = match outcome {
        SearchOutcome::Success(path) => path,
        other => panic!("expected a path, got {other:?}"),
    };
    assert_eq!(path.len() - 1, 4);
    assert_eq!(grid.state(Point::new(1, 1)), CellState::Start);
    assert_eq!(grid.state(Point::new(3, 1)), CellState::End);
    for &cell in &path[1..path.len() - 1] {
        assert_eq!(grid.state(cell), CellState::Path);
    }
}
