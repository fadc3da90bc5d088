use std::ops::ControlFlow;

use grid_pathtrace::{search, SearchOutcome, SearchVariant, TraceGrid};
use grid_util::point::Point;

// In this demo a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let mut grid = TraceGrid::new(5, 500).expect("valid dimensions");
    grid.mark_barrier(Point::new(2, 2));
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    let outcome = search(&mut grid, start, end, SearchVariant::Heuristic, |_| {
        ControlFlow::Continue(())
    })
    .expect("endpoints are walkable");
    if let SearchOutcome::Success(path) = outcome {
        println!("A path has been found:");
        for p in path {
            println!("{p:?}");
        }
    }
}
