use std::ops::ControlFlow;

use grid_pathtrace::{search_marked, SearchVariant, TraceGrid};
use grid_util::point::Point;

// Prints the grid after every expansion and reconstruction step, the
// terminal equivalent of the incremental rendering a windowed front
// end would do with the same callback.
fn main() {
    let mut grid = TraceGrid::new(9, 540).expect("valid dimensions");
    grid.mark_start(Point::new(1, 1));
    grid.mark_end(Point::new(7, 7));
    for y in 1..=5 {
        grid.mark_barrier(Point::new(4, y));
    }
    let mut frame = 0;
    let outcome = search_marked(&mut grid, SearchVariant::Heuristic, |snapshot| {
        frame += 1;
        println!("frame {frame}:\n{snapshot}");
        ControlFlow::Continue(())
    })
    .expect("start and end are designated");
    println!("outcome: {outcome:?}\n\nfinal grid:\n{grid}");
}
