use std::ops::ControlFlow;

use grid_pathtrace::{search, SearchOutcome, SearchVariant, TraceGrid};
use grid_util::point::Point;

// Runs the same problem under both frontier policies. Both paths have
// the same length; the uniform-cost policy expands far more cells to
// find its one.
fn main() {
    for variant in [SearchVariant::Heuristic, SearchVariant::UniformCost] {
        let mut grid = TraceGrid::new(20, 600).expect("valid dimensions");
        let mut expansions = 0;
        let outcome = search(
            &mut grid,
            Point::new(1, 1),
            Point::new(18, 18),
            variant,
            |_| {
                expansions += 1;
                ControlFlow::Continue(())
            },
        )
        .expect("endpoints are walkable");
        match outcome {
            SearchOutcome::Success(path) => println!(
                "{variant:?}: {} steps after {expansions} expansions",
                path.len() - 1
            ),
            other => println!("{variant:?}: {other:?}"),
        }
    }
}
