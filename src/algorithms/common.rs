use crate::grid::Position;

/// Cost of stepping between two adjacent traversable cells. The model is
/// uniform-cost only; there is no weighted terrain.
pub const EDGE_COST: u32 = 1;

/// Manhattan distance. Admissible and consistent on a 4-connected
/// uniform-cost grid, which is what makes the A* result optimal.
pub fn manhattan(a: Position, b: Position) -> u32 {
    ((a.row as i64 - b.row as i64).abs() + (a.col as i64 - b.col as i64).abs()) as u32
}

/// Outcome of one search. All failure modes are values, never panics;
/// `NoPathExists` is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Ordered path from start to goal inclusive.
    Success(Vec<Position>),
    NoPathExists,
    /// Start/goal equal, out of bounds, or on a Wall. Reported before any
    /// search state is built; no transitions are emitted.
    InvalidEndpoints,
    /// The observer asked to stop at a callback boundary.
    Cancelled,
}

/// Verdict returned by the transition observer. `Cancel` aborts the search
/// cooperatively; any failure inside the observer should be reported as
/// `Cancel` rather than unwinding through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSignal {
    Continue,
    Cancel,
}
