use crate::algorithms::a_star::search;
use crate::algorithms::common::{PathResult, SearchSignal};
use crate::grid::{Grid, Position, Role};

/// Run one search per agent toward the shared goal, in the given agent
/// order, collecting one result per agent.
///
/// Agents do not interact: each search runs to completion before the next
/// starts, against the same read-only grid, so the combined transition
/// stream is a plain concatenation of the per-agent streams. A failed
/// search (`NoPathExists`, `InvalidEndpoints`) is recorded and the batch
/// continues; a `Cancelled` outcome likewise only affects its own agent.
pub fn run_all<F>(
    grid: &Grid,
    agents: &[Position],
    goal: Position,
    mut on_transition: F,
) -> Vec<PathResult>
where
    F: FnMut(Position, Role) -> SearchSignal,
{
    agents
        .iter()
        .map(|&agent| search(grid, agent, goal, &mut on_transition))
        .collect()
}
