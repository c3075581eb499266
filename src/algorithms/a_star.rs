use crate::algorithms::common::{manhattan, PathResult, SearchSignal, EDGE_COST};
use crate::grid::{Grid, Position, Role};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry keyed by `(f_score, insertion order)`. The insertion
/// counter breaks f-score ties in FIFO order, so the dequeue sequence is
/// fully deterministic regardless of the heap's internal tie behavior.
#[derive(Clone, Copy, PartialEq)]
struct OpenEntry {
    f: u32,
    order: u64,
    pos: Position,
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap.
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.order.cmp(&self.order),
            ord => ord,
        }
    }
}

/// A* over a 4-connected uniform-cost grid.
///
/// Explores the grid from `start` toward `goal`, reporting every cell-state
/// transition (`Frontier` on discovery, `Visited` on expansion, `Path`
/// during reconstruction) synchronously through `on_transition`. The
/// observer's verdict is checked on every callback; `Cancel` aborts with
/// `PathResult::Cancelled`.
///
/// The grid is only read; all bookkeeping lives in search-local maps that
/// are dropped on return. On success the returned path is a shortest path
/// under unit edge costs.
pub fn search<F>(grid: &Grid, start: Position, goal: Position, mut on_transition: F) -> PathResult
where
    F: FnMut(Position, Role) -> SearchSignal,
{
    if !grid.contains(start)
        || !grid.contains(goal)
        || start == goal
        || grid.role_of(start) == Role::Wall
        || grid.role_of(goal) == Role::Wall
    {
        return PathResult::InvalidEndpoints;
    }

    let mut g_score: FxHashMap<Position, u32> = FxHashMap::default();
    let mut f_score: FxHashMap<Position, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();

    // The heap mirrors `open_set`; membership is tracked separately so a
    // cell is never queued twice at once.
    let mut open_queue: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut open_set: FxHashSet<Position> = FxHashSet::default();
    let mut insertion_counter = 0u64;

    g_score.insert(start, 0);
    f_score.insert(start, manhattan(start, goal));
    open_queue.push(OpenEntry {
        f: f_score[&start],
        order: insertion_counter,
        pos: start,
    });
    open_set.insert(start);

    while let Some(entry) = open_queue.pop() {
        let current = entry.pos;
        open_set.remove(&current);

        if current == goal {
            return reconstruct_path(&came_from, start, goal, &mut on_transition);
        }

        let current_g = g_score.get(&current).copied().unwrap_or(u32::MAX);

        for neighbor in grid.neighbors(current) {
            let tentative_g = current_g.saturating_add(EDGE_COST);

            if tentative_g < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                f_score.insert(neighbor, tentative_g + manhattan(neighbor, goal));

                if open_set.insert(neighbor) {
                    insertion_counter += 1;
                    open_queue.push(OpenEntry {
                        f: f_score[&neighbor],
                        order: insertion_counter,
                        pos: neighbor,
                    });
                    if on_transition(neighbor, Role::Frontier) == SearchSignal::Cancel {
                        return PathResult::Cancelled;
                    }
                }
            }
        }

        if current != start && on_transition(current, Role::Visited) == SearchSignal::Cancel {
            return PathResult::Cancelled;
        }
    }

    PathResult::NoPathExists
}

/// Walk `came_from` from the goal back to the start, emitting a `Path`
/// transition for every cell on the walk except the start, then return the
/// path in start-to-goal order.
fn reconstruct_path<F>(
    came_from: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
    on_transition: &mut F,
) -> PathResult
where
    F: FnMut(Position, Role) -> SearchSignal,
{
    let mut path = vec![goal];
    let mut current = goal;

    // The chain always terminates at start, which is the only discovered
    // cell without a predecessor.
    while let Some(&previous) = came_from.get(&current) {
        if on_transition(current, Role::Path) == SearchSignal::Cancel {
            return PathResult::Cancelled;
        }
        path.push(previous);
        current = previous;
    }
    debug_assert_eq!(current, start);

    path.reverse();
    PathResult::Success(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols).unwrap()
    }

    fn no_observer(_: Position, _: Role) -> SearchSignal {
        SearchSignal::Continue
    }

    fn path_of(result: PathResult) -> Vec<Position> {
        match result {
            PathResult::Success(path) => path,
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn open_5x5_finds_manhattan_optimal_path() {
        let grid = open_grid(5, 5);
        let path = path_of(search(
            &grid,
            Position::new(0, 0),
            Position::new(4, 4),
            no_observer,
        ));

        // 9 cells, 8 moves.
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Position::new(0, 0));
        assert_eq!(path[8], Position::new(4, 4));
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn path_routes_through_single_gap_in_wall_column() {
        let mut grid = open_grid(6, 6);
        for row in 0..6 {
            if row != 3 {
                grid.set_role(Position::new(row, 2), Role::Wall);
            }
        }

        let path = path_of(search(
            &grid,
            Position::new(0, 0),
            Position::new(0, 5),
            no_observer,
        ));
        assert!(path.contains(&Position::new(3, 2)));
        for pos in &path {
            assert_ne!(grid.role_of(*pos), Role::Wall);
        }
    }

    #[test]
    fn equal_start_and_goal_is_invalid_without_transitions() {
        let grid = open_grid(5, 5);
        let mut transitions = 0;
        let result = search(&grid, Position::new(2, 2), Position::new(2, 2), |_, _| {
            transitions += 1;
            SearchSignal::Continue
        });
        assert_eq!(result, PathResult::InvalidEndpoints);
        assert_eq!(transitions, 0);
    }

    #[test]
    fn wall_endpoints_are_invalid_without_transitions() {
        let mut grid = open_grid(5, 5);
        grid.set_role(Position::new(0, 0), Role::Wall);
        grid.set_role(Position::new(4, 4), Role::Wall);

        let mut transitions = 0;
        let mut counting = |_: Position, _: Role| {
            transitions += 1;
            SearchSignal::Continue
        };
        let start_on_wall = search(&grid, Position::new(0, 0), Position::new(2, 2), &mut counting);
        let goal_on_wall = search(&grid, Position::new(2, 2), Position::new(4, 4), &mut counting);
        assert_eq!(start_on_wall, PathResult::InvalidEndpoints);
        assert_eq!(goal_on_wall, PathResult::InvalidEndpoints);
        assert_eq!(transitions, 0);
    }

    #[test]
    fn out_of_bounds_endpoint_is_invalid() {
        let grid = open_grid(5, 5);
        let result = search(&grid, Position::new(0, 0), Position::new(9, 9), no_observer);
        assert_eq!(result, PathResult::InvalidEndpoints);
    }

    #[test]
    fn enclosed_goal_exhausts_open_set_and_visits_reachable_cells_once() {
        let mut grid = open_grid(5, 5);
        // Box in the goal at (4, 4).
        grid.set_role(Position::new(3, 4), Role::Wall);
        grid.set_role(Position::new(4, 3), Role::Wall);
        grid.set_role(Position::new(3, 3), Role::Wall);

        let start = Position::new(0, 0);
        let mut visited: Vec<Position> = Vec::new();
        let result = search(&grid, start, Position::new(4, 4), |pos, role| {
            if role == Role::Visited {
                visited.push(pos);
            }
            SearchSignal::Continue
        });
        assert_eq!(result, PathResult::NoPathExists);

        // Every traversable cell reachable from start, except start itself,
        // is expanded exactly once.
        let mut expected: Vec<Position> = Vec::new();
        for row in 0..5 {
            for col in 0..5 {
                let pos = Position::new(row, col);
                if pos != start
                    && pos != Position::new(4, 4)
                    && grid.role_of(pos) != Role::Wall
                {
                    expected.push(pos);
                }
            }
        }
        let mut seen = visited.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), visited.len(), "a cell was visited twice");
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn transition_stream_is_deterministic() {
        let mut grid = open_grid(8, 8);
        grid.apply_border_walls(&[0, 7], &[0, 7]);
        grid.set_role(Position::new(3, 3), Role::Wall);
        grid.set_role(Position::new(4, 3), Role::Wall);

        let run = |grid: &Grid| {
            let mut stream: Vec<(Position, Role)> = Vec::new();
            let result = search(grid, Position::new(1, 1), Position::new(6, 6), |pos, role| {
                stream.push((pos, role));
                SearchSignal::Continue
            });
            (path_of(result), stream)
        };

        let (path_a, stream_a) = run(&grid);
        let (path_b, stream_b) = run(&grid);
        assert_eq!(path_a, path_b);
        assert_eq!(stream_a, stream_b);
    }

    #[test]
    fn observer_cancel_aborts_the_search() {
        let grid = open_grid(10, 10);
        let mut remaining = 5;
        let result = search(&grid, Position::new(0, 0), Position::new(9, 9), |_, _| {
            if remaining == 0 {
                SearchSignal::Cancel
            } else {
                remaining -= 1;
                SearchSignal::Continue
            }
        });
        assert_eq!(result, PathResult::Cancelled);
    }

    #[test]
    fn cancel_during_path_reconstruction_aborts_too() {
        let grid = open_grid(5, 5);
        // The goal is reachable, but the observer bails on the very first
        // Path emission, which is the goal cell itself.
        let mut first_path_cell = None;
        let result = search(&grid, Position::new(0, 0), Position::new(4, 4), |pos, role| {
            if role == Role::Path {
                first_path_cell.get_or_insert(pos);
                SearchSignal::Cancel
            } else {
                SearchSignal::Continue
            }
        });
        assert_eq!(result, PathResult::Cancelled);
        assert_eq!(first_path_cell, Some(Position::new(4, 4)));
    }

    #[test]
    fn frontier_precedes_visited_for_every_expanded_cell() {
        let grid = open_grid(6, 6);
        let start = Position::new(0, 0);
        let mut opened: FxHashSet<Position> = FxHashSet::default();
        let result = search(&grid, start, Position::new(5, 5), |pos, role| {
            match role {
                Role::Frontier => {
                    opened.insert(pos);
                }
                Role::Visited => {
                    assert!(opened.contains(&pos), "{:?} expanded before discovery", pos);
                }
                _ => {}
            }
            SearchSignal::Continue
        });
        assert!(matches!(result, PathResult::Success(_)));
    }
}
