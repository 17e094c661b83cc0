//! Level-order breadth-first search.
//!
//! States are claimed when they are enqueued, so each one enters the queue
//! at most once, at the shallowest level it can be reached from. The first
//! solved state dequeued is therefore one with the fewest moves.

use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, trace};

use crate::node::{NodeId, SearchTree, SolutionPath};
use crate::puzzle::Puzzle;
use crate::solver::{SolverConfig, SolverResult};
use crate::visited::VisitedSet;

/// Breadth-first search with the default configuration.
///
/// Returns a shortest path, or `None` when no solved state is reachable.
pub fn breadth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionPath<P>> {
    solve_breadth_first(puzzle, &SolverConfig::default()).solution
}

/// Breadth-first search from `puzzle`, bounded by `config.max_depth`.
///
/// The whole explored tree is kept until a solved state is found; it is
/// then trimmed down to the branch leading to that state.
pub fn solve_breadth_first<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SolverResult<P> {
    let start_time = Instant::now();

    let mut tree = SearchTree::new(puzzle);
    let mut visited = VisitedSet::new();
    visited.insert(tree.root().puzzle());

    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
    queue.push_back((tree.root_id(), 0));

    let mut states_expanded = 0;
    let mut cut_off = false;

    while let Some((id, depth)) = queue.pop_front() {
        if tree.node(id).puzzle().is_solved() {
            let states_visited = visited.len();
            let result = SolverResult {
                solution: Some(tree.into_path(id)),
                search_exhausted: false,
                states_visited,
                states_expanded,
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            };
            log_summary(&result);
            return result;
        }

        if !config.allows_expansion(depth) {
            cut_off = true;
            continue;
        }

        states_expanded += 1;
        let extensions = tree.node(id).puzzle().extensions();
        trace!(
            "expanding node {} at depth {}: {} extensions, {} queued",
            id.index(),
            depth,
            extensions.len(),
            queue.len()
        );

        for extension in extensions {
            if visited.insert(&extension) {
                let child = tree.add_child(id, extension);
                queue.push_back((child, depth + 1));
            }
        }
    }

    let result = SolverResult {
        solution: None,
        search_exhausted: !cut_off,
        states_visited: visited.len(),
        states_expanded,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    };
    log_summary(&result);
    result
}

fn log_summary<P>(result: &SolverResult<P>) {
    debug!(
        "breadth-first search {}: {} states visited, {} expanded, {} ms",
        result.outcome(),
        result.states_visited,
        result.states_expanded,
        result.time_elapsed_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GraphPuzzle;
    use test_log::test;

    fn path_of(path: &SolutionPath<GraphPuzzle>) -> Vec<u32> {
        path.states().map(|state| state.at()).collect()
    }

    #[test]
    fn test_solved_start_returns_single_node_without_expanding() {
        let puzzle = GraphPuzzle::new(2, 2, &[(2, 3)]);
        let probe = puzzle.clone();

        let path = breadth_first_solve(puzzle).expect("start is solved");

        assert_eq!(path.len(), 1);
        assert_eq!(path.solved_state(), &probe);
        assert_eq!(probe.expansions(), 0);
    }

    #[test]
    fn test_dead_end_is_exhausted() {
        let result = solve_breadth_first(GraphPuzzle::new(1, 9, &[]), &SolverConfig::default());

        assert!(result.solution.is_none());
        assert!(result.search_exhausted);
        assert_eq!(result.states_visited, 1);
    }

    #[test]
    fn test_returns_shortest_path() {
        let edges = [(1, 2), (1, 4), (2, 3), (3, 4)];
        let path = breadth_first_solve(GraphPuzzle::new(1, 4, &edges)).expect("reachable");

        assert_eq!(path_of(&path), vec![1, 4]);
        assert_eq!(path.transitions(), 1);
    }

    #[test]
    fn test_enqueue_order_follows_extension_order() {
        // two shortest routes to 4; 2 is enqueued before 3
        let edges = [(1, 2), (1, 3), (3, 4), (2, 4)];
        let path = breadth_first_solve(GraphPuzzle::new(1, 4, &edges)).expect("reachable");

        assert_eq!(path_of(&path), vec![1, 2, 4]);
    }

    #[test]
    fn test_result_is_trimmed_to_one_branch() {
        let edges = [(1, 2), (1, 3), (1, 5), (3, 4), (2, 6), (5, 7)];
        let path = breadth_first_solve(GraphPuzzle::new(1, 4, &edges)).expect("reachable");

        assert_eq!(path.len(), 3);
        assert_eq!(path.tree().node_count(), 3);
        let mut node = path.root();
        while let Some(child) = node.children().next() {
            assert_eq!(node.child_count(), 1);
            assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
            node = child;
        }
        assert_eq!(node.puzzle().at(), 4);
    }

    #[test]
    fn test_states_are_claimed_when_enqueued() {
        let edges = [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)];
        let puzzle = GraphPuzzle::new(1, 6, &edges);
        let probe = puzzle.clone();

        let result = solve_breadth_first(puzzle, &SolverConfig::default());

        assert!(result.search_exhausted);
        assert_eq!(result.states_visited, 5);
        assert_eq!(result.states_expanded, 5);
        assert_eq!(probe.expansions(), 5);
    }

    #[test]
    fn test_cycles_terminate() {
        let edges = [(1, 2), (2, 1), (2, 3), (3, 2)];
        let result = solve_breadth_first(GraphPuzzle::new(1, 9, &edges), &SolverConfig::default());

        assert!(result.search_exhausted);
        assert_eq!(result.states_visited, 3);
    }

    #[test]
    fn test_depth_bound_stops_search() {
        let edges = [(1, 2), (2, 3), (3, 4)];

        let cut =
            solve_breadth_first(GraphPuzzle::new(1, 4, &edges), &SolverConfig::with_max_depth(2));
        assert!(cut.solution.is_none());
        assert!(!cut.search_exhausted);

        let reached =
            solve_breadth_first(GraphPuzzle::new(1, 4, &edges), &SolverConfig::with_max_depth(3));
        assert_eq!(reached.solution.map(|path| path.transitions()), Some(3));
    }
}
