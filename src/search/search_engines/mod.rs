mod astar;
mod best_first;
mod bfs;
mod depth_limited;
mod dfs;
mod graph_search;
mod iterative_deepening;
mod progress;
mod search_engine;
mod search_statistics;

pub use astar::AStar;
pub use best_first::BestFirst;
pub use bfs::BreadthFirst;
pub use depth_limited::DepthLimited;
pub use dfs::DepthFirst;
pub(crate) use graph_search::graph_search;
pub use graph_search::SearchMode;
pub use iterative_deepening::IterativeDeepening;
pub use progress::{memory_usage_hook, ProgressHook, ProgressReporter, SearchProgress};
pub use search_engine::{
    SearchEngine, SearchEngineName, SearchResult, Solution, DEFAULT_DEPTH_LIMIT,
};
pub use search_statistics::SearchStatistics;

use crate::search::{Heuristic, HeuristicValue, NodeId, Problem, SearchSpace};

pub fn breadth_first_search<P: Problem>(
    problem: &P,
) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
    BreadthFirst::new().search(problem)
}

pub fn depth_first_search<P: Problem>(
    problem: &P,
) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
    DepthFirst::new().search(problem)
}

pub fn breadth_first_tree_search<P: Problem>(
    problem: &P,
) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
    BreadthFirst::tree().search(problem)
}

/// Depth first search without a closed list. Loops forever on problems with
/// cycles and no reachable goal.
pub fn depth_first_tree_search<P: Problem>(
    problem: &P,
) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
    DepthFirst::tree().search(problem)
}

pub fn depth_limited_search<P: Problem>(
    problem: &P,
    limit: usize,
) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
    DepthLimited::new(limit).search(problem)
}

pub fn iterative_deepening_search<P: Problem>(
    problem: &P,
) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
    IterativeDeepening::new().search(problem)
}

pub fn best_first_search<P, F>(
    problem: &P,
    evaluation: F,
) -> (SearchResult<P::State, P::Action>, SearchStatistics)
where
    P: Problem,
    F: FnMut(&mut SearchSpace<P::State, P::Action>, NodeId) -> HeuristicValue,
{
    BestFirst::new(evaluation).search(problem)
}

/// A* with the given heuristic, or with the problem's own heuristic when
/// `heuristic` is `None`.
pub fn astar_search<P: Problem>(
    problem: &P,
    heuristic: Option<Box<dyn Heuristic<P::State>>>,
) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
    match heuristic {
        Some(heuristic) => AStar::with_heuristic(heuristic).search(problem),
        None => AStar::<P::State>::new().search(problem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CountdownProblem;

    #[test]
    fn engines_created_by_name_agree_on_reachability() {
        let problem = CountdownProblem::new(4);
        for name in [
            SearchEngineName::BreadthFirst,
            SearchEngineName::BreadthFirstTree,
            SearchEngineName::DepthFirst,
            SearchEngineName::DepthFirstTree,
            SearchEngineName::DepthLimited,
            SearchEngineName::IterativeDeepening,
            SearchEngineName::AStar,
        ] {
            let mut engine = name.create::<CountdownProblem>();
            let (result, _) = engine.search(&problem);
            let solution = result
                .into_solution()
                .unwrap_or_else(|| panic!("{:?} found no solution", name));
            assert_eq!(*solution.goal_state(), 0);
            assert_eq!(solution.cost(), HeuristicValue::from(4.0));
        }
    }

    #[test]
    fn free_functions_match_engines() {
        let problem = CountdownProblem::new(3);
        assert!(breadth_first_search(&problem).0.is_success());
        assert!(depth_first_search(&problem).0.is_success());
        assert!(breadth_first_tree_search(&problem).0.is_success());
        assert!(depth_first_tree_search(&problem).0.is_success());
        assert!(depth_limited_search(&problem, 1).0.is_cutoff());
        assert!(iterative_deepening_search(&problem).0.is_success());
        let by_cost = |space: &mut SearchSpace<u32, u32>, id| space.get_node(id).get_g();
        assert!(best_first_search(&problem, by_cost).0.is_success());
        assert!(astar_search(&problem, None).0.is_success());
    }
}
