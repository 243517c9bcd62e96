//! Depth limited tree search. No closed list is kept, a state can be visited
//! again along a different branch.
//!
//! Only the successors of the nodes on the current branch are held in
//! memory. The search space handed back in a [`Solution`] contains just the
//! path from the root to the goal.

use crate::search::{
    search_engines::{ProgressReporter, SearchEngine, SearchResult, SearchStatistics, Solution},
    HeuristicValue, Problem, SearchSpace,
};
use tracing::debug;

/// Outcome of exploring the subtree below one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubtreeOutcome {
    /// A goal was reached, the steps towards it were recorded
    Found,
    Cutoff,
    Exhausted,
}

/// One step towards a goal: the action taken, the state reached and its cost.
type Step<P> = (
    <P as Problem>::Action,
    <P as Problem>::State,
    HeuristicValue,
);

#[derive(Debug)]
pub struct DepthLimited {
    limit: usize,
    progress: Option<ProgressReporter>,
}

impl DepthLimited {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            progress: None,
        }
    }

    pub fn with_progress(mut self, reporter: ProgressReporter) -> Self {
        self.progress = Some(reporter);
        self
    }
}

impl<P: Problem> SearchEngine<P> for DepthLimited {
    fn search(&mut self, problem: &P) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = depth_limited(problem, self.limit, &mut statistics, self.progress.as_mut());
        statistics.finalise_search();
        (result, statistics)
    }
}

/// Run one depth limited search, accumulating into `statistics`.
pub(crate) fn depth_limited<P: Problem>(
    problem: &P,
    limit: usize,
    statistics: &mut SearchStatistics,
    mut progress: Option<&mut ProgressReporter>,
) -> SearchResult<P::State, P::Action> {
    let initial_state = problem.initial_state();
    // Filled from the goal back towards the root while the recursion unwinds.
    let mut steps: Vec<Step<P>> = vec![];
    let outcome = recursive_dls(
        problem,
        initial_state,
        HeuristicValue::from(0.),
        0,
        limit,
        statistics,
        &mut progress,
        &mut steps,
    );
    debug!(limit, outcome = ?outcome, "depth limited search finished");
    match outcome {
        SubtreeOutcome::Found => {
            let mut search_space = SearchSpace::new(initial_state.clone());
            let mut node_id = search_space.get_root_id();
            for (action, state, g) in steps.into_iter().rev() {
                node_id = search_space.add_child(node_id, action, state, g);
            }
            SearchResult::Success(Solution::new(search_space, node_id))
        }
        SubtreeOutcome::Cutoff => SearchResult::Cutoff,
        SubtreeOutcome::Exhausted => SearchResult::NoSolution,
    }
}

#[allow(clippy::too_many_arguments)]
fn recursive_dls<P: Problem>(
    problem: &P,
    state: &P::State,
    g: HeuristicValue,
    depth: usize,
    limit: usize,
    statistics: &mut SearchStatistics,
    progress: &mut Option<&mut ProgressReporter>,
    steps: &mut Vec<Step<P>>,
) -> SubtreeOutcome {
    if problem.is_goal(state) {
        return SubtreeOutcome::Found;
    }
    if depth == limit {
        return SubtreeOutcome::Cutoff;
    }

    statistics.increment_expanded_nodes(depth);
    if let Some(reporter) = progress.as_deref_mut() {
        reporter.observe_depth(depth, statistics);
    }
    let successors = problem.successors(state);
    statistics.increment_generated_nodes(successors.len());

    let mut cutoff_occurred = false;
    for (action, next_state) in successors {
        let next_g = problem.path_cost(g, state, &action, &next_state);
        let outcome = recursive_dls(
            problem,
            &next_state,
            next_g,
            depth + 1,
            limit,
            statistics,
            progress,
            steps,
        );
        match outcome {
            SubtreeOutcome::Found => {
                steps.push((action, next_state, next_g));
                return SubtreeOutcome::Found;
            }
            SubtreeOutcome::Cutoff => cutoff_occurred = true,
            SubtreeOutcome::Exhausted => {}
        }
    }

    if cutoff_occurred {
        SubtreeOutcome::Cutoff
    } else {
        SubtreeOutcome::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CountdownProblem;

    #[test]
    fn zero_limit_on_non_goal_is_cutoff() {
        let problem = CountdownProblem::new(3);
        let (result, statistics) = DepthLimited::new(0).search(&problem);
        assert!(result.is_cutoff());
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn zero_limit_on_goal_is_success() {
        let problem = CountdownProblem::new(0);
        let (result, _) = DepthLimited::new(0).search(&problem);
        assert_eq!(result.solution().unwrap().depth(), 0);
    }

    #[test]
    fn finds_goal_within_limit() {
        let problem = CountdownProblem::new(4);
        let (result, _) = DepthLimited::new(4).search(&problem);
        let solution = result.into_solution().unwrap();
        // The first branch tried is the all-ones path.
        assert_eq!(solution.plan().steps(), &[1, 1, 1, 1]);
        assert_eq!(solution.cost(), HeuristicValue::from(4.));
        let states: Vec<u32> = solution.path().iter().map(|node| *node.get_state()).collect();
        assert_eq!(states, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn limit_too_small_is_cutoff() {
        let problem = CountdownProblem::new(6);
        let (result, _) = DepthLimited::new(2).search(&problem);
        assert!(result.is_cutoff());
    }

    #[test]
    fn exhausted_tree_is_no_solution() {
        let problem = CountdownProblem::unreachable(2);
        let (result, statistics) = DepthLimited::new(10).search(&problem);
        assert!(result.is_no_solution());
        // 2 -> {1 -> {0}, 0}
        assert_eq!(statistics.expanded_nodes(), 4);
    }

    #[test]
    fn only_the_goal_path_is_kept() {
        let problem = CountdownProblem::new(6);
        let (result, statistics) = DepthLimited::new(6).search(&problem);
        let solution = result.into_solution().unwrap();
        assert_eq!(solution.depth(), 6);
        assert_eq!(solution.search_space().len(), solution.depth() + 1);
        assert!(statistics.generated_nodes() > solution.search_space().len());
    }
}
