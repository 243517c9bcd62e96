//! The generic search loop shared by every frontier based engine. Engines
//! differ in the frontier they hand in, in the evaluation function that
//! computes the priority of each node and in whether a closed list is kept.

use crate::search::{
    search_engines::{ProgressReporter, SearchResult, SearchStatistics, Solution},
    Frontier, HeuristicValue, NodeId, Problem, SearchSpace,
};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Whether expanded states are remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Keep a closed list and expand every state at most once
    Graph,
    /// Expand every popped node, even if its state was expanded before. Only
    /// terminates on problems without cycles or with a reachable goal.
    Tree,
}

pub(crate) fn graph_search<P, Fr, E>(
    problem: &P,
    mode: SearchMode,
    frontier: &mut Fr,
    mut evaluate: E,
    statistics: &mut SearchStatistics,
    mut progress: Option<&mut ProgressReporter>,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    Fr: Frontier<P::State>,
    E: FnMut(&mut SearchSpace<P::State, P::Action>, NodeId) -> HeuristicValue,
{
    let mut search_space = SearchSpace::new(problem.initial_state().clone());
    let root_id = search_space.get_root_id();
    let root_priority = evaluate(&mut search_space, root_id);
    statistics.increment_evaluated_nodes();
    frontier.push(
        root_id,
        search_space.get_node(root_id).get_state(),
        root_priority,
    );

    // States are closed lazily, when they are popped. Children are pushed
    // without checking against the closed list or the frontier.
    let mut closed: Option<HashSet<P::State>> = match mode {
        SearchMode::Graph => Some(HashSet::new()),
        SearchMode::Tree => None,
    };

    while let Some(node_id) = frontier.pop() {
        let node = search_space.get_node(node_id);
        if problem.is_goal(node.get_state()) {
            debug!(
                depth = node.get_depth(),
                cost = node.get_g().into_inner(),
                "goal reached"
            );
            return SearchResult::Success(Solution::new(search_space, node_id));
        }

        if let Some(closed) = closed.as_mut() {
            if closed.contains(node.get_state()) {
                statistics.increment_duplicate_nodes();
                continue;
            }
            closed.insert(node.get_state().clone());
        }

        let depth = node.get_depth();
        statistics.increment_expanded_nodes(depth);
        if let Some(reporter) = progress.as_deref_mut() {
            reporter.observe_depth(depth, statistics);
        }

        let children = search_space.expand(node_id, problem);
        trace!(depth, children = children.len(), "expanded node");
        statistics.increment_generated_nodes(children.len());
        for child_id in children {
            let priority = evaluate(&mut search_space, child_id);
            statistics.increment_evaluated_nodes();
            frontier.push(
                child_id,
                search_space.get_node(child_id).get_state(),
                priority,
            );
        }
    }

    debug!(
        closed_states = closed.map_or(0, |closed| closed.len()),
        "frontier exhausted"
    );
    SearchResult::NoSolution
}
