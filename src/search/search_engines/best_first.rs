//! Best first graph search: always expand the node with the lowest value of an
//! evaluation function `f`. The value of `f` is cached on each node the first
//! time it is computed, so after a search the values along the returned path
//! can be inspected.

use crate::search::{
    search_engines::{
        graph_search, ProgressReporter, SearchEngine, SearchMode, SearchResult, SearchStatistics,
    },
    HeuristicValue, NodeId, PriorityFrontier, Problem, SearchSpace,
};

/// Wrap an evaluation function so that it is evaluated at most once per
/// node.
pub(crate) fn memoized<S, A>(
    mut evaluation: impl FnMut(&mut SearchSpace<S, A>, NodeId) -> HeuristicValue,
) -> impl FnMut(&mut SearchSpace<S, A>, NodeId) -> HeuristicValue {
    move |search_space, node_id| {
        if let Some(f) = search_space.get_node(node_id).get_f() {
            return f;
        }
        let f = evaluation(search_space, node_id);
        search_space.get_node_mut(node_id).set_f(f);
        f
    }
}

pub(crate) fn best_first_graph_search<P, F>(
    problem: &P,
    evaluation: F,
    progress: Option<&mut ProgressReporter>,
) -> (SearchResult<P::State, P::Action>, SearchStatistics)
where
    P: Problem,
    F: FnMut(&mut SearchSpace<P::State, P::Action>, NodeId) -> HeuristicValue,
{
    let mut statistics = SearchStatistics::new();
    let result = graph_search(
        problem,
        SearchMode::Graph,
        &mut PriorityFrontier::new(),
        memoized(evaluation),
        &mut statistics,
        progress,
    );
    statistics.finalise_search();
    (result, statistics)
}

#[derive(Debug)]
pub struct BestFirst<F> {
    evaluation: F,
    progress: Option<ProgressReporter>,
}

impl<F> BestFirst<F> {
    pub fn new(evaluation: F) -> Self {
        Self {
            evaluation,
            progress: None,
        }
    }

    pub fn with_progress(mut self, reporter: ProgressReporter) -> Self {
        self.progress = Some(reporter);
        self
    }
}

impl<P, F> SearchEngine<P> for BestFirst<F>
where
    P: Problem,
    F: FnMut(&mut SearchSpace<P::State, P::Action>, NodeId) -> HeuristicValue,
{
    fn search(&mut self, problem: &P) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        best_first_graph_search(problem, &mut self.evaluation, self.progress.as_mut())
    }
}
