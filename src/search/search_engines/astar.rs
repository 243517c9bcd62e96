//! A* search: best first graph search with `f(n) = g(n) + h(n)`, corrected by
//! pathmax so that `f` never decreases from a parent to its child:
//!
//! `f(n) = max(f(parent), g(n) + h(n))`
//!
//! The returned path is optimal only if the heuristic is admissible and
//! consistent. This is not checked.

use crate::search::{
    search_engines::{
        best_first::best_first_graph_search, ProgressReporter, SearchEngine, SearchResult,
        SearchStatistics,
    },
    Heuristic, HeuristicValue, NodeId, Problem, SearchSpace,
};

#[derive(Debug)]
pub struct AStar<S> {
    /// Overrides the heuristic of the problem when set
    heuristic: Option<Box<dyn Heuristic<S>>>,
    progress: Option<ProgressReporter>,
}

impl<S> AStar<S> {
    /// A* guided by the problem's own heuristic.
    pub fn new() -> Self {
        Self {
            heuristic: None,
            progress: None,
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic<S>>) -> Self {
        Self {
            heuristic: Some(heuristic),
            progress: None,
        }
    }

    pub fn with_progress(mut self, reporter: ProgressReporter) -> Self {
        self.progress = Some(reporter);
        self
    }
}

impl<S> Default for AStar<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// The pathmax evaluation of a node, caching `h` on the node.
fn pathmax<P: Problem>(
    problem: &P,
    heuristic: Option<&dyn Heuristic<P::State>>,
    search_space: &mut SearchSpace<P::State, P::Action>,
    node_id: NodeId,
) -> HeuristicValue {
    let parent_f = search_space
        .get_parent(node_id)
        .and_then(|parent| parent.get_f())
        .unwrap_or(HeuristicValue::from(f64::NEG_INFINITY));
    let node = search_space.get_node_mut(node_id);
    let h = node.h_or_insert_with(|state| match heuristic {
        Some(heuristic) => heuristic.evaluate(state),
        None => problem.heuristic(state),
    });
    parent_f.max(node.get_g() + h)
}

impl<P: Problem> SearchEngine<P> for AStar<P::State> {
    fn search(&mut self, problem: &P) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        let heuristic = self.heuristic.as_deref();
        best_first_graph_search(
            problem,
            |search_space, node_id| pathmax(problem, heuristic, search_space, node_id),
            self.progress.as_mut(),
        )
    }
}
