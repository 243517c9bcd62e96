//! Depth first search

use crate::search::{
    search_engines::{
        graph_search, ProgressReporter, SearchEngine, SearchMode, SearchResult, SearchStatistics,
    },
    LifoFrontier, Problem,
};

#[derive(Debug)]
pub struct DepthFirst {
    mode: SearchMode,
    progress: Option<ProgressReporter>,
}

impl DepthFirst {
    /// Graph search, every state is expanded at most once.
    pub fn new() -> Self {
        Self {
            mode: SearchMode::Graph,
            progress: None,
        }
    }

    /// Tree search. Does not terminate on problems with cycles unless a goal
    /// is found first.
    pub fn tree() -> Self {
        Self {
            mode: SearchMode::Tree,
            progress: None,
        }
    }

    pub fn with_progress(mut self, reporter: ProgressReporter) -> Self {
        self.progress = Some(reporter);
        self
    }
}

impl Default for DepthFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem> SearchEngine<P> for DepthFirst {
    fn search(&mut self, problem: &P) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = graph_search(
            problem,
            self.mode,
            &mut LifoFrontier::new(),
            |space, node_id| space.get_node(node_id).get_g(),
            &mut statistics,
            self.progress.as_mut(),
        );
        statistics.finalise_search();
        (result, statistics)
    }
}
