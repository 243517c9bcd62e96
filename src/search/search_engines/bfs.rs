//! Breadth first search

use crate::search::{
    search_engines::{
        graph_search, ProgressReporter, SearchEngine, SearchMode, SearchResult, SearchStatistics,
    },
    FifoFrontier, Problem,
};

#[derive(Debug)]
pub struct BreadthFirst {
    mode: SearchMode,
    progress: Option<ProgressReporter>,
}

impl BreadthFirst {
    /// Graph search, every state is expanded at most once.
    pub fn new() -> Self {
        Self {
            mode: SearchMode::Graph,
            progress: None,
        }
    }

    /// Tree search, a state reached along several paths is expanded once per
    /// path.
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

impl Default for BreadthFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem> SearchEngine<P> for BreadthFirst {
    fn search(&mut self, problem: &P) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = graph_search(
            problem,
            self.mode,
            &mut FifoFrontier::new(),
            |space, node_id| space.get_node(node_id).get_g(),
            &mut statistics,
            self.progress.as_mut(),
        );
        statistics.finalise_search();
        (result, statistics)
    }
}
