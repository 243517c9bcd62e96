//! Iterative deepening search: depth limited search with limits 0, 1, 2, ...
//! until a run ends for a reason other than the depth bound.

use crate::search::{
    search_engines::{
        depth_limited::depth_limited, ProgressReporter, SearchEngine, SearchResult,
        SearchStatistics,
    },
    Problem,
};
use tracing::info;

#[derive(Debug, Default)]
pub struct IterativeDeepening {
    progress: Option<ProgressReporter>,
}

impl IterativeDeepening {
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// The reporter is called once after every completed depth.
    pub fn with_progress(mut self, reporter: ProgressReporter) -> Self {
        self.progress = Some(reporter);
        self
    }
}

impl<P: Problem> SearchEngine<P> for IterativeDeepening {
    fn search(&mut self, problem: &P) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut limit = 0;
        loop {
            let result = depth_limited(problem, limit, &mut statistics, None);
            info!(
                depth = limit,
                expanded_nodes = statistics.expanded_nodes(),
                "finished depth limited search"
            );
            if let Some(reporter) = self.progress.as_mut() {
                reporter.report(limit, &statistics);
            }
            if !result.is_cutoff() {
                statistics.finalise_search();
                return (result, statistics);
            }
            limit += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::SearchProgress;
    use crate::test_utils::CountdownProblem;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn finds_shallowest_solution() {
        let problem = CountdownProblem::new(5);
        let (result, _) = IterativeDeepening::new().search(&problem);
        let solution = result.into_solution().unwrap();
        assert_eq!(solution.depth(), 3);
        assert_eq!(solution.plan().steps(), &[1, 2, 2]);
    }

    #[test]
    fn reports_after_every_depth() {
        let depths = Rc::new(RefCell::new(vec![]));
        let recorded = depths.clone();
        let reporter = ProgressReporter::every_depth(Box::new(move |progress: &SearchProgress| {
            recorded.borrow_mut().push(progress.depth)
        }));
        let problem = CountdownProblem::new(4);
        let (result, _) = IterativeDeepening::new()
            .with_progress(reporter)
            .search(&problem);
        assert_eq!(result.solution().unwrap().depth(), 2);
        assert_eq!(*depths.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn stops_when_tree_is_exhausted() {
        let problem = CountdownProblem::unreachable(2);
        let (result, _) = IterativeDeepening::new().search(&problem);
        assert!(result.is_no_solution());
    }
}
