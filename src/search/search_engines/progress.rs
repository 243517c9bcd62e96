//! Optional progress reporting. Nothing here is wired into a search unless a
//! [`ProgressReporter`] is handed to an engine explicitly.

use crate::search::search_engines::SearchStatistics;
use memory_stats::memory_stats;
use std::fmt::Debug;
use std::time::Duration;
use tracing::info;

/// Snapshot handed to a progress hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// The depth milestone that triggered this report
    pub depth: usize,
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
    pub elapsed: Duration,
}

pub type ProgressHook = Box<dyn FnMut(&SearchProgress)>;

/// Calls a hook whenever the search first expands a node at a depth that is a
/// multiple of `interval`.
pub struct ProgressReporter {
    interval: usize,
    next_milestone: usize,
    hook: ProgressHook,
}

impl ProgressReporter {
    pub fn new(interval: usize, hook: ProgressHook) -> Self {
        Self {
            interval: interval.max(1),
            next_milestone: 0,
            hook,
        }
    }

    pub fn every_depth(hook: ProgressHook) -> Self {
        Self::new(1, hook)
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Report if `depth` reaches the next milestone.
    pub(crate) fn observe_depth(&mut self, depth: usize, statistics: &SearchStatistics) {
        if depth < self.next_milestone {
            return;
        }
        self.next_milestone = (depth / self.interval + 1) * self.interval;
        self.report(depth, statistics);
    }

    /// Report unconditionally.
    pub(crate) fn report(&mut self, depth: usize, statistics: &SearchStatistics) {
        let progress = SearchProgress {
            depth,
            expanded_nodes: statistics.expanded_nodes(),
            generated_nodes: statistics.generated_nodes(),
            elapsed: statistics.elapsed(),
        };
        (self.hook)(&progress);
    }
}

impl Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("interval", &self.interval)
            .field("next_milestone", &self.next_milestone)
            .finish_non_exhaustive()
    }
}

/// A hook that logs the resident memory of the process alongside the search
/// counters.
pub fn memory_usage_hook() -> ProgressHook {
    Box::new(|progress: &SearchProgress| {
        let memory_usage_mb = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        info!(
            depth = progress.depth,
            expanded_nodes = progress.expanded_nodes,
            generated_nodes = progress.generated_nodes,
            memory_usage_mb = memory_usage_mb,
            time_elapsed = progress.elapsed.as_secs_f64(),
        );
    })
}
