use crate::search::{Heuristic, HeuristicValue};

/// Always zero. A* with this heuristic is uniform cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<T> Heuristic<T> for ZeroHeuristic {
    fn evaluate(&self, _state: &T) -> HeuristicValue {
        (0.).into()
    }
}
