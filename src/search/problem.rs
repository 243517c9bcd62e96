use crate::search::HeuristicValue;
use std::fmt::Debug;
use std::hash::Hash;

/// A [`Problem`] is the formal description of a search task: where the search
/// starts, when it stops, how states are connected and what each connection
/// costs. Search engines only ever talk to the problem through this trait.
///
/// Implementations should be stateless beyond their configuration, since one
/// problem instance is expected to drive exactly one search at a time.
pub trait Problem {
    /// States are compared and hashed by their full content, two states with
    /// equal content are interchangeable for duplicate detection.
    type State: Clone + Debug + Hash + Eq;
    type Action: Clone + Debug + PartialEq;

    fn initial_state(&self) -> &Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(action, next_state)` pairs reachable from `state`. The order of
    /// the returned pairs must be stable from run to run, since tie-breaking
    /// in the frontier depends on it.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// The cost of a path that arrives at `to` from `from` via `action`,
    /// given cost `c` to reach `from`. The default charges one per step.
    fn path_cost(
        &self,
        c: HeuristicValue,
        _from: &Self::State,
        _action: &Self::Action,
        _to: &Self::State,
    ) -> HeuristicValue {
        c + 1.
    }

    /// The heuristic used by informed search when none is supplied
    /// explicitly. Defaults to zero, turning A* into uniform cost search.
    fn heuristic(&self, _state: &Self::State) -> HeuristicValue {
        HeuristicValue::from(0.)
    }
}
