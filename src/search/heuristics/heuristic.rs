use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<T>: Debug {
    /// Estimate the cost of reaching a goal from the given state.
    fn evaluate(&self, state: &T) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially.
    fn evaluate_batch(&self, states: &[T]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

impl<T, H: Heuristic<T> + ?Sized> Heuristic<T> for Box<H> {
    fn evaluate(&self, state: &T) -> HeuristicValue {
        (**self).evaluate(state)
    }
}
