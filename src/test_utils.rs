use crate::search::{Heuristic, HeuristicValue, Problem};
use std::cell::RefCell;

pub const BASIC_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/water_pump/basic.toml"
));

pub const SCENARIO_A_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/water_pump/scenario_a.toml"
));

pub const SCENARIO_B_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/water_pump/scenario_b.toml"
));

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Count down from `start` in steps of one or two, paying the step size. The
/// heuristic is the remaining count, which is exact.
#[derive(Debug)]
pub struct CountdownProblem {
    start: u32,
    reachable_goal: bool,
}

impl CountdownProblem {
    pub fn new(start: u32) -> Self {
        Self {
            start,
            reachable_goal: true,
        }
    }

    /// Same transitions, but no state is a goal.
    pub fn unreachable(start: u32) -> Self {
        Self {
            start,
            reachable_goal: false,
        }
    }
}

impl Problem for CountdownProblem {
    type State = u32;
    type Action = u32;

    fn initial_state(&self) -> &u32 {
        &self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        self.reachable_goal && *state == 0
    }

    fn successors(&self, state: &u32) -> Vec<(u32, u32)> {
        [1, 2]
            .into_iter()
            .filter(|step| step <= state)
            .map(|step| (step, state - step))
            .collect()
    }

    fn path_cost(&self, c: HeuristicValue, _from: &u32, action: &u32, _to: &u32) -> HeuristicValue {
        c + f64::from(*action)
    }

    fn heuristic(&self, state: &u32) -> HeuristicValue {
        HeuristicValue::from(f64::from(*state))
    }
}

/// Wraps a problem and remembers every state whose successors were asked
/// for, in order.
#[derive(Debug)]
pub struct RecordingProblem<P: Problem> {
    inner: P,
    expanded: RefCell<Vec<P::State>>,
}

impl<P: Problem> RecordingProblem<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            expanded: RefCell::new(vec![]),
        }
    }

    pub fn expanded_states(&self) -> Vec<P::State> {
        self.expanded.borrow().clone()
    }
}

impl<P: Problem> Problem for RecordingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> &P::State {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.inner.is_goal(state)
    }

    fn successors(&self, state: &P::State) -> Vec<(P::Action, P::State)> {
        self.expanded.borrow_mut().push(state.clone());
        self.inner.successors(state)
    }

    fn path_cost(
        &self,
        c: HeuristicValue,
        from: &P::State,
        action: &P::Action,
        to: &P::State,
    ) -> HeuristicValue {
        self.inner.path_cost(c, from, action, to)
    }

    fn heuristic(&self, state: &P::State) -> HeuristicValue {
        self.inner.heuristic(state)
    }
}

/// Twice the remaining count on odd states and zero on even ones, so the
/// estimate drops sharply between a parent and its child.
#[derive(Debug)]
pub struct OvershootingHeuristic;

impl Heuristic<u32> for OvershootingHeuristic {
    fn evaluate(&self, state: &u32) -> HeuristicValue {
        if state % 2 == 1 {
            HeuristicValue::from(2. * f64::from(*state))
        } else {
            HeuristicValue::from(0.)
        }
    }
}
