use crate::search::{Heuristic, HeuristicValue, Problem, ZeroHeuristic};
use crate::water_pump::{Position, ProblemError, Vase, WaterAction, WaterHeuristicName, WaterState};
use std::collections::HashMap;
use tracing::debug;

/// Redistribute water among vases until every vase holds its goal value.
///
/// The heuristic used by A* is injected rather than fixed, see
/// [`WaterPump::with_heuristic`].
#[derive(Debug)]
pub struct WaterPump {
    initial_state: WaterState,
    heuristic: Box<dyn Heuristic<WaterState>>,
}

impl WaterPump {
    /// Build a problem, checking that the board is well formed. The
    /// heuristic defaults to zero.
    pub fn new(grid_size: usize, pump: Position, vases: Vec<Vase>) -> Result<Self, ProblemError> {
        if grid_size == 0 {
            return Err(ProblemError::EmptyGrid);
        }
        if !pump.is_within(grid_size) {
            return Err(ProblemError::PumpOutOfBounds {
                position: pump,
                grid_size,
            });
        }

        let mut occupied: HashMap<Position, usize> = HashMap::new();
        for (index, vase) in vases.iter().enumerate() {
            if !vase.position.is_within(grid_size) {
                return Err(ProblemError::VaseOutOfBounds {
                    index,
                    position: vase.position,
                    grid_size,
                });
            }
            if vase.value > vase.capacity {
                return Err(ProblemError::ValueExceedsCapacity {
                    index,
                    value: vase.value,
                    capacity: vase.capacity,
                });
            }
            if vase.goal > vase.capacity {
                return Err(ProblemError::GoalExceedsCapacity {
                    index,
                    goal: vase.goal,
                    capacity: vase.capacity,
                });
            }
            if let Some(&first) = occupied.get(&vase.position) {
                return Err(ProblemError::OverlappingVases {
                    first,
                    second: index,
                    position: vase.position,
                });
            }
            occupied.insert(vase.position, index);
        }

        let initial_state = WaterState::new(grid_size, pump, vases);
        debug!("initial state:\n{}", initial_state);
        Ok(Self {
            initial_state,
            heuristic: Box::new(ZeroHeuristic::new()),
        })
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic<WaterState>>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_heuristic_name(self, name: WaterHeuristicName) -> Self {
        self.with_heuristic(name.create())
    }
}

impl Problem for WaterPump {
    type State = WaterState;
    type Action = WaterAction;

    fn initial_state(&self) -> &WaterState {
        &self.initial_state
    }

    fn is_goal(&self, state: &WaterState) -> bool {
        state.is_goal()
    }

    fn successors(&self, state: &WaterState) -> Vec<(WaterAction, WaterState)> {
        state.successors()
    }

    fn path_cost(
        &self,
        c: HeuristicValue,
        _from: &WaterState,
        action: &WaterAction,
        to: &WaterState,
    ) -> HeuristicValue {
        match action {
            WaterAction::Empty(_) => c,
            _ => c + to.transition_cost(),
        }
    }

    fn heuristic(&self, state: &WaterState) -> HeuristicValue {
        self.heuristic.evaluate(state)
    }
}
