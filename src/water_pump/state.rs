use crate::water_pump::{Position, Vase, WaterAction};
use itertools::iproduct;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A board of vases and a pump at a fixed position.
///
/// States are never changed once built: applying an action produces a new
/// state. Equality and hashing cover the board and every vase, but not
/// `transition_cost`, so states reached along different paths compare equal.
#[derive(Debug, Clone)]
pub struct WaterState {
    grid_size: usize,
    pump: Position,
    vases: Vec<Vase>,
    /// Cost of the action that produced this state
    transition_cost: f64,
}

impl WaterState {
    pub(crate) fn new(grid_size: usize, pump: Position, vases: Vec<Vase>) -> Self {
        Self {
            grid_size,
            pump,
            vases,
            transition_cost: 0.,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn pump(&self) -> Position {
        self.pump
    }

    pub fn vases(&self) -> &[Vase] {
        &self.vases
    }

    pub fn transition_cost(&self) -> f64 {
        self.transition_cost
    }

    pub fn is_goal(&self) -> bool {
        self.vases.iter().all(|vase| vase.value == vase.goal)
    }

    fn distance(&self, i: usize, y: usize) -> f64 {
        self.vases[i].position.distance(&self.vases[y].position)
    }

    fn with_change(&self, transition_cost: f64, change: impl FnOnce(&mut [Vase])) -> WaterState {
        let mut next = self.clone();
        change(&mut next.vases);
        next.transition_cost = transition_cost;
        next
    }

    /// The state reached by applying `action`, or `None` if its precondition
    /// does not hold.
    pub fn apply(&self, action: &WaterAction) -> Option<WaterState> {
        let n = self.vases.len();
        match *action {
            WaterAction::Empty(i) => {
                let vase = self.vases.get(i)?;
                if vase.is_empty() {
                    return None;
                }
                Some(self.with_change(0., |vases| vases[i].value = 0))
            }
            WaterAction::Pump(i) => {
                let vase = self.vases.get(i)?;
                let distance = self.pump.distance(&vase.position);
                // Both the displaced water and the fresh water are charged.
                let cost = distance * vase.value as f64 + distance * vase.capacity as f64;
                Some(self.with_change(cost, |vases| vases[i].value = vases[i].capacity))
            }
            WaterAction::TakeFrom { target, source } => {
                if target == source || target >= n || source >= n {
                    return None;
                }
                let (to, from) = (&self.vases[target], &self.vases[source]);
                let needed = to.room();
                if from.value < needed || to.is_full() || from.is_empty() {
                    return None;
                }
                let distance = self.distance(target, source);
                let cost = distance * to.value as f64 + distance * to.capacity as f64;
                Some(self.with_change(cost, |vases| {
                    vases[source].value -= needed;
                    vases[target].value = vases[target].capacity;
                }))
            }
            WaterAction::TransferFrom { source, target } => {
                if target == source || target >= n || source >= n {
                    return None;
                }
                let (from, to) = (&self.vases[source], &self.vases[target]);
                if from.value > to.room() || to.is_full() || from.is_empty() {
                    return None;
                }
                // Only the moved water is charged, unlike TakeFrom which also
                // charges for the water already in the target.
                let cost = self.distance(source, target) * from.value as f64;
                let moved = from.value;
                Some(self.with_change(cost, |vases| {
                    vases[target].value += moved;
                    vases[source].value = 0;
                }))
            }
        }
    }

    /// Every action in the fixed enumeration order: all empties, all pumps,
    /// then every ordered pair for take and for transfer.
    pub fn candidate_actions(&self) -> impl Iterator<Item = WaterAction> {
        let n = self.vases.len();
        let pairs = move || iproduct!(0..n, 0..n).filter(|(x, y)| x != y);
        (0..n)
            .map(WaterAction::Empty)
            .chain((0..n).map(WaterAction::Pump))
            .chain(pairs().map(|(target, source)| WaterAction::TakeFrom { target, source }))
            .chain(pairs().map(|(source, target)| WaterAction::TransferFrom { source, target }))
    }

    pub fn successors(&self) -> Vec<(WaterAction, WaterState)> {
        self.candidate_actions()
            .filter_map(|action| self.apply(&action).map(|next| (action, next)))
            .collect()
    }
}

impl PartialEq for WaterState {
    fn eq(&self, other: &Self) -> bool {
        self.grid_size == other.grid_size && self.pump == other.pump && self.vases == other.vases
    }
}

impl Eq for WaterState {}

impl Hash for WaterState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid_size.hash(state);
        self.pump.hash(state);
        self.vases.hash(state);
    }
}

/// One row per line. The pump cell shows `[P,P]`, a vase shows
/// `[value,goal]` and an empty cell shows `|- -|`.
impl Display for WaterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.grid_size {
            for col in 0..self.grid_size {
                let cell = Position::new(row, col);
                let mut occupied = false;
                if cell == self.pump {
                    write!(f, "[P,P]")?;
                    occupied = true;
                }
                for vase in self.vases.iter().filter(|vase| vase.position == cell) {
                    write!(f, "[{},{}]", vase.value, vase.goal)?;
                    occupied = true;
                }
                if !occupied {
                    write!(f, "|- -|")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn two_vases(a: u32, b: u32) -> WaterState {
        WaterState::new(
            3,
            Position::new(0, 0),
            vec![
                Vase::new(Position::new(0, 1), 4, 4).with_value(a),
                Vase::new(Position::new(2, 1), 3, 0).with_value(b),
            ],
        )
    }

    fn values(state: &WaterState) -> Vec<u32> {
        state.vases().iter().map(|vase| vase.value).collect()
    }

    #[test]
    fn empty_requires_water() {
        assert!(two_vases(0, 1).apply(&WaterAction::Empty(0)).is_none());
        let next = two_vases(0, 1).apply(&WaterAction::Empty(1)).unwrap();
        assert_eq!(values(&next), vec![0, 0]);
        assert_eq!(next.transition_cost(), 0.);
    }

    #[test]
    fn pump_charges_old_and_new_water() {
        let next = two_vases(1, 0).apply(&WaterAction::Pump(0)).unwrap();
        assert_eq!(values(&next), vec![4, 0]);
        assert_approx_eq!(next.transition_cost(), 1.0 * 1.0 + 1.0 * 4.0);
    }

    #[test]
    fn pump_on_full_vase_yields_equal_state() {
        let state = two_vases(4, 0);
        let next = state.apply(&WaterAction::Pump(0)).unwrap();
        assert_eq!(next, state);
        assert_approx_eq!(next.transition_cost(), 8.0);
    }

    #[test]
    fn take_fills_target_from_source() {
        let next = two_vases(2, 3)
            .apply(&WaterAction::TakeFrom {
                target: 0,
                source: 1,
            })
            .unwrap();
        assert_eq!(values(&next), vec![4, 1]);
        // distance between (0,1) and (2,1) is 2
        assert_approx_eq!(next.transition_cost(), 2.0 * 2.0 + 2.0 * 4.0);
    }

    #[test]
    fn take_requires_enough_water_in_source() {
        let take = WaterAction::TakeFrom {
            target: 0,
            source: 1,
        };
        assert!(two_vases(0, 3).apply(&take).is_none());
        assert!(two_vases(4, 3).apply(&take).is_none());
        assert!(two_vases(3, 0).apply(&take).is_none());
    }

    #[test]
    fn transfer_moves_everything_and_charges_only_moved_water() {
        let next = two_vases(2, 1)
            .apply(&WaterAction::TransferFrom {
                source: 0,
                target: 1,
            })
            .unwrap();
        assert_eq!(values(&next), vec![0, 3]);
        // The target already held one unit which is not charged, unlike
        // TakeFrom.
        assert_approx_eq!(next.transition_cost(), 2.0 * 2.0);
    }

    #[test]
    fn transfer_requires_room_in_target() {
        let transfer = WaterAction::TransferFrom {
            source: 0,
            target: 1,
        };
        assert!(two_vases(3, 1).apply(&transfer).is_none());
        assert!(two_vases(1, 3).apply(&transfer).is_none());
        assert!(two_vases(0, 1).apply(&transfer).is_none());
    }

    #[test]
    fn same_vase_pairs_are_rejected() {
        let state = two_vases(2, 1);
        assert!(state
            .apply(&WaterAction::TakeFrom {
                target: 1,
                source: 1
            })
            .is_none());
        assert!(state.apply(&WaterAction::Pump(7)).is_none());
    }

    #[test]
    fn successors_follow_action_order() {
        let actions: Vec<String> = two_vases(1, 1)
            .successors()
            .into_iter()
            .map(|(action, _)| action.to_string())
            .collect();
        assert_eq!(
            actions,
            vec![
                "empty(0)",
                "empty(1)",
                "pump(0)",
                "pump(1)",
                "transferFromI(0, 1)",
                "transferFromI(1, 0)",
            ]
        );
    }

    #[test]
    fn equality_ignores_transition_cost() {
        let state = two_vases(0, 0);
        let pumped = state.apply(&WaterAction::Pump(0)).unwrap();
        let emptied = pumped.apply(&WaterAction::Empty(0)).unwrap();
        assert_eq!(emptied, state);

        use std::collections::HashSet;
        let set: HashSet<WaterState> = [state, emptied].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn applying_leaves_source_state_untouched() {
        let state = two_vases(2, 1);
        let _ = state.apply(&WaterAction::Empty(0)).unwrap();
        assert_eq!(values(&state), vec![2, 1]);
    }

    #[test]
    fn renders_grid() {
        let rendered = two_vases(1, 2).to_string();
        assert_eq!(
            rendered,
            "[P,P][1,4]|- -|\n\
             |- -||- -||- -|\n\
             |- -|[2,0]|- -|\n"
        );
    }
}
