use crate::search::{Plan, Problem};

/// Replay `plan` from the initial state of `problem`, checking that every
/// step is offered as a successor and that the final state is a goal.
pub fn validate<P: Problem>(problem: &P, plan: &Plan<P::Action>) -> Result<(), String> {
    let mut cur_state = problem.initial_state().clone();
    for (index, action) in plan.steps().iter().enumerate() {
        let next_state = problem
            .successors(&cur_state)
            .into_iter()
            .find_map(|(candidate, next_state)| (candidate == *action).then_some(next_state));

        match next_state {
            Some(next_state) => cur_state = next_state,
            None => {
                return Err(format!(
                    "Step {} ({:?}) is not applicable in state {:?}",
                    index, action, cur_state
                ))
            }
        }
    }

    if !problem.is_goal(&cur_state) {
        return Err(format!(
            "Plan does not reach goal state, final state is: {:?}",
            cur_state
        ));
    }

    Ok(())
}
