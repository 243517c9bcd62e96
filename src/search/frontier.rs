//! Open lists for the search engines. Every frontier hands out [`NodeId`]s in
//! the order of its discipline and can tell whether an equal state is
//! currently waiting in it.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    collections::{HashMap, VecDeque},
    fmt::Debug,
    hash::Hash,
};

pub trait Frontier<S>: Debug {
    /// Add a node. `priority` is only meaningful for ordered frontiers.
    fn push(&mut self, node_id: NodeId, state: &S, priority: HeuristicValue);

    /// Remove and return the next node according to the frontier's order.
    fn pop(&mut self) -> Option<NodeId>;

    /// Whether a node with a state equal to `state` is waiting in the
    /// frontier.
    fn contains(&self, state: &S) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Multiset of the states waiting in a frontier, compared by equality.
#[derive(Debug)]
struct StateCounter<S> {
    counts: HashMap<S, usize>,
}

impl<S: Clone + Eq + Hash> StateCounter<S> {
    fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    fn insert(&mut self, state: &S) {
        *self.counts.entry(state.clone()).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &S) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &S) -> bool {
        self.counts.contains_key(state)
    }
}

/// First in, first out. Used by breadth first search.
#[derive(Debug)]
pub struct FifoFrontier<S> {
    queue: VecDeque<(NodeId, S)>,
    states: StateCounter<S>,
}

impl<S: Clone + Eq + Hash> FifoFrontier<S> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            states: StateCounter::new(),
        }
    }
}

impl<S: Clone + Eq + Hash> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash + Debug> Frontier<S> for FifoFrontier<S> {
    fn push(&mut self, node_id: NodeId, state: &S, _priority: HeuristicValue) {
        self.states.insert(state);
        self.queue.push_back((node_id, state.clone()));
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (node_id, state) = self.queue.pop_front()?;
        self.states.remove(&state);
        Some(node_id)
    }

    fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Used by depth first search.
#[derive(Debug)]
pub struct LifoFrontier<S> {
    stack: Vec<(NodeId, S)>,
    states: StateCounter<S>,
}

impl<S: Clone + Eq + Hash> LifoFrontier<S> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            states: StateCounter::new(),
        }
    }
}

impl<S: Clone + Eq + Hash> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash + Debug> Frontier<S> for LifoFrontier<S> {
    fn push(&mut self, node_id: NodeId, state: &S, _priority: HeuristicValue) {
        self.states.insert(state);
        self.stack.push((node_id, state.clone()));
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (node_id, state) = self.stack.pop()?;
        self.states.remove(&state);
        Some(node_id)
    }

    fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Lowest priority first. Ties are broken by insertion order, so the
/// frontier behaves the same way on every run.
#[derive(Debug)]
pub struct PriorityFrontier<S: Eq + Hash> {
    queue: PriorityQueue<(NodeId, S), Reverse<(HeuristicValue, u64)>>,
    states: StateCounter<S>,
    insertions: u64,
}

impl<S: Clone + Eq + Hash> PriorityFrontier<S> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            states: StateCounter::new(),
            insertions: 0,
        }
    }

    /// The smallest priority currently in the frontier.
    pub fn peek_priority(&self) -> Option<HeuristicValue> {
        self.queue.peek().map(|(_, Reverse((priority, _)))| *priority)
    }
}

impl<S: Clone + Eq + Hash> Default for PriorityFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash + Debug> Frontier<S> for PriorityFrontier<S> {
    fn push(&mut self, node_id: NodeId, state: &S, priority: HeuristicValue) {
        self.states.insert(state);
        self.queue.push((node_id, state.clone()), Reverse((priority, self.insertions)));
        self.insertions += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        let ((node_id, state), _) = self.queue.pop()?;
        self.states.remove(&state);
        Some(node_id)
    }

    fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::Hasher;

    fn drain<F: Frontier<u32>>(frontier: &mut F) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop())
            .map(|node_id| node_id.index())
            .collect()
    }

    /// Every value hashes the same, only equality tells them apart.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct SameHash(u32);

    impl Hash for SameHash {
        fn hash<H: Hasher>(&self, state: &mut H) {
            0u8.hash(state);
        }
    }

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut frontier = FifoFrontier::new();
        for i in 0..3 {
            frontier.push(NodeId::new(i), &(i as u32), 0.0.into());
        }
        assert_eq!(drain(&mut frontier), vec![0, 1, 2]);
    }

    #[test]
    fn lifo_pops_most_recent_first() {
        let mut frontier = LifoFrontier::new();
        for i in 0..3 {
            frontier.push(NodeId::new(i), &(i as u32), 0.0.into());
        }
        assert_eq!(drain(&mut frontier), vec![2, 1, 0]);
    }

    #[test]
    fn priority_pops_lowest_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(0), &0u32, 10.0.into());
        frontier.push(NodeId::new(1), &1u32, 5.0.into());
        frontier.push(NodeId::new(2), &2u32, 15.0.into());
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.peek_priority(), Some(HeuristicValue::from(5.0)));
        assert_eq!(drain(&mut frontier), vec![1, 0, 2]);
    }

    #[test]
    fn priority_ties_keep_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(3), &3u32, 1.0.into());
        frontier.push(NodeId::new(1), &1u32, 1.0.into());
        frontier.push(NodeId::new(2), &2u32, 0.5.into());
        frontier.push(NodeId::new(0), &0u32, 1.0.into());
        assert_eq!(drain(&mut frontier), vec![2, 3, 1, 0]);
    }

    #[test]
    fn contains_tracks_equal_states() {
        let mut frontier = FifoFrontier::new();
        frontier.push(NodeId::new(0), &7u32, 0.0.into());
        frontier.push(NodeId::new(1), &7u32, 0.0.into());
        assert!(frontier.contains(&7u32));
        assert!(!frontier.contains(&8u32));

        let _ = frontier.pop();
        assert!(frontier.contains(&7u32), "one copy of the state is still queued");
        let _ = frontier.pop();
        assert!(!frontier.contains(&7u32));
        assert!(frontier.is_empty());
    }

    #[test]
    fn contains_compares_states_not_hashes() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(0), &SameHash(1), 0.0.into());
        assert!(frontier.contains(&SameHash(1)));
        assert!(!frontier.contains(&SameHash(2)));

        frontier.push(NodeId::new(1), &SameHash(2), 1.0.into());
        assert_eq!(frontier.pop(), Some(NodeId::new(0)));
        assert!(!frontier.contains(&SameHash(1)));
        assert!(frontier.contains(&SameHash(2)));
    }
}
