use crate::search::{HeuristicValue, NodeId, Plan, Problem, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node generated during one search. Nodes refer
/// to their parents by [`NodeId`], so a node stays reachable for as long as
/// the space lives and the parent chain of any node can always be walked back
/// to the root.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_root(root_node_id, initial_state));

        Self {
            root_node_id,
            nodes,
        }
    }

    pub fn get_root_id(&self) -> NodeId {
        self.root_node_id
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S, A> {
        self.nodes.get_mut(node_id.index()).expect("Invalid node id")
    }

    /// The parent of the given node, `None` for the root.
    pub fn get_parent(&self, node_id: NodeId) -> Option<&SearchNode<S, A>> {
        match self.get_node(node_id).get_parent_id() {
            NO_NODE => None,
            parent_id => Some(self.get_node(parent_id)),
        }
    }

    pub fn add_child(
        &mut self,
        parent_id: NodeId,
        action: A,
        state: S,
        g: HeuristicValue,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let child = SearchNode::new_child(node_id, state, self.get_node(parent_id), action, g);
        self.nodes.push(child);
        node_id
    }

    /// Generate one child per successor of the node's state, in the order the
    /// problem yields them, and return their ids.
    pub fn expand<P>(&mut self, node_id: NodeId, problem: &P) -> Vec<NodeId>
    where
        P: Problem<State = S, Action = A>,
    {
        let node = self.get_node(node_id);
        let children: Vec<_> = problem
            .successors(node.get_state())
            .into_iter()
            .map(|(action, next_state)| {
                let g = problem.path_cost(node.get_g(), node.get_state(), &action, &next_state);
                (action, next_state, g)
            })
            .collect();

        children
            .into_iter()
            .map(|(action, next_state, g)| self.add_child(node_id, action, next_state, g))
            .collect()
    }

    /// The nodes from the given node back to the root, in that order.
    pub fn path(&self, node_id: NodeId) -> Vec<&SearchNode<S, A>> {
        let mut path = vec![self.get_node(node_id)];
        let mut current_id = node_id;
        while let Some(parent) = self.get_parent(current_id) {
            path.push(parent);
            current_id = parent.get_node_id();
        }
        path
    }

    /// The actions leading from the root to the given node.
    pub fn extract_plan(&self, node_id: NodeId) -> Plan<A>
    where
        A: Clone,
    {
        let mut steps: Vec<A> = self
            .path(node_id)
            .into_iter()
            .filter_map(|node| node.get_action().cloned())
            .collect();
        steps.reverse();
        Plan::new(steps)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, A>> {
        (0..self.nodes.len()).map(|index| self.get_node(NodeId::new(index)))
    }
}
