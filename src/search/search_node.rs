use crate::search::HeuristicValue;

/// Index of a [`SearchNode`] inside its [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is a node in the search tree. It owns the state it was
/// created for, remembers how it was reached and caches the heuristic and
/// evaluation values once they are computed.
///
/// Several nodes may share a parent, and several nodes may hold equal states
/// when a state is reached along different paths.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    node_id: NodeId,
    state: S,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
    /// Action that led to this node, `None` for the root
    action: Option<A>,
    /// Cumulative path cost from the root
    g: HeuristicValue,
    depth: usize,
    /// Heuristic estimate, computed at most once
    h: Option<HeuristicValue>,
    /// Evaluation value used to order the frontier, computed at most once
    f: Option<HeuristicValue>,
}

impl<S, A> SearchNode<S, A> {
    pub(crate) fn new_root(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            parent_id: NO_NODE,
            action: None,
            g: HeuristicValue::from(0.),
            depth: 0,
            h: None,
            f: None,
        }
    }

    pub(crate) fn new_child(
        node_id: NodeId,
        state: S,
        parent: &SearchNode<S, A>,
        action: A,
        g: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            state,
            parent_id: parent.node_id,
            action: Some(action),
            g,
            depth: parent.depth + 1,
            h: None,
            f: None,
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_h(&self) -> Option<HeuristicValue> {
        self.h
    }

    pub fn get_f(&self) -> Option<HeuristicValue> {
        self.f
    }

    /// Return the cached heuristic value, computing it with `compute` the
    /// first time it is requested.
    pub fn h_or_insert_with(
        &mut self,
        compute: impl FnOnce(&S) -> HeuristicValue,
    ) -> HeuristicValue {
        if let Some(h) = self.h {
            return h;
        }
        let h = compute(&self.state);
        self.h = Some(h);
        h
    }

    pub(crate) fn set_f(&mut self, f: HeuristicValue) {
        debug_assert!(self.f.is_none(), "f-value of a node must only be set once");
        self.f = Some(f);
    }
}

impl<S: PartialEq, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for SearchNode<S, A> {}
