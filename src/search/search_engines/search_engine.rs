use crate::search::{
    search_engines::{
        AStar, BreadthFirst, DepthFirst, DepthLimited, IterativeDeepening, SearchStatistics,
    },
    HeuristicValue, NodeId, Plan, Problem, SearchNode, SearchSpace,
};

/// Depth bound used when a depth limited search is created by name, as no
/// limit can be given on that path.
pub const DEFAULT_DEPTH_LIMIT: usize = 10;

#[derive(Debug)]
pub enum SearchResult<S, A> {
    /// The search reached a goal
    Success(Solution<S, A>),
    /// The frontier was exhausted without reaching a goal
    NoSolution,
    /// A depth bound truncated at least one branch before it was exhausted
    Cutoff,
}

impl<S, A> SearchResult<S, A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn is_no_solution(&self) -> bool {
        matches!(self, SearchResult::NoSolution)
    }

    pub fn is_cutoff(&self) -> bool {
        matches!(self, SearchResult::Cutoff)
    }

    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            _ => None,
        }
    }
}

/// The goal node found by a search together with the search space that
/// holds its ancestors.
#[derive(Debug)]
pub struct Solution<S, A> {
    search_space: SearchSpace<S, A>,
    goal_id: NodeId,
}

impl<S, A> Solution<S, A> {
    pub(crate) fn new(search_space: SearchSpace<S, A>, goal_id: NodeId) -> Self {
        Self {
            search_space,
            goal_id,
        }
    }

    pub fn goal(&self) -> &SearchNode<S, A> {
        self.search_space.get_node(self.goal_id)
    }

    pub fn goal_state(&self) -> &S {
        self.goal().get_state()
    }

    /// The nodes from the goal back to the root. Reverse it for the order in
    /// which the actions are executed.
    pub fn path(&self) -> Vec<&SearchNode<S, A>> {
        self.search_space.path(self.goal_id)
    }

    pub fn plan(&self) -> Plan<A>
    where
        A: Clone,
    {
        self.search_space.extract_plan(self.goal_id)
    }

    pub fn cost(&self) -> HeuristicValue {
        self.goal().get_g()
    }

    pub fn depth(&self) -> usize {
        self.goal().get_depth()
    }

    pub fn search_space(&self) -> &SearchSpace<S, A> {
        &self.search_space
    }
}

pub trait SearchEngine<P: Problem> {
    fn search(
        &mut self,
        problem: &P,
    ) -> (SearchResult<P::State, P::Action>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "bfs", help = "Breadth first graph search.")]
    BreadthFirst,
    #[clap(name = "bfs-tree", help = "Breadth first tree search.")]
    BreadthFirstTree,
    #[clap(name = "dfs", help = "Depth first graph search.")]
    DepthFirst,
    #[clap(name = "dfs-tree", help = "Depth first tree search.")]
    DepthFirstTree,
    #[clap(help = "Depth limited tree search.")]
    DepthLimited,
    #[clap(help = "Iterative deepening tree search.")]
    IterativeDeepening,
    #[clap(
        name = "astar",
        help = "A* graph search with the heuristic of the problem."
    )]
    AStar,
}

impl SearchEngineName {
    pub fn create<P>(&self) -> Box<dyn SearchEngine<P>>
    where
        P: Problem,
        P::State: 'static,
    {
        match self {
            SearchEngineName::BreadthFirst => Box::new(BreadthFirst::new()),
            SearchEngineName::BreadthFirstTree => Box::new(BreadthFirst::tree()),
            SearchEngineName::DepthFirst => Box::new(DepthFirst::new()),
            SearchEngineName::DepthFirstTree => Box::new(DepthFirst::tree()),
            SearchEngineName::DepthLimited => Box::new(DepthLimited::new(DEFAULT_DEPTH_LIMIT)),
            SearchEngineName::IterativeDeepening => Box::new(IterativeDeepening::new()),
            SearchEngineName::AStar => Box::new(AStar::<P::State>::new()),
        }
    }
}
