mod frontier;
pub mod heuristics;
mod plan;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod validate;

pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::Problem;
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult, SearchStatistics, Solution};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use validate::validate;
