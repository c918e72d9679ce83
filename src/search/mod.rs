mod action;
mod action_schema;
pub mod containers;
mod error;
pub mod heuristics;
mod problem;
mod search_node;
mod search_space;
pub mod search_engines;
mod solution;
mod successor_generator;
mod validate;
mod verbosity;

pub use action::{Action, ParamTuple, ParamValue};
pub use action_schema::{
    ActionHandler, ActionOutcome, ActionSchema, CostFunction, CostPolicy, ParamSpace, RangeBound,
};
pub use error::SearchError;
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue, ZeroHeuristic};
pub use problem::Problem;
pub use search_engines::{
    GraphAstar, SearchEngine, SearchEngineName, SearchStatistics, TreeAstar, TreeIds,
};
pub use search_node::{Cost, NodeId, SearchNode};
pub use search_space::SearchSpace;
pub use solution::{PathStep, SearchStatus, Solution, SolutionReport};
pub use successor_generator::{generate_successors, Successor};
pub use validate::validate;
pub use verbosity::Verbosity;
