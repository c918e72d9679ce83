mod heuristic;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
