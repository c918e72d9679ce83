use crate::search::{Problem, ZeroHeuristic};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic estimates the remaining cost from a state to the nearest goal.
/// A heuristic is bound to a single problem instance when it is constructed.
///
/// The A* engines only return optimal solutions for admissible heuristics,
/// i.e. ones that never overestimate the remaining cost. This is not checked.
pub trait Heuristic<S>: Debug {
    /// Evaluate the given state.
    fn evaluate(&mut self, state: &S) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially. This method should be
    /// overridden if a more efficient implementation is possible.
    fn evaluate_batch(&mut self, states: &[S]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "The heuristic the problem provides.")]
    Default,
    #[clap(name = "zero", help = "The zero heuristic, turning A* into uniform cost search.")]
    Zero,
}

impl HeuristicName {
    pub fn create<'a, P: Problem>(&self, problem: &'a P) -> Box<dyn Heuristic<P::State> + 'a> {
        match self {
            HeuristicName::Default => problem.default_heuristic(),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
