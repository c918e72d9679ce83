use crate::search::{
    successor_generator::generate_successors, ActionSchema, Heuristic, SearchError, Successor,
    ZeroHeuristic,
};
use std::{fmt::Debug, hash::Hash};

/// A search problem: start states, a goal test and a set of declared
/// actions. Search engines only ever talk to a problem through this trait.
pub trait Problem: Sized {
    /// States must be totally ordered so that successor order and
    /// tie-breaking in the fringe are reproducible.
    type State: Clone + Ord + Hash + Debug;

    fn name(&self) -> &str;

    /// The start states, in the order the search engines seed their roots.
    fn get_start_states(&self) -> Vec<Self::State>;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Sanity check a state outside of search, e.g. a randomly generated
    /// start state.
    fn is_valid_state(&self, state: &Self::State) -> bool;

    fn actions(&self) -> &[ActionSchema<Self>];

    /// Current value of a named configuration attribute. Attribute bounded
    /// parameter ranges read this at every successor generation.
    fn attribute(&self, _name: &str) -> Option<i64> {
        None
    }

    /// The successors of `state`. By default these are enumerated from the
    /// declared [`Problem::actions`]; no order is guaranteed.
    fn get_successors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<Successor<Self::State>>, SearchError> {
        generate_successors(self, state)
    }

    /// Heuristic used when a search is run without an explicit one.
    fn default_heuristic(&self) -> Box<dyn Heuristic<Self::State> + '_> {
        Box::new(ZeroHeuristic::new())
    }
}
