//! Turns the declared actions of a [`Problem`] into its successor function.

use crate::search::{Action, Cost, ParamValue, Problem, SearchError};
use itertools::Itertools;
use std::rc::Rc;
use tracing::trace;

/// A transition out of a state: the resulting state, the action producing
/// it and the cost of taking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S> {
    pub state: S,
    pub action: Action,
    pub cost: Cost,
}

/// Enumerate every concrete instantiation of every action of `problem` and
/// apply it to `state`. Schemas are visited in declaration order and
/// parameter tuples in lexicographic order of their parameter spaces, with the
/// first parameter varying slowest. Inapplicable instantiations are skipped.
pub fn generate_successors<P: Problem>(
    problem: &P,
    state: &P::State,
) -> Result<Vec<Successor<P::State>>, SearchError> {
    let mut successors = Vec::new();
    for schema in problem.actions() {
        let name: Rc<str> = schema.name().into();
        let spaces = schema
            .params()
            .iter()
            .map(|space| space.values(problem, schema.name()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut num_applicable = 0;
        for params in parameter_tuples(spaces) {
            if let Some((next, cost)) = schema.apply(problem, state, &params)? {
                num_applicable += 1;
                successors.push(Successor {
                    state: next,
                    action: Action::new(name.clone(), params.into()),
                    cost,
                });
            }
        }
        trace!(action = schema.name(), num_applicable);
    }
    Ok(successors)
}

/// The cross product of the given parameter spaces. A schema without
/// parameters has exactly one (empty) instantiation.
fn parameter_tuples(spaces: Vec<Vec<ParamValue>>) -> Vec<Vec<ParamValue>> {
    if spaces.is_empty() {
        return vec![vec![]];
    }
    spaces
        .into_iter()
        .multi_cartesian_product()
        .collect()
}
