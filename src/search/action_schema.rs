//! Declarative description of a problem action. An [`ActionSchema`] lists
//! the space of each parameter, a handler applying one concrete parameter
//! tuple to a state, and how the cost of the resulting transition is
//! obtained.

use crate::search::{Cost, ParamValue, Problem, SearchError};
use std::fmt;

/// Result of applying an action handler to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<S> {
    /// The parameter tuple does not describe a legal move from this state.
    Inapplicable,
    /// The resulting state, cost given by the schema's [`CostPolicy`].
    Next(S),
    /// The resulting state together with its cost, for schemas using
    /// [`CostPolicy::Bundled`].
    NextWithCost(S, Cost),
}

/// The upper (exclusive) bound of an integer parameter range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeBound {
    Fixed(i64),
    /// Read from the named problem attribute every time successors are
    /// generated, see [`Problem::attribute`].
    Attribute(String),
}

/// The values a single action parameter ranges over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSpace {
    Categorical(Vec<ParamValue>),
    Range { start: i64, end: RangeBound },
}

impl ParamSpace {
    pub fn categorical<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        ParamSpace::Categorical(values.into_iter().map(Into::into).collect())
    }

    pub fn range(start: i64, end: i64) -> Self {
        ParamSpace::Range {
            start,
            end: RangeBound::Fixed(end),
        }
    }

    /// A range `[start, problem.attribute(attribute))`.
    pub fn attribute_range(start: i64, attribute: &str) -> Self {
        ParamSpace::Range {
            start,
            end: RangeBound::Attribute(attribute.to_string()),
        }
    }

    /// Enumerate the concrete values of this space against the current
    /// configuration of `problem`.
    pub fn values<P: Problem>(
        &self,
        problem: &P,
        action: &str,
    ) -> Result<Vec<ParamValue>, SearchError> {
        match self {
            ParamSpace::Categorical(values) => Ok(values.clone()),
            ParamSpace::Range { start, end } => {
                let end = match end {
                    RangeBound::Fixed(end) => *end,
                    RangeBound::Attribute(attribute) => {
                        let value = problem.attribute(attribute).ok_or_else(|| {
                            SearchError::MissingAttribute {
                                action: action.to_string(),
                                attribute: attribute.clone(),
                            }
                        })?;
                        if value < 0 {
                            return Err(SearchError::NegativeBound {
                                action: action.to_string(),
                                attribute: attribute.clone(),
                                value,
                            });
                        }
                        value
                    }
                };
                Ok((*start..end).map(ParamValue::Int).collect())
            }
        }
    }
}

pub type ActionHandler<P> = fn(
    &P,
    &<P as Problem>::State,
    &[ParamValue],
) -> Result<ActionOutcome<<P as Problem>::State>, SearchError>;

pub type CostFunction<P> = fn(&P, &<P as Problem>::State, &[ParamValue]) -> Cost;

/// How the cost of a transition is obtained.
pub enum CostPolicy<P: Problem> {
    Constant(Cost),
    /// Evaluated on the state the action is applied to.
    Function(CostFunction<P>),
    /// The handler returns [`ActionOutcome::NextWithCost`].
    Bundled,
}

impl<P: Problem> Clone for CostPolicy<P> {
    fn clone(&self) -> Self {
        match self {
            CostPolicy::Constant(cost) => CostPolicy::Constant(*cost),
            CostPolicy::Function(function) => CostPolicy::Function(*function),
            CostPolicy::Bundled => CostPolicy::Bundled,
        }
    }
}

impl<P: Problem> fmt::Debug for CostPolicy<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostPolicy::Constant(cost) => f.debug_tuple("Constant").field(cost).finish(),
            CostPolicy::Function(_) => f.write_str("Function"),
            CostPolicy::Bundled => f.write_str("Bundled"),
        }
    }
}

pub struct ActionSchema<P: Problem> {
    name: String,
    params: Vec<ParamSpace>,
    handler: ActionHandler<P>,
    cost: CostPolicy<P>,
}

impl<P: Problem> ActionSchema<P> {
    /// Create a schema whose handler reports the cost of each transition.
    pub fn new(name: &str, params: Vec<ParamSpace>, handler: ActionHandler<P>) -> Self {
        Self {
            name: name.to_string(),
            params,
            handler,
            cost: CostPolicy::Bundled,
        }
    }

    pub fn with_constant_cost(mut self, cost: f64) -> Self {
        self.cost = CostPolicy::Constant(cost.into());
        self
    }

    pub fn with_cost_function(mut self, function: CostFunction<P>) -> Self {
        self.cost = CostPolicy::Function(function);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParamSpace] {
        &self.params
    }

    pub fn cost_policy(&self) -> &CostPolicy<P> {
        &self.cost
    }

    /// Apply the handler to `state` and settle the transition cost. Returns
    /// `None` when the action is inapplicable.
    pub fn apply(
        &self,
        problem: &P,
        state: &P::State,
        params: &[ParamValue],
    ) -> Result<Option<(P::State, Cost)>, SearchError> {
        let outcome = (self.handler)(problem, state, params)?;
        let transition = match (outcome, &self.cost) {
            (ActionOutcome::Inapplicable, _) => None,
            (ActionOutcome::Next(next), CostPolicy::Constant(cost)) => Some((next, *cost)),
            (ActionOutcome::Next(next), CostPolicy::Function(function)) => {
                let cost = function(problem, state, params);
                Some((next, cost))
            }
            (ActionOutcome::NextWithCost(next, cost), CostPolicy::Bundled) => Some((next, cost)),
            _ => {
                return Err(SearchError::CostPolicyMismatch {
                    action: self.name.clone(),
                })
            }
        };
        Ok(transition)
    }
}

impl<P: Problem> fmt::Debug for ActionSchema<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSchema")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("cost", &self.cost)
            .finish()
    }
}
