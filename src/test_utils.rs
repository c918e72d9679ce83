//! Small weighted graphs used as search problems by the engine tests. A state
//! is the label of the vertex the agent stands on.

use crate::search::{
    ActionOutcome, ActionSchema, Heuristic, HeuristicValue, ParamSpace, ParamValue, Problem,
    SearchError,
};
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct GraphProblem {
    start: Vec<char>,
    goals: Vec<char>,
    edges: BTreeMap<(char, char), f64>,
    schemas: Vec<ActionSchema<GraphProblem>>,
}

impl GraphProblem {
    pub fn new(start: &[char], goals: &[char], edges: &[(char, char, f64)]) -> Self {
        let edges: BTreeMap<(char, char), f64> = edges
            .iter()
            .map(|&(from, to, cost)| ((from, to), cost))
            .collect();
        let mut vertices: Vec<String> = edges
            .keys()
            .flat_map(|&(from, to)| [from, to])
            .chain(start.iter().copied())
            .map(String::from)
            .collect();
        vertices.sort();
        vertices.dedup();

        let schemas = vec![ActionSchema::new(
            "move",
            vec![ParamSpace::categorical(vertices.iter().map(String::as_str))],
            move_along_edge,
        )];
        Self {
            start: start.to_vec(),
            goals: goals.to_vec(),
            edges,
            schemas,
        }
    }
}

fn move_along_edge(
    problem: &GraphProblem,
    state: &char,
    params: &[ParamValue],
) -> Result<ActionOutcome<char>, SearchError> {
    let destination = params[0]
        .as_label()
        .and_then(|label| label.chars().next())
        .ok_or(SearchError::InvalidParameter {
            action: "move".to_string(),
            index: 0,
        })?;
    Ok(match problem.edges.get(&(*state, destination)) {
        Some(&cost) => ActionOutcome::NextWithCost(destination, cost.into()),
        None => ActionOutcome::Inapplicable,
    })
}

impl Problem for GraphProblem {
    type State = char;

    fn name(&self) -> &str {
        "graph"
    }

    fn get_start_states(&self) -> Vec<char> {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &char) -> bool {
        self.goals.contains(state)
    }

    fn is_valid_state(&self, state: &char) -> bool {
        self.start.contains(state)
            || self
                .edges
                .keys()
                .any(|&(from, to)| *state == from || *state == to)
    }

    fn actions(&self) -> &[ActionSchema<Self>] {
        &self.schemas
    }
}

/// `A -> B` and `B -> A`, both of cost 3. Start at `A`, goal `B`.
pub fn two_node_graph() -> GraphProblem {
    GraphProblem::new(&['A'], &['B'], &[('A', 'B', 3.), ('B', 'A', 3.)])
}

/// Start `S`, goal `G`. The cheapest path is `S A B G` with cost 3, the
/// shallowest is `S B G` with cost 5. `B -> S` makes the start revisitable.
pub fn diamond_graph() -> GraphProblem {
    GraphProblem::new(
        &['S'],
        &['G'],
        &[
            ('S', 'A', 1.),
            ('S', 'B', 4.),
            ('A', 'B', 1.),
            ('A', 'G', 6.),
            ('B', 'G', 1.),
            ('B', 'S', 1.),
        ],
    )
}

/// An acyclic graph in which the goal `Z` is unreachable.
pub fn dead_end_graph() -> GraphProblem {
    GraphProblem::new(&['A'], &['Z'], &[('A', 'B', 1.), ('A', 'C', 1.)])
}

/// A cycle in which the goal `Z` is unreachable.
pub fn cyclic_graph() -> GraphProblem {
    GraphProblem::new(&['A'], &['Z'], &[('A', 'B', 1.), ('B', 'A', 1.)])
}

/// Heuristic given as a table, zero for states not in the table.
#[derive(Debug, Clone)]
pub struct TableHeuristic {
    values: BTreeMap<char, f64>,
}

impl TableHeuristic {
    pub fn new(values: &[(char, f64)]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    /// Exact remaining cost in [`diamond_graph`].
    pub fn diamond_exact() -> Self {
        Self::new(&[('S', 3.), ('A', 2.), ('B', 1.), ('G', 0.)])
    }
}

impl Heuristic<char> for TableHeuristic {
    fn evaluate(&mut self, state: &char) -> HeuristicValue {
        self.values.get(state).copied().unwrap_or(0.).into()
    }
}
