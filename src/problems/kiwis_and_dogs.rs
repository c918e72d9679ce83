//! Kiwis and dogs: pieces move around a small directed graph of locations
//! `A` to `G`. Some edges may only be taken while certain locations are
//! empty or occupied. All kiwis have to reach `A` and all dogs `E`.

use crate::search::{
    ActionOutcome, ActionSchema, Heuristic, HeuristicValue, ParamSpace, ParamValue, Problem,
    SearchError,
};
use std::collections::BTreeMap;

pub const LOCATIONS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];
const KIWI_TARGET: char = 'A';
const DOG_TARGET: char = 'E';

/// Positions of every kiwi and every dog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KiwisState {
    pub kiwis: Vec<char>,
    pub dogs: Vec<char>,
}

impl KiwisState {
    fn is_occupied(&self, location: char) -> bool {
        self.kiwis.contains(&location) || self.dogs.contains(&location)
    }
}

/// Requirement for taking an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Nobody(char),
    Somebody(char),
}

impl Condition {
    fn holds(&self, state: &KiwisState) -> bool {
        match *self {
            Condition::Nobody(location) => !state.is_occupied(location),
            Condition::Somebody(location) => state.is_occupied(location),
        }
    }
}

#[derive(Debug, Clone)]
struct Edge {
    cost: f64,
    conditions: Vec<Condition>,
}

#[derive(Debug)]
pub struct KiwisAndDogs {
    edges: BTreeMap<(char, char), Edge>,
    start: KiwisState,
    schemas: Vec<ActionSchema<KiwisAndDogs>>,
}

impl KiwisAndDogs {
    /// The standard instance: kiwis at `D` and `F`, one dog at `C`.
    pub fn new() -> Self {
        Self::with_start(KiwisState {
            kiwis: vec!['D', 'F'],
            dogs: vec!['C'],
        })
    }

    /// The standard board with the given start positions. The number of
    /// kiwis and dogs follows from the start state.
    pub fn with_start(start: KiwisState) -> Self {
        use Condition::*;
        let edges = [
            (('A', 'B'), 3., vec![Nobody('E')]),
            (('A', 'C'), 4., vec![]),
            (('B', 'A'), 3., vec![Nobody('E')]),
            (('B', 'C'), 1., vec![]),
            (('B', 'G'), 5., vec![]),
            (('C', 'B'), 1., vec![]),
            (('C', 'D'), 2., vec![Somebody('E'), Somebody('G')]),
            (('D', 'C'), 2., vec![Somebody('E'), Somebody('G')]),
            (('D', 'E'), 8., vec![Somebody('A')]),
            (('D', 'F'), 3., vec![Somebody('C')]),
            (('E', 'D'), 8., vec![Somebody('A')]),
            (('E', 'F'), 5., vec![]),
            (('F', 'D'), 3., vec![Somebody('C')]),
            (('G', 'F'), 7., vec![]),
            (('G', 'B'), 5., vec![]),
        ]
        .into_iter()
        .map(|(key, cost, conditions)| (key, Edge { cost, conditions }))
        .collect();

        let schemas = vec![
            ActionSchema::new(
                "move_kiwi",
                vec![
                    ParamSpace::attribute_range(0, "num_kiwis"),
                    ParamSpace::categorical(LOCATIONS.map(String::from)),
                ],
                move_kiwi,
            ),
            ActionSchema::new(
                "move_dog",
                vec![
                    ParamSpace::attribute_range(0, "num_dogs"),
                    ParamSpace::categorical(LOCATIONS.map(String::from)),
                ],
                move_dog,
            ),
        ];

        Self {
            edges,
            start,
            schemas,
        }
    }

    /// Cost of moving from `from` to `to` in `state`, if the edge exists and
    /// its conditions hold.
    fn move_cost(&self, state: &KiwisState, from: char, to: char) -> Option<f64> {
        let edge = self.edges.get(&(from, to))?;
        edge.conditions
            .iter()
            .all(|condition| condition.holds(state))
            .then_some(edge.cost)
    }

    /// Cheapest cost between every pair of locations, ignoring edge
    /// conditions.
    fn relaxed_distances(&self) -> BTreeMap<(char, char), f64> {
        let mut distances: BTreeMap<(char, char), f64> = BTreeMap::new();
        for &from in &LOCATIONS {
            for &to in &LOCATIONS {
                let distance = if from == to {
                    0.
                } else {
                    self.edges.get(&(from, to)).map_or(f64::INFINITY, |e| e.cost)
                };
                distances.insert((from, to), distance);
            }
        }
        for &via in &LOCATIONS {
            for &from in &LOCATIONS {
                for &to in &LOCATIONS {
                    let through = distances[&(from, via)] + distances[&(via, to)];
                    if through < distances[&(from, to)] {
                        distances.insert((from, to), through);
                    }
                }
            }
        }
        distances
    }
}

impl Default for KiwisAndDogs {
    fn default() -> Self {
        Self::new()
    }
}

fn piece_and_destination(
    action: &str,
    pieces: &[char],
    params: &[ParamValue],
) -> Result<(usize, char), SearchError> {
    let invalid = |index| SearchError::InvalidParameter {
        action: action.to_string(),
        index,
    };
    let piece = params[0]
        .as_index()
        .filter(|&piece| piece < pieces.len())
        .ok_or_else(|| invalid(0))?;
    let destination = params[1]
        .as_label()
        .and_then(|label| label.chars().next())
        .ok_or_else(|| invalid(1))?;
    Ok((piece, destination))
}

fn move_kiwi(
    problem: &KiwisAndDogs,
    state: &KiwisState,
    params: &[ParamValue],
) -> Result<ActionOutcome<KiwisState>, SearchError> {
    let (kiwi, destination) = piece_and_destination("move_kiwi", &state.kiwis, params)?;
    let Some(cost) = problem.move_cost(state, state.kiwis[kiwi], destination) else {
        return Ok(ActionOutcome::Inapplicable);
    };
    let mut next = state.clone();
    next.kiwis[kiwi] = destination;
    Ok(ActionOutcome::NextWithCost(next, cost.into()))
}

fn move_dog(
    problem: &KiwisAndDogs,
    state: &KiwisState,
    params: &[ParamValue],
) -> Result<ActionOutcome<KiwisState>, SearchError> {
    let (dog, destination) = piece_and_destination("move_dog", &state.dogs, params)?;
    let Some(cost) = problem.move_cost(state, state.dogs[dog], destination) else {
        return Ok(ActionOutcome::Inapplicable);
    };
    let mut next = state.clone();
    next.dogs[dog] = destination;
    Ok(ActionOutcome::NextWithCost(next, cost.into()))
}

impl Problem for KiwisAndDogs {
    type State = KiwisState;

    fn name(&self) -> &str {
        "kiwis-and-dogs"
    }

    fn get_start_states(&self) -> Vec<KiwisState> {
        vec![self.start.clone()]
    }

    fn is_goal_state(&self, state: &KiwisState) -> bool {
        state.kiwis.iter().all(|&kiwi| kiwi == KIWI_TARGET)
            && state.dogs.iter().all(|&dog| dog == DOG_TARGET)
    }

    fn is_valid_state(&self, state: &KiwisState) -> bool {
        state.kiwis.len() == self.start.kiwis.len()
            && state.dogs.len() == self.start.dogs.len()
            && state
                .kiwis
                .iter()
                .chain(state.dogs.iter())
                .all(|location| LOCATIONS.contains(location))
    }

    fn actions(&self) -> &[ActionSchema<Self>] {
        &self.schemas
    }

    fn attribute(&self, name: &str) -> Option<i64> {
        match name {
            "num_kiwis" => Some(self.start.kiwis.len() as i64),
            "num_dogs" => Some(self.start.dogs.len() as i64),
            _ => None,
        }
    }

    fn default_heuristic(&self) -> Box<dyn Heuristic<KiwisState> + '_> {
        Box::new(KiwisHeuristic::new(self))
    }
}

/// Sum over all pieces of the cheapest distance to their target when edge
/// conditions are ignored. Pieces move one at a time along single edges, so
/// this never overestimates.
#[derive(Debug, Clone)]
pub struct KiwisHeuristic {
    distances: BTreeMap<(char, char), f64>,
}

impl KiwisHeuristic {
    pub fn new(problem: &KiwisAndDogs) -> Self {
        Self {
            distances: problem.relaxed_distances(),
        }
    }

    fn distance(&self, from: char, to: char) -> f64 {
        self.distances
            .get(&(from, to))
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}

impl Heuristic<KiwisState> for KiwisHeuristic {
    fn evaluate(&mut self, state: &KiwisState) -> HeuristicValue {
        let kiwis: f64 = state
            .kiwis
            .iter()
            .map(|&kiwi| self.distance(kiwi, KIWI_TARGET))
            .sum();
        let dogs: f64 = state
            .dogs
            .iter()
            .map(|&dog| self.distance(dog, DOG_TARGET))
            .sum();
        (kiwis + dogs).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, GraphAstar, SearchEngine, TreeAstar};

    fn state(kiwis: &[char], dogs: &[char]) -> KiwisState {
        KiwisState {
            kiwis: kiwis.to_vec(),
            dogs: dogs.to_vec(),
        }
    }

    #[test]
    fn start_successors_respect_conditions() {
        let problem = KiwisAndDogs::new();
        let start = &problem.get_start_states()[0];
        let successors = problem.get_successors(start).unwrap();
        let described: Vec<(String, f64)> = successors
            .iter()
            .map(|s| (s.action.to_string(), s.cost.into_inner()))
            .collect();
        assert_eq!(
            described,
            vec![
                ("move_kiwi(0, F)".to_string(), 3.),
                ("move_kiwi(1, D)".to_string(), 3.),
                ("move_dog(0, B)".to_string(), 1.),
            ]
        );
        assert_eq!(successors[2].state, state(&['D', 'F'], &['B']));
    }

    #[test]
    fn piece_counts_come_from_start_state() {
        let problem = KiwisAndDogs::with_start(state(&['B'], &['D', 'F']));
        assert_eq!(problem.attribute("num_kiwis"), Some(1));
        assert_eq!(problem.attribute("num_dogs"), Some(2));
        assert!(problem.is_valid_state(&state(&['A'], &['E', 'E'])));
        assert!(!problem.is_valid_state(&state(&['A', 'A'], &['E', 'E'])));
        assert!(!problem.is_valid_state(&state(&['Q'], &['E', 'E'])));
    }

    #[test]
    fn goal_needs_every_piece_home() {
        let problem = KiwisAndDogs::new();
        assert!(problem.is_goal_state(&state(&['A', 'A'], &['E'])));
        assert!(!problem.is_goal_state(&state(&['A', 'B'], &['E'])));
        assert!(!problem.is_goal_state(&state(&['A', 'A'], &['D'])));
    }

    #[test]
    fn heuristic_sums_relaxed_distances() {
        let problem = KiwisAndDogs::new();
        let mut heuristic = problem.default_heuristic();
        // D -> A = 6, F -> A = 9, C -> E = 10
        assert_eq!(heuristic.evaluate(&problem.start), HeuristicValue::from(25.0));
        assert_eq!(
            heuristic.evaluate(&state(&['A', 'A'], &['E'])),
            HeuristicValue::from(0.0)
        );
    }

    #[test]
    fn heuristic_does_not_change_optimal_cost() {
        let problem = KiwisAndDogs::new();
        let informed = GraphAstar::new().run(&problem, None).unwrap();
        let mut zero = crate::search::ZeroHeuristic::new();
        let zero: &mut dyn Heuristic<KiwisState> = &mut zero;
        let uninformed = GraphAstar::new().run(&problem, Some(zero)).unwrap();

        assert!(informed.is_solved());
        assert_eq!(informed.cost(), Some(97.0.into()));
        assert_eq!(informed.cost(), uninformed.cost());
        assert!(informed.expanded_nodes() <= uninformed.expanded_nodes());
        assert!(validate(&informed, &problem).is_ok());
        assert!(problem.is_goal_state(informed.terminal_node().unwrap().get_state()));
    }

    #[test]
    fn tree_search_agrees_with_graph_search() {
        let problem = KiwisAndDogs::with_start(state(&['C'], &['F']));
        let tree = TreeAstar::new().run(&problem, None).unwrap();
        let graph = GraphAstar::new().run(&problem, None).unwrap();
        assert_eq!(tree.cost(), Some(15.0.into()));
        assert_eq!(tree.cost(), graph.cost());
        assert!(validate(&tree, &problem).is_ok());
    }
}
