//! Replays a solution path against a problem to check that every step is a
//! transition the problem actually offers and that the path ends in a goal.

use crate::search::{Problem, Solution};

pub fn validate<P: Problem>(solution: &Solution<P::State>, problem: &P) -> Result<(), String> {
    let path = solution.path();
    let Some(first) = path.first() else {
        return Err("Solution has no path".to_string());
    };
    if !problem.get_start_states().contains(first.state) {
        return Err(format!("Path starts in {:?}, not a start state", first.state));
    }

    for window in path.windows(2) {
        let (current, next) = (&window[0], &window[1]);
        let action = next
            .action
            .ok_or_else(|| format!("Step into {:?} has no action", next.state))?;
        let successors = problem
            .get_successors(current.state)
            .map_err(|e| e.to_string())?;
        let matches = successors.iter().any(|successor| {
            &successor.action == action
                && &successor.state == next.state
                && current.cost + successor.cost == next.cost
        });
        if !matches {
            return Err(format!(
                "Action {} is not applicable in state {:?}",
                action, current.state
            ));
        }
    }

    let last = path[path.len() - 1].state;
    if !problem.is_goal_state(last) {
        return Err(format!(
            "Path does not reach goal state, final state is: {:?}",
            last
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        Action, ParamValue, SearchEngine, SearchSpace, SearchStatistics, TreeAstar,
    };
    use crate::test_utils::*;
    use smallvec::smallvec;

    #[test]
    fn validate_found_solution_ok() {
        let problem = diamond_graph();
        let solution = TreeAstar::new().run(&problem, None).unwrap();
        assert!(validate(&solution, &problem).is_ok());
    }

    #[test]
    fn validate_unsolved_err() {
        let problem = dead_end_graph();
        let solution = TreeAstar::new().run(&problem, None).unwrap();
        assert!(validate(&solution, &problem).is_err());
    }

    #[test]
    fn validate_bad_step_err() {
        let problem = diamond_graph();
        let mut search_space = SearchSpace::with_roots(vec!['S']);
        let root = search_space.get_root_ids()[0];
        let jump = Action::new("move".into(), smallvec![ParamValue::from("G")]);
        let goal = search_space.insert_child(root, 'G', jump, 1.0.into());
        let solution = Solution::solved(search_space, goal, SearchStatistics::new());
        assert!(validate(&solution, &problem).is_err());
    }

    #[test]
    fn validate_wrong_cost_err() {
        let problem = two_node_graph();
        let mut search_space = SearchSpace::with_roots(vec!['A']);
        let root = search_space.get_root_ids()[0];
        let step = Action::new("move".into(), smallvec![ParamValue::from("B")]);
        let goal = search_space.insert_child(root, 'B', step, 1.0.into());
        let solution = Solution::solved(search_space, goal, SearchStatistics::new());
        assert!(validate(&solution, &problem).is_err());
    }
}
