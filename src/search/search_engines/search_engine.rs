use crate::search::{
    search_engines::{GraphAstar, TreeAstar, TreeIds},
    Heuristic, Problem, SearchError, Solution,
};
use serde::{Deserialize, Serialize};

pub trait SearchEngine<P: Problem> {
    /// Search `problem` from its start states. Without an explicit heuristic
    /// the problem's default heuristic is used. Returns an unsolved
    /// [`Solution`] when no goal is found; errors are reserved for problems
    /// that fail while generating successors.
    fn run(
        &mut self,
        problem: &P,
        heuristic: Option<&mut dyn Heuristic<P::State>>,
    ) -> Result<Solution<P::State>, SearchError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "A* without duplicate detection.")]
    TreeAstar,
    #[clap(help = "A* that prunes paths dominated by a known cheaper path to the same state.")]
    GraphAstar,
    #[clap(help = "Iterative deepening depth-first tree search, bounded by the max depth.")]
    TreeIds,
}

impl SearchEngineName {
    pub fn create<P: Problem>(&self, max_depth: usize) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::TreeAstar => Box::new(TreeAstar::new()),
            SearchEngineName::GraphAstar => Box::new(GraphAstar::new()),
            SearchEngineName::TreeIds => Box::new(TreeIds::new(max_depth)),
        }
    }

    pub fn search<P: Problem>(
        &self,
        problem: &P,
        heuristic: Option<&mut dyn Heuristic<P::State>>,
        max_depth: usize,
    ) -> Result<Solution<P::State>, SearchError> {
        self.create::<P>(max_depth).run(problem, heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use clap::ValueEnum;

    #[test]
    fn every_engine_solves_two_node_graph() {
        let problem = two_node_graph();
        for name in SearchEngineName::value_variants() {
            let solution = name.search(&problem, None, 5).unwrap();
            assert!(solution.is_solved(), "{:?} found no solution", name);
            assert_eq!(solution.cost(), Some(3.0.into()));
        }
    }
}
