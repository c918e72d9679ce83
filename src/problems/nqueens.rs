//! N-queens by iterative repair: start from a board holding one queen per
//! column at random rows and move queens within their column until no two
//! queens attack each other.

use crate::search::{
    ActionOutcome, ActionSchema, Heuristic, HeuristicValue, ParamSpace, ParamValue, Problem,
    SearchError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 123456;

/// Row of the queen in each column.
pub type Board = Vec<usize>;

#[derive(Debug)]
pub struct NQueensRepair {
    n_queens: usize,
    board_size: usize,
    seed: u64,
    start: Board,
    schemas: Vec<ActionSchema<NQueensRepair>>,
}

impl NQueensRepair {
    /// Boards are at least 4 by 4. The start board is drawn from `seed`, so
    /// equal seeds give equal instances.
    pub fn new(n_queens: usize, seed: u64) -> Self {
        let board_size = n_queens.max(4);
        let mut rng = StdRng::seed_from_u64(seed);
        let start = (0..board_size)
            .map(|_| rng.random_range(0..board_size))
            .collect();
        Self::with_start(n_queens, seed, start)
    }

    fn with_start(n_queens: usize, seed: u64, start: Board) -> Self {
        let schemas = vec![ActionSchema::new(
            "move_queen",
            vec![
                ParamSpace::attribute_range(0, "board_size"),
                ParamSpace::attribute_range(0, "board_size"),
            ],
            move_queen,
        )
        .with_constant_cost(1.)];
        Self {
            n_queens,
            board_size: n_queens.max(4),
            seed,
            start,
            schemas,
        }
    }

    pub fn n_queens(&self) -> usize {
        self.n_queens
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of queens attacking the queen in column `col`.
    pub fn conflicts(&self, board: &[usize], col: usize) -> usize {
        (0..board.len())
            .filter(|&other| other != col && attacks(board, col, other))
            .count()
    }

    /// Number of attacking pairs on the board.
    pub fn attacking_pairs(&self, board: &[usize]) -> usize {
        (0..board.len())
            .map(|col| self.conflicts(board, col))
            .sum::<usize>()
            / 2
    }
}

fn attacks(board: &[usize], col: usize, other: usize) -> bool {
    board[col] == board[other] || col.abs_diff(other) == board[col].abs_diff(board[other])
}

fn move_queen(
    problem: &NQueensRepair,
    board: &Board,
    params: &[ParamValue],
) -> Result<ActionOutcome<Board>, SearchError> {
    let index = |i: usize| {
        params[i]
            .as_index()
            .filter(|&value| value < problem.board_size)
            .ok_or(SearchError::InvalidParameter {
                action: "move_queen".to_string(),
                index: i,
            })
    };
    let (col, row) = (index(0)?, index(1)?);
    if board[col] == row {
        return Ok(ActionOutcome::Inapplicable);
    }
    let mut next = board.clone();
    next[col] = row;
    Ok(ActionOutcome::Next(next))
}

impl Problem for NQueensRepair {
    type State = Board;

    fn name(&self) -> &str {
        "n-queens"
    }

    fn get_start_states(&self) -> Vec<Board> {
        vec![self.start.clone()]
    }

    fn is_goal_state(&self, board: &Board) -> bool {
        self.attacking_pairs(board) == 0
    }

    fn is_valid_state(&self, board: &Board) -> bool {
        board.len() == self.board_size && board.iter().all(|&row| row < self.board_size)
    }

    fn actions(&self) -> &[ActionSchema<Self>] {
        &self.schemas
    }

    fn attribute(&self, name: &str) -> Option<i64> {
        match name {
            "board_size" => i64::try_from(self.board_size).ok(),
            _ => None,
        }
    }

    fn default_heuristic(&self) -> Box<dyn Heuristic<Board> + '_> {
        Box::new(RepairHeuristic::new(self))
    }
}

/// Counts attacking pairs. One move can resolve several pairs at once, so
/// this is not admissible and A* may return longer repairs than necessary.
#[derive(Debug, Clone)]
pub struct RepairHeuristic<'a> {
    problem: &'a NQueensRepair,
}

impl<'a> RepairHeuristic<'a> {
    pub fn new(problem: &'a NQueensRepair) -> Self {
        Self { problem }
    }
}

impl Heuristic<Board> for RepairHeuristic<'_> {
    fn evaluate(&mut self, board: &Board) -> HeuristicValue {
        (self.problem.attacking_pairs(board) as f64).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, GraphAstar, SearchEngine, TreeIds};

    #[test]
    fn same_seed_same_board() {
        let first = NQueensRepair::new(6, 42);
        let second = NQueensRepair::new(6, 42);
        assert_eq!(first.get_start_states(), second.get_start_states());
        assert!(first.is_valid_state(&first.get_start_states()[0]));
    }

    #[test]
    fn small_boards_are_padded() {
        let problem = NQueensRepair::new(2, DEFAULT_SEED);
        assert_eq!(problem.board_size(), 4);
        assert_eq!(problem.get_start_states()[0].len(), 4);
        assert_eq!(problem.attribute("board_size"), Some(4));
    }

    #[test]
    fn counts_conflicts() {
        let problem = NQueensRepair::new(4, DEFAULT_SEED);
        let same_row = vec![0, 0, 0, 0];
        assert_eq!(problem.conflicts(&same_row, 0), 3);
        assert_eq!(problem.attacking_pairs(&same_row), 6);
        assert!(problem.is_goal_state(&vec![1, 3, 0, 2]));
        assert!(!problem.is_goal_state(&vec![0, 1, 2, 3]));
    }

    #[test]
    fn every_other_row_is_a_successor() {
        let problem = NQueensRepair::with_start(4, DEFAULT_SEED, vec![0, 0, 0, 0]);
        let successors = problem.get_successors(&vec![0, 0, 0, 0]).unwrap();
        assert_eq!(successors.len(), 12);
        assert!(successors.iter().all(|s| s.cost.into_inner() == 1.));
        assert_eq!(successors[0].action.to_string(), "move_queen(0, 1)");
        assert_eq!(successors[0].state, vec![1, 0, 0, 0]);
    }

    #[test]
    fn graph_search_repairs_board() {
        let problem = NQueensRepair::new(5, DEFAULT_SEED);
        let solution = GraphAstar::new().run(&problem, None).unwrap();
        assert!(solution.is_solved());
        assert!(validate(&solution, &problem).is_ok());
    }

    #[test]
    fn iterative_deepening_repairs_small_board() {
        let problem = NQueensRepair::with_start(4, DEFAULT_SEED, vec![0, 0, 0, 0]);
        let solution = TreeIds::new(4).run(&problem, None).unwrap();
        assert!(solution.is_solved());
        // Three queens have to leave row 0
        assert_eq!(solution.len(), Some(3));
    }
}
