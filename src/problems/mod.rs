//! Example problems built on the search framework.

mod kiwis_and_dogs;
mod nqueens;

pub use kiwis_and_dogs::{KiwisAndDogs, KiwisHeuristic, KiwisState, LOCATIONS};
pub use nqueens::{Board, NQueensRepair, RepairHeuristic, DEFAULT_SEED};
