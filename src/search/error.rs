use thiserror::Error;

/// Errors raised while enumerating successors or setting up a search. An
/// inapplicable action is not an error, see
/// [`crate::search::ActionOutcome::Inapplicable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("action `{action}` reads attribute `{attribute}`, which the problem does not define")]
    MissingAttribute { action: String, attribute: String },
    #[error("action `{action}` reads attribute `{attribute}` with negative value {value}")]
    NegativeBound {
        action: String,
        attribute: String,
        value: i64,
    },
    #[error("action `{action}` returned an outcome that does not match its cost policy")]
    CostPolicyMismatch { action: String },
    #[error("action `{action}` received an unexpected value for parameter {index}")]
    InvalidParameter { action: String, index: usize },
    #[error("problem `{problem}` has no start states")]
    EmptyStartStates { problem: String },
}
