use sugar_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    /// The agent grid disagreed with the rule's expectations: the forager
    /// was not placed, or its chosen cell was taken.
    #[error("grid invariant violated while foraging: {0}")]
    Grid(#[from] GridError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
