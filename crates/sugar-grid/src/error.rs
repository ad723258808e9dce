//! Grid error type.
//!
//! Every variant signals a broken caller invariant, not an expected runtime
//! condition: call sites are supposed to check emptiness and membership
//! first.  Callers propagate these and abort the current step.

use thiserror::Error;

use sugar_core::Coord;

/// Errors produced by `sugar-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {coord} is already occupied by {occupant}")]
    OccupiedCell { coord: Coord, occupant: String },

    #[error("{item} is not on the grid")]
    UnknownItem { item: String },

    #[error("{item} is already on the grid at {coord}")]
    AlreadyPlaced { item: String, coord: Coord },
}

pub type GridResult<T> = Result<T, GridError>;
