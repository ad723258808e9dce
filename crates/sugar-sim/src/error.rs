use sugar_behavior::BehaviorError;
use sugar_core::CoreError;
use sugar_grid::GridError;
use sugar_schedule::ScheduleError;
use thiserror::Error;

/// Engine errors.
///
/// Everything except `Config` and `Schedule` is an invariant violation
/// raised mid-step: the step is aborted and the simulation should not be
/// stepped again.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("scheduler setup failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("grid invariant violated: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("no agent in population slot {0}")]
    MissingAgent(usize),

    #[error("agent grid is full ({0} cells); cannot place another agent")]
    GridFull(usize),
}

pub type SimResult<T> = Result<T, SimError>;
