use thiserror::Error;

/// Registration errors.  Execution errors are the caller's own type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("unknown phase '{0}'")]
    UnknownPhase(String),

    #[error("phase '{phase}' already has a behavior for {kind}")]
    DuplicateBehavior { phase: String, kind: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
