//! `sugar-schedule` — ordered phases and a `(phase, kind) → behavior` registry.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`scheduler`] | `Member` trait, `Behavior` fn type, `Scheduler`       |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                  |
//!
//! # Execution model
//!
//! ```text
//! for phase in phases (declared order):
//!     for member in members (slice order):
//!         if registry has (phase, member.kind()):
//!             behavior(ctx, member)?
//! ```
//!
//! Execution is phase-major: every member finishes phase `p` before any
//! member starts phase `p + 1`.  Dispatch is by the member's declared
//! `Kind` tag, never by runtime type inspection.  The first behavior error
//! aborts the pass and is returned unchanged.

pub mod error;
pub mod scheduler;


pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::{Behavior, Member, Scheduler};
