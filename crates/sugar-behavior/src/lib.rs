//! `sugar-behavior` — the per-agent rules.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`context`] | `ForageContext<'a>` — the mutable world slice a forager needs  |
//! | [`rules`]   | `grow_older`, `choose_destination`, `forage`                   |
//! | [`outcome`] | `Forage` — what one foraging turn did                          |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Foraging
//!
//! ```text
//! best   = stock at the agent's cell
//! cells  = square neighbourhood at `vision`, shuffled
//! target = last empty cell in `cells` whose stock beat the running best
//! move to target (if any), harvest everything there, pay metabolism
//! ```
//!
//! Rules run sequentially in population order, so an agent that moves
//! early in a phase changes which cells are empty for later agents.

pub mod context;
pub mod error;
pub mod outcome;
pub mod rules;


pub use context::ForageContext;
pub use error::{BehaviorError, BehaviorResult};
pub use outcome::Forage;
pub use rules::{choose_destination, forage, grow_older};
