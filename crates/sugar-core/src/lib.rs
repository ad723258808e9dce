//! `sugar-core` — foundational types for the sugarscape engine.
//!
//! This crate is a dependency of every other `sugar-*` crate.  It has no
//! `sugar-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`coord`]       | `Coord`, toroidal wrapping                            |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (entropy-seeded or fixed-seed)               |
//! | [`config`]      | `SugarscapeConfig`, `UniformRange`                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SugarscapeConfig, UniformRange};
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, CellId};
pub use rng::SimRng;
pub use time::Tick;
