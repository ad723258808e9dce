//! `sugar-agent` — agent records and their owning population.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`agent`]      | `Agent` (one forager's traits and mutable state)           |
//! | [`population`] | `AgentPopulation` (ordered owner of every live agent)      |
//! | [`factory`]    | `AgentFactory` (id allocation + random trait draws)        |
//!
//! Agents are owned here and only here.  The agent grid in `sugar-sim`
//! stores `AgentId`s, never references, so either side can be mutated
//! without borrowing the other.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod agent;
pub mod factory;
pub mod population;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use factory::AgentFactory;
pub use population::AgentPopulation;
