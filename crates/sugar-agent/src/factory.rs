//! `AgentFactory` — the single place new agents come from.
//!
//! # Usage
//!
//! ```rust
//! use sugar_agent::AgentFactory;
//! use sugar_core::{AgentId, SimRng, SugarscapeConfig};
//!
//! let config = SugarscapeConfig::default();
//! let mut rng = SimRng::new(7);
//! let mut factory = AgentFactory::new();
//!
//! let a = factory.spawn(&config, &mut rng);
//! let b = factory.spawn(&config, &mut rng);
//! assert_eq!(a.id(), AgentId(1));
//! assert_eq!(b.id(), AgentId(2));
//! assert!(config.wealth_range.contains(a.wealth));
//! ```

use sugar_core::{AgentId, SimRng, SugarscapeConfig};

use crate::Agent;

/// Allocates agent ids (monotonic, starting at 1, never reused) and draws
/// new agents' traits from the configured ranges.
#[derive(Debug)]
pub struct AgentFactory {
    next_id: u32,
}

impl Default for AgentFactory {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl AgentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next agent will receive.
    pub fn peek_id(&self) -> AgentId {
        AgentId(self.next_id)
    }

    /// Number of agents created so far.
    pub fn created(&self) -> u32 {
        self.next_id - 1
    }

    fn allocate(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// A new agent with explicit traits and a fresh id.
    pub fn create(&mut self, wealth: i64, metabolism: i64, vision: u32, max_age: u32) -> Agent {
        Agent::new(self.allocate(), wealth, metabolism, vision, max_age)
    }

    /// A new agent whose traits are drawn uniformly from `config`'s ranges.
    ///
    /// Draw order is wealth, metabolism, vision, max age.  Vision and max
    /// age are clamped into `u32`; a validated config never needs it.
    pub fn spawn(&mut self, config: &SugarscapeConfig, rng: &mut SimRng) -> Agent {
        let wealth = config.wealth_range.sample(rng);
        let metabolism = config.metabolism_range.sample(rng);
        let vision = to_u32(config.vision_range.sample(rng));
        let max_age = to_u32(config.max_age_range.sample(rng));
        self.create(wealth, metabolism, vision, max_age)
    }
}

#[inline]
fn to_u32(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
