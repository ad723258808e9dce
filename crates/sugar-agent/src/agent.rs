//! A single forager.

use sugar_core::AgentId;

/// One agent.
///
/// `metabolism`, `vision` and `max_age` are drawn once at creation and never
/// change, so they sit behind getters.  `wealth` and `age` are the only
/// mutable state and are public for the behavior rules to update.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id:         AgentId,
    metabolism: i64,
    vision:     u32,
    max_age:    u32,

    /// Accumulated resource.  Goes negative when metabolism outruns the
    /// harvest; such an agent is removed at the end of the step.
    pub wealth: i64,

    /// Steps survived.  Starts at `0`.
    pub age: u32,
}

impl Agent {
    pub fn new(id: AgentId, wealth: i64, metabolism: i64, vision: u32, max_age: u32) -> Self {
        Self { id, metabolism, vision, max_age, wealth, age: 0 }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn metabolism(&self) -> i64 {
        self.metabolism
    }

    #[inline]
    pub fn vision(&self) -> u32 {
        self.vision
    }

    #[inline]
    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    /// `true` once the agent has outlived `max_age` or run out of wealth.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age > self.max_age || self.wealth <= 0
    }
}
