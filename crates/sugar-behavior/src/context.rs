//! The world state a foraging agent reads and writes.

use sugar_core::{AgentId, SimRng};
use sugar_grid::{ResourceField, SpatialGrid};

/// Mutable borrows of the agent grid, the resource field and the RNG.
///
/// The population is deliberately absent: the caller holds `&mut Agent`
/// from it, and the grid only stores ids, so both borrows coexist.
pub struct ForageContext<'a> {
    pub agents: &'a mut SpatialGrid<AgentId>,
    pub field:  &'a mut ResourceField,
    pub rng:    &'a mut SimRng,
}

impl<'a> ForageContext<'a> {
    #[inline]
    pub fn new(
        agents: &'a mut SpatialGrid<AgentId>,
        field:  &'a mut ResourceField,
        rng:    &'a mut SimRng,
    ) -> Self {
        Self { agents, field, rng }
    }
}
