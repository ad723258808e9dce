//! Scheduler members.

use sugar_schedule::Member;

/// What an [`Entity`] handle refers to.  The scheduler registry is keyed on
/// this tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Agent,
    Simulation,
    ResourceField,
}

/// A scheduler handle.  For agents, `slot` is the population position; the
/// two singletons use slot `0`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Entity {
    pub kind: Kind,
    pub slot: usize,
}

impl Entity {
    pub const SIMULATION: Entity = Entity { kind: Kind::Simulation, slot: 0 };
    pub const RESOURCE_FIELD: Entity = Entity { kind: Kind::ResourceField, slot: 0 };

    #[inline]
    pub fn agent(slot: usize) -> Self {
        Entity { kind: Kind::Agent, slot }
    }
}

impl Member for Entity {
    type Kind = Kind;

    #[inline]
    fn kind(&self) -> Kind {
        self.kind
    }
}
