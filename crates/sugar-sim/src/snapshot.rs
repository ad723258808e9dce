//! Read-only views handed to renderers.
//!
//! `intensity` is a display hint in `[0, 1]`: agents scale by the top of the
//! configured wealth range, resource cells by a fixed stock of 25.

use sugar_agent::Agent;
use sugar_core::AgentId;
use sugar_grid::ResourceCell;

/// Stock that maps to full resource intensity.
pub const RESOURCE_DISPLAY_SCALE: f64 = 25.0;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:        AgentId,
    pub wealth:    i64,
    pub age:       u32,
    pub intensity: f64,
}

impl AgentView {
    /// View of `agent`, with intensity `wealth / wealth_max`.
    pub fn new(agent: &Agent, wealth_max: i64) -> Self {
        let intensity = if wealth_max > 0 {
            (agent.wealth as f64 / wealth_max as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { id: agent.id(), wealth: agent.wealth, age: agent.age, intensity }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceView {
    pub stock:     u32,
    pub capacity:  u32,
    pub intensity: f64,
}

impl From<&ResourceCell> for ResourceView {
    fn from(cell: &ResourceCell) -> Self {
        Self {
            stock:     cell.stock(),
            capacity:  cell.capacity(),
            intensity: (cell.stock() as f64 / RESOURCE_DISPLAY_SCALE).clamp(0.0, 1.0),
        }
    }
}
