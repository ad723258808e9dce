//! Agent rules, one function per scheduled behavior.

use sugar_agent::Agent;
use sugar_core::{AgentId, Coord, SimRng};
use sugar_grid::{ResourceField, SpatialGrid};
use tracing::trace;

use crate::{BehaviorResult, Forage, ForageContext};

/// The "grow" rule: one step older.
#[inline]
pub fn grow_older(agent: &mut Agent) {
    agent.age = agent.age.saturating_add(1);
}

/// Pick the richest empty cell within `vision` of `from`, if it beats the
/// stock already under the agent.
///
/// Candidates are shuffled before the scan so that ties between equally
/// rich cells are broken uniformly at random.  Only strictly better cells
/// replace the running best, which means staying put wins ties with the
/// current cell.
pub fn choose_destination(
    from: Coord,
    vision: u32,
    agents: &SpatialGrid<AgentId>,
    field: &ResourceField,
    rng: &mut SimRng,
) -> Option<Coord> {
    let mut best = field.stock_at(from);
    let mut target = None;

    let mut candidates: Vec<Coord> = agents.neighbours(from, vision).collect();
    rng.shuffle(&mut candidates);

    for cell in candidates {
        if !agents.is_empty(cell) {
            continue;
        }
        let stock = field.stock_at(cell);
        if stock > best {
            best = stock;
            target = Some(cell);
        }
    }
    target
}

/// The "move" rule: relocate to the best visible cell, harvest it, and pay
/// metabolism.
///
/// Metabolism is charged even when nothing was harvested, so wealth can go
/// negative here; removal happens later, in the simulation's replace phase.
///
/// # Errors
/// A [`BehaviorError::Grid`](crate::BehaviorError::Grid) if the agent is not
/// on the grid.  That is an engine invariant violation, never a normal
/// outcome.
pub fn forage(agent: &mut Agent, ctx: &mut ForageContext<'_>) -> BehaviorResult<Forage> {
    let id = agent.id();
    let from = ctx.agents.find(id)?;

    let moved_to = choose_destination(from, agent.vision(), ctx.agents, ctx.field, ctx.rng);
    if let Some(to) = moved_to {
        ctx.agents.move_item(id, to)?;
        trace!(agent = %id, %from, %to, "moved");
    }

    let outcome = Forage { from, moved_to, harvested: 0 };
    let harvested = ctx.field.harvest_at(outcome.position());
    agent.wealth += harvested as i64;
    agent.wealth -= agent.metabolism();

    Ok(Forage { harvested, ..outcome })
}
