//! Scheduled behaviors and the registry that wires them up.

use sugar_behavior::{ForageContext, forage, grow_older};
use sugar_schedule::Scheduler;
use tracing::trace;

use crate::{Entity, Kind, SimError, SimResult, World};

pub(crate) const GROW: &str = "grow";
pub(crate) const MOVE: &str = "move";
pub(crate) const REPLACE: &str = "replace";

/// Phase names in execution order.
pub const PHASES: [&str; 3] = [GROW, MOVE, REPLACE];

pub(crate) type SimScheduler = Scheduler<World, Entity, SimError>;

/// The registry: agents grow and move, the field grows, the simulation
/// replaces.
pub(crate) fn build_scheduler() -> SimResult<SimScheduler> {
    let mut scheduler = Scheduler::new(&PHASES);
    scheduler.register(GROW, Kind::Agent, agent_grow)?;
    scheduler.register(MOVE, Kind::Agent, agent_move)?;
    scheduler.register(GROW, Kind::ResourceField, field_grow)?;
    scheduler.register(REPLACE, Kind::Simulation, replace)?;
    Ok(scheduler)
}

fn agent_grow(world: &mut World, entity: Entity) -> SimResult<()> {
    let agent = world
        .population
        .get_mut(entity.slot)
        .ok_or(SimError::MissingAgent(entity.slot))?;
    grow_older(agent);
    Ok(())
}

fn agent_move(world: &mut World, entity: Entity) -> SimResult<()> {
    let World { population, agents, field, rng, .. } = world;
    let agent = population
        .get_mut(entity.slot)
        .ok_or(SimError::MissingAgent(entity.slot))?;
    forage(agent, &mut ForageContext::new(agents, field, rng))?;
    Ok(())
}

fn field_grow(world: &mut World, _entity: Entity) -> SimResult<()> {
    world.field.grow_phase();
    Ok(())
}

/// Cull expired agents, then refill to `agent_count`.
///
/// Three separate passes: the removal set is fixed before anything is
/// removed, and removal finishes before any newcomer is placed.
fn replace(world: &mut World, _entity: Entity) -> SimResult<()> {
    let expired = world.population.expired_ids();

    for &id in &expired {
        let coord = world.agents.remove(id)?;
        trace!(agent = %id, %coord, "removed");
    }
    world.population.remove_ids(&expired);
    world.tally.deaths += expired.len();

    while world.population.len() < world.config.agent_count {
        world.spawn_random()?;
        world.tally.births += 1;
    }
    Ok(())
}
