//! `World` — the context every scheduled behavior mutates.

use sugar_agent::{Agent, AgentFactory, AgentPopulation};
use sugar_core::{AgentId, Coord, SimRng, SugarscapeConfig};
use sugar_grid::{ResourceField, SpatialGrid};
use tracing::trace;

use crate::{SimError, SimResult};

/// Births and deaths counted during the current step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct StepTally {
    pub deaths: usize,
    pub births: usize,
}

/// All mutable model state.
///
/// The population owns the agents; `agents` holds only their ids.  Both are
/// updated together by every method here and by the replace phase, so an id
/// is on the grid exactly when its agent is in the population.
pub struct World {
    pub(crate) config:     SugarscapeConfig,
    pub(crate) population: AgentPopulation,
    pub(crate) agents:     SpatialGrid<AgentId>,
    pub(crate) field:      ResourceField,
    pub(crate) rng:        SimRng,
    pub(crate) factory:    AgentFactory,
    pub(crate) tally:      StepTally,
}

impl World {
    pub(crate) fn new(config: SugarscapeConfig, field: ResourceField, rng: SimRng) -> Self {
        Self {
            population: AgentPopulation::with_capacity(config.agent_count),
            agents: SpatialGrid::new(config.width, config.height),
            field,
            rng,
            factory: AgentFactory::new(),
            tally: StepTally::default(),
            config,
        }
    }

    pub fn config(&self) -> &SugarscapeConfig {
        &self.config
    }

    pub fn population(&self) -> &AgentPopulation {
        &self.population
    }

    pub fn agent_grid(&self) -> &SpatialGrid<AgentId> {
        &self.agents
    }

    pub fn field(&self) -> &ResourceField {
        &self.field
    }

    /// Draw a random agent and put it on a random empty cell.
    pub(crate) fn spawn_random(&mut self) -> SimResult<AgentId> {
        if self.agents.is_full() {
            return Err(SimError::GridFull(self.agents.cell_count()));
        }
        let agent = self.factory.spawn(&self.config, &mut self.rng);
        let id = agent.id();
        let coord = self.agents.place_randomly(id, &mut self.rng)?;
        self.population.push(agent);
        trace!(agent = %id, %coord, "spawned");
        Ok(id)
    }

    /// Register `agent` at `coord`.  Nothing changes if the cell is taken.
    pub(crate) fn insert_at(&mut self, agent: Agent, coord: Coord) -> SimResult<AgentId> {
        let id = agent.id();
        self.agents.place(id, coord)?;
        self.population.push(agent);
        Ok(id)
    }
}
