//! The `Simulation` struct and its step loop.

use sugar_agent::{Agent, AgentPopulation};
use sugar_core::{AgentId, Coord, SugarscapeConfig, Tick};
use sugar_grid::{ResourceField, SpatialGrid};
use tracing::debug;

use crate::phases::SimScheduler;
use crate::world::StepTally;
use crate::{AgentView, Entity, ResourceView, SimObserver, SimResult, StepSummary, World};

/// The model runner.
///
/// Holds the [`World`] and the scheduler side by side so the scheduler can
/// lend the world out mutably to each behavior.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    world:     World,
    scheduler: SimScheduler,
    tick:      Tick,
}

impl Simulation {
    pub(crate) fn new(world: World, scheduler: SimScheduler) -> Self {
        Self { world, scheduler, tick: Tick::ZERO }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the model by one step.
    ///
    /// # Errors
    /// Any error is an engine invariant violation.  The world may be left
    /// half-updated; do not keep stepping after one.
    pub fn step(&mut self) -> SimResult<()> {
        self.tick = self.tick.next();
        self.world.tally = StepTally::default();

        let agents: Vec<Entity> = (0..self.world.population.len()).map(Entity::agent).collect();
        self.scheduler.execute(&mut self.world, &agents)?;
        self.scheduler
            .execute(&mut self.world, &[Entity::SIMULATION, Entity::RESOURCE_FIELD])?;

        let summary = self.summary();
        debug!(
            tick = summary.tick.0,
            population = summary.population,
            deaths = summary.deaths,
            births = summary.births,
            total_wealth = summary.total_wealth,
            total_stock = summary.total_stock,
            "step complete"
        );
        Ok(())
    }

    /// Run exactly `n` steps, reporting to `observer`.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            observer.on_step_start(self.tick.next());
            self.step()?;
            observer.on_step_end(&self.summary());
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Totals as of the last completed step.
    pub fn summary(&self) -> StepSummary {
        StepSummary {
            tick:         self.tick,
            population:   self.world.population.len(),
            deaths:       self.world.tally.deaths,
            births:       self.world.tally.births,
            total_wealth: self.world.population.total_wealth(),
            total_stock:  self.world.field.total_stock(),
        }
    }

    // ── Scenario setup ────────────────────────────────────────────────────

    /// Place a hand-made agent at `coord`, with a fresh id.
    pub fn insert_agent(
        &mut self,
        wealth: i64,
        metabolism: i64,
        vision: u32,
        max_age: u32,
        coord: Coord,
    ) -> SimResult<AgentId> {
        let agent = self.world.factory.create(wealth, metabolism, vision, max_age);
        self.world.insert_at(agent, coord)
    }

    /// Mutable access to the resource field, for arranging scenarios.
    pub fn field_mut(&mut self) -> &mut ResourceField {
        &mut self.world.field
    }

    // ── Read-only access ──────────────────────────────────────────────────

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.world.config.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.world.config.height
    }

    pub fn config(&self) -> &SugarscapeConfig {
        self.world.config()
    }

    pub fn population(&self) -> &AgentPopulation {
        self.world.population()
    }

    pub fn agent_grid(&self) -> &SpatialGrid<AgentId> {
        self.world.agent_grid()
    }

    pub fn field(&self) -> &ResourceField {
        self.world.field()
    }

    /// The agent standing on `coord`, if any.
    pub fn agent_at(&self, coord: Coord) -> Option<&Agent> {
        let id = self.world.agents.get(coord)?;
        self.world.population.find(id)
    }

    /// Every occupied agent cell with a view of its occupant, row-major.
    ///
    /// Walks the agent grid; the world keeps every placed id backed by a
    /// population entry.
    pub fn agent_cells(&self) -> impl Iterator<Item = (Coord, AgentView)> + '_ {
        let wealth_max = self.world.config.wealth_range.max;
        self.world.agents.iter().filter_map(move |(coord, id)| {
            let agent = self.world.population.find(id)?;
            Some((coord, AgentView::new(agent, wealth_max)))
        })
    }

    /// Every resource cell, row-major.
    pub fn resource_cells(&self) -> impl Iterator<Item = (Coord, ResourceView)> + '_ {
        self.world.field.iter().map(|(coord, cell)| (coord, ResourceView::from(cell)))
    }
}
