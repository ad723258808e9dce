//! Fluent builder for constructing a [`Simulation`].

use sugar_core::{SimRng, SugarscapeConfig};
use sugar_grid::ResourceField;
use tracing::{debug, info};

use crate::phases::build_scheduler;
use crate::seeding::seed_resources;
use crate::{SimResult, Simulation, World};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                    |
/// |--------------------------|--------------------------------------------|
/// | `.rng(r)`                | Seeded from `config.seed`, else OS entropy |
/// | `.seed_resources(false)` | Resource hills are seeded                  |
/// | `.populate(false)`       | `agent_count` random agents are placed     |
///
/// Turning both off yields an empty world for scripted scenarios; the first
/// step's replace phase still tops the population up to `agent_count`.
///
/// # Example
///
/// ```rust
/// use sugar_core::{SimRng, SugarscapeConfig};
/// use sugar_sim::SimBuilder;
///
/// let sim = SimBuilder::new(SugarscapeConfig::default())
///     .rng(SimRng::new(1))
///     .build()
///     .unwrap();
/// assert_eq!(sim.population().len(), 25);
/// ```
pub struct SimBuilder {
    config:         SugarscapeConfig,
    rng:            Option<SimRng>,
    seed_resources: bool,
    populate:       bool,
}

impl SimBuilder {
    pub fn new(config: SugarscapeConfig) -> Self {
        Self { config, rng: None, seed_resources: true, populate: true }
    }

    /// Use `rng` instead of one derived from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn seed_resources(mut self, enabled: bool) -> Self {
        self.seed_resources = enabled;
        self
    }

    pub fn populate(mut self, enabled: bool) -> Self {
        self.populate = enabled;
        self
    }

    /// Validate the configuration, seed the field, place the initial
    /// population and wire the scheduler.
    pub fn build(self) -> SimResult<Simulation> {
        let config = self.config;
        config.validate()?;

        let mut rng = self.rng.unwrap_or_else(|| SimRng::from_optional_seed(config.seed));
        let mut field = ResourceField::new(config.width, config.height, config.growth_rate);
        if self.seed_resources {
            let deposits = seed_resources(&config, &mut field, &mut rng)?;
            debug!(deposits, cells = field.len(), "seeded resource field");
        }

        let scheduler = build_scheduler()?;
        let mut world = World::new(config, field, rng);
        if self.populate {
            for _ in 0..world.config.agent_count {
                world.spawn_random()?;
            }
        }

        info!(
            width = world.config.width,
            height = world.config.height,
            agents = world.population.len(),
            resource_cells = world.field.len(),
            "simulation built"
        );
        Ok(Simulation::new(world, scheduler))
    }
}
