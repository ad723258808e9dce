//! `sugar-sim` — step loop orchestrator for the sugarscape engine.
//!
//! # One step
//!
//! ```text
//! tick += 1
//! scheduler.execute(world, [agent slots…])                 grow: age += 1
//!                                                          move: forage
//! scheduler.execute(world, [Simulation, ResourceField])    grow: field regrowth
//!                                                          replace: cull + refill
//! ```
//!
//! Phases are declared once as `grow < move < replace`, and execution is
//! phase-major, so every agent ages before any agent moves, and the field
//! regrows before dead agents are replaced.
//!
//! # Quick-start
//!
//! ```rust
//! use sugar_core::SugarscapeConfig;
//! use sugar_sim::{NoopObserver, SimBuilder};
//!
//! let config = SugarscapeConfig { seed: Some(7), ..SugarscapeConfig::default() };
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run_steps(10, &mut NoopObserver)?;
//! assert_eq!(sim.population().len(), 25);
//! # Ok::<(), sugar_sim::SimError>(())
//! ```

pub mod builder;
pub mod entity;
pub mod error;
pub mod observer;
pub mod phases;
pub mod seeding;
pub mod simulation;
pub mod snapshot;
pub mod world;


pub use builder::SimBuilder;
pub use entity::{Entity, Kind};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, StepSummary};
pub use phases::PHASES;
pub use simulation::Simulation;
pub use snapshot::{AgentView, RESOURCE_DISPLAY_SCALE, ResourceView};
pub use world::World;
