//! Simulation observer trait for progress reporting and data collection.

use sugar_core::Tick;

/// Population and resource totals after one step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSummary {
    pub tick:         Tick,
    pub population:   usize,
    /// Agents removed by this step's replace phase.
    pub deaths:       usize,
    /// Agents created by this step's replace phase.
    pub births:       usize,
    pub total_wealth: i64,
    pub total_stock:  u64,
}

/// Callbacks invoked by [`Simulation::run_steps`][crate::Simulation::run_steps].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust
/// use sugar_sim::{SimObserver, StepSummary};
///
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, summary: &StepSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} agents", summary.tick, summary.population);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a step runs.  `tick` is the tick the step will produce.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each successful step.
    fn on_step_end(&mut self, _summary: &StepSummary) {}

    /// Called once after the last step of a `run_steps` call.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
