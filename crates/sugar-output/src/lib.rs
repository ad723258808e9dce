//! `sugar-output` — simulation output for the sugarscape engine.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`frame`]    | `render_frame`, `write_frame` — the agent grid as text    |
//! | [`csv`]      | `CsvWriter` — `step_summaries.csv`                        |
//! | [`observer`] | `SimOutputObserver` — drives any `OutputWriter`           |
//! | [`row`]      | `StepSummaryRow`                                          |
//! | [`writer`]   | `OutputWriter` trait                                      |
//!
//! Step summaries are statistics only; nothing here can restore a run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sugar_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_steps(100, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod frame;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use frame::{render_frame, write_frame};
pub use observer::SimOutputObserver;
pub use row::StepSummaryRow;
pub use writer::OutputWriter;
