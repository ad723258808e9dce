//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sugar_core::Tick;
use sugar_sim::{SimObserver, StepSummary};
use tracing::warn;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, StepSummaryRow};

/// A [`SimObserver`] that writes one summary row per step to any
/// [`OutputWriter`] and flushes it, so an interrupted run keeps every
/// completed step.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output writer failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, summary: &StepSummary) {
        let row = StepSummaryRow::from(summary);
        let result = self.writer.write_step_summary(&row).and_then(|()| self.writer.flush());
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
