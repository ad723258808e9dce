//! CSV output backend.
//!
//! Creates `step_summaries.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSummaryRow};

/// File name written inside the output directory.
pub const STEP_SUMMARIES_FILE: &str = "step_summaries.csv";

/// Writes step summaries to a CSV file.
pub struct CsvWriter {
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the CSV file in it and write the header.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let mut summaries = Writer::from_path(dir.join(STEP_SUMMARIES_FILE))?;
        summaries.write_record(["tick", "population", "deaths", "births", "total_wealth", "total_stock"])?;
        Ok(Self { summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.population.to_string(),
            row.deaths.to_string(),
            row.births.to_string(),
            row.total_wealth.to_string(),
            row.total_stock.to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.summaries.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        Ok(())
    }
}
