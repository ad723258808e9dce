//! Plain data row types written by output backends.

use sugar_sim::StepSummary;

/// One line of `step_summaries.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub tick:         u64,
    pub population:   u64,
    pub deaths:       u64,
    pub births:       u64,
    pub total_wealth: i64,
    pub total_stock:  u64,
}

impl From<&StepSummary> for StepSummaryRow {
    fn from(s: &StepSummary) -> Self {
        Self {
            tick:         s.tick.0,
            population:   s.population as u64,
            deaths:       s.deaths as u64,
            births:       s.births as u64,
            total_wealth: s.total_wealth,
            total_stock:  s.total_stock,
        }
    }
}
