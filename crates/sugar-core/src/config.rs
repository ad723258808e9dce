//! Model configuration.
//!
//! Typically built by the application crate (from CLI flags or a JSON file
//! with the `serde` feature) and handed to `SimBuilder`.  All integer ranges
//! are closed intervals sampled uniformly.

use crate::{CoreError, CoreResult, SimRng};

// ── UniformRange ──────────────────────────────────────────────────────────────

/// A closed integer interval `[min, max]` used for uniform sampling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRange {
    pub min: i64,
    pub max: i64,
}

impl UniformRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Draw one value uniformly from `[min, max]`.
    ///
    /// An inverted range is rejected by [`SugarscapeConfig::validate`]; if
    /// one slips through anyway the result is `min`.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> i64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, name: &str, floor: i64, ceiling: i64) -> CoreResult<()> {
        if self.min > self.max {
            return Err(CoreError::Config(format!(
                "{name}: min {} is greater than max {}",
                self.min, self.max
            )));
        }
        if self.min < floor || self.max > ceiling {
            return Err(CoreError::Config(format!(
                "{name}: [{}, {}] must lie within [{floor}, {ceiling}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

// ── SugarscapeConfig ──────────────────────────────────────────────────────────

/// Top-level model configuration.
///
/// The first eight fields are the model parameters proper; the rest tune the
/// initial resource seeding and the RNG.  `Default` reproduces the classic
/// 35×35 console run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SugarscapeConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Resource units added to every cell's stock per step (capped at capacity).
    pub growth_rate: u32,

    /// Target population size, restored at the end of every step.
    /// Must be strictly smaller than `width * height`.
    pub agent_count: usize,

    /// Initial wealth of a new agent.
    pub wealth_range: UniformRange,

    /// Wealth burned per step.
    pub metabolism_range: UniformRange,

    /// Neighbourhood radius, in cells, an agent scans when foraging.
    pub vision_range: UniformRange,

    /// Age beyond which an agent is culled.
    pub max_age_range: UniformRange,

    /// Upper bound on a cell's capacity during seeding.
    pub max_capacity: u32,

    /// Each seeding deposit happens with probability `1 / deposit_odds`.
    pub deposit_odds: u32,

    /// First (smallest) seeding radius around each focal point.
    pub seed_inner_radius: u32,

    /// Radius increment between successive seeding rings.
    pub seed_radius_step: u32,

    /// Fixed RNG seed.  `None` (the default) seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SugarscapeConfig {
    fn default() -> Self {
        Self {
            width:             35,
            height:            35,
            growth_rate:       1,
            agent_count:       25,
            wealth_range:      UniformRange::new(5, 25),
            metabolism_range:  UniformRange::new(1, 4),
            vision_range:      UniformRange::new(1, 6),
            max_age_range:     UniformRange::new(60, 100),
            max_capacity:      25,
            deposit_odds:      1,
            seed_inner_radius: 10,
            seed_radius_step:  2,
            seed:              None,
        }
    }
}

impl SugarscapeConfig {
    /// Total number of cells on the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check every invariant the engine relies on.
    ///
    /// Notably `agent_count < width * height`: random placement resamples
    /// until it hits an empty cell and would never terminate on a full grid.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.agent_count >= self.cell_count() {
            return Err(CoreError::Config(format!(
                "agent_count {} must be below the cell count {}",
                self.agent_count,
                self.cell_count()
            )));
        }
        self.wealth_range.check("wealth_range", i64::MIN, i64::MAX)?;
        self.metabolism_range.check("metabolism_range", 0, i64::MAX)?;
        // Past the larger grid side the square neighbourhood only repeats cells.
        let widest = self.width.max(self.height) as i64;
        self.vision_range.check("vision_range", 0, widest)?;
        self.max_age_range.check("max_age_range", 0, u32::MAX as i64)?;
        if self.deposit_odds == 0 {
            return Err(CoreError::Config("deposit_odds must be at least 1".into()));
        }
        if self.seed_radius_step == 0 {
            return Err(CoreError::Config("seed_radius_step must be at least 1".into()));
        }
        Ok(())
    }

    /// The two symmetric seeding focal points at 1/3 and 2/3 of each axis.
    pub fn focal_points(&self) -> [(i64, i64); 2] {
        let third_x = (self.width / 3) as i64;
        let third_y = (self.height / 3) as i64;
        [(third_x, third_y), (third_x * 2, third_y * 2)]
    }

    /// Seeding radii: `seed_inner_radius`, stepping by `seed_radius_step`,
    /// strictly below the smaller third of the grid.  Empty on small grids.
    pub fn seeding_radii(&self) -> impl Iterator<Item = u32> {
        let outer = (self.width / 3).min(self.height / 3);
        (self.seed_inner_radius..outer).step_by(self.seed_radius_step.max(1) as usize)
    }
}
