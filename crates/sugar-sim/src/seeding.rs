//! Initial resource layout: two round hills of capacity.
//!
//! Around each focal point, concentric discs of growing radius each add one
//! unit of capacity to every cell they cover.  Cells near a focal point are
//! covered by every disc and end up richest; cells covered by both hills
//! get both contributions.

use sugar_core::{Coord, SimRng, SugarscapeConfig};
use sugar_grid::{GridResult, ResourceField};

/// Seed `field` according to `config`.  Returns the number of deposits made.
pub fn seed_resources(
    config: &SugarscapeConfig,
    field: &mut ResourceField,
    rng: &mut SimRng,
) -> GridResult<usize> {
    let mut deposits = 0;
    for (x, y) in config.focal_points() {
        let centre = field.grid().wrap(x, y);
        for radius in config.seeding_radii() {
            deposits += spread(config, field, centre, radius, rng)?;
        }
    }
    Ok(deposits)
}

/// One disc: every cell within `radius` of `centre` gets one unit of
/// capacity with probability `1 / deposit_odds`, unless it already holds
/// `max_capacity`.
pub fn spread(
    config: &SugarscapeConfig,
    field: &mut ResourceField,
    centre: Coord,
    radius: u32,
    rng: &mut SimRng,
) -> GridResult<usize> {
    let cells: Vec<Coord> = field.grid().within_radius(centre, radius).collect();
    let mut deposits = 0;
    for cell in cells {
        if !rng.one_in(config.deposit_odds) {
            continue;
        }
        if field.capacity_at(cell) >= config.max_capacity {
            continue;
        }
        field.deposit_at(cell, 1)?;
        deposits += 1;
    }
    Ok(deposits)
}
