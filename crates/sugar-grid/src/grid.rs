//! `SpatialGrid<T>` — a toroidal occupancy index with O(1) lookup both ways.
//!
//! # Data layout
//!
//! ```text
//! cells:     Vec<Option<T>>   dense, row-major, width * height entries
//! positions: HashMap<T, Coord> sparse, one entry per placed item
//! ```
//!
//! The two maps are kept exact inverses of each other on occupied cells.
//! Every mutating method either updates both or, on error, neither.

use std::fmt;
use std::hash::Hash;

use sugar_core::{Coord, SimRng};

use crate::{GridError, GridResult};

#[cfg(feature = "fx-hash")]
type ReverseIndex<T> = rustc_hash::FxHashMap<T, Coord>;
#[cfg(not(feature = "fx-hash"))]
type ReverseIndex<T> = std::collections::HashMap<T, Coord>;

/// Anything that can occupy a grid cell: a small copyable identity.
pub trait GridItem: Copy + Eq + Hash + fmt::Display {}

impl<T: Copy + Eq + Hash + fmt::Display> GridItem for T {}

/// Toroidal 2-D grid holding at most one item per cell.
pub struct SpatialGrid<T: GridItem> {
    width:     u32,
    height:    u32,
    cells:     Vec<Option<T>>,
    positions: ReverseIndex<T>,
}

impl<T: GridItem> SpatialGrid<T> {
    /// Create an empty `width × height` grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.  `SugarscapeConfig::validate`
    /// rejects such configurations before any grid is built.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            positions: ReverseIndex::default(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, occupied or not.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of placed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty_grid(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.positions.len() == self.cells.len()
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// Normalize any integer position onto this torus.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> Coord {
        Coord::wrapped(x, y, self.width, self.height)
    }

    #[inline]
    fn normalize(&self, coord: Coord) -> Coord {
        if coord.x < self.width && coord.y < self.height {
            coord
        } else {
            self.wrap(coord.x as i64, coord.y as i64)
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The occupant of `coord`, if any.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<T> {
        let coord = self.normalize(coord);
        self.cells[coord.index(self.width)]
    }

    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    #[inline]
    pub fn contains(&self, item: T) -> bool {
        self.positions.contains_key(&item)
    }

    /// Where `item` currently sits.
    pub fn find(&self, item: T) -> GridResult<Coord> {
        self.positions
            .get(&item)
            .copied()
            .ok_or_else(|| GridError::UnknownItem { item: item.to_string() })
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `item` on the empty cell `coord`.
    pub fn place(&mut self, item: T, coord: Coord) -> GridResult<()> {
        let coord = self.normalize(coord);
        if let Some(&at) = self.positions.get(&item) {
            return Err(GridError::AlreadyPlaced { item: item.to_string(), coord: at });
        }
        self.ensure_empty(coord)?;
        self.cells[coord.index(self.width)] = Some(item);
        self.positions.insert(item, coord);
        Ok(())
    }

    /// Take `item` off the grid, returning the cell it vacated.
    pub fn remove(&mut self, item: T) -> GridResult<Coord> {
        let coord = self
            .positions
            .remove(&item)
            .ok_or_else(|| GridError::UnknownItem { item: item.to_string() })?;
        self.cells[coord.index(self.width)] = None;
        Ok(coord)
    }

    /// Move a placed `item` to the empty cell `to`.
    ///
    /// Moving onto the item's own cell is rejected as `OccupiedCell` since
    /// that cell's occupant is the item itself.  On any error both maps are
    /// left untouched.
    pub fn move_item(&mut self, item: T, to: Coord) -> GridResult<()> {
        let from = self.find(item)?;
        let to = self.normalize(to);
        self.ensure_empty(to)?;
        self.cells[from.index(self.width)] = None;
        self.cells[to.index(self.width)] = Some(item);
        self.positions.insert(item, to);
        Ok(())
    }

    fn ensure_empty(&self, coord: Coord) -> GridResult<()> {
        match self.cells[coord.index(self.width)] {
            None => Ok(()),
            Some(occupant) => Err(GridError::OccupiedCell {
                coord,
                occupant: occupant.to_string(),
            }),
        }
    }

    // ── Neighbourhoods ────────────────────────────────────────────────────

    /// Every cell of the `(2d+1)²` square centred on `coord`, minus the
    /// centre, wrapped onto the torus.
    ///
    /// No Euclidean filtering is applied.  When `distance` reaches half the
    /// grid size, wrapped cells repeat (and may include `coord` itself).
    pub fn neighbours(&self, coord: Coord, distance: u32) -> impl Iterator<Item = Coord> + use<T> {
        let (w, h) = (self.width, self.height);
        square_offsets(distance)
            .map(move |(dx, dy)| Coord::wrapped(coord.x as i64 + dx, coord.y as i64 + dy, w, h))
    }

    /// The square neighbourhood of `coord` restricted to cells whose
    /// (unwrapped) Euclidean distance from the centre is at most `radius`.
    pub fn within_radius(&self, coord: Coord, radius: u32) -> impl Iterator<Item = Coord> + use<T> {
        let (w, h) = (self.width, self.height);
        let r2 = radius as i64 * radius as i64;
        square_offsets(radius)
            .filter(move |&(dx, dy)| dx * dx + dy * dy <= r2)
            .map(move |(dx, dy)| Coord::wrapped(coord.x as i64 + dx, coord.y as i64 + dy, w, h))
    }

    // ── Random placement ──────────────────────────────────────────────────

    /// A uniformly random cell, occupied or not.
    pub fn random_cell(&self, rng: &mut SimRng) -> Coord {
        Coord::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Resample uniformly until an empty cell turns up.
    ///
    /// # Liveness
    /// Never returns if the grid is full.  Callers keep the population below
    /// the cell count (`SugarscapeConfig::validate` enforces it).
    pub fn random_empty_cell(&self, rng: &mut SimRng) -> Coord {
        debug_assert!(!self.is_full(), "random_empty_cell on a full grid");
        loop {
            let candidate = self.random_cell(rng);
            if self.is_empty(candidate) {
                return candidate;
            }
        }
    }

    /// Place `item` on a random empty cell and return that cell.
    pub fn place_randomly(&mut self, item: T, rng: &mut SimRng) -> GridResult<Coord> {
        let coord = self.random_empty_cell(rng);
        self.place(item, coord)?;
        Ok(coord)
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|item| (Coord::from_index(i, width), item)))
    }

    /// Placed items in unspecified order.
    pub fn items(&self) -> impl Iterator<Item = T> + '_ {
        self.positions.keys().copied()
    }
}

/// All `(dx, dy)` in `[-d, d]²` except `(0, 0)`, column-major.
fn square_offsets(distance: u32) -> impl Iterator<Item = (i64, i64)> {
    let d = distance as i64;
    (-d..=d)
        .flat_map(move |dx| (-d..=d).map(move |dy| (dx, dy)))
        .filter(|&offset| offset != (0, 0))
}
