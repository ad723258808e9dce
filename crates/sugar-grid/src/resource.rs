//! Regrowing resource layer.
//!
//! Cells live in an arena (`Vec<ResourceCell>`, addressed by `CellId`) and a
//! `SpatialGrid<CellId>` maps coordinates to arena slots.  Cells are created
//! by deposits during seeding and never removed; only their stock changes.

use sugar_core::{CellId, Coord};

use crate::{GridResult, SpatialGrid};

// ── ResourceCell ──────────────────────────────────────────────────────────────

/// Stock and capacity of one resource-bearing cell.
///
/// Invariant: `stock <= capacity`.  Every mutator preserves it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCell {
    capacity: u32,
    stock:    u32,
}

impl ResourceCell {
    /// An empty cell that can hold up to `capacity`.
    pub fn new(capacity: u32) -> Self {
        Self { capacity, stock: 0 }
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Raise capacity; stock is untouched.
    pub fn deposit(&mut self, amount: u32) {
        self.capacity = self.capacity.saturating_add(amount);
    }

    /// Add `amount` to the stock, clamped to capacity.
    pub fn grow(&mut self, amount: u32) {
        self.stock = self.stock.saturating_add(amount).min(self.capacity);
    }

    /// Set the stock directly, clamped to capacity.  Returns the stored value.
    pub fn set_stock(&mut self, stock: u32) -> u32 {
        self.stock = stock.min(self.capacity);
        self.stock
    }

    /// Take the whole stock, leaving the cell empty.
    pub fn harvest(&mut self) -> u32 {
        std::mem::take(&mut self.stock)
    }
}

// ── ResourceField ─────────────────────────────────────────────────────────────

/// The resource layer: a toroidal grid of [`ResourceCell`]s that all regrow
/// by `growth_rate` per step.
pub struct ResourceField {
    growth_rate: u32,
    cells:       Vec<ResourceCell>,
    index:       SpatialGrid<CellId>,
}

impl ResourceField {
    /// An empty `width × height` field.
    ///
    /// # Panics
    /// Panics if either dimension is zero (see [`SpatialGrid::new`]).
    pub fn new(width: u32, height: u32, growth_rate: u32) -> Self {
        Self {
            growth_rate,
            cells: Vec::new(),
            index: SpatialGrid::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.index.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.index.height()
    }

    #[inline]
    pub fn growth_rate(&self) -> u32 {
        self.growth_rate
    }

    /// Number of resource-bearing cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The coordinate index, for neighbourhood and wrapping queries.
    #[inline]
    pub fn grid(&self) -> &SpatialGrid<CellId> {
        &self.index
    }

    // ── Seeding ───────────────────────────────────────────────────────────

    /// Add `amount` of capacity at `coord`.
    ///
    /// An empty coordinate gets a new cell with `capacity = amount` and no
    /// stock; an existing cell has its capacity raised and keeps its stock.
    pub fn deposit_at(&mut self, coord: Coord, amount: u32) -> GridResult<()> {
        match self.index.get(coord) {
            Some(id) => self.cells[id.index()].deposit(amount),
            None => {
                let id = CellId(self.cells.len() as u32);
                self.index.place(id, coord)?;
                self.cells.push(ResourceCell::new(amount));
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn cell_at(&self, coord: Coord) -> Option<&ResourceCell> {
        self.index.get(coord).map(|id| &self.cells[id.index()])
    }

    /// Current stock at `coord`, `0` where there is no cell.
    #[inline]
    pub fn stock_at(&self, coord: Coord) -> u32 {
        self.cell_at(coord).map_or(0, ResourceCell::stock)
    }

    /// Capacity at `coord`, `0` where there is no cell.
    #[inline]
    pub fn capacity_at(&self, coord: Coord) -> u32 {
        self.cell_at(coord).map_or(0, ResourceCell::capacity)
    }

    /// Sum of all stock on the field.
    pub fn total_stock(&self) -> u64 {
        self.cells.iter().map(|c| c.stock() as u64).sum()
    }

    /// Resource cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &ResourceCell)> + '_ {
        self.index.iter().map(|(coord, id)| (coord, &self.cells[id.index()]))
    }

    // ── Step-time mutation ────────────────────────────────────────────────

    /// Take all stock at `coord`.  Returns `0` where there is no cell.
    pub fn harvest_at(&mut self, coord: Coord) -> u32 {
        match self.index.get(coord) {
            Some(id) => self.cells[id.index()].harvest(),
            None => 0,
        }
    }

    /// Overwrite the stock at `coord` (clamped to capacity).  Returns the
    /// stored value, or `None` where there is no cell.
    pub fn set_stock_at(&mut self, coord: Coord, stock: u32) -> Option<u32> {
        let id = self.index.get(coord)?;
        Some(self.cells[id.index()].set_stock(stock))
    }

    /// One regrowth step: `stock = min(stock + growth_rate, capacity)` on
    /// every cell.
    pub fn grow_phase(&mut self) {
        let rate = self.growth_rate;
        for cell in &mut self.cells {
            cell.grow(rate);
        }
    }
}
