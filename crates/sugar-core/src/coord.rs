//! Grid coordinates and toroidal wrapping.
//!
//! A `Coord` is only ever produced already normalized into
//! `[0, width) × [0, height)`.  Raw, possibly negative or out-of-range
//! positions are `i64` pairs that go through [`Coord::wrapped`].

use std::fmt;

/// A cell position on a toroidal grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Normalize an arbitrary integer position onto a `width × height` torus.
    ///
    /// `width` and `height` must be non-zero.
    #[inline]
    pub fn wrapped(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x: x.rem_euclid(width as i64) as u32,
            y: y.rem_euclid(height as i64) as u32,
        }
    }

    /// Row-major index into a dense `width`-wide cell array.
    #[inline]
    pub fn index(self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn from_index(index: usize, width: u32) -> Self {
        let w = width as usize;
        Self {
            x: (index % w) as u32,
            y: (index / w) as u32,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
