//! `sugar-grid` — toroidal occupancy grid and resource field.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`grid`]     | `SpatialGrid<T>` — dense coord → item, sparse item → coord  |
//! | [`resource`] | `ResourceCell`, `ResourceField` (arena + `SpatialGrid<CellId>`) |
//! | [`error`]    | `GridError`, `GridResult<T>`                                |
//!
//! # Neighbourhoods
//!
//! Two neighbourhood shapes exist:
//!
//! - [`SpatialGrid::neighbours`] is the full square of Chebyshev radius `d`
//!   (minus the centre).  Agents use it for vision, so an agent with vision 3
//!   also sees the diagonal corners at Euclidean distance ~4.24.
//! - [`SpatialGrid::within_radius`] filters the same square to the Euclidean
//!   disc.  Only initial resource seeding uses it, which gives the resource
//!   hills their round shape.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the reverse index (faster on integer ids).      |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public value types.   |

pub mod error;
pub mod grid;
pub mod resource;


pub use error::{GridError, GridResult};
pub use grid::{GridItem, SpatialGrid};
pub use resource::{ResourceCell, ResourceField};
