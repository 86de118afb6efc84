//! # raster-ops
//!
//! Pixel transformation operations over [`raster_core::PixelGrid`].
//!
//! Every operation reads a source grid through a shared reference and
//! returns a newly allocated grid; callers' grids are never mutated in
//! place. All operations are pure, synchronous, single-threaded transforms
//! unless the [`parallel`] module is used.
//!
//! # Modules
//!
//! - [`color`] - Position-independent color transforms (red isolation,
//!   grayscale, negative)
//! - [`transform`] - Geometric reindexing transforms (mirror, rotate, scale)
//! - [`key`] - Reference color sampling and tolerance matching
//! - [`composite`] - Color-keyed region fill and foreground transplanting
//! - [`parallel`] - Row-parallel variants of per-pixel operations
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelGrid;
//! use raster_ops::{color, transform};
//!
//! let src = PixelGrid::filled(64, 48, [200, 100, 50]);
//!
//! let neg = color::negative(&src);
//! assert_eq!(neg.pixel(0, 0), [55, 155, 205]);
//!
//! let rotated = transform::rotate(&src);
//! assert_eq!(rotated.dimensions(), (48, 64));
//! ```
//!
//! # Keying pipeline
//!
//! ```rust
//! use raster_core::PixelGrid;
//! use raster_ops::{composite, key::ColorKey};
//!
//! // A board-colored frame with one bright pixel
//! let mut frame = PixelGrid::filled(8, 8, [30, 90, 60]);
//! frame.set(4, 4, [250, 250, 250])?;
//!
//! let key = ColorKey::sample(&frame)?;
//! let filled = composite::replace_region(&frame, &key, [0, 0, 255]);
//! assert_eq!(filled.pixel(0, 0), [0, 0, 255]);
//! assert_eq!(filled.pixel(4, 4), [250, 250, 250]);
//! # Ok::<(), raster_ops::OpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod color;
pub mod composite;
pub mod key;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use key::{ColorKey, KEY_TOLERANCE};
