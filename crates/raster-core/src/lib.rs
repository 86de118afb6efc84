//! # raster-core
//!
//! Core types for raster pixel processing.
//!
//! This crate provides the foundational types used throughout the raster-rs
//! workspace:
//!
//! - [`PixelGrid`] - Owned width x height buffer of 8-bit RGB pixels
//! - [`Rgb8`] - The pixel type (an `[u8; 3]` triple)
//! - [`Error`], [`Result`] - Typed failures for allocation and coordinate access
//!
//! ## Design Philosophy
//!
//! The engine boundary is the [`PixelGrid`]: decoders produce one, encoders
//! consume one, and every operation in `raster-ops` takes grids by shared
//! reference and returns a newly allocated grid. Nothing in this workspace
//! mutates a caller's grid in place, so there is no aliasing between the
//! source and destination of any transform.
//!
//! Failures are reported as typed errors, never as process exits: a host
//! application decides what to do with an out-of-bounds access or a bad
//! dimension.
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The rest of the workspace builds
//! on it:
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (color, geometry, keying, compositing)
//!    +-- raster-tests (integration tests)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod grid;
pub mod pixel;

// Re-exports for convenience
pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use pixel::{luminance_rec709_u8, Rgb8, CHANNELS, REC709_LUMA};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::PixelGrid;
    pub use crate::pixel::{luminance_rec709_u8, Rgb8, CHANNELS};
}
