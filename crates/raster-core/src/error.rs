//! Error types for raster-core operations.
//!
//! The [`Error`] enum covers the failure modes of the pixel engine:
//! coordinate access outside a grid's extent and invalid dimensions at
//! allocation. All failures are local, recoverable conditions reported to
//! the immediate caller; nothing here retries, prompts, or exits.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during pixel grid operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside the grid bounds.
    ///
    /// Returned when accessing a pixel at (x, y) where `x >= width` or
    /// `y >= height`, and when a sampling probe needs more pixels than the
    /// grid provides.
    #[error("pixel ({x}, {y}) out of bounds for grid {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Grid width
        width: u32,
        /// Grid height
        height: u32,
    },

    /// Invalid grid dimensions.
    ///
    /// Returned when a buffer's length disagrees with `width * height`, or
    /// when the requested dimensions would overflow the buffer size
    /// calculation. Negative dimensions are unrepresentable here; the
    /// coordinate types make that a compile-time property.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
