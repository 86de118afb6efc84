//! Geometric reindexing transforms.
//!
//! Position-dependent operations that build a new grid by re-addressing
//! pixels of the source: mirroring, rotation, and nearest-neighbour scaling.
//! The source grid is never touched; every operation allocates and returns
//! its own output.
//!
//! # Operations
//!
//! - [`mirror`] - Horizontal mirror (columns reversed)
//! - [`rotate`] - 90-degree rotation, defined as mirror-then-transpose
//! - [`scale`] - Nearest-neighbour scaling by an arbitrary positive factor
//! - [`half_size`] - Dedicated half-resolution downsample
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelGrid;
//! use raster_ops::transform::{mirror, rotate, scale};
//!
//! let src = PixelGrid::filled(64, 48, [1, 2, 3]);
//!
//! assert_eq!(mirror(&src).dimensions(), (64, 48));
//! assert_eq!(rotate(&src).dimensions(), (48, 64));
//! assert_eq!(scale(&src, 0.5)?.dimensions(), (32, 24));
//! # Ok::<(), raster_ops::OpsError>(())
//! ```

use crate::{OpsError, OpsResult};
use raster_core::pixel::CHANNELS;
use raster_core::PixelGrid;

/// Mirrors the grid horizontally.
///
/// Output pixel at (x, y) is the source pixel at (width-1-x, y); every row
/// is reversed along the x axis. Applying `mirror` twice restores the
/// original grid.
pub fn mirror(src: &PixelGrid) -> PixelGrid {
    let mut dst = src.clone();
    for y in 0..src.height() {
        let src_row = src.row(y);
        let dst_row = dst.row_mut(y);
        for (i, px) in src_row.chunks_exact(CHANNELS).rev().enumerate() {
            dst_row[i * CHANNELS..(i + 1) * CHANNELS].copy_from_slice(px);
        }
    }
    dst
}

/// Rotates the grid 90 degrees counter-clockwise.
///
/// The rotation is defined as the composition mirror-then-transpose: the
/// source is mirrored, then pixel (x, y) of the mirrored grid is written to
/// (y, x) of the output. The composition is kept literal rather than
/// re-derived from rotation math, because the exact direction and period
/// are part of the engine contract. Output dimensions are (height, width)
/// of the input; four applications restore the original grid.
pub fn rotate(src: &PixelGrid) -> PixelGrid {
    let mirrored = mirror(src);
    let (w, h) = mirrored.dimensions();
    let mut dst = PixelGrid::new(h, w);
    for y in 0..h {
        for x in 0..w {
            dst.set_pixel(y, x, mirrored.pixel(x, y));
        }
    }
    dst
}

/// Scales the grid by a positive factor using nearest-neighbour sampling.
///
/// Output dimensions are `floor(width * factor)` x `floor(height * factor)`.
/// Each output pixel (x, y) samples the source at `floor(x / factor)`,
/// `floor(y / factor)`, clamped to the source extent so the division can
/// never index past the right or bottom edge.
///
/// # Errors
///
/// Returns [`OpsError::InvalidScale`] when `factor` is not a positive
/// finite number.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelGrid;
/// use raster_ops::transform::scale;
///
/// let src = PixelGrid::filled(10, 10, [5, 5, 5]);
/// assert!(scale(&src, 0.0).is_err());
/// assert_eq!(scale(&src, 2.0)?.dimensions(), (20, 20));
/// # Ok::<(), raster_ops::OpsError>(())
/// ```
pub fn scale(src: &PixelGrid, factor: f64) -> OpsResult<PixelGrid> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(OpsError::InvalidScale { factor });
    }

    let (w, h) = src.dimensions();
    let dst_w = (w as f64 * factor) as u32;
    let dst_h = (h as f64 * factor) as u32;
    let mut dst = PixelGrid::new(dst_w, dst_h);
    if dst.is_empty() {
        return Ok(dst);
    }

    for y in 0..dst_h {
        let sy = ((y as f64 / factor) as u32).min(h - 1);
        for x in 0..dst_w {
            let sx = ((x as f64 / factor) as u32).min(w - 1);
            dst.set_pixel(x, y, src.pixel(sx, sy));
        }
    }
    Ok(dst)
}

/// Downsamples the grid to half resolution.
///
/// Output dimensions are `width / 2` x `height / 2` (integer division);
/// output pixel (x, y) samples the source at (2x, 2y).
pub fn half_size(src: &PixelGrid) -> PixelGrid {
    let (w, h) = src.dimensions();
    let mut dst = PixelGrid::new(w / 2, h / 2);
    for y in 0..h / 2 {
        for x in 0..w / 2 {
            dst.set_pixel(x, y, src.pixel(2 * x, 2 * y));
        }
    }
    dst
}
