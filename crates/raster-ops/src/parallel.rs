//! Row-parallel variants of per-pixel operations using Rayon.
//!
//! Each worker writes a disjoint set of destination rows and reads nothing
//! but the (shared, immutable) source, so no locking is needed. Output is
//! byte-identical to the serial operations; use these for large grids.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelGrid;
//! use raster_ops::parallel;
//!
//! let src = PixelGrid::filled(1920, 1080, [10, 20, 30]);
//! let neg = parallel::negative(&src);
//! assert_eq!(neg.pixel(0, 0), [245, 235, 225]);
//! ```

use crate::key::ColorKey;
use raster_core::pixel::CHANNELS;
use raster_core::{PixelGrid, Rgb8};
use rayon::prelude::*;

/// Applies a per-pixel function across rows in parallel.
///
/// The function must be position-independent; rows are distributed over
/// the Rayon thread pool.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelGrid;
/// use raster_ops::parallel::map_pixels;
///
/// let src = PixelGrid::filled(256, 256, [100, 150, 200]);
/// let red_only = map_pixels(&src, |px| [px[0], 0, 0]);
/// assert_eq!(red_only.pixel(10, 10), [100, 0, 0]);
/// ```
pub fn map_pixels<F>(src: &PixelGrid, f: F) -> PixelGrid
where
    F: Fn(Rgb8) -> Rgb8 + Sync,
{
    let mut dst = src.clone();
    if dst.is_empty() {
        return dst;
    }

    let row_len = dst.width() as usize * CHANNELS;
    dst.data_mut().par_chunks_mut(row_len).for_each(|row| {
        for chunk in row.chunks_exact_mut(CHANNELS) {
            let px = f([chunk[0], chunk[1], chunk[2]]);
            chunk.copy_from_slice(&px);
        }
    });
    dst
}

/// Parallel photographic negative.
///
/// Byte-identical to [`crate::color::negative`].
pub fn negative(src: &PixelGrid) -> PixelGrid {
    map_pixels(src, |px| [255 - px[0], 255 - px[1], 255 - px[2]])
}

/// Parallel key-matched fill.
///
/// Byte-identical to [`crate::composite::replace_region`]. The key is
/// resolved once up front; workers only read it.
pub fn replace_region(src: &PixelGrid, key: &ColorKey, fill: Rgb8) -> PixelGrid {
    map_pixels(src, |px| if key.matches(px) { fill } else { px })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color, composite};

    fn gradient(width: u32, height: u32) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set_pixel(
                    x,
                    y,
                    [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8],
                );
            }
        }
        grid
    }

    #[test]
    fn test_parallel_negative_matches_serial() {
        let src = gradient(120, 80);
        assert_eq!(negative(&src), color::negative(&src));
    }

    #[test]
    fn test_parallel_replace_region_matches_serial() {
        let mut src = gradient(64, 64);
        src.set_pixel(10, 10, [30, 90, 60]);
        let key = ColorKey::new([30, 90, 60]);
        assert_eq!(
            replace_region(&src, &key, [0, 255, 0]),
            composite::replace_region(&src, &key, [0, 255, 0])
        );
    }

    #[test]
    fn test_map_pixels_empty_grid() {
        let src = PixelGrid::new(0, 16);
        let out = map_pixels(&src, |px| px);
        assert!(out.is_empty());
    }

    #[test]
    fn test_map_pixels_identity() {
        let src = gradient(33, 17);
        assert_eq!(map_pixels(&src, |px| px), src);
    }
}
