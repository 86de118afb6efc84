//! Per-pixel color transforms.
//!
//! These operations are position-independent: every output pixel depends
//! only on the source pixel at the same coordinate, so output dimensions
//! always equal input dimensions. All are total functions with no error
//! paths.
//!
//! # Operations
//!
//! - [`isolate_red`] - Keep the red channel, zero green and blue
//! - [`grayscale`] - Green-channel grayscale (see the note on that function)
//! - [`grayscale_luma`] - Rec.709 luminance grayscale
//! - [`negative`] - Photographic negative
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelGrid;
//! use raster_ops::color::{isolate_red, negative};
//!
//! let src = PixelGrid::filled(4, 4, [200, 100, 50]);
//! assert_eq!(isolate_red(&src).pixel(0, 0), [200, 0, 0]);
//! assert_eq!(negative(&src).pixel(0, 0), [55, 155, 205]);
//! ```

use raster_core::pixel::{luminance_rec709_u8, CHANNELS};
use raster_core::{PixelGrid, Rgb8};

/// Applies a per-pixel function, returning a fresh grid of the same size.
fn map_pixels(src: &PixelGrid, f: impl Fn(Rgb8) -> Rgb8) -> PixelGrid {
    let mut dst = src.clone();
    for chunk in dst.data_mut().chunks_exact_mut(CHANNELS) {
        let px = f([chunk[0], chunk[1], chunk[2]]);
        chunk.copy_from_slice(&px);
    }
    dst
}

/// Keeps only the red channel of every pixel.
///
/// Output pixel at (x, y) is `(r, 0, 0)` where `r` is the source red value.
pub fn isolate_red(src: &PixelGrid) -> PixelGrid {
    map_pixels(src, |px| [px[0], 0, 0])
}

/// Converts to grayscale by replicating the **green** channel.
///
/// Output pixel is `(g, g, g)`. A single designated channel is read rather
/// than a luminance-weighted average; downstream consumers depend on this
/// exact output, so it stays bit-for-bit stable. Use [`grayscale_luma`] for
/// a perceptual conversion.
pub fn grayscale(src: &PixelGrid) -> PixelGrid {
    map_pixels(src, |px| [px[1], px[1], px[1]])
}

/// Converts to grayscale using Rec.709 luminance weights.
///
/// Output pixel is `(y, y, y)` with `y = 0.2126*R + 0.7152*G + 0.0722*B`,
/// rounded to u8.
pub fn grayscale_luma(src: &PixelGrid) -> PixelGrid {
    map_pixels(src, |px| {
        let y = luminance_rec709_u8(px);
        [y, y, y]
    })
}

/// Produces the photographic negative.
///
/// Output pixel is `(255-r, 255-g, 255-b)`. Channel values are bounded to
/// 0-255 by the pixel type, so the subtraction cannot overflow.
pub fn negative(src: &PixelGrid) -> PixelGrid {
    map_pixels(src, |px| [255 - px[0], 255 - px[1], 255 - px[2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set_pixel(x, y, [(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8]);
            }
        }
        grid
    }

    #[test]
    fn test_isolate_red() {
        let src = PixelGrid::filled(3, 3, [120, 45, 200]);
        let out = isolate_red(&src);
        assert_eq!(out.dimensions(), src.dimensions());
        for (_, _, px) in out.pixels() {
            assert_eq!(px, [120, 0, 0]);
        }
    }

    #[test]
    fn test_grayscale_uses_green_channel() {
        let src = PixelGrid::filled(2, 2, [10, 99, 200]);
        let out = grayscale(&src);
        assert_eq!(out.pixel(1, 1), [99, 99, 99]);
    }

    #[test]
    fn test_grayscale_luma_white_black() {
        let white = PixelGrid::filled(1, 1, [255, 255, 255]);
        let black = PixelGrid::filled(1, 1, [0, 0, 0]);
        assert_eq!(grayscale_luma(&white).pixel(0, 0), [255, 255, 255]);
        assert_eq!(grayscale_luma(&black).pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_negative() {
        let src = PixelGrid::filled(2, 1, [0, 128, 255]);
        let out = negative(&src);
        assert_eq!(out.pixel(0, 0), [255, 127, 0]);
    }

    #[test]
    fn test_negative_involution() {
        let src = gradient(9, 7);
        assert_eq!(negative(&negative(&src)), src);
    }

    #[test]
    fn test_source_untouched() {
        let src = PixelGrid::filled(4, 4, [50, 60, 70]);
        let before = src.clone();
        let _ = negative(&src);
        let _ = isolate_red(&src);
        assert_eq!(src, before);
    }
}
