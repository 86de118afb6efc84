//! Pixel type and channel helpers.
//!
//! The engine works on exactly one pixel format: interleaved 8-bit RGB.
//! A pixel is an `[u8; 3]` triple; channel values are bounded to 0-255 by
//! the type, so per-channel arithmetic like negation (`255 - v`) can never
//! overflow.
//!
//! # Usage
//!
//! ```
//! use raster_core::pixel::{Rgb8, luminance_rec709_u8};
//!
//! let px: Rgb8 = [200, 120, 40];
//! let luma = luminance_rec709_u8(px);
//! assert!(luma > 120 && luma < 140);
//! ```

/// An 8-bit RGB pixel: `[red, green, blue]`.
pub type Rgb8 = [u8; 3];

/// Number of channels per pixel.
pub const CHANNELS: usize = 3;

/// Rec.709 luminance coefficients as an array `[R, G, B]`.
///
/// Standard luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`.
pub const REC709_LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Calculates Rec.709 luminance of an 8-bit RGB pixel, rounded to u8.
///
/// # Example
///
/// ```
/// use raster_core::pixel::luminance_rec709_u8;
///
/// assert_eq!(luminance_rec709_u8([255, 255, 255]), 255);
/// assert_eq!(luminance_rec709_u8([0, 0, 0]), 0);
/// ```
#[inline]
pub fn luminance_rec709_u8(rgb: Rgb8) -> u8 {
    let y = rgb[0] as f32 * REC709_LUMA[0]
        + rgb[1] as f32 * REC709_LUMA[1]
        + rgb[2] as f32 * REC709_LUMA[2];
    y.round().clamp(0.0, 255.0) as u8
}
