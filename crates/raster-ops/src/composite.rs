//! Color-keyed compositing.
//!
//! Uses a [`ColorKey`] to separate backdrop from subject, then either
//! floods the backdrop with a solid color ([`replace_region`]) or pastes
//! the subject into another image at a fixed offset ([`transplant`]).
//!
//! The one-call variants [`replace_backdrop`] and [`transplant_backdrop`]
//! sample the key from the keyed image themselves.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelGrid;
//! use raster_ops::composite::replace_backdrop;
//!
//! let mut frame = PixelGrid::filled(8, 8, [30, 90, 60]);
//! frame.set(3, 3, [250, 240, 230])?;
//!
//! let out = replace_backdrop(&frame, [0, 255, 0])?;
//! assert_eq!(out.pixel(0, 0), [0, 255, 0]); // backdrop replaced
//! assert_eq!(out.pixel(3, 3), [250, 240, 230]); // subject kept
//! # Ok::<(), raster_ops::OpsError>(())
//! ```

use crate::key::ColorKey;
use crate::OpsResult;
use raster_core::pixel::CHANNELS;
use raster_core::{PixelGrid, Rgb8};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Replaces every key-matching pixel with a solid fill color.
///
/// Non-matching pixels are kept unchanged; output dimensions equal input
/// dimensions.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelGrid;
/// use raster_ops::composite::replace_region;
/// use raster_ops::key::ColorKey;
///
/// let board = PixelGrid::filled(2, 2, [30, 90, 60]);
/// let key = ColorKey::new([30, 90, 60]);
/// let out = replace_region(&board, &key, [0, 255, 0]);
/// assert_eq!(out.pixel(1, 1), [0, 255, 0]);
/// ```
pub fn replace_region(src: &PixelGrid, key: &ColorKey, fill: Rgb8) -> PixelGrid {
    trace!(
        width = src.width(),
        height = src.height(),
        "composite::replace_region"
    );

    let mut dst = src.clone();
    for chunk in dst.data_mut().chunks_exact_mut(CHANNELS) {
        if key.matches([chunk[0], chunk[1], chunk[2]]) {
            chunk.copy_from_slice(&fill);
        }
    }
    dst
}

/// Pastes the non-matching pixels of `fg` into a copy of `bg`.
///
/// The background is deep-copied; every foreground pixel the key does
/// **not** match is written at `(ox + x, oy + y)`, where the offset is
/// `(bg.width / 2, bg.height / 2)`.
///
/// Overflow policy: destination coordinates outside the background canvas
/// are skipped by an explicit bounds check. The paste is defined as
/// "whatever fits at the fixed offset", so any pairing of image sizes is
/// accepted and the operation never panics; clamping here is deliberate,
/// not an artifact of unchecked indexing.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelGrid;
/// use raster_ops::composite::transplant;
/// use raster_ops::key::ColorKey;
///
/// let mut fg = PixelGrid::filled(2, 2, [30, 90, 60]); // all backdrop
/// fg.set(0, 0, [200, 10, 10])?; // one subject pixel
///
/// let bg = PixelGrid::filled(10, 10, [0, 0, 128]);
/// let key = ColorKey::new([30, 90, 60]);
///
/// let out = transplant(&fg, &bg, &key);
/// assert_eq!(out.pixel(5, 5), [200, 10, 10]); // subject at the offset
/// assert_eq!(out.pixel(6, 6), [0, 0, 128]); // backdrop pixels dropped
/// # Ok::<(), raster_core::Error>(())
/// ```
pub fn transplant(fg: &PixelGrid, bg: &PixelGrid, key: &ColorKey) -> PixelGrid {
    let (ox, oy) = (bg.width() / 2, bg.height() / 2);
    debug!(
        fg_width = fg.width(),
        fg_height = fg.height(),
        bg_width = bg.width(),
        bg_height = bg.height(),
        ox,
        oy,
        "composite::transplant"
    );

    let mut dst = bg.clone();
    for (x, y, px) in fg.pixels() {
        if key.matches(px) {
            continue;
        }
        let (dx, dy) = (ox + x, oy + y);
        if dx < dst.width() && dy < dst.height() {
            dst.set_pixel(dx, dy, px);
        }
    }
    dst
}

/// Samples the key from `src` and replaces its backdrop with `fill`.
///
/// # Errors
///
/// Fails if `src` is too small for the reference probe (width < 4 or no
/// rows).
pub fn replace_backdrop(src: &PixelGrid, fill: Rgb8) -> OpsResult<PixelGrid> {
    let key = ColorKey::sample(src)?;
    Ok(replace_region(src, &key, fill))
}

/// Samples the key from `fg` and transplants its subject into `bg`.
///
/// # Errors
///
/// Fails if `fg` is too small for the reference probe (width < 4 or no
/// rows).
pub fn transplant_backdrop(fg: &PixelGrid, bg: &PixelGrid) -> OpsResult<PixelGrid> {
    let key = ColorKey::sample(fg)?;
    Ok(transplant(fg, bg, &key))
}
