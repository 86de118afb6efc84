//! Reference color sampling and tolerance matching.
//!
//! A dominant backdrop color (a blackboard, a matte screen) is
//! characterized by a [`ColorKey`]: a reference color derived
//! from a fixed 4-pixel probe plus a per-channel tolerance window. Pixels
//! within the window on **all three** channels simultaneously are treated
//! as backdrop; the distance is conjunctive per channel, not Euclidean.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelGrid;
//! use raster_ops::key::ColorKey;
//!
//! let frame = PixelGrid::filled(8, 8, [30, 90, 60]);
//! let key = ColorKey::sample(&frame)?;
//!
//! assert!(key.matches([35, 85, 70]));
//! assert!(!key.matches([130, 90, 60]));
//! # Ok::<(), raster_ops::OpsError>(())
//! ```

use crate::OpsResult;
use raster_core::{PixelGrid, Rgb8};

/// Default per-channel tolerance of the matching window.
pub const KEY_TOLERANCE: u8 = 25;

/// Width of the fixed probe: pixels (0,0) through (3,0) of the reference
/// grid.
pub const PROBE_WIDTH: u32 = 4;

/// A reference color with a per-channel matching window.
///
/// Built either from an explicit reference color ([`new`](Self::new)) or by
/// probing a grid ([`sample`](Self::sample)). The tolerance defaults to
/// [`KEY_TOLERANCE`] and can be widened or narrowed with
/// [`with_tolerance`](Self::with_tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorKey {
    /// The reference color pixels are compared against.
    pub reference: Rgb8,
    /// Per-channel half-width of the matching window.
    pub tolerance: u8,
}

impl ColorKey {
    /// Creates a key around an explicit reference color with the default
    /// tolerance.
    pub fn new(reference: Rgb8) -> Self {
        Self {
            reference,
            tolerance: KEY_TOLERANCE,
        }
    }

    /// Returns this key with a different per-channel tolerance.
    pub fn with_tolerance(self, tolerance: u8) -> Self {
        Self { tolerance, ..self }
    }

    /// Samples the reference color from a grid's fixed probe.
    ///
    /// The reference is the truncating integer average of the four pixels
    /// at (0,0)..(3,0) of `grid`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when the grid is narrower than the
    /// probe (width < 4) or has no rows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelGrid;
    /// use raster_ops::key::ColorKey;
    ///
    /// let mut row = PixelGrid::new(4, 1);
    /// row.set(0, 0, [10, 10, 10])?;
    /// row.set(1, 0, [20, 20, 20])?;
    /// row.set(2, 0, [30, 30, 30])?;
    /// row.set(3, 0, [40, 40, 40])?;
    ///
    /// let key = ColorKey::sample(&row)?;
    /// assert_eq!(key.reference, [25, 25, 25]);
    /// # Ok::<(), raster_ops::OpsError>(())
    /// ```
    pub fn sample(grid: &PixelGrid) -> OpsResult<Self> {
        let mut totals = [0u32; 3];
        for x in 0..PROBE_WIDTH {
            let px = grid.get(x, 0)?;
            for (total, value) in totals.iter_mut().zip(px) {
                *total += value as u32;
            }
        }
        let reference = [
            (totals[0] / PROBE_WIDTH) as u8,
            (totals[1] / PROBE_WIDTH) as u8,
            (totals[2] / PROBE_WIDTH) as u8,
        ];
        Ok(Self::new(reference))
    }

    /// Returns `true` if `pixel` falls within the window on every channel.
    ///
    /// A pixel matches iff `reference - tolerance <= value <=
    /// reference + tolerance` holds for red, green, and blue
    /// simultaneously. The comparison is widened to i16 so windows
    /// extending past 0 or 255 behave correctly.
    #[inline]
    pub fn matches(&self, pixel: Rgb8) -> bool {
        let tol = self.tolerance as i16;
        pixel
            .iter()
            .zip(self.reference)
            .all(|(&value, reference)| (value as i16 - reference as i16).abs() <= tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_row(values: [Rgb8; 4]) -> PixelGrid {
        let mut grid = PixelGrid::new(4, 1);
        for (x, px) in values.into_iter().enumerate() {
            grid.set_pixel(x as u32, 0, px);
        }
        grid
    }

    #[test]
    fn test_sample_truncating_average() {
        let grid = probe_row([[10, 10, 10], [20, 20, 20], [30, 30, 30], [40, 40, 40]]);
        let key = ColorKey::sample(&grid).unwrap();
        assert_eq!(key.reference, [25, 25, 25]);
        assert_eq!(key.tolerance, KEY_TOLERANCE);
    }

    #[test]
    fn test_sample_truncates_not_rounds() {
        // Sums 103 -> 103/4 = 25 (truncated), not 26
        let grid = probe_row([[10, 0, 0], [20, 0, 0], [33, 0, 0], [40, 0, 0]]);
        let key = ColorKey::sample(&grid).unwrap();
        assert_eq!(key.reference[0], 25);
    }

    #[test]
    fn test_sample_narrow_grid_fails() {
        let grid = PixelGrid::new(3, 5);
        let err = ColorKey::sample(&grid).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_sample_empty_grid_fails() {
        let grid = PixelGrid::new(8, 0);
        assert!(ColorKey::sample(&grid).is_err());
    }

    #[test]
    fn test_matches_window_edges() {
        let key = ColorKey::new([25, 25, 25]);
        assert!(key.matches([50, 50, 50])); // all at +25
        assert!(key.matches([0, 0, 0])); // all at -25
        assert!(!key.matches([51, 25, 25])); // red exceeds by 1
        assert!(!key.matches([25, 25, 51]));
    }

    #[test]
    fn test_matches_is_conjunctive() {
        let key = ColorKey::new([100, 100, 100]);
        // Two channels in range, one out: no match
        assert!(!key.matches([100, 100, 200]));
        assert!(key.matches([90, 110, 120]));
    }

    #[test]
    fn test_matches_window_past_channel_limits() {
        // Reference near 0: window extends below zero without wrapping
        let key = ColorKey::new([5, 5, 5]);
        assert!(key.matches([0, 0, 0]));
        // Reference near 255: window extends above 255 without wrapping
        let key = ColorKey::new([250, 250, 250]);
        assert!(key.matches([255, 255, 255]));
        assert!(!key.matches([220, 255, 255]));
    }

    #[test]
    fn test_with_tolerance() {
        let key = ColorKey::new([100, 100, 100]).with_tolerance(5);
        assert!(key.matches([105, 95, 100]));
        assert!(!key.matches([106, 100, 100]));
    }
}
