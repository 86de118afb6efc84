//! The pixel grid buffer.
//!
//! [`PixelGrid`] is the fundamental data structure of the engine: an owned
//! width x height array of 8-bit RGB triples.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, channels
//! interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! The invariant `data.len() == width * height * 3` holds for every grid;
//! all constructors enforce it and a grid is never resized after
//! construction.
//!
//! # Ownership
//!
//! Storage is a plain `Vec<u8>`, so `clone()` is a fully independent deep
//! copy. Operations in `raster-ops` take grids by shared reference and
//! return newly allocated grids; source and destination never alias.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::PixelGrid;
//!
//! let mut grid = PixelGrid::new(640, 480);
//! grid.set(100, 100, [255, 128, 0])?;
//! assert_eq!(grid.get(100, 100)?, [255, 128, 0]);
//! # Ok::<(), raster_core::Error>(())
//! ```

use crate::pixel::{Rgb8, CHANNELS};
use crate::{Error, Result};

/// Owned grid of 8-bit RGB pixels with fixed dimensions.
///
/// Coordinates use the standard image convention: origin (0, 0) at the
/// top-left, x increasing right, y increasing down. Every coordinate access
/// requires `x < width` and `y < height`.
///
/// Two accessor families are provided:
///
/// - [`pixel`](Self::pixel) / [`set_pixel`](Self::set_pixel) - hot-path
///   accessors for loops that have already validated bounds
///   (`debug_assert!`ed).
/// - [`get`](Self::get) / [`set`](Self::set) - typed
///   [`Error::OutOfBounds`] failures for callers working with untrusted
///   coordinates.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelGrid;
///
/// let grid = PixelGrid::filled(10, 10, [0, 128, 255]);
/// assert_eq!(grid.pixel(9, 9), [0, 128, 255]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Interleaved RGB pixel data, row-major
    data: Vec<u8>,
    /// Grid width in pixels
    width: u32,
    /// Grid height in pixels
    height: u32,
}

impl PixelGrid {
    /// Creates a new grid filled with black (all channels zero).
    ///
    /// Zero-area grids are valid and [`is_empty`](Self::is_empty). Negative
    /// dimensions are unrepresentable; the coordinate types rule them out.
    ///
    /// # Panics
    ///
    /// Panics if allocation fails (extremely large images).
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelGrid;
    ///
    /// let grid = PixelGrid::new(1920, 1080);
    /// assert_eq!(grid.dimensions(), (1920, 1080));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let len = Self::buffer_len(width, height);
        Self {
            data: vec![0; len],
            width,
            height,
        }
    }

    /// Creates a grid filled with a specific pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelGrid;
    ///
    /// let white = PixelGrid::filled(100, 100, [255, 255, 255]);
    /// assert_eq!(white.pixel(50, 50), [255, 255, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: Rgb8) -> Self {
        let len = Self::buffer_len(width, height);
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&pixel);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Creates a grid from existing interleaved RGB data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not exactly
    /// `width * height * 3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelGrid;
    ///
    /// let data = vec![0u8; 4 * 2 * 3];
    /// let grid = PixelGrid::from_data(4, 2, data)?;
    /// # Ok::<(), raster_core::Error>(())
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::buffer_len(width, height);
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Computes the buffer length for the given dimensions.
    ///
    /// `u32 * u32` fits in a `usize` on 64-bit targets; the channel factor
    /// is checked so an impossible allocation fails loudly instead of
    /// wrapping to a short buffer.
    fn buffer_len(width: u32, height: u32) -> usize {
        (width as usize * height as usize)
            .checked_mul(CHANNELS)
            .unwrap_or_else(|| panic!("grid {width}x{height} byte size overflows usize"))
    }

    /// Returns the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw interleaved pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the raw interleaved pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the byte offset for the pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.offset(x, y);
        let mut px = [0u8; CHANNELS];
        px.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        px
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y) as a typed result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside
    /// `[0, width) x [0, height)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb8> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgb8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }

    /// Sets the pixel at (x, y) as a typed result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside
    /// `[0, width) x [0, height)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb8) -> Result<()> {
        if x < self.width && y < self.height {
            self.set_pixel(x, y, pixel);
            Ok(())
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Fills the entire grid with a pixel value.
    pub fn fill(&mut self, pixel: Rgb8) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Returns a row of pixels as an interleaved byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        &self.data[start..end]
    }

    /// Returns a mutable row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        &mut self.data[start..end]
    }

    /// Iterates over all pixels with their coordinates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelGrid;
    ///
    /// let grid = PixelGrid::filled(4, 4, [255, 0, 0]);
    /// for (_x, _y, px) in grid.pixels() {
    ///     assert_eq!(px, [255, 0, 0]);
    /// }
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb8)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}

impl std::fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &CHANNELS)
            .finish()
    }
}
